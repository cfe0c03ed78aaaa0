//! Wire DTOs for the storefront API.
//!
//! DESIGN
//! ======
//! These types mirror the JSON the remote API returns. Unknown fields are
//! ignored so the API can grow without breaking the client.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Access level of a signed-in user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    /// Regular user. Role strings the client does not know decode here.
    #[default]
    #[serde(other)]
    User,
}

impl Role {
    pub fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }

    /// CSS modifier class for the role badge.
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::User => "user",
        }
    }

    /// Display label for the role badge.
    pub fn label(self) -> &'static str {
        match self {
            Self::Admin => "管理員",
            Self::User => "一般用戶",
        }
    }
}

/// The signed-in user as returned by the login endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Display name.
    pub username: String,
    pub role: Role,
}

/// A product listed on the dashboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    /// Unit price in New Taiwan dollars.
    pub price: f64,
    #[serde(default)]
    pub description: String,
}

/// Body of `POST /api/auth/login`.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Successful login response. Any session token the API returns travels in a
/// cookie and is not read here.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub user: User,
}

/// Error payload the API attaches to non-2xx responses.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
