//! Named navigation targets used by pages and route guards.
//!
//! DESIGN
//! ======
//! Targets are plain data so redirect decisions can be tested without a
//! router; `go` converts them into `leptos_router` navigation at the edge.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use leptos_router::NavigateOptions;

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const ADMIN_PATH: &str = "/admin";

/// A path plus the history behavior to use when visiting it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavTarget {
    pub path: &'static str,
    /// Replace the current history entry instead of pushing.
    pub replace: bool,
}

/// Where a successful login (or an already-authenticated visit) lands.
pub const AFTER_LOGIN: NavTarget = NavTarget { path: DASHBOARD_PATH, replace: true };

/// Where logout and unauthenticated visits land.
pub const TO_LOGIN: NavTarget = NavTarget { path: LOGIN_PATH, replace: true };

/// Where a signed-in user without the required role is sent.
pub const FORBIDDEN: NavTarget = NavTarget { path: DASHBOARD_PATH, replace: true };

impl NavTarget {
    /// Router options for this target. History state is always empty so a
    /// logout never carries the previous page's state forward.
    pub fn options(self) -> NavigateOptions {
        NavigateOptions { replace: self.replace, ..NavigateOptions::default() }
    }
}

/// Navigate to `target` with a `use_navigate` handle.
pub fn go<F>(navigate: &F, target: NavTarget)
where
    F: Fn(&str, NavigateOptions),
{
    navigate(target.path, target.options());
}
