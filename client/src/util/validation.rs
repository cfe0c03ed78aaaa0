//! Login form validation rules.
//!
//! DESIGN
//! ======
//! Validation is pure and runs before any network call, so a rejected form
//! never reaches the auth API. Each field is checked independently and every
//! failing field is reported in the same pass.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

/// Minimum password length, counted in characters.
pub const PASSWORD_MIN_CHARS: usize = 8;

pub const INVALID_EMAIL_MESSAGE: &str = "請輸入有效的 Email 格式";
pub const PASSWORD_TOO_SHORT_MESSAGE: &str = "密碼必須至少 8 個字元";
pub const PASSWORD_NEEDS_LETTERS_AND_DIGITS_MESSAGE: &str = "密碼必須包含英文字母和數字";
pub const PASSWORD_NEEDS_LETTERS_MESSAGE: &str = "密碼必須包含英文字母";
pub const PASSWORD_NEEDS_DIGITS_MESSAGE: &str = "密碼必須包含數字";

/// Outcome of a password composition check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PasswordCheck {
    Ok,
    Invalid(&'static str),
}

impl PasswordCheck {
    pub fn is_ok(self) -> bool {
        matches!(self, Self::Ok)
    }

    pub fn message(self) -> Option<&'static str> {
        match self {
            Self::Ok => None,
            Self::Invalid(message) => Some(message),
        }
    }
}

/// Credentials that passed validation and may be sent to the auth API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Per-field validation messages from the most recent validation pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

/// Check that `value` looks like `local@domain.tld`.
///
/// Surrounding whitespace is ignored; whitespace anywhere else fails.
pub fn validate_email(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // A dot with at least one character on each side.
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Check password length and that it mixes ASCII letters with digits.
pub fn validate_password(value: &str) -> PasswordCheck {
    if value.chars().count() < PASSWORD_MIN_CHARS {
        return PasswordCheck::Invalid(PASSWORD_TOO_SHORT_MESSAGE);
    }
    let has_letter = value.chars().any(|c| c.is_ascii_alphabetic());
    let has_digit = value.chars().any(|c| c.is_ascii_digit());
    match (has_letter, has_digit) {
        (true, true) => PasswordCheck::Ok,
        (false, false) => PasswordCheck::Invalid(PASSWORD_NEEDS_LETTERS_AND_DIGITS_MESSAGE),
        (false, true) => PasswordCheck::Invalid(PASSWORD_NEEDS_LETTERS_MESSAGE),
        (true, false) => PasswordCheck::Invalid(PASSWORD_NEEDS_DIGITS_MESSAGE),
    }
}

/// Validate both login fields.
///
/// # Errors
///
/// Returns the messages for every field that failed.
pub fn validate_login(email: &str, password: &str) -> Result<Credentials, FieldErrors> {
    let errors = FieldErrors {
        email: (!validate_email(email)).then_some(INVALID_EMAIL_MESSAGE),
        password: validate_password(password).message(),
    };
    if errors.is_empty() {
        Ok(Credentials { email: email.trim().to_owned(), password: password.to_owned() })
    } else {
        Err(errors)
    }
}
