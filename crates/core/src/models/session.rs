use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Special characters a password may (and must, at least once) contain.
pub const PASSWORD_SPECIALS: &str = "@$!%*?&";

/// Minimum password length.
pub const MIN_PASSWORD_LEN: usize = 8;

pub const INVALID_EMAIL_MESSAGE: &str = "Invalid email format.";
pub const INVALID_PASSWORD_MESSAGE: &str = "Password must be 8+ characters with at least one \
     uppercase letter, one number, and one special character.";

/// Explicit login state, handed to whatever renders protected views.
///
/// Set on a successful credential check, cleared on logout. This is a gate,
/// not a security boundary: credentials are only checked for shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    user: Option<String>,
}

impl Session {
    /// A logged-out session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check the credentials and, if they pass, mark the session as logged in.
    /// On failure the session is left untouched.
    pub fn login(&mut self, email: &str, password: &str) -> Result<(), CoreError> {
        let email = email.trim();
        if !is_valid_email(email) {
            log::warn!("Rejected login: malformed email");
            return Err(CoreError::InvalidCredentials(INVALID_EMAIL_MESSAGE.into()));
        }
        if !is_valid_password(password) {
            log::warn!("Rejected login: password does not meet requirements");
            return Err(CoreError::InvalidCredentials(INVALID_PASSWORD_MESSAGE.into()));
        }
        log::info!("Session started for {email}");
        self.user = Some(email.to_string());
        Ok(())
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            log::info!("Session ended for {user}");
        }
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// The email the session was opened with.
    #[must_use]
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// Fail with `NotAuthenticated` unless logged in.
    pub fn require(&self) -> Result<(), CoreError> {
        if self.is_authenticated() {
            Ok(())
        } else {
            Err(CoreError::NotAuthenticated)
        }
    }
}

/// `local@domain.tld`: no whitespace, a single `@`, and a dot inside the
/// domain with at least one character on each side.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// At least 8 characters from `[A-Za-z0-9@$!%*?&]`, with at least one
/// lowercase letter, one uppercase letter, one digit and one special.
#[must_use]
pub fn is_valid_password(password: &str) -> bool {
    let is_special = |c: char| PASSWORD_SPECIALS.contains(c);

    password.chars().count() >= MIN_PASSWORD_LEN
        && password
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || is_special(c))
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(is_special)
}
