//! Demonstration-grade admin check against fixed credentials.
//!
//! There is no hashing, lockout or session token; the result is a single
//! in-memory flag that resets on reload.

use thiserror::Error;

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "password";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Invalid username or password.")]
    InvalidCredentials,
}

/// Compare against the embedded credential pair.
///
/// # Errors
///
/// Returns [`AuthError::InvalidCredentials`] for any other pair.
pub fn check_credentials(username: &str, password: &str) -> Result<(), AuthError> {
    if username == ADMIN_USERNAME && password == ADMIN_PASSWORD {
        Ok(())
    } else {
        Err(AuthError::InvalidCredentials)
    }
}

#[must_use]
pub fn login(username: &str, password: &str) -> bool {
    check_credentials(username, password).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_fixed_pair_succeeds() {
        assert!(login("admin", "password"));
        assert!(!login("admin", "Password"));
        assert!(!login("Admin", "password"));
        assert!(!login(" admin", "password"));
        assert!(!login("", ""));
    }

    #[test]
    fn failure_message_is_user_facing() {
        let err = check_credentials("root", "hunter2").unwrap_err();
        assert_eq!(err.to_string(), "Invalid username or password.");
    }
}
