//! Password policy enforcement for new passwords.

use cvforge_core::config::auth::AuthConfig;
use cvforge_core::error::AppError;

/// Validates password strength against configured policies.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    /// Minimum password length.
    min_length: usize,
}

impl PasswordValidator {
    /// Creates a new validator from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            min_length: config.password_min_length,
        }
    }

    /// Validates a password against all configured policies.
    ///
    /// Returns `Ok(())` if the password meets all requirements,
    /// or an error describing the first violation found.
    pub fn validate(&self, password: &str) -> Result<(), AppError> {
        if password.len() < self.min_length {
            return Err(AppError::validation(format!(
                "Password must be at least {} characters long",
                self.min_length
            )));
        }

        if !password.chars().any(|c| c.is_alphabetic()) {
            return Err(AppError::validation(
                "Password must contain at least one letter",
            ));
        }

        if !password.chars().any(|c| c.is_ascii_digit()) {
            return Err(AppError::validation(
                "Password must contain at least one digit",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> PasswordValidator {
        PasswordValidator { min_length: 8 }
    }

    #[test]
    fn test_accepts_valid_password() {
        assert!(validator().validate("secure-pass1").is_ok());
    }

    #[test]
    fn test_rejects_short_password() {
        assert!(validator().validate("abc1").is_err());
    }

    #[test]
    fn test_rejects_missing_digit() {
        assert!(validator().validate("onlyletters").is_err());
    }

    #[test]
    fn test_rejects_missing_letter() {
        assert!(validator().validate("1234567890").is_err());
    }
}
