//! Cache key builders for all CV Forge cache entries.
//!
//! Keys here are logical: the Redis backend prepends its configured
//! namespace prefix. Centralising construction prevents typos and makes
//! it easy to find every key the application uses.

use uuid::Uuid;

// ── Resume staging keys ────────────────────────────────────

/// Staging key for the basics section of a draft resume.
pub fn staging_basic(key: Uuid) -> String {
    format!("staging:basic:{key}")
}

/// Staging key for the main section (work, projects, education) of a draft.
pub fn staging_main(key: Uuid) -> String {
    format!("staging:main:{key}")
}

// ── Verification code keys ─────────────────────────────────

/// Key for a pending signup: holds the registration payload and code.
pub fn signup_pending(email: &str) -> String {
    format!("signup:{}", email.to_lowercase())
}

/// Key for a password reset code.
pub fn reset_code(email: &str) -> String {
    format!("reset:{}", email.to_lowercase())
}

// ── User keys ──────────────────────────────────────────────

/// Cache key for a user entity by ID.
pub fn user_by_id(user_id: Uuid) -> String {
    format!("user:{user_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_staging_keys_are_disjoint() {
        let id = Uuid::nil();
        assert_eq!(
            staging_basic(id),
            "staging:basic:00000000-0000-0000-0000-000000000000"
        );
        assert_ne!(staging_basic(id), staging_main(id));
    }

    #[test]
    fn test_code_keys_lowercase_email() {
        assert_eq!(signup_pending("Jane@Example.com"), "signup:jane@example.com");
        assert_eq!(reset_code("JANE@example.com"), "reset:jane@example.com");
    }
}
