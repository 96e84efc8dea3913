//! Helpers for generating unique test data.
//!
//! Unique emails keep integration tests isolated when they share a database.

use ulid::Ulid;

/// Generate a unique string in the format `{prefix}-{ulid}`.
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// Generate a unique email address in the format `{prefix}-{ulid}@example.test`.
pub fn unique_email(prefix: &str) -> String {
    format!("{}-{}@example.test", prefix, Ulid::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_values_do_not_collide() {
        assert_ne!(unique_str("user"), unique_str("user"));
        let email = unique_email("login");
        assert!(email.starts_with("login-"));
        assert!(email.ends_with("@example.test"));
    }
}
