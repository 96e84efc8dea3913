//! Password hashing and verification for password-bearing roles.

use bcrypt::{hash, verify};

use crate::error::AppError;

/// bcrypt work factor. Matches the cost used when staff accounts were
/// provisioned; changing it only affects newly hashed passwords.
pub const HASH_COST: u32 = 10;

// A well-formed bcrypt hash of an arbitrary string. Used only to burn one
// verification when no account was found, so that path costs the same as a
// real comparison.
const DUMMY_HASH: &str = "$2a$10$N9qo8uLOickgx2ZMRZoMyeIjZAgcfl7p92ldGxad68LJZdL17lhWy";

/// Hash a plaintext password. bcrypt salts internally, so two hashes of the
/// same input differ.
pub fn hash_password(plain: &str) -> Result<String, AppError> {
    hash(plain, HASH_COST).map_err(|e| AppError::internal(format!("bcrypt hash failed: {e}")))
}

/// Compare a plaintext password against a stored hash.
///
/// bcrypt's comparison does not short-circuit on the first differing byte.
/// A malformed stored hash compares as non-matching rather than erroring,
/// so storage corruption cannot turn into a 500 that leaks state.
pub fn verify_password(plain: &str, stored_hash: &str) -> bool {
    verify(plain, stored_hash).unwrap_or(false)
}

/// Run one bcrypt verification against a fixed hash and discard the result.
/// Called on the unknown-account path so it is not measurably faster than
/// the wrong-password path.
pub fn burn_verification(plain: &str) {
    let _ = verify(plain, DUMMY_HASH);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashes_are_salted() {
        let a = hash_password("senha-secreta").unwrap();
        let b = hash_password("senha-secreta").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn verify_accepts_the_original_password_only() {
        let hashed = hash_password("senha-secreta").unwrap();
        assert!(verify_password("senha-secreta", &hashed));
        assert!(!verify_password("senha-errada", &hashed));
        assert!(!verify_password("", &hashed));
    }

    #[test]
    fn malformed_hash_compares_as_non_matching() {
        assert!(!verify_password("qualquer", "not-a-bcrypt-hash"));
        assert!(!verify_password("qualquer", ""));
        assert!(!verify_password("qualquer", "$2b$10$truncated"));
    }

    #[test]
    fn dummy_hash_is_well_formed() {
        // burn_verification must exercise a real bcrypt comparison; a
        // malformed constant would silently make it a no-op.
        assert!(bcrypt::verify("anything", DUMMY_HASH).is_ok());
    }
}
