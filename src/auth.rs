//! Salted one-way password hashing with Argon2id.
//!
//! The stored value is a PHC string carrying the salt and parameters, so
//! verification needs nothing beyond the hash itself.

use anyhow::{anyhow, Result};
use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

pub(crate) fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow!("Password hashing failed: {e}"))?;
    Ok(hash.to_string())
}

/// Constant result for malformed stored hashes: a hash we cannot parse can
/// never verify.
pub(crate) fn verify_password(password: &str, stored_hash: &str) -> bool {
    let Ok(parsed) = PasswordHash::new(stored_hash) else {
        return false;
    };
    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hash = hash_password("pw1").unwrap();
        assert!(verify_password("pw1", &hash));
    }

    #[test]
    fn test_wrong_password_rejected() {
        let hash = hash_password("pw1").unwrap();
        assert!(!verify_password("wrong", &hash));
        assert!(!verify_password("", &hash));
    }

    #[test]
    fn test_same_password_different_salts() {
        let h1 = hash_password("pw1").unwrap();
        let h2 = hash_password("pw1").unwrap();
        assert_ne!(h1, h2);
        assert!(verify_password("pw1", &h1));
        assert!(verify_password("pw1", &h2));
    }

    #[test]
    fn test_malformed_hash_never_verifies() {
        assert!(!verify_password("pw1", "not-a-phc-string"));
        assert!(!verify_password("pw1", ""));
    }
}
