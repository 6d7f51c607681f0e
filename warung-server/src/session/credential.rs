//! PIN credential hashing and verification
//!
//! Stored credentials come in two shapes: argon2 hashes written by this
//! server, and plaintext values seeded by legacy backends. Verification
//! dispatches on the `$argon2` prefix; the plaintext path compares in
//! constant time.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use shared::error::{AppError, AppResult};

pub struct PinCredential;

impl PinCredential {
    /// Hash a plaintext PIN for storage
    pub fn hash(pin: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(pin.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("PIN hashing failed: {e}")))?;
        Ok(hash.to_string())
    }

    /// Verify an entered PIN against a stored credential
    pub fn verify(stored: &str, entered: &str) -> AppResult<bool> {
        if stored.starts_with("$argon2") {
            let parsed = PasswordHash::new(stored)
                .map_err(|e| AppError::internal(format!("stored credential unreadable: {e}")))?;
            Ok(Argon2::default()
                .verify_password(entered.as_bytes(), &parsed)
                .is_ok())
        } else {
            // Legacy plaintext credential
            Ok(ring::constant_time::verify_slices_are_equal(
                stored.as_bytes(),
                entered.as_bytes(),
            )
            .is_ok())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let hash = PinCredential::hash("1234").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(PinCredential::verify(&hash, "1234").unwrap());
        assert!(!PinCredential::verify(&hash, "4321").unwrap());
    }

    #[test]
    fn test_plaintext_fallback() {
        assert!(PinCredential::verify("1234", "1234").unwrap());
        assert!(!PinCredential::verify("1234", "12345").unwrap());
        assert!(!PinCredential::verify("1234", "0000").unwrap());
    }
}
