//! Argon2 password hashing.

use argon2::{password_hash::SaltString, Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use rand::Rng;

use crate::server::error::AppError;

fn salt() -> Result<SaltString, AppError> {
    let mut bytes = [0u8; 16];
    rand::rng().fill(&mut bytes);
    SaltString::encode_b64(&bytes)
        .map_err(|e| AppError::InternalError(format!("Failed to encode password salt: {}", e)))
}

/// Hashes a password into an Argon2id PHC string.
pub fn hash(password: &str) -> Result<String, AppError> {
    Argon2::default()
        .hash_password(password.as_bytes(), &salt()?)
        .map(|h| h.to_string())
        .map_err(|e| AppError::InternalError(format!("Failed to hash password: {}", e)))
}

/// Checks a password against a stored PHC string. Unparsable hashes never match.
pub fn verify(password: &str, hashword: &str) -> bool {
    PasswordHash::new(hashword)
        .map(|hash| {
            Argon2::default()
                .verify_password(password.as_bytes(), &hash)
                .is_ok()
        })
        .unwrap_or(false)
}
