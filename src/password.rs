//! Salted one-way password hashing.
//!
//! Uses PBKDF2-HMAC-SHA256 with a random 16-byte salt. Stored hashes use the
//! `pbkdf2:sha256:<iterations>$<salt>$<hash>` format with URL-safe base64.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use hmac::Hmac;
use pbkdf2::pbkdf2;
use rand::Rng;
use sha2::Sha256;

use crate::constants::{PASSWORD_HASH_LENGTH, PASSWORD_SALT_LENGTH, PBKDF2_ITERATIONS};
use crate::errors::AppError;

type HmacSha256 = Hmac<Sha256>;

/// Hash a password with a fresh random salt
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let mut salt = [0u8; PASSWORD_SALT_LENGTH];
    rand::thread_rng().fill(&mut salt);

    let mut key = [0u8; PASSWORD_HASH_LENGTH];
    pbkdf2::<HmacSha256>(password.as_bytes(), &salt, PBKDF2_ITERATIONS, &mut key)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {}", e)))?;

    Ok(format!(
        "pbkdf2:sha256:{}${}${}",
        PBKDF2_ITERATIONS,
        URL_SAFE_NO_PAD.encode(salt),
        URL_SAFE_NO_PAD.encode(key)
    ))
}

/// Verify a password against a stored hash.
///
/// No endpoint authenticates today; this is the companion to
/// [`hash_password`] for whatever eventually consumes the stored credential.
#[allow(dead_code)]
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, AppError> {
    let parts: Vec<&str> = stored_hash.split('$').collect();
    if parts.len() != 3 {
        return Err(AppError::InternalError("Invalid hash format".to_string()));
    }

    let iterations: u32 = parts[0]
        .rsplit(':')
        .next()
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| AppError::InternalError("Invalid hash header".to_string()))?;

    let salt = URL_SAFE_NO_PAD
        .decode(parts[1])
        .map_err(|e| AppError::InternalError(format!("Invalid salt encoding: {}", e)))?;
    let expected = URL_SAFE_NO_PAD
        .decode(parts[2])
        .map_err(|e| AppError::InternalError(format!("Invalid hash encoding: {}", e)))?;

    let mut computed = vec![0u8; expected.len()];
    pbkdf2::<HmacSha256>(password.as_bytes(), &salt, iterations, &mut computed)
        .map_err(|e| AppError::InternalError(format!("Password verification failed: {}", e)))?;

    Ok(computed == expected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_format() {
        let hash = hash_password("secret").unwrap();
        assert!(hash.starts_with("pbkdf2:sha256:"));
        assert_eq!(hash.split('$').count(), 3);
    }

    #[test]
    fn test_hashing_is_salted() {
        let first = hash_password("secret").unwrap();
        let second = hash_password("secret").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_verify_round_trip() {
        let hash = hash_password("correct horse").unwrap();
        assert!(verify_password("correct horse", &hash).unwrap());
        assert!(!verify_password("battery staple", &hash).unwrap());
    }

    #[test]
    fn test_verify_rejects_malformed_hash() {
        assert!(verify_password("secret", "not-a-hash").is_err());
    }
}
