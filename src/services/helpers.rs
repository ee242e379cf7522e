//! Shared utilities used across all service domains.
//!
//! Contains row mapping helpers and short-code derivation.

use rand::Rng;
use sha2::{Digest, Sha256};

use crate::constants::{SHORT_CODE_ALPHABET, SHORT_CODE_SALT_LENGTH};
use crate::models::{Certificate, Customer, Surl};

// ============================================================================
// Row Mapping Helpers
// ============================================================================

/// Map a database row to a Customer struct
pub(super) fn map_customer_row(row: &rusqlite::Row) -> rusqlite::Result<Customer> {
    Ok(Customer {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        password_hash: row.get(3)?,
        created_at: row.get(4)?,
    })
}

/// Map a database row to a Certificate struct
pub(super) fn map_certificate_row(row: &rusqlite::Row) -> rusqlite::Result<Certificate> {
    Ok(Certificate {
        id: row.get(0)?,
        is_active: row.get::<_, i32>(1)? == 1,
        private_key: row.get(2)?,
        cert_body: row.get(3)?,
        customer_id: row.get(4)?,
        created_at: row.get(5)?,
    })
}

/// Map a database row to a Surl struct
pub(super) fn map_surl_row(row: &rusqlite::Row) -> rusqlite::Result<Surl> {
    Ok(Surl {
        id: row.get(0)?,
        short_url: row.get(1)?,
        long_url: row.get(2)?,
        created_at: row.get(3)?,
    })
}

// ============================================================================
// Short Code Derivation
// ============================================================================

/// Derive a short code from a long URL.
///
/// Hashes a random salt together with the URL, so repeated calls for the same
/// URL produce different codes. Digest bytes are mapped into the URL-safe
/// alphabet.
pub fn derive_short_code(long_url: &str, length: usize) -> String {
    let mut salt = [0u8; SHORT_CODE_SALT_LENGTH];
    rand::thread_rng().fill(&mut salt);

    let mut hasher = Sha256::new();
    hasher.update(salt);
    hasher.update(long_url.as_bytes());
    let digest = hasher.finalize();

    digest
        .iter()
        .cycle()
        .take(length)
        .map(|b| SHORT_CODE_ALPHABET[*b as usize % SHORT_CODE_ALPHABET.len()])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_short_code_length_and_charset() {
        let code = derive_short_code("https://example.com", 7);
        assert_eq!(code.len(), 7);
        assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_derive_short_code_is_salted() {
        // The same long URL must be free to produce fresh codes on each call
        let codes: Vec<String> = (0..20)
            .map(|_| derive_short_code("https://example.com", 10))
            .collect();

        let mut unique = codes.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), codes.len());
    }

    #[test]
    fn test_derive_short_code_longer_than_digest() {
        let code = derive_short_code("https://example.com", 40);
        assert_eq!(code.len(), 40);
    }
}
