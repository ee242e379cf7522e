//! Application-wide constants.
//!
//! Centralizes magic numbers and strings for better maintainability.

// ============================================================================
// Short Code Generation Constants
// ============================================================================

/// Characters used for generated short codes (URL-safe alphanumeric)
pub const SHORT_CODE_ALPHABET: [char; 62] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i',
    'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z', 'A', 'B',
    'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U',
    'V', 'W', 'X', 'Y', 'Z',
];

/// Length of the random salt mixed into each short code derivation
pub const SHORT_CODE_SALT_LENGTH: usize = 8;

/// Maximum retry attempts when claiming a unique short code
pub const MAX_CODE_GENERATION_RETRIES: u32 = 10;

// ============================================================================
// Password Hashing Constants
// ============================================================================

/// PBKDF2-HMAC-SHA256 iteration count
pub const PBKDF2_ITERATIONS: u32 = 260_000;

/// Length of the random password salt in bytes
pub const PASSWORD_SALT_LENGTH: usize = 16;

/// Length of the derived password hash in bytes
pub const PASSWORD_HASH_LENGTH: usize = 32;

// ============================================================================
// Accession Window Constants
// ============================================================================

/// Timestamp format used for stored rows and window cutoffs
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Width of the weekly accession window in days
pub const WEEK_WINDOW_DAYS: i64 = 7;

/// Width of the daily accession window in hours
pub const DAY_WINDOW_HOURS: i64 = 24;

// ============================================================================
// Test Constants
// ============================================================================

/// In-memory SQLite database URL for tests
#[cfg(test)]
pub const TEST_DB_URL: &str = "file::memory:?cache=shared";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_length() {
        // Ensure alphabet contains exactly 62 characters (0-9, a-z, A-Z)
        assert_eq!(SHORT_CODE_ALPHABET.len(), 62);
    }

    #[test]
    fn test_window_constants() {
        assert_eq!(WEEK_WINDOW_DAYS * 24, 7 * DAY_WINDOW_HOURS);
    }

    #[test]
    fn test_password_constants() {
        assert!(PBKDF2_ITERATIONS >= 100_000);
        assert_eq!(PASSWORD_HASH_LENGTH, 32);
    }
}
