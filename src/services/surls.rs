//! Surl creation and lookup.

use rusqlite::params;

use super::helpers::{derive_short_code, map_surl_row};
use crate::constants::MAX_CODE_GENERATION_RETRIES;
use crate::db::{get_conn, DbPool};
use crate::errors::AppError;
use crate::models::Surl;
use crate::queries::Surls;

/// Create a surl for a long URL.
///
/// Each attempt derives a fresh salted code and claims it with an
/// insert-if-absent keyed on the unique `short_url` column; when two requests
/// race for the same code exactly one insert lands and the loser regenerates.
/// Identical long URLs are deliberately NOT deduplicated. The long URL itself
/// is stored unvalidated.
pub fn create_surl(pool: &DbPool, long_url: &str, code_length: usize) -> Result<Surl, AppError> {
    let conn = get_conn(pool)?;

    for _ in 0..MAX_CODE_GENERATION_RETRIES {
        let short_url = derive_short_code(long_url, code_length);

        let inserted = conn.execute(Surls::INSERT_IF_ABSENT, params![short_url, long_url])?;
        if inserted == 1 {
            let surl = conn.query_row(Surls::SELECT_BY_CODE, params![short_url], map_surl_row)?;
            log::info!("Created surl {}: {} -> {}", surl.id, surl.short_url, long_url);
            return Ok(surl);
        }
    }

    Err(AppError::InternalError(
        "Failed to generate unique short code".to_string(),
    ))
}

/// Get a surl by its short code
pub fn get_surl_by_code(pool: &DbPool, short_url: &str) -> Result<Surl, AppError> {
    let conn = get_conn(pool)?;

    conn.query_row(Surls::SELECT_BY_CODE, params![short_url], map_surl_row)
        .map_err(|e| match e {
            rusqlite::Error::QueryReturnedNoRows => {
                AppError::NotFound("Surl not found".to_string())
            }
            _ => AppError::DatabaseError(e.to_string()),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::setup_test_pool;

    #[test]
    fn test_create_surl_persists_row() {
        let pool = setup_test_pool();

        let surl = create_surl(&pool, "https://surls-svc.example.com/one", 7).unwrap();
        assert_eq!(surl.short_url.len(), 7);
        assert_eq!(surl.long_url, "https://surls-svc.example.com/one");

        let fetched = get_surl_by_code(&pool, &surl.short_url).unwrap();
        assert_eq!(fetched.id, surl.id);
    }

    #[test]
    fn test_same_long_url_gets_fresh_codes() {
        let pool = setup_test_pool();

        // Salted derivation: repeated calls terminate and never collide
        let mut codes: Vec<String> = (0..10)
            .map(|_| {
                create_surl(&pool, "https://surls-svc.example.com/repeat", 7)
                    .unwrap()
                    .short_url
            })
            .collect();

        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), 10);
    }

    #[test]
    fn test_get_missing_surl() {
        let pool = setup_test_pool();

        let err = get_surl_by_code(&pool, "does-not-exist").unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
