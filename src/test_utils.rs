//! Test utilities and helpers.
//!
//! Provides common test infrastructure used across multiple test modules.
//! This module is only compiled when running tests.

#![cfg(test)]

use chrono::{Duration, Utc};
use rusqlite::params;

use crate::config::Config;
use crate::constants::{TEST_DB_URL, TIMESTAMP_FORMAT};
use crate::db::{get_conn, init_pool, run_migrations, DbPool};
use crate::models::{Certificate, CreateCertificateRequest, Customer, Surl};
use crate::services;

/// Create an in-memory database pool for testing.
///
/// The shared-cache in-memory database is process-wide, so tests must use
/// distinct emails, private keys, and long URLs to stay independent.
pub fn setup_test_pool() -> DbPool {
    let pool = init_pool(TEST_DB_URL).expect("Failed to create test pool");
    run_migrations(&pool).expect("Failed to run migrations");
    pool
}

/// Create a default test configuration.
pub fn test_config() -> Config {
    Config::default()
}

/// Helper to create a test customer.
pub fn create_test_customer(pool: &DbPool, email: &str) -> Customer {
    services::create_customer(pool, "Test Customer", email, "password")
        .expect("Failed to create test customer")
}

/// Helper to create a test certificate for a customer.
pub fn create_test_certificate(pool: &DbPool, customer_id: i64, private_key: &str) -> Certificate {
    let request = CreateCertificateRequest {
        customer_id,
        is_active: true,
        private_key: private_key.to_string(),
        cert_body: "-----BEGIN CERTIFICATE-----".to_string(),
    };
    services::create_certificate(pool, &request).expect("Failed to create test certificate")
}

/// Helper to create a test surl.
pub fn create_test_surl(pool: &DbPool, long_url: &str) -> Surl {
    services::create_surl(pool, long_url, 7).expect("Failed to create test surl")
}

/// Insert an accession with a timestamp `days_ago` in the past.
///
/// Bypasses the service layer so window aggregation can be tested against
/// historical rows.
pub fn record_backdated_accession(pool: &DbPool, surl_id: i64, days_ago: i64) {
    let created_at = (Utc::now() - Duration::days(days_ago))
        .format(TIMESTAMP_FORMAT)
        .to_string();

    let conn = get_conn(pool).expect("Failed to get connection");
    conn.execute(
        "INSERT INTO accessions (surl_id, created_at) VALUES (?1, ?2)",
        params![surl_id, created_at],
    )
    .expect("Failed to insert backdated accession");
}
