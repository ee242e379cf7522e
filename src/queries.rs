//! SQL query constants for the service.
//!
//! Centralizes all SQL queries for better maintainability and consistency.

/// Schema-related queries for database setup and migrations.
pub struct Schema;

impl Schema {
    pub const CREATE_CUSTOMERS_TABLE: &'static str = "
        CREATE TABLE IF NOT EXISTS customers (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            name            TEXT NOT NULL,
            email           TEXT NOT NULL UNIQUE,
            password_hash   TEXT NOT NULL,
            created_at      TEXT NOT NULL DEFAULT (datetime('now'))
        )";

    pub const CREATE_CERTIFICATES_TABLE: &'static str = "
        CREATE TABLE IF NOT EXISTS certificates (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            is_active       INTEGER NOT NULL,
            private_key     TEXT NOT NULL UNIQUE,
            cert_body       TEXT NOT NULL,
            customer_id     INTEGER NOT NULL,
            created_at      TEXT NOT NULL DEFAULT (datetime('now')),
            FOREIGN KEY (customer_id) REFERENCES customers (id)
        )";

    pub const CREATE_SURLS_TABLE: &'static str = "
        CREATE TABLE IF NOT EXISTS surls (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            short_url       TEXT NOT NULL UNIQUE,
            long_url        TEXT NOT NULL,
            created_at      TEXT NOT NULL DEFAULT (datetime('now'))
        )";

    pub const CREATE_ACCESSIONS_TABLE: &'static str = "
        CREATE TABLE IF NOT EXISTS accessions (
            id              INTEGER PRIMARY KEY AUTOINCREMENT,
            surl_id         INTEGER NOT NULL,
            created_at      TEXT NOT NULL DEFAULT (datetime('now')),
            FOREIGN KEY (surl_id) REFERENCES surls (id)
        )";

    pub const CREATE_SHORT_URL_INDEX: &'static str =
        "CREATE INDEX IF NOT EXISTS idx_short_url ON surls (short_url)";
}

/// Customer queries.
pub struct Customers;

impl Customers {
    pub const INSERT: &'static str =
        "INSERT INTO customers (name, email, password_hash) VALUES (?1, ?2, ?3)";

    pub const SELECT_BY_ID: &'static str =
        "SELECT id, name, email, password_hash, created_at FROM customers WHERE id = ?1";

    pub const COUNT_BY_ID: &'static str = "SELECT COUNT(*) FROM customers WHERE id = ?1";

    pub const COUNT_BY_EMAIL: &'static str = "SELECT COUNT(*) FROM customers WHERE email = ?1";

    pub const DELETE: &'static str = "DELETE FROM customers WHERE id = ?1";
}

/// Certificate queries.
pub struct Certificates;

impl Certificates {
    pub const INSERT: &'static str =
        "INSERT INTO certificates (is_active, private_key, cert_body, customer_id)
         VALUES (?1, ?2, ?3, ?4)";

    pub const SELECT_BY_ID: &'static str =
        "SELECT id, is_active, private_key, cert_body, customer_id, created_at
         FROM certificates WHERE id = ?1";

    pub const SELECT_BY_CUSTOMER: &'static str =
        "SELECT id, is_active, private_key, cert_body, customer_id, created_at
         FROM certificates WHERE customer_id = ?1 ORDER BY id";

    pub const COUNT_BY_PRIVATE_KEY: &'static str =
        "SELECT COUNT(*) FROM certificates WHERE private_key = ?1";

    pub const SET_ACTIVE: &'static str = "UPDATE certificates SET is_active = ?2 WHERE id = ?1";

    pub const DELETE_BY_CUSTOMER: &'static str =
        "DELETE FROM certificates WHERE customer_id = ?1";
}

/// Surl queries.
pub struct Surls;

impl Surls {
    /// Insert-if-absent keyed on the unique short_url column; under a race
    /// exactly one inserting connection reports a changed row.
    pub const INSERT_IF_ABSENT: &'static str =
        "INSERT OR IGNORE INTO surls (short_url, long_url) VALUES (?1, ?2)";

    pub const SELECT_BY_CODE: &'static str =
        "SELECT id, short_url, long_url, created_at FROM surls WHERE short_url = ?1";
}

/// Accession queries.
pub struct Accessions;

impl Accessions {
    pub const INSERT: &'static str = "INSERT INTO accessions (surl_id) VALUES (?1)";

    pub const COUNT_BY_SURL: &'static str =
        "SELECT COUNT(*) FROM accessions WHERE surl_id = ?1";

    pub const COUNT_SINCE: &'static str =
        "SELECT COUNT(*) FROM accessions WHERE surl_id = ?1 AND created_at > ?2";
}
