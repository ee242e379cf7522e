//! Database module for SQLite connection and migrations.
//!
//! Uses r2d2 connection pool for efficient connection management.

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;

use crate::errors::AppError;
use crate::queries::Schema;

/// Type alias for the SQLite connection pool
pub type DbPool = Pool<SqliteConnectionManager>;

/// Type alias for a pooled database connection
pub type DbConnection = PooledConnection<SqliteConnectionManager>;

/// Initialize the database connection pool
pub fn init_pool(database_url: &str) -> Result<DbPool, AppError> {
    let manager = SqliteConnectionManager::file(database_url)
        .with_init(|conn| conn.busy_timeout(std::time::Duration::from_secs(5)));
    let pool = Pool::builder()
        .max_size(10)
        .build(manager)
        .map_err(|e| AppError::DatabaseError(format!("Failed to create pool: {}", e)))?;

    Ok(pool)
}

/// Get a connection from the pool
pub fn get_conn(pool: &DbPool) -> Result<DbConnection, AppError> {
    pool.get()
        .map_err(|e| AppError::DatabaseError(format!("Failed to get connection: {}", e)))
}

/// Reconcile the schema at startup.
///
/// Every statement is idempotent, so running this against an existing
/// database is a no-op.
pub fn run_migrations(pool: &DbPool) -> Result<(), AppError> {
    let conn = get_conn(pool)?;

    conn.execute(Schema::CREATE_CUSTOMERS_TABLE, [])?;
    conn.execute(Schema::CREATE_CERTIFICATES_TABLE, [])?;
    conn.execute(Schema::CREATE_SURLS_TABLE, [])?;
    conn.execute(Schema::CREATE_ACCESSIONS_TABLE, [])?;
    conn.execute(Schema::CREATE_SHORT_URL_INDEX, [])?;

    log::info!("Database migrations completed");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::TEST_DB_URL;

    #[test]
    fn test_init_pool_and_migrations() {
        let pool = init_pool(TEST_DB_URL).expect("pool");
        run_migrations(&pool).expect("migrations");

        // Running migrations twice must be harmless
        run_migrations(&pool).expect("migrations rerun");

        let conn = get_conn(&pool).expect("conn");
        let tables: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table'
                 AND name IN ('customers', 'certificates', 'surls', 'accessions')",
                [],
                |row| row.get(0),
            )
            .expect("count tables");
        assert_eq!(tables, 4);
    }
}
