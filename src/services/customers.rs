//! Customer CRUD and the certificate cascade delete.

use rusqlite::params;

use super::helpers::{map_certificate_row, map_customer_row};
use crate::db::{get_conn, DbPool};
use crate::errors::AppError;
use crate::models::{Certificate, Customer};
use crate::password;
use crate::queries::{Certificates, Customers};

/// Create a new customer with a hashed password.
///
/// The email pre-check produces the specific conflict message; the UNIQUE
/// constraint on `email` covers the race where two requests pass the check
/// concurrently.
pub fn create_customer(
    pool: &DbPool,
    name: &str,
    email: &str,
    plain_password: &str,
) -> Result<Customer, AppError> {
    let conn = get_conn(pool)?;

    let exists: i64 = conn.query_row(Customers::COUNT_BY_EMAIL, params![email], |row| row.get(0))?;
    if exists > 0 {
        return Err(AppError::Conflict(
            "Customer already exists for this email".to_string(),
        ));
    }

    let password_hash = password::hash_password(plain_password)?;

    conn.execute(Customers::INSERT, params![name, email, password_hash])?;
    let customer_id = conn.last_insert_rowid();

    let customer = conn.query_row(Customers::SELECT_BY_ID, params![customer_id], map_customer_row)?;

    log::info!("Created customer {} ({})", customer.id, customer.email);

    Ok(customer)
}

/// Get a customer by ID
pub fn get_customer(pool: &DbPool, customer_id: i64) -> Result<Customer, AppError> {
    let conn = get_conn(pool)?;

    conn.query_row(Customers::SELECT_BY_ID, params![customer_id], map_customer_row)
        .map_err(|e| match e {
            rusqlite::Error::QueryReturnedNoRows => {
                AppError::NotFound("Customer not found".to_string())
            }
            _ => AppError::DatabaseError(e.to_string()),
        })
}

/// Get the certificates owned by a customer, in insertion order.
///
/// Returns NotFound for an unknown customer and an empty vec for a customer
/// without certificates.
pub fn get_customer_certificates(
    pool: &DbPool,
    customer_id: i64,
) -> Result<Vec<Certificate>, AppError> {
    let conn = get_conn(pool)?;

    let exists: i64 =
        conn.query_row(Customers::COUNT_BY_ID, params![customer_id], |row| row.get(0))?;
    if exists == 0 {
        return Err(AppError::NotFound("Customer not found".to_string()));
    }

    let mut stmt = conn.prepare(Certificates::SELECT_BY_CUSTOMER)?;
    let certificates = stmt
        .query_map(params![customer_id], map_certificate_row)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(certificates)
}

/// Delete a customer and all of their certificates.
///
/// Runs in a single transaction so the cascade is all-or-nothing.
pub fn delete_customer(pool: &DbPool, customer_id: i64) -> Result<(), AppError> {
    let mut conn = get_conn(pool)?;
    let tx = conn.transaction()?;

    let exists: i64 =
        tx.query_row(Customers::COUNT_BY_ID, params![customer_id], |row| row.get(0))?;
    if exists == 0 {
        return Err(AppError::NotFound("Customer not found".to_string()));
    }

    let certificates_deleted = tx.execute(Certificates::DELETE_BY_CUSTOMER, params![customer_id])?;
    tx.execute(Customers::DELETE, params![customer_id])?;

    tx.commit()?;

    log::info!(
        "Deleted customer {} and {} certificate(s)",
        customer_id,
        certificates_deleted
    );

    Ok(())
}
