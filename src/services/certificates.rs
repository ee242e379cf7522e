//! Certificate creation, lookup, and activation state changes.

use rusqlite::params;

use super::helpers::map_certificate_row;
use crate::db::{get_conn, DbPool};
use crate::errors::AppError;
use crate::models::{Certificate, CreateCertificateRequest};
use crate::queries::{Certificates, Customers};

/// Create a certificate for an existing customer.
///
/// The private key check is a pure existence check: a matching record is
/// never returned or compared, it only turns the request into a conflict.
/// The UNIQUE constraint on `private_key` covers concurrent duplicates.
pub fn create_certificate(
    pool: &DbPool,
    request: &CreateCertificateRequest,
) -> Result<Certificate, AppError> {
    let conn = get_conn(pool)?;

    let owner_exists: i64 = conn.query_row(
        Customers::COUNT_BY_ID,
        params![request.customer_id],
        |row| row.get(0),
    )?;
    if owner_exists == 0 {
        return Err(AppError::NotFound("Customer not found".to_string()));
    }

    let key_exists: i64 = conn.query_row(
        Certificates::COUNT_BY_PRIVATE_KEY,
        params![request.private_key],
        |row| row.get(0),
    )?;
    if key_exists > 0 {
        return Err(AppError::Conflict(
            "Certificate already exists for this private key".to_string(),
        ));
    }

    conn.execute(
        Certificates::INSERT,
        params![
            request.is_active,
            request.private_key,
            request.cert_body,
            request.customer_id
        ],
    )?;
    let certificate_id = conn.last_insert_rowid();

    let certificate = conn.query_row(
        Certificates::SELECT_BY_ID,
        params![certificate_id],
        map_certificate_row,
    )?;

    log::info!(
        "Created certificate {} for customer {}",
        certificate.id,
        certificate.customer_id
    );

    Ok(certificate)
}

/// Get a certificate by ID
pub fn get_certificate(pool: &DbPool, certificate_id: i64) -> Result<Certificate, AppError> {
    let conn = get_conn(pool)?;

    conn.query_row(
        Certificates::SELECT_BY_ID,
        params![certificate_id],
        map_certificate_row,
    )
    .map_err(|e| match e {
        rusqlite::Error::QueryReturnedNoRows => {
            AppError::NotFound("Certificate not found".to_string())
        }
        _ => AppError::DatabaseError(e.to_string()),
    })
}

/// Set the activation flag on a certificate and return the updated record
pub fn set_certificate_active(
    pool: &DbPool,
    certificate_id: i64,
    active: bool,
) -> Result<Certificate, AppError> {
    let conn = get_conn(pool)?;

    let changed = conn.execute(Certificates::SET_ACTIVE, params![certificate_id, active])?;
    if changed == 0 {
        return Err(AppError::NotFound("Certificate not found".to_string()));
    }

    let certificate = conn.query_row(
        Certificates::SELECT_BY_ID,
        params![certificate_id],
        map_certificate_row,
    )?;

    log::info!(
        "Certificate {} is now {}",
        certificate.id,
        if certificate.is_active {
            "active"
        } else {
            "inactive"
        }
    );

    Ok(certificate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_certificate, create_test_customer, setup_test_pool};

    fn request(customer_id: i64, private_key: &str) -> CreateCertificateRequest {
        CreateCertificateRequest {
            customer_id,
            is_active: true,
            private_key: private_key.to_string(),
            cert_body: "-----BEGIN CERTIFICATE-----".to_string(),
        }
    }

    #[test]
    fn test_create_requires_live_customer() {
        let pool = setup_test_pool();

        let err = create_certificate(&pool, &request(0, "certs-svc-orphan-key")).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_create_and_get_certificate() {
        let pool = setup_test_pool();

        let customer = create_test_customer(&pool, "create@certs-svc.example.com");
        let certificate =
            create_certificate(&pool, &request(customer.id, "certs-svc-create-key")).unwrap();

        assert!(certificate.is_active);
        assert_eq!(certificate.customer_id, customer.id);

        let fetched = get_certificate(&pool, certificate.id).unwrap();
        assert_eq!(fetched.private_key, "certs-svc-create-key");
    }

    #[test]
    fn test_duplicate_private_key_conflicts() {
        let pool = setup_test_pool();

        let customer = create_test_customer(&pool, "dupkey@certs-svc.example.com");
        create_certificate(&pool, &request(customer.id, "certs-svc-dup-key")).unwrap();

        let err = create_certificate(&pool, &request(customer.id, "certs-svc-dup-key"))
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[test]
    fn test_set_active_toggles_flag() {
        let pool = setup_test_pool();

        let customer = create_test_customer(&pool, "toggle@certs-svc.example.com");
        let certificate = create_test_certificate(&pool, customer.id, "certs-svc-toggle-key");

        let deactivated = set_certificate_active(&pool, certificate.id, false).unwrap();
        assert!(!deactivated.is_active);

        let activated = set_certificate_active(&pool, certificate.id, true).unwrap();
        assert!(activated.is_active);
    }

    #[test]
    fn test_set_active_on_missing_certificate() {
        let pool = setup_test_pool();

        let err = set_certificate_active(&pool, 0, true).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
