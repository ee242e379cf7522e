//! Certificate endpoint handlers.

use actix_web::{get, post, web, HttpResponse};

use crate::db::DbPool;
use crate::errors::AppError;
use crate::models::{CreateCertificateRequest, MessageResponse};
use crate::notifier::Notifier;
use crate::services;

/// Create a certificate for an existing customer
#[post("/certificate/create")]
pub(super) async fn create_certificate(
    pool: web::Data<DbPool>,
    body: web::Json<CreateCertificateRequest>,
) -> Result<HttpResponse, AppError> {
    let certificate = services::create_certificate(&pool, &body)?;

    Ok(HttpResponse::Ok().json(certificate))
}

/// Get a certificate by ID
#[get("/certificate/{id}")]
pub(super) async fn get_certificate(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let certificate = services::get_certificate(&pool, path.into_inner())?;

    Ok(HttpResponse::Ok().json(certificate))
}

/// Activate a certificate
#[post("/certificate/{id}/activate")]
pub(super) async fn activate_certificate(
    pool: web::Data<DbPool>,
    notifier: Option<web::Data<Notifier>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let certificate = services::set_certificate_active(&pool, path.into_inner(), true)?;

    // Delivery is detached; the response never waits on the webhook
    if let Some(notifier) = &notifier {
        notifier.notify_detached(certificate.id, true);
    }

    Ok(HttpResponse::Ok().json(MessageResponse::new("Certificate activated")))
}

/// Deactivate a certificate
#[post("/certificate/{id}/deactivate")]
pub(super) async fn deactivate_certificate(
    pool: web::Data<DbPool>,
    notifier: Option<web::Data<Notifier>>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let certificate = services::set_certificate_active(&pool, path.into_inner(), false)?;

    if let Some(notifier) = &notifier {
        notifier.notify_detached(certificate.id, false);
    }

    Ok(HttpResponse::Ok().json(MessageResponse::new("Certificate deactivated")))
}
