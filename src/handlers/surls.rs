//! Surl endpoint handlers: creation, redirect resolution, accession stats.

use actix_web::{get, post, web, HttpResponse};

use crate::config::Config;
use crate::db::DbPool;
use crate::errors::AppError;
use crate::models::{CreateSurlRequest, ResolveSurlRequest};
use crate::services;

/// Create a short URL
#[post("/surls")]
pub(super) async fn create_surl(
    pool: web::Data<DbPool>,
    config: web::Data<Config>,
    body: web::Json<CreateSurlRequest>,
) -> Result<HttpResponse, AppError> {
    let surl = services::create_surl(&pool, &body.long_url, config.short_code_length)?;

    Ok(HttpResponse::Ok().json(surl))
}

/// Resolve a short URL to a 302 redirect, logging an accession
#[post("/surls/getURL")]
pub(super) async fn resolve_surl(
    pool: web::Data<DbPool>,
    body: web::Json<ResolveSurlRequest>,
) -> Result<HttpResponse, AppError> {
    let surl = services::get_surl_by_code(&pool, &body.short_url)?;

    // Best-effort: a failed log entry must not break the redirect
    if let Err(e) = services::record_accession(&pool, surl.id) {
        log::warn!("Failed to record accession for surl {}: {}", surl.id, e);
    }

    log::info!("Redirecting {} -> {}", surl.short_url, surl.long_url);

    Ok(HttpResponse::Found()
        .append_header(("Location", surl.long_url))
        .finish())
}

/// Get time-windowed accession counts for a surl
#[get("/surls/{id}/accessions")]
pub(super) async fn get_accession_stats(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let stats = services::accession_stats(&pool, path.into_inner())?;

    Ok(HttpResponse::Ok().json(stats))
}
