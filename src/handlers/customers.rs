//! Customer endpoint handlers.

use actix_web::{get, post, web, HttpResponse};

use crate::db::DbPool;
use crate::errors::AppError;
use crate::models::{CreateCustomerRequest, CustomerResponse, MessageResponse};
use crate::services;

/// Create a new customer
#[post("/customer/create")]
pub(super) async fn create_customer(
    pool: web::Data<DbPool>,
    body: web::Json<CreateCustomerRequest>,
) -> Result<HttpResponse, AppError> {
    let customer = services::create_customer(&pool, &body.name, &body.email, &body.password)?;

    Ok(HttpResponse::Ok().json(CustomerResponse::from_customer(customer)))
}

/// Get a customer by ID
#[get("/customer/{id}")]
pub(super) async fn get_customer(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let customer = services::get_customer(&pool, path.into_inner())?;

    Ok(HttpResponse::Ok().json(CustomerResponse::from_customer(customer)))
}

/// List the certificates owned by a customer
#[get("/customer/{id}/certificates")]
pub(super) async fn get_customer_certificates(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let certificates = services::get_customer_certificates(&pool, path.into_inner())?;

    Ok(HttpResponse::Ok().json(certificates))
}

/// Delete a customer and all of their certificates
#[post("/customer/{id}/delete")]
pub(super) async fn delete_customer(
    pool: web::Data<DbPool>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    services::delete_customer(&pool, path.into_inner())?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Customer deleted")))
}
