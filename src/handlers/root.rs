//! Root endpoint handler.

use actix_web::{get, HttpResponse};

/// Liveness probe at the server root
#[get("/")]
pub(super) async fn index() -> HttpResponse {
    HttpResponse::Ok().body("Server is running")
}
