//! HTTP request handlers for the service API.
//!
//! Defines all route handlers and configures the routing table.

mod certificates;
mod customers;
mod root;
mod surls;

use actix_web::web;

/// Configure all application routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(root::index)
        // Fixed paths are registered before their {id} siblings
        .service(customers::create_customer)
        .service(customers::get_customer_certificates)
        .service(customers::delete_customer)
        .service(customers::get_customer)
        .service(certificates::create_certificate)
        .service(certificates::activate_certificate)
        .service(certificates::deactivate_certificate)
        .service(certificates::get_certificate)
        .service(surls::create_surl)
        .service(surls::resolve_surl)
        .service(surls::get_accession_stats);
}
