// src/api/routes.rs
use actix_web::web;

use super::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // JSON endpoint
    cfg.service(
        web::scope("/api")
            .route("/password", web::get().to(handlers::generator::generate_password))
    );

    // Password pages
    cfg.route("/", web::get().to(handlers::generator::home))
        .route("/{length}", web::get().to(handlers::generator::password_page));
}
