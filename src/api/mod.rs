// src/api/mod.rs
use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::core::config::Config;

pub mod error;
pub mod handlers;
pub mod render;
pub mod routes;
pub mod types;
pub mod utils;

pub use error::ApiError;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::generator::home,
        crate::api::handlers::generator::password_page,
        crate::api::handlers::generator::generate_password
    ),
    components(
        schemas(
            crate::api::types::PasswordGenerationResponse,
            crate::models::GenerationMode
        )
    ),
    tags(
        (name = "Pages", description = "HTML pages showing a generated password"),
        (name = "Generator", description = "Password generation endpoints")
    ),
    info(
        title = "Password Generator API",
        version = "0.1.0",
        description = "Generates random passwords of digits and letters",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi())
}

pub async fn start_server(config: Config) -> std::io::Result<()> {
    let bind_address = config.bind_address();
    log::info!(
        "Starting password generator on {}:{} ({} mode, default length {})",
        bind_address.0,
        bind_address.1,
        config.generation_mode,
        config.default_password_length
    );

    let config_data = web::Data::new(config);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET"])
            .allowed_headers(vec!["Content-Type", "Accept", "X-Requested-With"])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .wrap(Logger::default())
            .app_data(config_data.clone())
            // Registered ahead of the catch-all length route
            .service(swagger_ui())
            .configure(routes::configure_routes)
    })
    .bind(bind_address)?
    .run()
    .await
}
