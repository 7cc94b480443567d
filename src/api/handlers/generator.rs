// src/api/handlers/generator.rs

use actix_web::http::header::{ContentType, CACHE_CONTROL};
use actix_web::{web, HttpResponse};
use log::debug;

use crate::api::ApiError;
use crate::api::render;
use crate::api::types::{PageQuery, PasswordGenerationResponse, PasswordQuery};
use crate::api::utils::{check_max_length, parse_length};
use crate::core::config::Config;
use crate::generators::PasswordGenerator;
use crate::models::GenerationMode;

struct Generated {
    password: String,
    length: i64,
    mode: GenerationMode,
}

fn generate(config: &Config, length: i64, mode: Option<&str>) -> Result<Generated, ApiError> {
    let length = check_max_length(length, config)?;
    let mode = match mode {
        Some(mode) => mode.parse()?,
        None => config.generation_mode,
    };

    let generator = PasswordGenerator::new(mode);
    let password = generator.generate(length)?;
    debug!("Generated {} character password in {} mode", length, generator.mode());

    Ok(Generated {
        password,
        length,
        mode,
    })
}

fn page_response(result: Result<Generated, ApiError>) -> HttpResponse {
    match result {
        Ok(generated) => HttpResponse::Ok()
            .content_type(ContentType::html())
            .insert_header((CACHE_CONTROL, "no-store"))
            .body(render::password_page(&generated.password)),
        Err(e) => {
            let status = e.status_code();
            HttpResponse::build(status)
                .content_type(ContentType::html())
                .body(render::error_page(status, &e.to_string()))
        }
    }
}

/// Render a password page
///
/// Renders a page holding a password of the configured default length.
#[utoipa::path(
    get,
    path = "/",
    tag = "Pages",
    params(PageQuery),
    responses(
        (status = 200, description = "Page with the generated password", body = String, content_type = "text/html"),
        (status = 400, description = "Invalid mode", body = String, content_type = "text/html")
    )
)]
pub async fn home(config: web::Data<Config>, query: web::Query<PageQuery>) -> HttpResponse {
    page_response(generate(
        &config,
        config.default_password_length,
        query.mode.as_deref(),
    ))
}

/// Render a password page of a given length
///
/// Renders a page holding a password whose length is taken from the path.
#[utoipa::path(
    get,
    path = "/{length}",
    tag = "Pages",
    params(
        ("length" = String, Path, description = "Number of characters"),
        PageQuery
    ),
    responses(
        (status = 200, description = "Page with the generated password", body = String, content_type = "text/html"),
        (status = 400, description = "Malformed, negative or too large length", body = String, content_type = "text/html")
    )
)]
pub async fn password_page(
    config: web::Data<Config>,
    path: web::Path<String>,
    query: web::Query<PageQuery>,
) -> HttpResponse {
    let result = parse_length(&path, &config)
        .and_then(|length| generate(&config, length, query.mode.as_deref()));
    page_response(result)
}

/// Generate a password
///
/// Returns a generated password as JSON.
#[utoipa::path(
    get,
    path = "/api/password",
    tag = "Generator",
    params(PasswordQuery),
    responses(
        (status = 200, description = "Generated password", body = PasswordGenerationResponse),
        (status = 400, description = "Invalid length or mode", body = PasswordGenerationResponse)
    )
)]
pub async fn generate_password(
    config: web::Data<Config>,
    query: web::Query<PasswordQuery>,
) -> HttpResponse {
    let length = match query.length.as_deref() {
        Some(raw) => parse_length(raw, &config),
        None => Ok(config.default_password_length),
    };

    match length.and_then(|length| generate(&config, length, query.mode.as_deref())) {
        Ok(generated) => HttpResponse::Ok()
            .insert_header((CACHE_CONTROL, "no-store"))
            .json(PasswordGenerationResponse {
                success: true,
                password: Some(generated.password),
                length: Some(generated.length),
                mode: Some(generated.mode),
                error: None,
            }),
        Err(e) => HttpResponse::build(e.status_code()).json(PasswordGenerationResponse {
            success: false,
            password: None,
            length: None,
            mode: None,
            error: Some(e.to_string()),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::routes::configure_routes;
    use actix_web::http::StatusCode;
    use actix_web::{test, App};

    fn password_in(page: &str) -> String {
        let start = page
            .find(r#"id="password">"#)
            .map(|i| i + r#"id="password">"#.len())
            .expect("password element");
        let end = page[start..].find("</p>").expect("closing tag") + start;
        page[start..end].to_string()
    }

    macro_rules! app {
        ($config:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($config))
                    .configure(configure_routes),
            )
            .await
        };
    }

    async fn get_page(config: Config, uri: &str) -> (StatusCode, String) {
        let app = app!(config);
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        let status = resp.status();
        let body = test::read_body(resp).await;
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[actix_web::test]
    async fn home_uses_default_length() {
        let config = Config {
            default_password_length: 20,
            ..Config::default()
        };
        let (status, page) = get_page(config, "/").await;
        assert_eq!(status, StatusCode::OK);
        let password = password_in(&page);
        assert_eq!(password.len(), 20);
        assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[actix_web::test]
    async fn path_length_is_used() {
        let (status, page) = get_page(Config::default(), "/12").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(password_in(&page).len(), 12);
    }

    #[actix_web::test]
    async fn repeated_requests_differ() {
        let app = app!(Config::default());
        let mut passwords = Vec::new();
        for _ in 0..2 {
            let resp = test::call_service(&app, test::TestRequest::get().uri("/12").to_request()).await;
            let body = test::read_body(resp).await;
            passwords.push(password_in(std::str::from_utf8(&body).unwrap()));
        }
        assert_eq!(passwords[0].len(), 12);
        assert_eq!(passwords[1].len(), 12);
        assert_ne!(passwords[0], passwords[1]);
    }

    #[actix_web::test]
    async fn zero_length_renders_empty_password() {
        let (status, page) = get_page(Config::default(), "/0").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(password_in(&page), "");
    }

    #[actix_web::test]
    async fn malformed_length_is_bad_request() {
        let (status, page) = get_page(Config::default(), "/twelve").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(page.contains("Password length must be a whole number"));
    }

    #[actix_web::test]
    async fn malformed_length_is_zero_when_lenient() {
        let config = Config {
            lenient_length_parsing: true,
            ..Config::default()
        };
        let (status, page) = get_page(config, "/twelve").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(password_in(&page), "");
    }

    #[actix_web::test]
    async fn negative_length_is_bad_request() {
        let (status, page) = get_page(Config::default(), "/-5").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(page.contains("Invalid password length -5"));
    }

    #[actix_web::test]
    async fn too_long_is_bad_request() {
        let config = Config {
            max_password_length: 32,
            ..Config::default()
        };
        let (status, page) = get_page(config, "/33").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(page.contains("at most 32 characters"));
    }

    #[actix_web::test]
    async fn page_mode_override() {
        let (status, page) = get_page(Config::default(), "/40?mode=simple").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(password_in(&page).len(), 40);

        let (status, page) = get_page(Config::default(), "/40?mode=sideways").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(page.contains("Unknown generation mode"));
        assert!(page.contains("sideways"));
        assert!(!page.contains("'sideways'"));
    }

    #[actix_web::test]
    async fn json_endpoint_generates_password() {
        let app = app!(Config::default());
        let req = test::TestRequest::get()
            .uri("/api/password?length=24&mode=alternating")
            .to_request();
        let resp: PasswordGenerationResponse = test::call_and_read_body_json(&app, req).await;

        assert!(resp.success);
        assert_eq!(resp.length, Some(24));
        assert_eq!(resp.mode, Some(GenerationMode::Alternating));
        assert!(resp.error.is_none());

        let password = resp.password.unwrap();
        assert_eq!(password.len(), 24);
        let cases: Vec<bool> = password
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .map(|c| c.is_ascii_uppercase())
            .collect();
        assert!(cases.windows(2).all(|pair| pair[0] != pair[1]));
    }

    #[actix_web::test]
    async fn json_endpoint_defaults() {
        let config = Config {
            default_password_length: 10,
            generation_mode: GenerationMode::Simple,
            ..Config::default()
        };
        let app = app!(config);
        let req = test::TestRequest::get().uri("/api/password").to_request();
        let resp: PasswordGenerationResponse = test::call_and_read_body_json(&app, req).await;

        assert!(resp.success);
        assert_eq!(resp.password.map(|p| p.len()), Some(10));
        assert_eq!(resp.mode, Some(GenerationMode::Simple));
    }

    #[actix_web::test]
    async fn json_endpoint_reports_errors() {
        let app = app!(Config::default());
        let req = test::TestRequest::get().uri("/api/password?length=-1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: PasswordGenerationResponse = test::read_body_json(resp).await;
        assert!(!body.success);
        assert!(body.password.is_none());
        assert!(body.error.unwrap().contains("must not be negative"));
    }
}
