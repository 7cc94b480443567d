// src/api/render.rs
use actix_web::http::StatusCode;

const INDEX_TEMPLATE: &str = include_str!("../../templates/index.html");
const ERROR_TEMPLATE: &str = include_str!("../../templates/error.html");

/// Substitute every `{{ name }}` placeholder with its HTML-escaped value.
pub fn render(template: &str, values: &[(&str, &str)]) -> String {
    values.iter().fold(template.to_string(), |page, (name, value)| {
        page.replace(&format!("{{{{ {} }}}}", name), &html_escape::encode_safe(value))
    })
}

pub fn password_page(password: &str) -> String {
    render(INDEX_TEMPLATE, &[("password", password)])
}

pub fn error_page(status: StatusCode, message: &str) -> String {
    render(ERROR_TEMPLATE, &[("status", status.as_str()), ("message", message)])
}
