// src/api/error.rs
use actix_web::http::StatusCode;
use thiserror::Error;

use crate::generators::GeneratorError;
use crate::models::ModeParseError;

/// Failures turning request input into a generated password
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Password length must be a whole number")]
    MalformedLength,

    #[error(transparent)]
    InvalidLength(#[from] GeneratorError),

    #[error("Password length is out of range and must not be negative")]
    LengthOutOfRange,

    #[error("Password length must be at most {max} characters")]
    LengthTooLarge { max: i64 },

    #[error(transparent)]
    InvalidMode(#[from] ModeParseError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MalformedLength
            | ApiError::InvalidLength(_)
            | ApiError::LengthOutOfRange
            | ApiError::LengthTooLarge { .. }
            | ApiError::InvalidMode(_) => StatusCode::BAD_REQUEST,
        }
    }
}
