// src/api/utils.rs

use std::num::IntErrorKind;

use log::warn;

use crate::api::error::ApiError;
use crate::core::config::Config;

/// Parse a requested password length taken from the URL.
///
/// Non-numeric input is rejected unless lenient parsing is enabled, in which
/// case it becomes zero. Negative values are passed through so the generator
/// can reject them.
pub fn parse_length(raw: &str, config: &Config) -> Result<i64, ApiError> {
    match raw.trim().parse::<i64>() {
        Ok(length) => Ok(length),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Err(ApiError::LengthTooLarge {
                max: config.max_password_length,
            }),
            IntErrorKind::NegOverflow => Err(ApiError::LengthOutOfRange),
            _ if config.lenient_length_parsing => {
                warn!("Treating non-numeric length as 0");
                Ok(0)
            }
            _ => {
                warn!("Rejected non-numeric password length");
                Err(ApiError::MalformedLength)
            }
        },
    }
}

/// Enforce the configured upper bound on a password length.
pub fn check_max_length(length: i64, config: &Config) -> Result<i64, ApiError> {
    if length > config.max_password_length {
        warn!("Rejected password length {} above maximum {}", length, config.max_password_length);
        return Err(ApiError::LengthTooLarge {
            max: config.max_password_length,
        });
    }
    Ok(length)
}
