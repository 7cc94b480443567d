// src/core/config.rs
use std::env;
use log::LevelFilter;

use crate::models::GenerationMode;

// Configuration for the password service
#[derive(Debug, Clone)]
pub struct Config {
    // Web Interface
    pub web_address: String,
    pub web_port: u16,

    // Password Generation
    pub default_password_length: i64,
    pub max_password_length: i64,
    pub generation_mode: GenerationMode,
    pub lenient_length_parsing: bool,

    // Logging
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Web Interface
            web_address: "0.0.0.0".to_string(),
            web_port: 8080,

            // Password Generation
            default_password_length: 16,
            max_password_length: 1024,
            generation_mode: GenerationMode::Alternating,
            lenient_length_parsing: false,

            // Logging
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    // Build configuration from any key lookup, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Web Interface
        if let Some(address) = lookup("WEB_ADDRESS") {
            config.web_address = address;
        }

        if let Some(val) = lookup("APP_PORT") {
            // Accept the listen-address form ":8080" as well as a bare port
            match val.trim().trim_start_matches(':').parse() {
                Ok(port) => config.web_port = port,
                Err(_) => log::warn!("Invalid APP_PORT '{}', using {}", val, config.web_port),
            }
        }

        // Password Generation
        if let Some(val) = lookup("PASS_LENGTH") {
            match val.trim().parse::<i64>() {
                Ok(length) if length >= 0 => config.default_password_length = length,
                _ => log::warn!(
                    "Invalid PASS_LENGTH '{}', using {}",
                    val,
                    config.default_password_length
                ),
            }
        }

        if let Some(val) = lookup("PASS_MAX_LENGTH") {
            match val.trim().parse::<i64>() {
                Ok(max) if max >= 0 => config.max_password_length = max,
                _ => log::warn!(
                    "Invalid PASS_MAX_LENGTH '{}', using {}",
                    val,
                    config.max_password_length
                ),
            }
        }

        if let Some(val) = lookup("PASS_MODE") {
            match val.parse() {
                Ok(mode) => config.generation_mode = mode,
                Err(e) => log::warn!("{}, using {}", e, config.generation_mode),
            }
        }

        if let Some(val) = lookup("PASS_LENIENT_PARSING") {
            match val.trim().parse() {
                Ok(lenient) => config.lenient_length_parsing = lenient,
                Err(_) => log::warn!(
                    "Invalid PASS_LENIENT_PARSING '{}', using {}",
                    val,
                    config.lenient_length_parsing
                ),
            }
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match parse_log_level(&level) {
                Some(level) => config.log_level = level,
                None => log::warn!("Unknown LOG_LEVEL '{}', using {}", level, config.log_level),
            }
        }

        config.clamp_default_length();
        config
    }

    // Keep the home page length within the limit enforced on requests
    pub fn clamp_default_length(&mut self) {
        if self.default_password_length > self.max_password_length {
            log::warn!(
                "Default password length {} exceeds maximum {}, using {}",
                self.default_password_length,
                self.max_password_length,
                self.max_password_length
            );
            self.default_password_length = self.max_password_length;
        }
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.web_address.clone(), self.web_port)
    }
}

fn parse_log_level(level: &str) -> Option<LevelFilter> {
    match level.trim().to_lowercase().as_str() {
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}
