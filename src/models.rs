// src/models.rs
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// How letters are picked when the generator lands on a letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    /// Every letter is drawn from the full mixed-case alphabet.
    Simple,
    /// Consecutive letters alternate between upper and lower case.
    /// Digits in between do not affect the alternation.
    #[default]
    Alternating,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown generation mode '{0}', expected 'simple' or 'alternating'")]
pub struct ModeParseError(pub String);

impl FromStr for GenerationMode {
    type Err = ModeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "simple" => Ok(GenerationMode::Simple),
            "alternating" | "alternate" | "case-alternating" => Ok(GenerationMode::Alternating),
            _ => Err(ModeParseError(s.to_string())),
        }
    }
}

impl fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationMode::Simple => write!(f, "simple"),
            GenerationMode::Alternating => write!(f, "alternating"),
        }
    }
}
