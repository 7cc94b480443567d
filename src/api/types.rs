// src/api/types.rs
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::models::GenerationMode;

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// Letter case strategy, `simple` or `alternating`. Defaults to the server setting.
    pub mode: Option<String>,
}

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PasswordQuery {
    /// Number of characters. Defaults to the server setting.
    pub length: Option<String>,
    /// Letter case strategy, `simple` or `alternating`. Defaults to the server setting.
    pub mode: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PasswordGenerationResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Generated password (only present on success)
    pub password: Option<String>,
    /// Length of the generated password (only present on success)
    pub length: Option<i64>,
    /// Strategy used for letter case (only present on success)
    pub mode: Option<GenerationMode>,
    /// Error message (only present on failure)
    pub error: Option<String>,
}
