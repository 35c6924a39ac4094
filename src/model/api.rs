use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of 404 and 500 responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Body of 400 responses, one message per rejected payload key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorDto {
    pub errors: Vec<String>,
}
