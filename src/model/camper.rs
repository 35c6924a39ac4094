use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::signup::SignupDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CamperDto {
    pub id: i32,
    pub name: String,
    pub age: i32,
    /// Omitted from list responses.
    #[schema(no_recursion)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signups: Option<Vec<SignupDto>>,
}

/// Fields accepted when creating a camper; both are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateCamperDto {
    pub name: String,
    pub age: i32,
}

/// Fields accepted when patching a camper; unsubmitted fields keep their value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateCamperDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
}
