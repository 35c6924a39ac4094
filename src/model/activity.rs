use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::signup::SignupDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct ActivityDto {
    pub id: i32,
    pub name: String,
    pub difficulty: i32,
    #[schema(no_recursion)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signups: Option<Vec<SignupDto>>,
}
