use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{activity::ActivityDto, camper::CamperDto};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct SignupDto {
    pub id: i32,
    pub time: i32,
    pub camper_id: i32,
    pub activity_id: i32,
    #[schema(no_recursion)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camper: Option<Box<CamperDto>>,
    #[schema(no_recursion)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity: Option<Box<ActivityDto>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateSignupDto {
    pub time: i32,
    pub camper_id: i32,
    pub activity_id: i32,
}
