use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{activity::ActivityDto, api::ErrorDto},
    server::{
        error::AppError,
        model::document::{to_documents, Rules},
        service::activity::ActivityService,
        state::AppState,
        util::parse::parse_id,
    },
};

/// Tag for grouping activity endpoints in OpenAPI documentation
pub static ACTIVITY_TAG: &str = "activity";

/// List all activities.
///
/// Activities are returned in id order without their signups.
///
/// # Returns
/// - `200 OK` - Array of activity documents
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/activities",
    tag = ACTIVITY_TAG,
    responses(
        (status = 200, description = "Successfully retrieved activities", body = Vec<ActivityDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_activities(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let activities = ActivityService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(to_documents(&activities, &Rules::excluding(["signups"]))),
    ))
}

/// Delete an activity.
///
/// Signups for the activity are deleted with it.
///
/// # Returns
/// - `204 No Content` - Activity deleted
/// - `404 Not Found` - No activity with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/activities/{id}",
    tag = ACTIVITY_TAG,
    params(
        ("id" = i64, Path, description = "Activity ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted activity"),
        (status = 404, description = "Activity not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_activity(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let Some(id) = parse_id(id) else {
        return Err(AppError::NotFound("Activity not found".to_string()));
    };

    let deleted = ActivityService::new(&state.db).delete(id).await?;

    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Activity not found".to_string()))
    }
}
