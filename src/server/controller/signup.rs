use axum::{body::Bytes, extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        signup::{CreateSignupDto, SignupDto},
    },
    server::{
        error::AppError,
        model::{
            document::{Rules, ToDocument},
            field::Assign,
            signup::{CreateSignupParams, SignupFields},
        },
        service::signup::SignupService,
        state::AppState,
        util::parse::parse_payload,
    },
};

/// Tag for grouping signup endpoints in OpenAPI documentation
pub static SIGNUP_TAG: &str = "signup";

/// Sign a camper up for an activity.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `body` - JSON object with `time`, `camper_id` and `activity_id`
///
/// # Returns
/// - `201 Created` - The signup including its camper and activity
/// - `400 Bad Request` - Unknown key, uncoercible value, out-of-range time or missing field
/// - `500 Internal Server Error` - Malformed body, unknown camper or activity, database error
#[utoipa::path(
    post,
    path = "/signups",
    tag = SIGNUP_TAG,
    request_body = CreateSignupDto,
    responses(
        (status = 201, description = "Successfully created signup", body = SignupDto),
        (status = 400, description = "Invalid signup data", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_signup(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let payload = parse_payload(&body)?;
    let params = CreateSignupParams::try_from(SignupFields::from_payload(&payload)?)?;

    let signup = SignupService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(signup.to_document(&Rules::none()))))
}
