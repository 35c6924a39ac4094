use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        camper::{CamperDto, CreateCamperDto, UpdateCamperDto},
    },
    server::{
        error::AppError,
        model::{
            camper::{CamperFields, CreateCamperParams},
            document::{to_documents, Rules, ToDocument},
            field::Assign,
        },
        service::camper::CamperService,
        state::AppState,
        util::parse::{parse_id, parse_payload},
    },
};

/// Tag for grouping camper endpoints in OpenAPI documentation
pub static CAMPER_TAG: &str = "camper";

/// List all campers.
///
/// Campers are returned in id order without their signups.
///
/// # Returns
/// - `200 OK` - Array of camper documents, empty when there are no campers
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/campers",
    tag = CAMPER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved campers", body = Vec<CamperDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_campers(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let campers = CamperService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(to_documents(&campers, &Rules::excluding(["signups"]))),
    ))
}

/// Create a new camper.
///
/// Every key of the request body is assigned onto a new camper. The camper is only
/// stored when every key is accepted.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `body` - JSON object with `name` and `age`
///
/// # Returns
/// - `201 Created` - The stored camper with an empty `signups` list
/// - `400 Bad Request` - Unknown key, uncoercible value, out-of-range age or missing field
/// - `500 Internal Server Error` - Malformed body or database error
#[utoipa::path(
    post,
    path = "/campers",
    tag = CAMPER_TAG,
    request_body = CreateCamperDto,
    responses(
        (status = 201, description = "Successfully created camper", body = CamperDto),
        (status = 400, description = "Invalid camper data", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_camper(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let payload = parse_payload(&body)?;
    let params = CreateCamperParams::try_from(CamperFields::from_payload(&payload)?)?;

    let camper = CamperService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(camper.to_document(&Rules::none()))))
}

/// Get a camper by ID.
///
/// Returns the camper with its signups, each including the activity it is for.
///
/// # Returns
/// - `200 OK` - Camper document
/// - `404 Not Found` - No camper with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/campers/{id}",
    tag = CAMPER_TAG,
    params(
        ("id" = i64, Path, description = "Camper ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved camper", body = CamperDto),
        (status = 404, description = "Camper not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_camper_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let Some(id) = parse_id(id) else {
        return Err(AppError::NotFound("Camper not found".to_string()));
    };

    let camper = CamperService::new(&state.db).get_by_id(id).await?;

    match camper {
        Some(camper) => Ok((StatusCode::OK, Json(camper.to_document(&Rules::none())))),
        None => Err(AppError::NotFound("Camper not found".to_string())),
    }
}

/// Update a camper.
///
/// Assigns each key of the request body onto the existing camper. Either every key is
/// applied or, when any key is rejected, none is.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Camper ID to update
/// - `body` - JSON object with any of `name` and `age`
///
/// # Returns
/// - `202 Accepted` - The updated camper
/// - `400 Bad Request` - A key was rejected; the camper is unchanged
/// - `404 Not Found` - No camper with this id
/// - `500 Internal Server Error` - Malformed body or database error
#[utoipa::path(
    patch,
    path = "/campers/{id}",
    tag = CAMPER_TAG,
    params(
        ("id" = i64, Path, description = "Camper ID")
    ),
    request_body = UpdateCamperDto,
    responses(
        (status = 202, description = "Successfully updated camper", body = CamperDto),
        (status = 400, description = "Invalid camper data", body = ValidationErrorDto),
        (status = 404, description = "Camper not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_camper(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let Some(id) = parse_id(id) else {
        return Err(AppError::NotFound("Camper not found".to_string()));
    };

    let camper = CamperService::new(&state.db)
        .update(id, || {
            let payload = parse_payload(&body)?;
            Ok(CamperFields::from_payload(&payload)?)
        })
        .await?;

    match camper {
        Some(camper) => Ok((StatusCode::ACCEPTED, Json(camper.to_document(&Rules::none())))),
        None => Err(AppError::NotFound("Camper not found".to_string())),
    }
}
