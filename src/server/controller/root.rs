use axum::{http::StatusCode, response::IntoResponse};

/// Tag for grouping service endpoints in OpenAPI documentation
pub static ROOT_TAG: &str = "root";

/// Liveness endpoint with an empty body.
#[utoipa::path(
    get,
    path = "/",
    tag = ROOT_TAG,
    responses(
        (status = 200, description = "Server is up")
    ),
)]
pub async fn home() -> impl IntoResponse {
    StatusCode::OK
}
