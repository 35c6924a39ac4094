use axum::{routing::get, Json, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};

use crate::server::{
    controller::{activity, camper, root, signup},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Camp Signup API"),
    tags(
        (name = "root", description = "Service status"),
        (name = "camper", description = "Campers and their signups"),
        (name = "activity", description = "Camp activities"),
        (name = "signup", description = "Camper signups for activities")
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    let (router, api) = api_router();

    router
        .route("/api/openapi.json", get(move || async move { Json(api) }))
        .layer(TraceLayer::new_for_http())
}

/// Routes annotated handlers and collects their OpenAPI description.
pub fn api_router() -> (Router<AppState>, utoipa::openapi::OpenApi) {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(root::home))
        .routes(routes!(camper::get_campers, camper::create_camper))
        .routes(routes!(camper::get_camper_by_id, camper::update_camper))
        .routes(routes!(activity::get_activities))
        .routes(routes!(activity::delete_activity))
        .routes(routes!(signup::create_signup))
        .split_for_parts()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_route() {
        let (_, api) = api_router();

        for path in ["/", "/campers", "/campers/{id}", "/activities", "/activities/{id}", "/signups"] {
            assert!(api.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
