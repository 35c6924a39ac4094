use axum::{
    body::{to_bytes, Bytes},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::Value;
use test_utils::builder::TestBuilder;

use crate::server::state::AppState;


/// Creates application state over an in-memory database with the camp schema.
async fn setup() -> AppState {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();

    AppState::new(test.db.unwrap())
}

/// Encodes a JSON value as a request body.
fn body(value: Value) -> Bytes {
    Bytes::from(value.to_string())
}

/// Splits a handler result into its status and decoded JSON body.
///
/// An empty body decodes to `Value::Null`.
async fn into_parts(response: impl IntoResponse) -> (StatusCode, Value) {
    let response: Response = response.into_response();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}
