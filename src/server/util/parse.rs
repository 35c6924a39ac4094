use crate::server::{error::AppError, model::field::Payload};

/// Parses a request body as a JSON object
///
/// # Arguments
/// - `body` - The raw request body
///
/// # Returns
/// - `Ok(Payload)` - The body decoded as a field-name to value mapping
/// - `Err(AppError::JsonErr)` - The body is not JSON or is JSON of another shape
///   than an object
pub fn parse_payload(body: &[u8]) -> Result<Payload, AppError> {
    let payload = serde_json::from_slice::<Payload>(body)?;

    Ok(payload)
}

/// Narrows an id taken from a request path to the key type of stored rows
///
/// # Returns
/// - `Some(i32)` - The id as stored
/// - `None` - No row can have this id
pub fn parse_id(id: i64) -> Option<i32> {
    i32::try_from(id).ok()
}
