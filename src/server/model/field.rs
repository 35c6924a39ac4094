//! Field assignment from decoded request payloads.
//!
//! Every writable entity declares an explicit set of assignable fields, each with a typed
//! setter. Assigning a payload runs every setter and collects all failures, so a payload
//! is either applied in full or rejected with one message per offending key.

use serde_json::Value;

use crate::server::error::validation::{FieldError, ValidationError};

/// Request body decoded as a field-name to value mapping.
pub type Payload = serde_json::Map<String, Value>;

/// A set of fields that can be assigned key by key from a payload.
pub trait Assign: Default {
    /// Assigns a single key, rejecting unknown fields and invalid values.
    fn assign(&mut self, field: &str, value: &Value) -> Result<(), FieldError>;

    /// Assigns every key of `payload` onto a fresh value.
    ///
    /// # Returns
    /// - `Ok(Self)` - Every key was accepted
    /// - `Err(ValidationError)` - One error per rejected key, in payload order
    fn from_payload(payload: &Payload) -> Result<Self, ValidationError> {
        let mut fields = Self::default();

        let errors: Vec<FieldError> = payload
            .iter()
            .filter_map(|(key, value)| fields.assign(key, value).err())
            .collect();

        if errors.is_empty() {
            Ok(fields)
        } else {
            Err(ValidationError(errors))
        }
    }
}

/// Coerces a value into an `i32`.
///
/// Accepts JSON integers, floats without a fractional part and numeric strings.
pub fn integer(entity: &'static str, field: &'static str, value: &Value) -> Result<i32, FieldError> {
    let invalid = || FieldError::InvalidType {
        entity,
        field,
        expected: "an integer",
    };

    match value {
        Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                i32::try_from(int).map_err(|_| invalid())
            } else {
                number
                    .as_f64()
                    .filter(|float| float.fract() == 0.0)
                    .filter(|float| *float >= i32::MIN as f64 && *float <= i32::MAX as f64)
                    .map(|float| float as i32)
                    .ok_or_else(invalid)
            }
        }
        Value::String(text) => text.trim().parse::<i32>().map_err(|_| invalid()),
        _ => Err(invalid()),
    }
}

/// Coerces a value into an `i32` within `min..=max`.
pub fn integer_in_range(
    entity: &'static str,
    field: &'static str,
    value: &Value,
    min: i32,
    max: i32,
) -> Result<i32, FieldError> {
    let int = integer(entity, field, value)?;

    if (min..=max).contains(&int) {
        Ok(int)
    } else {
        Err(FieldError::OutOfRange {
            entity,
            field,
            min,
            max,
        })
    }
}

/// Accepts a JSON string containing at least one non-whitespace character.
pub fn non_blank_string(
    entity: &'static str,
    field: &'static str,
    value: &Value,
) -> Result<String, FieldError> {
    match value {
        Value::String(text) if text.trim().is_empty() => Err(FieldError::Blank { entity, field }),
        Value::String(text) => Ok(text.clone()),
        _ => Err(FieldError::InvalidType {
            entity,
            field,
            expected: "a string",
        }),
    }
}

/// Unwraps a field that must be present to create an entity.
pub fn required<T>(
    entity: &'static str,
    field: &'static str,
    value: Option<T>,
    errors: &mut Vec<FieldError>,
) -> Option<T> {
    if value.is_none() {
        errors.push(FieldError::Missing { entity, field });
    }

    value
}
