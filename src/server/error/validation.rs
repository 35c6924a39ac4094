use thiserror::Error;

/// A single rejected key of a request payload.
///
/// Raised by the per-entity field setters while assigning a decoded request body onto a
/// record. The display text is returned to the client verbatim in the `errors` array.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The key is not an assignable field of the entity.
    #[error("Unknown field '{field}' for {entity}")]
    UnknownField { entity: &'static str, field: String },

    /// The value has a type that cannot be coerced into the field type.
    #[error("{entity} {field} must be {expected}")]
    InvalidType {
        entity: &'static str,
        field: &'static str,
        expected: &'static str,
    },

    /// The value is outside the inclusive range allowed for the field.
    #[error("{entity} {field} must be between {min} and {max}")]
    OutOfRange {
        entity: &'static str,
        field: &'static str,
        min: i32,
        max: i32,
    },

    /// The value is an empty or whitespace-only string.
    #[error("{entity} {field} must not be blank")]
    Blank {
        entity: &'static str,
        field: &'static str,
    },

    /// A field required to create the entity was not submitted.
    #[error("{entity} {field} is required")]
    Missing {
        entity: &'static str,
        field: &'static str,
    },
}

/// Every field error collected from one payload.
///
/// Handlers surface this as `400 Bad Request` with one message per rejected key. No
/// other error kind is reported as a client error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Validation failed: {}", .0.iter().map(ToString::to_string).collect::<Vec<_>>().join("; "))]
pub struct ValidationError(pub Vec<FieldError>);

impl ValidationError {
    /// Messages for the response body, in payload order.
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }
}

impl From<FieldError> for ValidationError {
    fn from(err: FieldError) -> Self {
        ValidationError(vec![err])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_field_errors() {
        let unknown = FieldError::UnknownField {
            entity: "Camper",
            field: "nickname".to_string(),
        };
        let range = FieldError::OutOfRange {
            entity: "Camper",
            field: "age",
            min: 8,
            max: 18,
        };

        assert_eq!(unknown.to_string(), "Unknown field 'nickname' for Camper");
        assert_eq!(range.to_string(), "Camper age must be between 8 and 18");
    }

    #[test]
    fn collects_messages_in_order() {
        let err = ValidationError(vec![
            FieldError::Missing {
                entity: "Signup",
                field: "time",
            },
            FieldError::InvalidType {
                entity: "Signup",
                field: "camper_id",
                expected: "an integer",
            },
        ]);

        assert_eq!(
            err.messages(),
            vec![
                "Signup time is required".to_string(),
                "Signup camper_id must be an integer".to_string()
            ]
        );
        assert!(err.to_string().starts_with("Validation failed: "));
    }
}
