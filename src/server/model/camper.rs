//! Domain & parameter models for camper operations
//!
//! Defines the camper domain model, the assignable camper fields with their setters, and
//! the create/update parameter models built from them.

use serde_json::Value;

use crate::server::{
    error::validation::{FieldError, ValidationError},
    model::{
        document::{write_many, Document, Rules, ToDocument},
        field::{integer_in_range, non_blank_string, required, Assign},
        signup::Signup,
    },
};

const ENTITY: &str = "Camper";

/// Youngest age accepted for a camper.
pub const MIN_AGE: i32 = 8;
/// Oldest age accepted for a camper.
pub const MAX_AGE: i32 = 18;

/// The camper domain model
///
/// `signups` is `None` when the relation was not loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Camper {
    pub id: i32,
    pub name: String,
    pub age: i32,
    pub signups: Option<Vec<Signup>>,
}

impl Camper {
    /// Converts an entity model to the camper domain model without its signups.
    pub fn from_entity(entity: entity::camper::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            age: entity.age,
            signups: None,
        }
    }

    /// Attaches the loaded signups relation.
    pub fn with_signups(mut self, signups: Vec<Signup>) -> Self {
        self.signups = Some(signups);
        self
    }
}

impl ToDocument for Camper {
    fn serialize_rules() -> Rules {
        Rules::excluding(["signups.camper"])
    }

    fn write_fields(&self, document: &mut Document, rules: &Rules) {
        document.insert("id".to_string(), Value::from(self.id));
        document.insert("name".to_string(), Value::from(self.name.clone()));
        document.insert("age".to_string(), Value::from(self.age));
        write_many(document, rules, "signups", self.signups.as_deref());
    }
}

/// Camper fields assigned from a request payload.
///
/// Only `name` and `age` are assignable; any other key is rejected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CamperFields {
    pub name: Option<String>,
    pub age: Option<i32>,
}

impl Assign for CamperFields {
    fn assign(&mut self, field: &str, value: &Value) -> Result<(), FieldError> {
        match field {
            "name" => self.name = Some(non_blank_string(ENTITY, "name", value)?),
            "age" => self.age = Some(integer_in_range(ENTITY, "age", value, MIN_AGE, MAX_AGE)?),
            _ => {
                return Err(FieldError::UnknownField {
                    entity: ENTITY,
                    field: field.to_string(),
                })
            }
        }

        Ok(())
    }
}

/// Parameters for creating a new camper
#[derive(Debug, Clone, PartialEq)]
pub struct CreateCamperParams {
    pub name: String,
    pub age: i32,
}

impl TryFrom<CamperFields> for CreateCamperParams {
    type Error = ValidationError;

    fn try_from(fields: CamperFields) -> Result<Self, Self::Error> {
        let mut errors = Vec::new();

        let name = required(ENTITY, "name", fields.name, &mut errors);
        let age = required(ENTITY, "age", fields.age, &mut errors);

        match (name, age) {
            (Some(name), Some(age)) => Ok(Self { name, age }),
            _ => Err(ValidationError(errors)),
        }
    }
}

/// Parameters for updating an existing camper
///
/// Fields left as `None` keep their stored value.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateCamperParams {
    pub id: i32,
    pub name: Option<String>,
    pub age: Option<i32>,
}

impl UpdateCamperParams {
    pub fn from_fields(id: i32, fields: CamperFields) -> Self {
        Self {
            id,
            name: fields.name,
            age: fields.age,
        }
    }

    /// Whether the update leaves every field untouched.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none()
    }
}
