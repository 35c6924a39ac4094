//! Domain & parameter models for signup operations
//!
//! A signup records a camper taking part in an activity at a given hour of the day.

use serde_json::Value;

use crate::server::{
    error::validation::{FieldError, ValidationError},
    model::{
        activity::Activity,
        camper::Camper,
        document::{write_one, Document, Rules, ToDocument},
        field::{integer, integer_in_range, required, Assign},
    },
};

const ENTITY: &str = "Signup";

/// Earliest hour a signup can take place.
pub const MIN_TIME: i32 = 0;
/// Latest hour a signup can take place.
pub const MAX_TIME: i32 = 23;

/// The signup domain model
///
/// `camper` and `activity` are `None` when the relation was not loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Signup {
    pub id: i32,
    pub time: i32,
    pub camper_id: i32,
    pub activity_id: i32,
    pub camper: Option<Box<Camper>>,
    pub activity: Option<Box<Activity>>,
}

impl Signup {
    /// Converts an entity model to the signup domain model without its relations.
    pub fn from_entity(entity: entity::signup::Model) -> Self {
        Self {
            id: entity.id,
            time: entity.time,
            camper_id: entity.camper_id,
            activity_id: entity.activity_id,
            camper: None,
            activity: None,
        }
    }

    /// Attaches the loaded camper relation.
    pub fn with_camper(mut self, camper: Camper) -> Self {
        self.camper = Some(Box::new(camper));
        self
    }

    /// Attaches the loaded activity relation.
    pub fn with_activity(mut self, activity: Activity) -> Self {
        self.activity = Some(Box::new(activity));
        self
    }
}

impl ToDocument for Signup {
    fn serialize_rules() -> Rules {
        Rules::excluding(["camper.signups", "activity.signups"])
    }

    fn write_fields(&self, document: &mut Document, rules: &Rules) {
        document.insert("id".to_string(), Value::from(self.id));
        document.insert("time".to_string(), Value::from(self.time));
        document.insert("camper_id".to_string(), Value::from(self.camper_id));
        document.insert("activity_id".to_string(), Value::from(self.activity_id));
        write_one(document, rules, "camper", self.camper.as_deref());
        write_one(document, rules, "activity", self.activity.as_deref());
    }
}

/// Signup fields assigned from a request payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignupFields {
    pub time: Option<i32>,
    pub camper_id: Option<i32>,
    pub activity_id: Option<i32>,
}

impl Assign for SignupFields {
    fn assign(&mut self, field: &str, value: &Value) -> Result<(), FieldError> {
        match field {
            "time" => self.time = Some(integer_in_range(ENTITY, "time", value, MIN_TIME, MAX_TIME)?),
            "camper_id" => self.camper_id = Some(integer(ENTITY, "camper_id", value)?),
            "activity_id" => self.activity_id = Some(integer(ENTITY, "activity_id", value)?),
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

/// Parameters for creating a new signup
#[derive(Debug, Clone, PartialEq)]
pub struct CreateSignupParams {
    pub time: i32,
    pub camper_id: i32,
    pub activity_id: i32,
}

impl TryFrom<SignupFields> for CreateSignupParams {
    type Error = ValidationError;

    fn try_from(fields: SignupFields) -> Result<Self, Self::Error> {
        let mut errors = Vec::new();

        let time = required(ENTITY, "time", fields.time, &mut errors);
        let camper_id = required(ENTITY, "camper_id", fields.camper_id, &mut errors);
        let activity_id = required(ENTITY, "activity_id", fields.activity_id, &mut errors);

        match (time, camper_id, activity_id) {
            (Some(time), Some(camper_id), Some(activity_id)) => Ok(Self {
                time,
                camper_id,
                activity_id,
            }),
            _ => Err(ValidationError(errors)),
        }
    }
}

/// Parameters for updating an existing signup's time
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateSignupParams {
    pub id: i32,
    pub time: i32,
}
