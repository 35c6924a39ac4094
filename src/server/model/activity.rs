//! Domain & parameter models for activity operations

use serde_json::Value;

use crate::server::model::{
    document::{write_many, Document, Rules, ToDocument},
    signup::Signup,
};

/// The activity domain model
///
/// `signups` is `None` when the relation was not loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub id: i32,
    pub name: String,
    pub difficulty: i32,
    pub signups: Option<Vec<Signup>>,
}

impl Activity {
    /// Converts an entity model to the activity domain model without its signups.
    pub fn from_entity(entity: entity::activity::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            difficulty: entity.difficulty,
            signups: None,
        }
    }

    /// Attaches the loaded signups relation.
    pub fn with_signups(mut self, signups: Vec<Signup>) -> Self {
        self.signups = Some(signups);
        self
    }
}

impl ToDocument for Activity {
    fn serialize_rules() -> Rules {
        Rules::excluding(["signups.activity"])
    }

    fn write_fields(&self, document: &mut Document, rules: &Rules) {
        document.insert("id".to_string(), Value::from(self.id));
        document.insert("name".to_string(), Value::from(self.name.clone()));
        document.insert("difficulty".to_string(), Value::from(self.difficulty));
        write_many(document, rules, "signups", self.signups.as_deref());
    }
}

/// Parameters for creating a new activity
#[derive(Debug, Clone, PartialEq)]
pub struct CreateActivityParams {
    pub name: String,
    pub difficulty: i32,
}

/// Parameters for updating an existing activity
///
/// Fields left as `None` keep their stored value.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateActivityParams {
    pub id: i32,
    pub name: Option<String>,
    pub difficulty: Option<i32>,
}
