//! Signup factory for creating test signup entities.
//!
//! Signups reference an existing camper and activity, so both ids must be
//! supplied. Use `helpers::create_signup_with_dependencies` to create the whole
//! chain at once.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test signups with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::signup::SignupFactory;
///
/// let signup = SignupFactory::new(&db, camper.id, activity.id)
///     .time(14)
///     .build()
///     .await?;
/// ```
pub struct SignupFactory<'a> {
    db: &'a DatabaseConnection,
    camper_id: i32,
    activity_id: i32,
    time: i32,
}

impl<'a> SignupFactory<'a> {
    /// Creates a new SignupFactory with default values.
    ///
    /// Defaults:
    /// - time: `9`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `camper_id` - Camper the signup belongs to
    /// - `activity_id` - Activity the camper signs up for
    pub fn new(db: &'a DatabaseConnection, camper_id: i32, activity_id: i32) -> Self {
        Self {
            db,
            camper_id,
            activity_id,
            time: 9,
        }
    }

    /// Sets the hour of the day the signup takes place.
    pub fn time(mut self, time: i32) -> Self {
        self.time = time;
        self
    }

    /// Builds and inserts the signup entity into the database.
    pub async fn build(self) -> Result<entity::signup::Model, DbErr> {
        entity::signup::ActiveModel {
            id: ActiveValue::NotSet,
            time: ActiveValue::Set(self.time),
            camper_id: ActiveValue::Set(self.camper_id),
            activity_id: ActiveValue::Set(self.activity_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a signup with default values for the given camper and activity.
pub async fn create_signup(
    db: &DatabaseConnection,
    camper_id: i32,
    activity_id: i32,
) -> Result<entity::signup::Model, DbErr> {
    SignupFactory::new(db, camper_id, activity_id).build().await
}
