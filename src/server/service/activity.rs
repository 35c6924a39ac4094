use sea_orm::DatabaseConnection;

use crate::server::{data::activity::ActivityRepository, error::AppError, model::activity::Activity};

pub struct ActivityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ActivityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every activity without relations
    pub async fn get_all(&self) -> Result<Vec<Activity>, AppError> {
        let repo = ActivityRepository::new(self.db);

        let activities = repo.get_all().await?;

        Ok(activities.into_iter().map(Activity::from_entity).collect())
    }

    /// Deletes an activity together with its signups
    /// Returns false if the activity doesn't exist
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let repo = ActivityRepository::new(self.db);

        if repo.get_by_id(id).await?.is_none() {
            return Ok(false);
        }

        let signups = repo.get_signup_count(id).await?;

        repo.delete(id).await?;

        tracing::info!("Deleted activity {} and {} signup(s)", id, signups);

        Ok(true)
    }
}
