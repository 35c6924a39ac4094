use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::activity::{CreateActivityParams, UpdateActivityParams};

pub struct ActivityRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ActivityRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new activity
    pub async fn create(
        &self,
        params: CreateActivityParams,
    ) -> Result<entity::activity::Model, DbErr> {
        entity::activity::ActiveModel {
            name: ActiveValue::Set(params.name),
            difficulty: ActiveValue::Set(params.difficulty),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets all activities ordered by id
    pub async fn get_all(&self) -> Result<Vec<entity::activity::Model>, DbErr> {
        entity::prelude::Activity::find()
            .order_by_asc(entity::activity::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets an activity by id
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::activity::Model>, DbErr> {
        entity::prelude::Activity::find_by_id(id).one(self.db).await
    }

    /// Updates the submitted fields of an activity, leaving the others untouched
    pub async fn update(
        &self,
        params: UpdateActivityParams,
    ) -> Result<entity::activity::Model, DbErr> {
        let activity = entity::prelude::Activity::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Activity with id {} not found",
                params.id
            )))?;

        if params.name.is_none() && params.difficulty.is_none() {
            return Ok(activity);
        }

        let mut active_model: entity::activity::ActiveModel = activity.into();
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(difficulty) = params.difficulty {
            active_model.difficulty = ActiveValue::Set(difficulty);
        }

        active_model.update(self.db).await
    }

    /// Deletes an activity and every signup referencing it in one transaction
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::Signup::delete_many()
            .filter(entity::signup::Column::ActivityId.eq(id))
            .exec(&txn)
            .await?;

        entity::prelude::Activity::delete_by_id(id)
            .exec(&txn)
            .await?;

        txn.commit().await
    }

    /// Gets the count of signups referencing an activity
    pub async fn get_signup_count(&self, activity_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Signup::find()
            .filter(entity::signup::Column::ActivityId.eq(activity_id))
            .count(self.db)
            .await
    }
}
