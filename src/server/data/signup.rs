use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
    TransactionTrait,
};

use crate::server::model::signup::{CreateSignupParams, UpdateSignupParams};

pub struct SignupRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SignupRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new signup
    ///
    /// The referenced camper and activity are checked inside the insert transaction so a
    /// dangling reference fails with `DbErr::RecordNotFound` regardless of whether the
    /// store enforces foreign keys.
    pub async fn create(&self, params: CreateSignupParams) -> Result<entity::signup::Model, DbErr> {
        let txn = self.db.begin().await?;

        let missing = if entity::prelude::Camper::find_by_id(params.camper_id)
            .one(&txn)
            .await?
            .is_none()
        {
            Some(format!("Camper with id {} not found", params.camper_id))
        } else if entity::prelude::Activity::find_by_id(params.activity_id)
            .one(&txn)
            .await?
            .is_none()
        {
            Some(format!("Activity with id {} not found", params.activity_id))
        } else {
            None
        };

        if let Some(message) = missing {
            txn.rollback().await?;
            return Err(DbErr::RecordNotFound(message));
        }

        let signup = entity::signup::ActiveModel {
            time: ActiveValue::Set(params.time),
            camper_id: ActiveValue::Set(params.camper_id),
            activity_id: ActiveValue::Set(params.activity_id),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(signup)
    }

    /// Gets all signups ordered by id
    pub async fn get_all(&self) -> Result<Vec<entity::signup::Model>, DbErr> {
        entity::prelude::Signup::find()
            .order_by_asc(entity::signup::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets a signup by id
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::signup::Model>, DbErr> {
        entity::prelude::Signup::find_by_id(id).one(self.db).await
    }

    /// Gets a signup by id together with the camper and activity it references
    pub async fn get_by_id_with_relations(
        &self,
        id: i32,
    ) -> Result<
        Option<(
            entity::signup::Model,
            Option<entity::camper::Model>,
            Option<entity::activity::Model>,
        )>,
        DbErr,
    > {
        let Some((signup, camper)) = entity::prelude::Signup::find_by_id(id)
            .find_also_related(entity::prelude::Camper)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let activity = entity::prelude::Activity::find_by_id(signup.activity_id)
            .one(self.db)
            .await?;

        Ok(Some((signup, camper, activity)))
    }

    /// Updates a signup's time
    pub async fn update(&self, params: UpdateSignupParams) -> Result<entity::signup::Model, DbErr> {
        let signup = entity::prelude::Signup::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Signup with id {} not found",
                params.id
            )))?;

        let mut active_model: entity::signup::ActiveModel = signup.into();
        active_model.time = ActiveValue::Set(params.time);

        active_model.update(self.db).await
    }

    /// Deletes a signup
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Signup::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
