use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::camper::{CreateCamperParams, UpdateCamperParams};

pub struct CamperRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CamperRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new camper
    pub async fn create(&self, params: CreateCamperParams) -> Result<entity::camper::Model, DbErr> {
        entity::camper::ActiveModel {
            name: ActiveValue::Set(params.name),
            age: ActiveValue::Set(params.age),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Gets all campers ordered by id
    pub async fn get_all(&self) -> Result<Vec<entity::camper::Model>, DbErr> {
        entity::prelude::Camper::find()
            .order_by_asc(entity::camper::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets a camper by id
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::camper::Model>, DbErr> {
        entity::prelude::Camper::find_by_id(id).one(self.db).await
    }

    /// Gets a camper by id together with its signups and the activity of each signup
    pub async fn get_by_id_with_signups(
        &self,
        id: i32,
    ) -> Result<
        Option<(
            entity::camper::Model,
            Vec<(entity::signup::Model, Option<entity::activity::Model>)>,
        )>,
        DbErr,
    > {
        let Some(camper) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let signups = self.get_signups_with_activity(id).await?;

        Ok(Some((camper, signups)))
    }

    /// Gets the signups of a camper in id order, each with the activity it references
    pub async fn get_signups_with_activity(
        &self,
        camper_id: i32,
    ) -> Result<Vec<(entity::signup::Model, Option<entity::activity::Model>)>, DbErr> {
        entity::prelude::Signup::find()
            .filter(entity::signup::Column::CamperId.eq(camper_id))
            .order_by_asc(entity::signup::Column::Id)
            .find_also_related(entity::prelude::Activity)
            .all(self.db)
            .await
    }

    /// Updates the submitted fields of a camper, leaving the others untouched
    pub async fn update(&self, params: UpdateCamperParams) -> Result<entity::camper::Model, DbErr> {
        let camper = entity::prelude::Camper::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Camper with id {} not found",
                params.id
            )))?;

        self.update_model(camper, params).await
    }

    /// Applies the submitted fields onto an already loaded camper
    pub async fn update_model(
        &self,
        camper: entity::camper::Model,
        params: UpdateCamperParams,
    ) -> Result<entity::camper::Model, DbErr> {
        if params.is_empty() {
            return Ok(camper);
        }

        let mut active_model: entity::camper::ActiveModel = camper.into();
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(age) = params.age {
            active_model.age = ActiveValue::Set(age);
        }

        active_model.update(self.db).await
    }

    /// Deletes a camper and every signup referencing it in one transaction
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::Signup::delete_many()
            .filter(entity::signup::Column::CamperId.eq(id))
            .exec(&txn)
            .await?;

        entity::prelude::Camper::delete_by_id(id)
            .exec(&txn)
            .await?;

        txn.commit().await
    }
}
