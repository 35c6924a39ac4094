use sea_orm::DatabaseConnection;

use crate::server::{
    data::camper::CamperRepository,
    error::AppError,
    model::{
        activity::Activity,
        camper::{Camper, CamperFields, CreateCamperParams, UpdateCamperParams},
        signup::Signup,
    },
};

pub struct CamperService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CamperService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every camper without relations
    pub async fn get_all(&self) -> Result<Vec<Camper>, AppError> {
        let repo = CamperRepository::new(self.db);

        let campers = repo.get_all().await?;

        Ok(campers.into_iter().map(Camper::from_entity).collect())
    }

    /// Gets a camper with its signups, each carrying the activity it is for
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Camper>, AppError> {
        let repo = CamperRepository::new(self.db);

        let Some((camper, signups)) = repo.get_by_id_with_signups(id).await? else {
            return Ok(None);
        };

        Ok(Some(with_signup_activities(camper, signups)))
    }

    /// Creates a new camper
    pub async fn create(&self, params: CreateCamperParams) -> Result<Camper, AppError> {
        let repo = CamperRepository::new(self.db);

        let camper = repo.create(params).await?;

        tracing::info!("Created camper {}", camper.id);

        // Fetch full camper with relations
        self.get_by_id(camper.id)
            .await?
            .ok_or_else(|| AppError::InternalError("Camper not found after creation".to_string()))
    }

    /// Updates the submitted fields of a camper
    ///
    /// `fields` is only evaluated once the camper is known to exist, so a missing camper
    /// is reported ahead of any problem with the submitted fields.
    ///
    /// # Arguments
    /// - `id` - Camper ID to update
    /// - `fields` - Produces the fields to apply
    ///
    /// # Returns
    /// - `Ok(Some(Camper))` - The updated camper with its signups
    /// - `Ok(None)` - No camper with this id
    /// - `Err(AppError)` - `fields` failed or a database error occurred
    pub async fn update(
        &self,
        id: i32,
        fields: impl FnOnce() -> Result<CamperFields, AppError>,
    ) -> Result<Option<Camper>, AppError> {
        let repo = CamperRepository::new(self.db);

        let Some(camper) = repo.get_by_id(id).await? else {
            return Ok(None);
        };

        let params = UpdateCamperParams::from_fields(id, fields()?);
        let camper = repo.update_model(camper, params).await?;

        tracing::info!("Updated camper {}", id);

        let signups = repo.get_signups_with_activity(id).await?;

        Ok(Some(with_signup_activities(camper, signups)))
    }
}

fn with_signup_activities(
    camper: entity::camper::Model,
    signups: Vec<(entity::signup::Model, Option<entity::activity::Model>)>,
) -> Camper {
    let signups = signups
        .into_iter()
        .map(|(signup, activity)| {
            let signup = Signup::from_entity(signup);
            match activity {
                Some(activity) => signup.with_activity(Activity::from_entity(activity)),
                None => signup,
            }
        })
        .collect();

    Camper::from_entity(camper).with_signups(signups)
}
