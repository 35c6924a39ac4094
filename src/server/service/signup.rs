use sea_orm::DatabaseConnection;

use crate::server::{
    data::signup::SignupRepository,
    error::AppError,
    model::{
        activity::Activity,
        camper::Camper,
        signup::{CreateSignupParams, Signup},
    },
};

pub struct SignupService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SignupService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new signup and returns it with its camper and activity
    ///
    /// A camper or activity id without a matching row surfaces as a database error.
    pub async fn create(&self, params: CreateSignupParams) -> Result<Signup, AppError> {
        let repo = SignupRepository::new(self.db);

        let signup = repo.create(params).await?;

        tracing::info!(
            "Created signup {} for camper {} in activity {}",
            signup.id,
            signup.camper_id,
            signup.activity_id
        );

        let (signup, camper, activity) = repo
            .get_by_id_with_relations(signup.id)
            .await?
            .ok_or_else(|| AppError::InternalError("Signup not found after creation".to_string()))?;

        let mut signup = Signup::from_entity(signup);
        if let Some(camper) = camper {
            signup = signup.with_camper(Camper::from_entity(camper));
        }
        if let Some(activity) = activity {
            signup = signup.with_activity(Activity::from_entity(activity));
        }

        Ok(signup)
    }
}
