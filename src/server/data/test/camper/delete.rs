use super::*;

/// Tests deleting a camper with signups.
///
/// Verifies that the camper and its signups are removed while other campers' signups
/// remain.
///
/// Expected: Ok with one signup left
#[tokio::test]
async fn deletes_camper_and_its_signups() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (camper, activity, _) = factory::create_signup_with_dependencies(db).await?;
    let other = factory::create_camper(db).await?;
    factory::create_signup(db, other.id, activity.id).await?;

    CamperRepository::new(db).delete(camper.id).await?;

    assert!(entity::prelude::Camper::find_by_id(camper.id)
        .one(db)
        .await?
        .is_none());
    assert_eq!(entity::prelude::Signup::find().count(db).await?, 1);

    Ok(())
}
