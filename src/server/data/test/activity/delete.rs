use super::*;

/// Tests deleting an activity without signups.
///
/// Expected: Ok with activity removed
#[tokio::test]
async fn deletes_activity() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let activity = factory::create_activity(db).await?;

    let repo = ActivityRepository::new(db);
    repo.delete(activity.id).await?;

    assert!(repo.get_by_id(activity.id).await?.is_none());

    Ok(())
}

/// Tests that deleting an activity cascades to its signups.
///
/// Verifies that signups for other activities are kept.
///
/// Expected: Ok with only the other activity's signup left
#[tokio::test]
async fn cascades_to_signups() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (camper, activity, _) = factory::create_signup_with_dependencies(db).await?;
    factory::create_signup(db, camper.id, activity.id).await?;
    let other = factory::create_activity(db).await?;
    let kept = factory::create_signup(db, camper.id, other.id).await?;

    let repo = ActivityRepository::new(db);
    assert_eq!(repo.get_signup_count(activity.id).await?, 2);

    repo.delete(activity.id).await?;

    assert_eq!(repo.get_signup_count(activity.id).await?, 0);
    let remaining = entity::prelude::Signup::find()
        .filter(entity::signup::Column::CamperId.eq(camper.id))
        .all(db)
        .await?;
    assert_eq!(remaining, vec![kept]);
    assert_eq!(entity::prelude::Activity::find().count(db).await?, 1);

    Ok(())
}
