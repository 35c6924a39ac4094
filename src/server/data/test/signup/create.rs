use super::*;

/// Tests creating a signup for an existing camper and activity.
///
/// Expected: Ok with signup created
#[tokio::test]
async fn creates_signup() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let camper = factory::create_camper(db).await?;
    let activity = factory::create_activity(db).await?;

    let signup = SignupRepository::new(db)
        .create(CreateSignupParams {
            time: 14,
            camper_id: camper.id,
            activity_id: activity.id,
        })
        .await?;

    assert_eq!(signup.time, 14);
    assert_eq!(signup.camper_id, camper.id);
    assert_eq!(signup.activity_id, activity.id);

    Ok(())
}

/// Tests creating a signup for a camper that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound) and no row inserted
#[tokio::test]
async fn fails_for_missing_camper() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let activity = factory::create_activity(db).await?;

    let result = SignupRepository::new(db)
        .create(CreateSignupParams {
            time: 9,
            camper_id: 999,
            activity_id: activity.id,
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));
    assert_eq!(entity::prelude::Signup::find().count(db).await?, 0);

    Ok(())
}

/// Tests creating a signup for an activity that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound) and no row inserted
#[tokio::test]
async fn fails_for_missing_activity() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let camper = factory::create_camper(db).await?;

    let result = SignupRepository::new(db)
        .create(CreateSignupParams {
            time: 9,
            camper_id: camper.id,
            activity_id: 999,
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));
    assert_eq!(entity::prelude::Signup::find().count(db).await?, 0);

    Ok(())
}
