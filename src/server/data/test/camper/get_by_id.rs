use super::*;

/// Tests looking up a camper that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_camper() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CamperRepository::new(db).get_by_id(999).await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests loading a camper with its signups and their activities.
///
/// Verifies that only the camper's own signups are returned, in id order, each paired
/// with the activity it references.
///
/// Expected: Ok(Some) with two signups
#[tokio::test]
async fn loads_signups_with_activities() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let camper = factory::create_camper(db).await?;
    let other = factory::create_camper(db).await?;
    let archery = factory::create_activity(db).await?;
    let canoeing = factory::create_activity(db).await?;

    let first = factory::create_signup(db, camper.id, archery.id).await?;
    let second = factory::create_signup(db, camper.id, canoeing.id).await?;
    factory::create_signup(db, other.id, archery.id).await?;

    let (loaded, signups) = CamperRepository::new(db)
        .get_by_id_with_signups(camper.id)
        .await?
        .unwrap();

    assert_eq!(loaded, camper);
    assert_eq!(signups.len(), 2);
    assert_eq!(signups[0].0, first);
    assert_eq!(signups[0].1, Some(archery));
    assert_eq!(signups[1].0, second);
    assert_eq!(signups[1].1, Some(canoeing));

    Ok(())
}

/// Tests loading signups for a camper that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn with_signups_returns_none_for_missing_camper() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CamperRepository::new(db).get_by_id_with_signups(42).await?;

    assert!(result.is_none());

    Ok(())
}
