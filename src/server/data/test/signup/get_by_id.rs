use super::*;

/// Tests loading a signup with the camper and activity it references.
///
/// Expected: Ok(Some) with both relations present
#[tokio::test]
async fn loads_camper_and_activity() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (camper, activity, signup) = factory::create_signup_with_dependencies(db).await?;

    let (loaded, loaded_camper, loaded_activity) = SignupRepository::new(db)
        .get_by_id_with_relations(signup.id)
        .await?
        .unwrap();

    assert_eq!(loaded, signup);
    assert_eq!(loaded_camper, Some(camper));
    assert_eq!(loaded_activity, Some(activity));

    Ok(())
}

/// Tests looking up a signup that does not exist.
///
/// Expected: Ok(None) for both lookups
#[tokio::test]
async fn returns_none_for_missing_signup() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SignupRepository::new(db);

    assert!(repo.get_by_id(1).await?.is_none());
    assert!(repo.get_by_id_with_relations(1).await?.is_none());

    Ok(())
}

/// Tests listing signups in id order.
///
/// Expected: Ok with both signups
#[tokio::test]
async fn lists_all_signups() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (camper, activity, first) = factory::create_signup_with_dependencies(db).await?;
    let second = factory::create_signup(db, camper.id, activity.id).await?;

    let signups = SignupRepository::new(db).get_all().await?;

    assert_eq!(signups, vec![first, second]);

    Ok(())
}
