use super::*;

/// Tests updating an activity's difficulty.
///
/// Expected: Ok with only difficulty changed
#[tokio::test]
async fn updates_only_submitted_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let activity = factory::activity::ActivityFactory::new(db)
        .name("Canoeing")
        .difficulty(2)
        .build()
        .await?;

    let updated = ActivityRepository::new(db)
        .update(UpdateActivityParams {
            id: activity.id,
            name: None,
            difficulty: Some(5),
        })
        .await?;

    assert_eq!(updated.name, "Canoeing");
    assert_eq!(updated.difficulty, 5);

    Ok(())
}

/// Tests updating an activity that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_activity() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ActivityRepository::new(db)
        .update(UpdateActivityParams {
            id: 999,
            name: None,
            difficulty: Some(1),
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
