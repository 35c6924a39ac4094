use super::*;

/// Tests creating a new activity and reading it back by id.
///
/// Expected: Ok with activity created
#[tokio::test]
async fn creates_activity() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ActivityRepository::new(db);
    let activity = repo
        .create(CreateActivityParams {
            name: "Archery".to_string(),
            difficulty: 3,
        })
        .await?;

    assert_eq!(activity.name, "Archery");
    assert_eq!(activity.difficulty, 3);
    assert_eq!(repo.get_by_id(activity.id).await?, Some(activity));

    Ok(())
}
