use super::*;

/// Tests that activities are listed in id order.
///
/// Expected: Ok with activities ordered by ascending id
#[tokio::test]
async fn returns_activities_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_activity(db).await?;
    let second = factory::create_activity(db).await?;

    let activities = ActivityRepository::new(db).get_all().await?;

    assert_eq!(activities, vec![first, second]);

    Ok(())
}
