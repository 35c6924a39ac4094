use super::*;

/// Tests deleting a signup leaves its camper and activity in place.
///
/// Expected: Ok with no signups and one camper and activity
#[tokio::test]
async fn deletes_signup_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, signup) = factory::create_signup_with_dependencies(db).await?;

    SignupRepository::new(db).delete(signup.id).await?;

    assert_eq!(entity::prelude::Signup::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Camper::find().count(db).await?, 1);
    assert_eq!(entity::prelude::Activity::find().count(db).await?, 1);

    Ok(())
}
