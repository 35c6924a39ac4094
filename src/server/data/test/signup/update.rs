use super::*;

/// Tests moving a signup to a different hour.
///
/// Expected: Ok with time changed and references kept
#[tokio::test]
async fn updates_time() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, signup) = factory::create_signup_with_dependencies(db).await?;

    let updated = SignupRepository::new(db)
        .update(UpdateSignupParams {
            id: signup.id,
            time: 16,
        })
        .await?;

    assert_eq!(updated.time, 16);
    assert_eq!(updated.camper_id, signup.camper_id);
    assert_eq!(updated.activity_id, signup.activity_id);

    Ok(())
}
