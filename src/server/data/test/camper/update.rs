use super::*;

/// Tests updating a single field.
///
/// Verifies that unsubmitted fields keep their stored value.
///
/// Expected: Ok with only age changed
#[tokio::test]
async fn updates_only_submitted_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let camper = factory::camper::CamperFactory::new(db)
        .name("Alex")
        .age(12)
        .build()
        .await?;

    let updated = CamperRepository::new(db)
        .update(UpdateCamperParams {
            id: camper.id,
            name: None,
            age: Some(13),
        })
        .await?;

    assert_eq!(updated.name, "Alex");
    assert_eq!(updated.age, 13);

    let db_camper = entity::prelude::Camper::find_by_id(camper.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(db_camper, updated);

    Ok(())
}

/// Tests an update that submits no fields.
///
/// Expected: Ok with the stored camper unchanged
#[tokio::test]
async fn empty_update_returns_stored_camper() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let camper = factory::create_camper(db).await?;

    let updated = CamperRepository::new(db)
        .update(UpdateCamperParams {
            id: camper.id,
            name: None,
            age: None,
        })
        .await?;

    assert_eq!(updated, camper);

    Ok(())
}

/// Tests updating a camper that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_camper() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CamperRepository::new(db)
        .update(UpdateCamperParams {
            id: 999,
            name: Some("Ghost".to_string()),
            age: None,
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
