use super::*;

/// Tests creating a new camper.
///
/// Verifies that the repository inserts the row and assigns a fresh id.
///
/// Expected: Ok with camper created
#[tokio::test]
async fn creates_camper() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CamperRepository::new(db);
    let camper = repo
        .create(CreateCamperParams {
            name: "Alex".to_string(),
            age: 12,
        })
        .await?;

    assert_eq!(camper.name, "Alex");
    assert_eq!(camper.age, 12);

    let db_camper = entity::prelude::Camper::find_by_id(camper.id).one(db).await?;
    assert_eq!(db_camper, Some(camper));

    Ok(())
}

/// Tests that consecutive creates receive distinct ids.
///
/// Expected: Ok with two different ids
#[tokio::test]
async fn assigns_unique_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_camp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CamperRepository::new(db);
    let first = repo
        .create(CreateCamperParams {
            name: "Alex".to_string(),
            age: 12,
        })
        .await?;
    let second = repo
        .create(CreateCamperParams {
            name: "Sam".to_string(),
            age: 10,
        })
        .await?;

    assert_ne!(first.id, second.id);

    Ok(())
}
