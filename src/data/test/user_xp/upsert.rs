use super::*;

/// Tests creating a new record.
///
/// Expected: Ok with the record stored under the member's keys
#[tokio::test]
async fn creates_new_record() -> Result<(), AppError> {
    let test = TestBuilder::new().with_xp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserXpRepository::new(db);
    let record = repo
        .upsert(UpsertUserXpParam {
            guild_id: 123456789,
            user_id: 987654321,
            xp: 120,
            level: 1,
        })
        .await?;

    assert_eq!(record.guild_id, "123456789");
    assert_eq!(record.user_id, "987654321");
    assert_eq!(record.xp, 120);
    assert_eq!(record.level, 1);

    let stored =
        entity::prelude::UserXp::find_by_id(("123456789".to_string(), "987654321".to_string()))
            .one(db)
            .await?;

    assert!(stored.is_some());
    let stored = stored.unwrap();
    assert_eq!(stored.xp, 120);
    assert_eq!(stored.level, 1);

    Ok(())
}

/// Tests overwriting an existing record.
///
/// Verifies that upserting the same member replaces XP and level instead of adding a row.
///
/// Expected: Ok with a single row holding the new values
#[tokio::test]
async fn overwrites_existing_record() -> Result<(), AppError> {
    let test = TestBuilder::new().with_xp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user_xp::UserXpFactory::new(db)
        .guild_id(1)
        .user_id(2)
        .xp(50)
        .build()
        .await?;

    let repo = UserXpRepository::new(db);
    let record = repo
        .upsert(UpsertUserXpParam {
            guild_id: 1,
            user_id: 2,
            xp: 300,
            level: 2,
        })
        .await?;

    assert_eq!(record.xp, 300);
    assert_eq!(record.level, 2);

    let count = entity::prelude::UserXp::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that updating a record keeps its creation timestamp.
///
/// Expected: created_at unchanged, updated_at advanced
#[tokio::test]
async fn preserves_created_at_on_update() -> Result<(), AppError> {
    let test = TestBuilder::new().with_xp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserXpRepository::new(db);
    let original = repo
        .upsert(UpsertUserXpParam {
            guild_id: 1,
            user_id: 2,
            xp: 10,
            level: 0,
        })
        .await?;

    // Wait a moment to ensure timestamp difference
    tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

    let updated = repo
        .upsert(UpsertUserXpParam {
            guild_id: 1,
            user_id: 2,
            xp: 20,
            level: 0,
        })
        .await?;

    assert_eq!(updated.created_at, original.created_at);
    assert!(updated.updated_at > original.updated_at);

    Ok(())
}

/// Tests upserting the same user in different guilds.
///
/// Expected: Ok with one independent row per guild
#[tokio::test]
async fn keeps_guilds_separate() -> Result<(), AppError> {
    let test = TestBuilder::new().with_xp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserXpRepository::new(db);
    for (guild_id, xp) in [(1u64, 100u64), (2, 200), (3, 300)] {
        repo.upsert(UpsertUserXpParam {
            guild_id,
            user_id: 42,
            xp,
            level: 1,
        })
        .await?;
    }

    let count = entity::prelude::UserXp::find().count(db).await?;
    assert_eq!(count, 3);
    assert_eq!(repo.get_standing(2, 42).await?.xp, 200);

    Ok(())
}
