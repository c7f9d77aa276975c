use super::*;

/// Tests finding an existing record.
///
/// Expected: Ok(Some) with the stored values converted to the domain model
#[tokio::test]
async fn finds_existing_record() -> Result<(), AppError> {
    let test = TestBuilder::new().with_xp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user_xp::UserXpFactory::new(db)
        .guild_id(100)
        .user_id(200)
        .xp(300)
        .level(2)
        .build()
        .await?;

    let repo = UserXpRepository::new(db);
    let record = repo.find(100, 200).await?;

    assert!(record.is_some());
    let record = record.unwrap();
    assert_eq!(record.guild_id, "100");
    assert_eq!(record.user_id, "200");
    assert_eq!(record.xp, 300);
    assert_eq!(record.level, 2);

    Ok(())
}

/// Tests finding a record that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_xp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserXpRepository::new(db);

    assert!(repo.find(100, 200).await?.is_none());

    Ok(())
}

/// Tests that records are scoped to their guild.
///
/// Verifies that a member's record in one guild is not returned for another guild.
///
/// Expected: Ok(None) for the other guild
#[tokio::test]
async fn does_not_cross_guilds() -> Result<(), AppError> {
    let test = TestBuilder::new().with_xp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user_xp::UserXpFactory::new(db)
        .guild_id(100)
        .user_id(200)
        .xp(50)
        .build()
        .await?;

    let repo = UserXpRepository::new(db);

    assert!(repo.find(101, 200).await?.is_none());

    Ok(())
}

/// Tests reading a row with a negative XP value written outside the bot.
///
/// Expected: Ok with XP read as zero
#[tokio::test]
async fn reads_negative_xp_as_zero() -> Result<(), AppError> {
    let test = TestBuilder::new().with_xp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user_xp::UserXpFactory::new(db)
        .guild_id(100)
        .user_id(200)
        .xp(-5)
        .build()
        .await?;

    let repo = UserXpRepository::new(db);
    let record = repo.find(100, 200).await?.unwrap();

    assert_eq!(record.xp, 0);

    Ok(())
}
