use super::*;
use crate::model::xp::XpStanding;

/// Tests reading the standing of a member without a record.
///
/// Expected: Ok with zero XP at level 0
#[tokio::test]
async fn defaults_to_zero_for_missing_record() -> Result<(), AppError> {
    let test = TestBuilder::new().with_xp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserXpRepository::new(db);
    let standing = repo.get_standing(1, 2).await?;

    assert_eq!(standing, XpStanding { xp: 0, level: 0 });

    Ok(())
}

/// Tests reading the standing of a member with a record.
///
/// Expected: Ok with the stored XP and level
#[tokio::test]
async fn returns_stored_standing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_xp_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let record = factory::create_user_xp(db).await?;
    let guild_id = factory::helpers::next_id();
    let user_id = factory::helpers::next_id();
    factory::user_xp::UserXpFactory::new(db)
        .guild_id(guild_id)
        .user_id(user_id)
        .xp(475)
        .level(2)
        .build()
        .await?;

    let repo = UserXpRepository::new(db);

    assert_eq!(
        repo.get_standing(guild_id, user_id).await?,
        XpStanding { xp: 475, level: 2 }
    );
    // The default factory row is untouched by the lookup above
    let default_guild = record.guild_id.parse::<u64>().unwrap();
    let default_user = record.user_id.parse::<u64>().unwrap();
    assert_eq!(
        repo.get_standing(default_guild, default_user).await?,
        XpStanding::default()
    );

    Ok(())
}
