use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserXp::Table)
                    .if_not_exists()
                    .col(string(UserXp::GuildId))
                    .col(string(UserXp::UserId))
                    .col(big_integer(UserXp::Xp).default(0))
                    .col(integer(UserXp::Level).default(0))
                    .col(timestamp(UserXp::CreatedAt))
                    .col(timestamp(UserXp::UpdatedAt))
                    .primary_key(
                        Index::create()
                            .name("pk_user_xp")
                            .col(UserXp::GuildId)
                            .col(UserXp::UserId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserXp::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserXp {
    Table,
    GuildId,
    UserId,
    Xp,
    Level,
    CreatedAt,
    UpdatedAt,
}
