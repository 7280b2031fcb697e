use sea_orm_migration::{prelude::*, schema::*};

use super::m20251210_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Player::Table)
                    .if_not_exists()
                    .col(pk_auto(Player::Pid))
                    .col(integer(Player::Uid))
                    .col(string_uniq(Player::Name))
                    .col(timestamp_with_time_zone(Player::LastModified))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-players-uid")
                            .from(Player::Table, Player::Uid)
                            .to(User::Table, User::Uid)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Player::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Player {
    #[sea_orm(iden = "players")]
    Table,
    Pid,
    Uid,
    Name,
    LastModified,
}
