use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Uid))
                    .col(string_uniq(User::Email))
                    .col(string(User::Nickname))
                    .col(string(User::Password))
                    .col(integer(User::Score).default(0))
                    .col(integer(User::Permission).default(0))
                    .col(string(User::Ip))
                    .col(timestamp_with_time_zone(User::LastSignAt))
                    .col(timestamp_with_time_zone(User::RegisterAt))
                    .to_owned(),
            )
            .await?;

        // Per-IP registration quota counts users by address
        manager
            .create_index(
                Index::create()
                    .name("idx-users-ip")
                    .table(User::Table)
                    .col(User::Ip)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    #[sea_orm(iden = "users")]
    Table,
    Uid,
    Email,
    Nickname,
    Password,
    Score,
    Permission,
    Ip,
    LastSignAt,
    RegisterAt,
}
