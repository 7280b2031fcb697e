use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SiteOption::Table)
                    .if_not_exists()
                    .col(pk_auto(SiteOption::Id))
                    .col(string_uniq(SiteOption::OptionName))
                    .col(text(SiteOption::OptionValue))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SiteOption::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SiteOption {
    #[sea_orm(iden = "options")]
    Table,
    Id,
    OptionName,
    OptionValue,
}
