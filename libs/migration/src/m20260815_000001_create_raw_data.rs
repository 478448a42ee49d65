use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RawData::Table)
                    .if_not_exists()
                    .col(pk_auto(RawData::Id))
                    .col(json_binary(RawData::Fields).default("{}"))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RawData::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum RawData {
    Table,
    Id,
    Fields,
}
