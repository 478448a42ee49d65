use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Alert payloads are schemaless; everything the client sends lives
        // in one JSONB column.
        manager
            .create_table(
                Table::create()
                    .table(EarthquakeAlerts::Table)
                    .if_not_exists()
                    .col(pk_auto(EarthquakeAlerts::Id))
                    .col(json_binary(EarthquakeAlerts::Fields).default("{}"))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EarthquakeAlerts::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum EarthquakeAlerts {
    Table,
    Id,
    Fields,
}
