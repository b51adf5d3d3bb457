use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(City::Table)
                    .if_not_exists()
                    .col(pk_auto(City::Id))
                    .col(string_uniq(City::Name))
                    .col(text(City::Image))
                    .col(boolean(City::IsActive).default(true))
                    .col(json(City::ThingsToDo))
                    .col(timestamp_with_time_zone(City::CreatedAt))
                    .col(timestamp_with_time_zone(City::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(City::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum City {
    Table,
    Id,
    Name,
    Image,
    IsActive,
    ThingsToDo,
    CreatedAt,
    UpdatedAt,
}
