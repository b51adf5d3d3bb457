use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000001_create_city_table::City, m20260301_000002_create_property_table::Property,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Review::Table)
                    .if_not_exists()
                    .col(pk_auto(Review::Id))
                    .col(string(Review::Name))
                    .col(text_null(Review::ProfileImage))
                    .col(integer(Review::Rating))
                    .col(text(Review::Description))
                    .col(string(Review::Source).default(""))
                    .col(boolean(Review::IsActive).default(true))
                    .col(integer(Review::CityId))
                    .col(string(Review::CityName))
                    .col(integer_null(Review::PropertyId))
                    .col(string_null(Review::PropertyName))
                    .col(timestamp_with_time_zone(Review::CreatedAt))
                    .col(timestamp_with_time_zone(Review::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_review_city_id")
                            .from(Review::Table, Review::CityId)
                            .to(City::Table, City::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_review_property_id")
                            .from(Review::Table, Review::PropertyId)
                            .to(Property::Table, Property::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Review::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Review {
    Table,
    Id,
    Name,
    ProfileImage,
    Rating,
    Description,
    Source,
    IsActive,
    CityId,
    CityName,
    PropertyId,
    PropertyName,
    CreatedAt,
    UpdatedAt,
}
