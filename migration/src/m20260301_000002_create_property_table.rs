use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_city_table::City;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Property::Table)
                    .if_not_exists()
                    .col(pk_auto(Property::Id))
                    .col(string(Property::Name))
                    .col(integer(Property::CityId))
                    .col(string(Property::CityName))
                    .col(big_integer(Property::Guests))
                    .col(big_integer(Property::Rooms))
                    .col(big_integer(Property::Baths))
                    .col(big_integer(Property::Beds))
                    .col(double(Property::PriceMin))
                    .col(double(Property::PriceMax))
                    .col(text(Property::Description))
                    .col(string_null(Property::BrochureLink))
                    .col(string_null(Property::VideoLink))
                    .col(string_null(Property::MapLink))
                    .col(json(Property::Amenities))
                    .col(json(Property::Images))
                    .col(json(Property::Reviews))
                    .col(double(Property::RatingAverage).default(0.0))
                    .col(integer(Property::RatingCount).default(0))
                    .col(timestamp_with_time_zone(Property::CreatedAt))
                    .col(timestamp_with_time_zone(Property::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_property_city_id")
                            .from(Property::Table, Property::CityId)
                            .to(City::Table, City::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Property::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Property {
    Table,
    Id,
    Name,
    CityId,
    CityName,
    Guests,
    Rooms,
    Baths,
    Beds,
    PriceMin,
    PriceMax,
    Description,
    BrochureLink,
    VideoLink,
    MapLink,
    Amenities,
    Images,
    Reviews,
    RatingAverage,
    RatingCount,
    CreatedAt,
    UpdatedAt,
}
