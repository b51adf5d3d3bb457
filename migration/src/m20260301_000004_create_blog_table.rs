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
                    .table(Blog::Table)
                    .if_not_exists()
                    .col(pk_auto(Blog::Id))
                    .col(string(Blog::Title))
                    .col(integer(Blog::CityId))
                    .col(string(Blog::CityName))
                    .col(text(Blog::BackgroundImage))
                    .col(text(Blog::Content))
                    .col(json(Blog::MustVisit))
                    .col(timestamp_with_time_zone(Blog::CreatedAt))
                    .col(timestamp_with_time_zone(Blog::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_blog_city_id")
                            .from(Blog::Table, Blog::CityId)
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
            .drop_table(Table::drop().table(Blog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Blog {
    Table,
    Id,
    Title,
    CityId,
    CityName,
    BackgroundImage,
    Content,
    MustVisit,
    CreatedAt,
    UpdatedAt,
}
