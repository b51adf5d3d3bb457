use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Banner::Table)
                    .if_not_exists()
                    .col(pk_auto(Banner::Id))
                    .col(string(Banner::Title))
                    .col(string(Banner::Subtitle).default(""))
                    .col(text(Banner::Image))
                    .col(string(Banner::BannerType))
                    .col(boolean(Banner::IsActive).default(true))
                    .col(integer(Banner::DisplayOrder).default(0))
                    .col(timestamp_with_time_zone(Banner::CreatedAt))
                    .col(timestamp_with_time_zone(Banner::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Banner::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Banner {
    Table,
    Id,
    Title,
    Subtitle,
    Image,
    BannerType,
    IsActive,
    DisplayOrder,
    CreatedAt,
    UpdatedAt,
}
