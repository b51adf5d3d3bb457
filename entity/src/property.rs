use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "property")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub city_id: i32,
    /// Snapshot of the city name taken when the city reference was last set.
    pub city_name: String,
    pub guests: i64,
    pub rooms: i64,
    pub baths: i64,
    pub beds: i64,
    pub price_min: f64,
    pub price_max: f64,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub brochure_link: Option<String>,
    pub video_link: Option<String>,
    pub map_link: Option<String>,
    pub amenities: Json,
    pub images: Json,
    pub reviews: Json,
    pub rating_average: f64,
    pub rating_count: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::city::Entity",
        from = "Column::CityId",
        to = "super::city::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    City,
    #[sea_orm(has_many = "super::review::Entity")]
    Review,
}

impl Related<super::city::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::City.def()
    }
}

impl Related<super::review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Review.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
