use crate::server::{
    data::property::PropertyRepository,
    model::property::{CreatePropertyParams, PropertyReview, PropertyReviewParams},
};
use crate::model::review::ReviewSource;
use sea_orm::{DbErr, EntityTrait};
use serde_json::json;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_all;
mod get_by_id;
mod update;

fn create_params(city_id: i32) -> CreatePropertyParams {
    CreatePropertyParams {
        name: "Sea View Villa".to_string(),
        city_id,
        guests: 4,
        rooms: 2,
        baths: 2,
        beds: 3,
        price_min: 100.0,
        price_max: 200.0,
        description: "Right on the beach".to_string(),
        brochure_link: None,
        video_link: None,
        map_link: Some("https://maps.example.com/villa".to_string()),
        amenities: vec![],
        images: vec![],
        reviews: vec![],
    }
}

fn review(rating: u8, is_active: bool) -> PropertyReview {
    PropertyReview::new(PropertyReviewParams {
        name: "Asha".to_string(),
        profile_image: None,
        rating,
        description: String::new(),
        source: ReviewSource::Airbnb,
        is_active,
    })
}
