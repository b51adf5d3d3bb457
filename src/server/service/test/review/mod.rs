use crate::{
    model::review::ReviewSource,
    server::{
        error::AppError,
        model::review::{CreateReviewParams, UpdateReviewParams},
        service::review::ReviewService,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod update;

fn create_params(city_id: i32, property_id: Option<i32>) -> CreateReviewParams {
    CreateReviewParams {
        name: "Ravi".to_string(),
        profile_image: None,
        rating: 5,
        description: "Would stay again".to_string(),
        source: ReviewSource::Booking,
        is_active: true,
        city_id,
        property_id,
        property_name: None,
    }
}
