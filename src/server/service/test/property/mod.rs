use crate::{
    model::review::ReviewSource,
    server::{
        error::AppError,
        model::property::{
            CreatePropertyParams, PropertyReviewParams, PropertyReviewPatch, UpdatePropertyParams,
        },
        service::property::PropertyService,
    },
};
use serde_json::json;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod reviews;
mod update;

fn review_params(rating: u8) -> PropertyReviewParams {
    PropertyReviewParams {
        name: "Asha".to_string(),
        profile_image: None,
        rating,
        description: "Clean and quiet".to_string(),
        source: ReviewSource::Google,
        is_active: true,
    }
}
