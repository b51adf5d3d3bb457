use crate::server::{
    error::AppError,
    model::city::{CreateCityParams, UpdateCityParams},
    service::city::CityService,
};
use test_utils::{builder::TestBuilder, factory};

mod set_status;

fn city_tables() -> TestBuilder {
    TestBuilder::new().with_table(entity::prelude::City)
}
