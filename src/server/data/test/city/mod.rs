use crate::server::{
    data::city::CityRepository,
    model::city::{CreateCityParams, ThingToDo},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_all;
