use crate::{
    model::review::ReviewSource,
    server::{
        data::review::ReviewRepository,
        model::review::{CreateReviewParams, ReviewSnapshot},
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod detach_property;
mod get_all;
