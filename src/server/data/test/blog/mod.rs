use crate::server::{
    data::blog::BlogRepository,
    model::blog::{CreateBlogParams, MustVisitThing},
};
use sea_orm::DbErr;
use serde_json::json;
use test_utils::{
    builder::TestBuilder,
    factory::{self, blog::must_visit_json},
};

mod create;
mod update;

fn blog_tables() -> TestBuilder {
    TestBuilder::new()
        .with_table(entity::prelude::City)
        .with_table(entity::prelude::Blog)
}
