use crate::server::{
    error::AppError,
    model::blog::{MustVisitInput, UpdateBlogParams},
    service::blog::BlogService,
};
use serde_json::json;
use std::collections::HashMap;
use test_utils::{
    builder::TestBuilder,
    factory::{self, blog::must_visit_json},
};

mod update;

fn blog_tables() -> TestBuilder {
    TestBuilder::new()
        .with_table(entity::prelude::City)
        .with_table(entity::prelude::Blog)
}

fn existing(id: &str, heading: &str) -> MustVisitInput {
    MustVisitInput {
        id: Some(id.to_string()),
        key: None,
        heading: heading.to_string(),
        description: String::new(),
    }
}

fn new_item(heading: &str) -> MustVisitInput {
    MustVisitInput {
        id: None,
        key: None,
        heading: heading.to_string(),
        description: String::new(),
    }
}
