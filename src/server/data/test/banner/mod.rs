use crate::{model::banner::BannerType, server::data::banner::BannerRepository};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory::banner::BannerFactory};

mod get_active_by_type;
mod get_all;
