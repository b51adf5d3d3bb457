use crate::{
    model::banner::BannerType,
    server::{error::AppError, model::banner::UpdateBannerParams, service::banner::BannerService},
};
use test_utils::{builder::TestBuilder, factory::banner::BannerFactory};
