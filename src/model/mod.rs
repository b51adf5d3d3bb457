//! API data transfer objects.
//!
//! These types define the JSON shapes exchanged with clients. Server-side domain models
//! convert into them at the controller boundary via `into_dto`.

pub mod api;
pub mod banner;
pub mod blog;
pub mod city;
pub mod property;
pub mod review;
