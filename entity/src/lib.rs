//! SeaORM entities for the rental CMS.
//!
//! Each aggregate root is stored as a single row. Nested lists owned by a document
//! (amenities, images, embedded reviews, must-visit items, things to do) live in JSON
//! columns on that row so a document is always written as one unit.

pub mod prelude;

pub mod banner;
pub mod blog;
pub mod city;
pub mod property;
pub mod review;
