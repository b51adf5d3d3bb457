//! Factory methods for creating test data.
//!
//! Each document type has its own factory module with a `Factory` builder for
//! customization and a `create_*` convenience function for quick default creation.
//! Factories insert entity rows directly, so embedded lists are given as the raw JSON
//! the server stores.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let city = factory::create_city(&db).await?;
//! let property = factory::create_property(&db, &city).await?;
//!
//! let city = factory::city::CityFactory::new(&db)
//!     .name("Goa")
//!     .active(false)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `city` - Create cities
//! - `property` - Create property documents with embedded reviews and images
//! - `review` - Create standalone reviews
//! - `blog` - Create blogs with must-visit items
//! - `banner` - Create banners
//! - `helpers` - Unique ids and multi-row convenience methods

pub mod banner;
pub mod blog;
pub mod city;
pub mod helpers;
pub mod property;
pub mod review;

pub use banner::create_banner;
pub use blog::create_blog;
pub use city::create_city;
pub use property::create_property;
pub use review::create_review;
