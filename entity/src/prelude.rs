pub use super::banner::Entity as Banner;
pub use super::blog::Entity as Blog;
pub use super::city::Entity as City;
pub use super::property::Entity as Property;
pub use super::review::Entity as Review;
