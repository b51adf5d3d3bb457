//! Request decoding helpers shared by the controllers.

pub mod image;
pub mod multipart;
