//! HTTP request handlers.
//!
//! Controllers decode requests into operation parameters, call the matching service
//! and convert the returned domain models into DTOs. Multipart bodies are buffered
//! with `FormData` before any field is interpreted.

pub mod banner;
pub mod blog;
pub mod city;
pub mod health;
pub mod property;
pub mod review;
