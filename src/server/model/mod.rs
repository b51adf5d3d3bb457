//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Nested lists that the store keeps
//! in JSON columns are decoded here, so the rest of the server works with typed
//! documents. Parameter types are read from multipart forms with `from_form`.

pub mod banner;
pub mod blog;
pub mod city;
pub mod document;
pub mod property;
pub mod review;
