//! Business logic layer between controllers and repositories.
//!
//! Services load documents through the repositories, apply parameter types to the
//! domain models, resolve cross-document references such as city name snapshots,
//! and write the result back. They return `AppError` so controllers can forward
//! failures with `?`.

pub mod banner;
pub mod blog;
pub mod city;
pub mod property;
pub mod review;

#[cfg(test)]
mod test;
