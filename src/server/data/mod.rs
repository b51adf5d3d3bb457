//! Database repository layer for all domain documents.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! document type. Repositories use SeaORM entity models internally and return domain models,
//! decoding the JSON columns that hold nested lists. An update writes the whole row, so
//! every document mutation commits in a single statement.

pub mod banner;
pub mod blog;
pub mod city;
pub mod property;
pub mod review;

#[cfg(test)]
mod test;
