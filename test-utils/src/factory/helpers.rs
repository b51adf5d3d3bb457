//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating documents
//! with the rows they reference.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Placeholder image stored by factories: a data URL of a 3 byte PNG payload.
pub const TEST_IMAGE: &str = "data:image/png;base64,iVBO";

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a city and a property in it, both with default values.
///
/// # Returns
/// - `Ok((city, property))` - Created rows
/// - `Err(DbErr)` - Database error during creation
pub async fn create_property_with_city(
    db: &DatabaseConnection,
) -> Result<(entity::city::Model, entity::property::Model), DbErr> {
    let city = crate::factory::city::create_city(db).await?;
    let property = crate::factory::property::create_property(db, &city).await?;

    Ok((city, property))
}
