//! Conversion between nested document lists and their JSON columns.

use sea_orm::DbErr;
use serde::{de::DeserializeOwned, Serialize};

/// Decodes a JSON column into its typed value.
pub fn decode_column<T>(value: serde_json::Value, column: &str) -> Result<T, DbErr>
where
    T: DeserializeOwned,
{
    serde_json::from_value(value)
        .map_err(|e| DbErr::Json(format!("Failed to decode {} column: {}", column, e)))
}

/// Encodes a typed value for a JSON column.
pub fn encode_column<T: ?Sized>(value: &T, column: &str) -> Result<serde_json::Value, DbErr>
where
    T: Serialize,
{
    serde_json::to_value(value)
        .map_err(|e| DbErr::Json(format!("Failed to encode {} column: {}", column, e)))
}
