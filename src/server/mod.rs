//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework and SeaORM on SQLite for storage. Each
//! content aggregate (property, blog, city) is stored as one row with its nested lists
//! held in JSON columns, so a whole-row update is the single commit point of every
//! mutation.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, multipart decoding and DTO conversion
//! - **Service Layer** (`service/`) - Cross-aggregate rules such as name snapshots and reference checks
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models, merge logic and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Utilities** (`util/`) - Multipart buffering and image ingestion into data URLs
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database pool)
//! - **Startup** (`startup`) - Tracing, database connection, migrations and shutdown signal
//! - **Router** (`router`) - Route table, body limits, CORS and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives the request and enforces the body limit of its resource group
//! 2. **Controller** buffers the multipart form and builds operation params from it
//! 3. **Service** loads the aggregate, applies the change in memory and validates it
//! 4. **Data** writes the whole row back and converts the result into a domain model
//! 5. **Controller** converts the domain model to a DTO and returns the HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
