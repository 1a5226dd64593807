//! Common types and utilities for the cluster metadata service.

pub mod cluster;
pub mod config;
pub mod database;
pub mod error;
pub mod validation;

// Re-export crates so that the server and the client share the same versions.
pub use anyhow;
pub use serde;
pub use serde_json;
pub use surrealdb;
pub use tokio;
pub use tracing;
pub use tracing_subscriber;
