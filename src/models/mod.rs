// src/models/mod.rs

//! Domain models for the application.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod animal;
mod config;
mod query;

// Re-export all public types
pub use animal::{AnimalDetail, AnimalSummary, Photo, Species};
pub use config::{CatalogConfig, Config, RecoveryConfig, ServerConfig};
pub use query::SearchQuery;
