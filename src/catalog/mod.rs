//! Remote catalog access.
//!
//! The catalog is an opaque remote service; this module defines the
//! client seam (`CatalogClient`) and its HTTP implementation.

mod http;

use async_trait::async_trait;

pub use http::HttpCatalogClient;

use crate::error::Result;
use crate::models::{AnimalDetail, AnimalSummary, SearchQuery, Species};

/// Client for the remote pet-listing service.
///
/// Calls fail by returning an error; no retry or backoff is attempted
/// here, callers surface the failure.
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Breed names valid for one species, in catalog order.
    async fn list_breeds(&self, species: Species) -> Result<Vec<String>>;

    /// Animals matching the query, in catalog order.
    async fn list_animals(&self, query: &SearchQuery) -> Result<Vec<AnimalSummary>>;

    /// Full record for a single animal.
    async fn get_animal(&self, id: u64) -> Result<AnimalDetail>;
}
