//! Read-only access to the managed city/review data store
//!
//! Two read paths exist: a full scan of all cities and an exact-key lookup by
//! city name. A lookup miss is `Ok(None)`, never an error; callers translate
//! it into a not-found response. Records are fetched fresh on every request.

use anyhow::Result;
use async_trait::async_trait;

use crate::models::{City, Review};

pub mod http;
pub mod memory;

pub use http::HttpCityStore;
pub use memory::MemoryCityStore;

/// Provider seam over the managed key-value data store.
#[async_trait]
pub trait CityStore: Send + Sync {
    /// Load all cities in one call, unordered, no pagination.
    async fn list_cities(&self) -> Result<Vec<City>>;

    /// Fetch one city by exact name match. A miss returns `Ok(None)`.
    async fn get_city(&self, name: &str) -> Result<Option<City>>;

    /// Load the reviews belonging to one city.
    async fn list_reviews(&self, city_name: &str) -> Result<Vec<Review>>;

    /// Scan every review row across all cities (used by the ingestion job).
    async fn list_all_reviews(&self) -> Result<Vec<Review>>;
}
