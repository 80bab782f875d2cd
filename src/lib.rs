//! `CityInfo` - city travel guide with AI itinerary suggestions and review Q&A
//!
//! This library provides the web application core: data access against the
//! managed city store, prompt formatting and response streaming for the model
//! service, citation collation for the review knowledge base, and the review
//! ingestion job feeding the knowledge base's object store.

use std::sync::LazyLock;

pub mod ai;
pub mod api;
pub mod config;
pub mod demo;
pub mod error;
pub mod ingest;
pub mod models;
pub mod pages;
pub mod storage;
pub mod store;
pub mod web;

// Re-export core types for public API
pub use ai::citations::{CollatedAnswer, collate};
pub use ai::prompt::itinerary_prompt;
pub use error::AppError;
pub use models::{City, Review, TripParameters};

/// Shared HTTP client for all outbound calls to managed services.
pub static API_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(reqwest::Client::new);

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
