//! Environment configuration for the CityInfo application
//!
//! All external endpoints and identifiers are read from the process
//! environment at the point of use. A missing variable is not validated up
//! front; it surfaces as an error on the first request that needs it.

use std::env;

use anyhow::{Context, Result};

/// Base URL of the managed key-value data service holding cities and reviews.
pub fn data_store_url() -> Result<String> {
    env::var("DATA_STORE_URL").context("Missing DATA_STORE_URL env var")
}

/// Base URL of the managed language-model service.
pub fn model_api_url() -> Result<String> {
    env::var("MODEL_API_URL").context("Missing MODEL_API_URL env var")
}

/// Identifier of the text-generation model to invoke.
pub fn model_id() -> Result<String> {
    env::var("MODEL_ID").context("Missing MODEL_ID env var")
}

/// Base URL of the managed retrieve-and-generate service.
pub fn kb_api_url() -> Result<String> {
    env::var("KB_API_URL").context("Missing KB_API_URL env var")
}

/// Identifier of the review knowledge base.
pub fn knowledge_base_id() -> Result<String> {
    env::var("KNOWLEDGE_BASE_ID").context("Missing KNOWLEDGE_BASE_ID env var")
}

/// Object-storage bucket the knowledge base ingests from.
pub fn knowledge_base_bucket() -> Result<String> {
    env::var("KNOWLEDGE_BASE_BUCKET").context("Missing KNOWLEDGE_BASE_BUCKET env var")
}

/// Base URL of the object store used by the ingestion job.
pub fn object_store_url() -> Result<String> {
    env::var("OBJECT_STORE_URL").context("Missing OBJECT_STORE_URL env var")
}

/// HTTP listen port, defaulting to 8080.
pub fn server_port() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|port| port.parse().ok())
        .unwrap_or(8080)
}
