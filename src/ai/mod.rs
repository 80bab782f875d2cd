//! Managed language-model integrations
//!
//! This module covers the two AI-assisted features:
//! - prompt formatting plus streamed text generation for itinerary
//!   suggestions (`prompt`, `model`)
//! - retrieval-and-generate Q&A over review text with citation collation
//!   (`knowledge_base`, `citations`)

use std::pin::Pin;

use anyhow::Result;
use async_trait::async_trait;
use futures::Stream;
use serde::{Deserialize, Serialize};

pub mod citations;
pub mod knowledge_base;
pub mod model;
pub mod prompt;

pub use knowledge_base::HttpReviewKnowledgeBase;
pub use model::ModelServiceClient;

/// A pull-based, non-restartable sequence of model response fragments.
///
/// Fragments arrive one at a time as the model produces them; consumers must
/// not materialize the whole sequence before forwarding it.
pub type FragmentStream = Pin<Box<dyn Stream<Item = Result<String>> + Send>>;

/// Seam over the managed text-generation service.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Invoke the model with a prompt and return its fragment stream.
    async fn stream_text(&self, prompt: &str) -> Result<FragmentStream>;
}

/// Seam over the managed retrieve-and-generate service.
#[async_trait]
pub trait ReviewKnowledgeBase: Send + Sync {
    /// Ask a question against the reviews of one city.
    ///
    /// An empty citation list means the retrieval step found no relevant
    /// source material; it is a designed outcome, not an error.
    async fn ask(&self, city_name: &str, question: &str) -> Result<Vec<Citation>>;
}

/// One unit of generated answer text paired with the source excerpts that
/// justified it. Request-scoped; discarded after the response is sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Citation {
    /// Generated response fragment
    pub text: String,
    /// Source excerpts backing the fragment, in retrieval order
    pub references: Vec<SourceReference>,
}

/// A retrieved source excerpt. Two references with the same `uri` within one
/// response collapse to a single numbered entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceReference {
    /// Storage URI of the source document, unique within a response
    pub uri: String,
    /// Star rating carried in the source metadata, not range-checked
    pub stars: i64,
    /// Excerpt text from the source document
    pub excerpt: String,
}
