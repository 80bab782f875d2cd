//! Client for the managed retrieve-and-generate service
//!
//! The service retrieves review excerpts relevant to a question, asks the
//! model to compose an answer grounded in them, and returns both the answer
//! fragments and the excerpts used (citations).

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;

use crate::API_CLIENT;
use crate::config;

use super::{Citation, ReviewKnowledgeBase, SourceReference};

/// Prompt template handed to the retrieve-and-generate service. The
/// `$query$`, `$search_results$` and `$output_format_instructions$`
/// placeholders are filled in by the service itself.
const TEXT_PROMPT_TEMPLATE: &str = "\
A chat between a curious User and an artificial intelligence Bot. The Bot
gives helpful, detailed, and polite answers to the User's questions.

In this session, the model has access to search results and a user's question,
your job is to answer the user's question using only information from the
search results.

Model Instructions:
- You should provide concise answer to simple questions when the answer is
directly contained in search results, but when comes to yes/no question,
provide some details.
- In case the question requires multi-hop reasoning, you should find relevant
information from search results and summarize the answer based on relevant
information with logical reasoning.
- If the search results do not contain information that can answer the
question, please state that you could not find an exact answer to the question,
and if search results are completely irrelevant, say that you could not find an
exact answer, then summarize search results.
- $output_format_instructions$
- DO NOT USE INFORMATION THAT IS NOT IN SEARCH RESULTS!

User: $query$ Bot:
Resource: Search Results: $search_results$ Bot:
";

// Wire shape of the retrieve-and-generate citation payload.

#[derive(Debug, Deserialize)]
struct RetrieveAndGenerateResponse {
    citations: Vec<WireCitation>,
}

#[derive(Debug, Deserialize)]
struct WireCitation {
    #[serde(rename = "generatedResponsePart")]
    generated_response_part: GeneratedResponsePart,
    #[serde(rename = "retrievedReferences", default)]
    retrieved_references: Vec<WireReference>,
}

#[derive(Debug, Deserialize)]
struct GeneratedResponsePart {
    #[serde(rename = "textResponsePart")]
    text_response_part: TextResponsePart,
}

#[derive(Debug, Deserialize)]
struct TextResponsePart {
    text: String,
}

#[derive(Debug, Deserialize)]
struct WireReference {
    location: WireLocation,
    metadata: WireMetadata,
    content: WireContent,
}

#[derive(Debug, Deserialize)]
struct WireLocation {
    #[serde(rename = "s3Location")]
    s3_location: WireS3Location,
}

#[derive(Debug, Deserialize)]
struct WireS3Location {
    uri: String,
}

#[derive(Debug, Deserialize)]
struct WireMetadata {
    #[serde(rename = "Stars")]
    stars: i64,
}

#[derive(Debug, Deserialize)]
struct WireContent {
    text: String,
}

impl From<WireCitation> for Citation {
    fn from(wire: WireCitation) -> Self {
        Citation {
            text: wire.generated_response_part.text_response_part.text,
            references: wire
                .retrieved_references
                .into_iter()
                .map(|reference| SourceReference {
                    uri: reference.location.s3_location.uri,
                    stars: reference.metadata.stars,
                    excerpt: reference.content.text,
                })
                .collect(),
        }
    }
}

/// HTTP client for the knowledge-base Q&A endpoint.
///
/// The knowledge base identifier is read from the environment on each call;
/// a missing `KNOWLEDGE_BASE_ID` surfaces at first use.
#[derive(Debug, Default)]
pub struct HttpReviewKnowledgeBase;

impl HttpReviewKnowledgeBase {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ReviewKnowledgeBase for HttpReviewKnowledgeBase {
    #[instrument(skip(self))]
    async fn ask(&self, city_name: &str, question: &str) -> Result<Vec<Citation>> {
        let base = config::kb_api_url()?;
        let knowledge_base_id = config::knowledge_base_id()?;
        let model_id = config::model_id()?;
        let url = format!("{base}/knowledgebases/{knowledge_base_id}/retrieve-and-generate");

        tracing::debug!("Querying knowledge base {knowledge_base_id} for '{city_name}'");

        let request = json!({
            "input": { "text": question },
            "retrieveAndGenerateConfiguration": {
                "type": "KNOWLEDGE_BASE",
                "knowledgeBaseConfiguration": {
                    "modelArn": model_id,
                    "knowledgeBaseId": knowledge_base_id,
                    "retrievalConfiguration": {
                        "vectorSearchConfiguration": {
                            "filter": { "equals": { "key": "City", "value": city_name } }
                        }
                    },
                    "generationConfiguration": {
                        "promptTemplate": { "textPromptTemplate": TEXT_PROMPT_TEMPLATE }
                    }
                }
            }
        });

        let response: RetrieveAndGenerateResponse = API_CLIENT
            .post(url)
            .json(&request)
            .send()
            .await
            .context("Knowledge base request failed")?
            .error_for_status()
            .context("Knowledge base returned an error status")?
            .json()
            .await
            .context("Failed to parse knowledge base response")?;

        Ok(response.citations.into_iter().map(Citation::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_citation_maps_to_domain() {
        let payload = serde_json::json!({
            "citations": [{
                "generatedResponsePart": {
                    "textResponsePart": { "text": "Answer text" }
                },
                "retrievedReferences": [{
                    "location": { "s3Location": { "uri": "s3://kb/Test-city-1_r1.txt" } },
                    "metadata": { "Stars": 4 },
                    "content": { "text": "Review text" }
                }]
            }]
        });

        let response: RetrieveAndGenerateResponse = serde_json::from_value(payload).unwrap();
        let citations: Vec<Citation> = response.citations.into_iter().map(Citation::from).collect();

        assert_eq!(citations.len(), 1);
        assert_eq!(citations[0].text, "Answer text");
        assert_eq!(citations[0].references[0].uri, "s3://kb/Test-city-1_r1.txt");
        assert_eq!(citations[0].references[0].stars, 4);
        assert_eq!(citations[0].references[0].excerpt, "Review text");
    }

    #[test]
    fn test_citation_without_references_deserializes() {
        let payload = serde_json::json!({
            "citations": [{
                "generatedResponsePart": {
                    "textResponsePart": { "text": "Unbacked" }
                }
            }]
        });

        let response: RetrieveAndGenerateResponse = serde_json::from_value(payload).unwrap();
        let citation = Citation::from(response.citations.into_iter().next().unwrap());
        assert!(citation.references.is_empty());
    }
}
