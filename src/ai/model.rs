//! Streaming client for the managed text-generation service

use anyhow::{Context, Result};
use async_trait::async_trait;
use futures::StreamExt;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::API_CLIENT;
use crate::config;

use super::{FragmentStream, TextGenerator};

#[derive(Debug, Serialize)]
struct InvokeRequest<'a> {
    #[serde(rename = "inputText")]
    input_text: &'a str,
    #[serde(rename = "textGenerationConfig")]
    text_generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f64,
    #[serde(rename = "topP")]
    top_p: f64,
}

#[derive(Debug, Deserialize)]
struct InvokeChunk {
    #[serde(rename = "outputText")]
    output_text: String,
}

/// Client for the model invocation endpoint with a chunked response stream.
///
/// The service answers with JSON lines, one `outputText` fragment per line,
/// delivered as they are generated. Fragments are decoded incrementally and
/// yielded as soon as each arrives; nothing is buffered beyond the current
/// partial line. There is no retry and no timeout: a mid-stream failure ends
/// the stream with that error, and a stalled upstream stalls the consumer.
#[derive(Debug, Default)]
pub struct ModelServiceClient;

impl ModelServiceClient {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl TextGenerator for ModelServiceClient {
    #[instrument(skip(self, prompt))]
    async fn stream_text(&self, prompt: &str) -> Result<FragmentStream> {
        let base = config::model_api_url()?;
        let model_id = config::model_id()?;
        let url = format!("{base}/models/{model_id}/invoke-with-response-stream");

        tracing::debug!("Invoking model {model_id}");

        let request = InvokeRequest {
            input_text: prompt,
            text_generation_config: GenerationConfig {
                temperature: 0.7,
                top_p: 0.9,
            },
        };

        let response = API_CLIENT
            .post(url)
            .json(&request)
            .send()
            .await
            .context("Model service request failed")?
            .error_for_status()
            .context("Model service returned an error status")?;

        let mut chunks = response.bytes_stream();

        let stream = async_stream::stream! {
            let mut buffer: Vec<u8> = Vec::new();

            while let Some(chunk) = chunks.next().await {
                let chunk = match chunk {
                    Ok(chunk) => chunk,
                    Err(err) => {
                        // Fail fast: the response ends abruptly mid-stream.
                        yield Err(anyhow::Error::from(err).context("Model stream failed"));
                        return;
                    }
                };

                buffer.extend_from_slice(&chunk);
                while let Some(newline) = buffer.iter().position(|&byte| byte == b'\n') {
                    let line: Vec<u8> = buffer.drain(..=newline).collect();
                    if let Some(fragment) = decode_fragment(&line) {
                        yield fragment;
                    }
                }
            }

            // Trailing fragment without a final newline.
            if let Some(fragment) = decode_fragment(&buffer) {
                yield fragment;
            }
        };

        Ok(Box::pin(stream))
    }
}

fn decode_fragment(line: &[u8]) -> Option<Result<String>> {
    let line = String::from_utf8_lossy(line);
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    match serde_json::from_str::<InvokeChunk>(line) {
        Ok(chunk) => Some(Ok(chunk.output_text)),
        Err(err) => Some(Err(
            anyhow::Error::from(err).context("Malformed model stream chunk")
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_fragment() {
        let fragment = decode_fragment(br#"{"outputText": "Day 1: arrive"}"#)
            .unwrap()
            .unwrap();
        assert_eq!(fragment, "Day 1: arrive");
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        assert!(decode_fragment(b"\n").is_none());
        assert!(decode_fragment(b"   ").is_none());
    }

    #[test]
    fn test_malformed_chunk_is_an_error() {
        assert!(decode_fragment(b"not json").unwrap().is_err());
    }
}
