//! Streaming response relay for itinerary suggestions
//!
//! Forwards model-generated text fragments to the HTTP client as they arrive,
//! prefixed by the originating prompt and a separator line. Each fragment is
//! handed to the transport as its own chunk; the whole response is never
//! buffered. A mid-stream upstream error ends the body abruptly.

use axum::body::{Body, Bytes};
use futures::StreamExt;

use crate::ai::FragmentStream;

/// Separator emitted between the echoed prompt and the model output.
pub const SEPARATOR: &str = "----------<br>";

/// Build the chunked `text/plain` body for a suggestion response.
pub fn relay_body(prompt: &str, mut fragments: FragmentStream) -> Body {
    let preamble = format!("PROMPT&gt; {prompt}<br>");

    let stream = async_stream::stream! {
        yield Ok::<Bytes, anyhow::Error>(Bytes::from(preamble));
        yield Ok(Bytes::from_static(SEPARATOR.as_bytes()));

        // Suspends between fragments; pacing is controlled by the upstream
        // model service, not by this relay.
        while let Some(fragment) = fragments.next().await {
            yield fragment.map(Bytes::from);
        }
    };

    Body::from_stream(stream)
}
