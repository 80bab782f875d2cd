//! One-shot ingestion of review rows into the knowledge-base bucket
//!
//! Copies every review into object storage as a text file plus a sidecar
//! metadata JSON for indexing. Reruns overwrite the same keys, so the job is
//! idempotent by construction. There is no transactional coupling between the
//! two writes: a crash after the content write leaves an orphaned object
//! without metadata. That ordering is preserved on purpose for parity with
//! the knowledge base's existing data layout; see DESIGN.md before changing
//! it.

use anyhow::Result;
use serde_json::json;

use crate::storage::ObjectStore;
use crate::store::CityStore;

/// Copy every review into the bucket. Runs single-threaded; the first failed
/// write aborts the whole batch with no retry or partial-failure recovery.
/// Returns the number of reviews ingested.
pub async fn run(store: &dyn CityStore, objects: &dyn ObjectStore, bucket: &str) -> Result<usize> {
    let reviews = store.list_all_reviews().await?;
    tracing::info!("Ingesting {} reviews into bucket '{bucket}'", reviews.len());

    let mut ingested = 0;
    for review in reviews {
        let file_name = format!("{}_{}.txt", review.city_name, review.review_id);
        let metadata_file_name = format!("{file_name}.metadata.json");

        let metadata = json!({
            "metadataAttributes": {
                "City": review.city_name,
                "Stars": review.stars,
            }
        });

        tracing::info!("Saving {file_name} and metadata");
        objects
            .put_object(bucket, &file_name, review.content.into_bytes())
            .await?;
        objects
            .put_object(bucket, &metadata_file_name, serde_json::to_vec(&metadata)?)
            .await?;

        ingested += 1;
    }

    Ok(ingested)
}
