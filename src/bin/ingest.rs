//! One-shot batch job copying review rows into the knowledge-base bucket.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use cityinfo::storage::HttpObjectStore;
use cityinfo::store::HttpCityStore;
use cityinfo::{config, ingest};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let store = HttpCityStore::new();
    let objects = HttpObjectStore::new();
    let bucket = config::knowledge_base_bucket()?;

    let ingested = ingest::run(&store, &objects, &bucket).await?;
    tracing::info!("Ingested {ingested} reviews");
    Ok(())
}
