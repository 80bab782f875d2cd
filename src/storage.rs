//! Object storage used by the knowledge-base ingestion job

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::instrument;

use crate::API_CLIENT;
use crate::config;

/// Seam over the managed object store. Writes overwrite by key, which makes
/// the ingestion job idempotent on rerun.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn put_object(&self, bucket: &str, key: &str, body: Vec<u8>) -> Result<()>;
}

/// HTTP client against the object store's PUT interface.
#[derive(Debug, Default)]
pub struct HttpObjectStore;

impl HttpObjectStore {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ObjectStore for HttpObjectStore {
    #[instrument(skip(self, body), fields(bytes = body.len()))]
    async fn put_object(&self, bucket: &str, key: &str, body: Vec<u8>) -> Result<()> {
        let base = config::object_store_url()?;
        let url = format!("{base}/{bucket}/{}", urlencoding::encode(key));

        API_CLIENT
            .put(url)
            .body(body)
            .send()
            .await
            .with_context(|| format!("Failed to put object '{key}'"))?
            .error_for_status()
            .with_context(|| format!("Object store rejected '{key}'"))?;

        Ok(())
    }
}

/// In-memory object store for tests.
#[derive(Debug, Default)]
pub struct MemoryObjectStore {
    objects: std::sync::Mutex<std::collections::HashMap<String, Vec<u8>>>,
}

impl MemoryObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, bucket: &str, key: &str) -> Option<Vec<u8>> {
        self.objects
            .lock()
            .expect("object map lock poisoned")
            .get(&format!("{bucket}/{key}"))
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.objects.lock().expect("object map lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ObjectStore for MemoryObjectStore {
    async fn put_object(&self, bucket: &str, key: &str, body: Vec<u8>) -> Result<()> {
        self.objects
            .lock()
            .expect("object map lock poisoned")
            .insert(format!("{bucket}/{key}"), body);
        Ok(())
    }
}
