use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use cityinfo::ai::{HttpReviewKnowledgeBase, ModelServiceClient};
use cityinfo::api::AppState;
use cityinfo::store::HttpCityStore;
use cityinfo::{config, web};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let state = AppState {
        store: Arc::new(HttpCityStore::new()),
        generator: Arc::new(ModelServiceClient::new()),
        knowledge_base: Arc::new(HttpReviewKnowledgeBase::new()),
    };

    web::run(state, config::server_port()).await
}
