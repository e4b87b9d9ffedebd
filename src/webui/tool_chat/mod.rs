pub mod dto;
pub mod handlers;

use anyhow::Result;
use axum::{routing::post, Router};
use std::path::PathBuf;
use std::sync::Arc;

use crate::assistant::OpenAiClient;
use crate::catalog::{load_catalog, resolve_metadata_paths, Catalog};
use crate::config::AppConfig;
use crate::matching::ContextBuilder;

/// Shared, read-only state of the tool-chat endpoint.
#[derive(Clone)]
pub struct ChatState {
    pub config: Arc<AppConfig>,
    pub builder: Arc<ContextBuilder>,
    /// `None` when no API key is configured.
    pub llm: Option<OpenAiClient>,
    /// Roots whose ancestors are searched for metadata files.
    pub search_roots: Arc<Vec<PathBuf>>,
}

impl ChatState {
    pub fn new(config: AppConfig, search_roots: Vec<PathBuf>) -> Result<Self> {
        let llm = match config.openai_api_key.as_deref() {
            Some(key) => Some(OpenAiClient::new(key, config.openai_base_url.as_str())?),
            None => None,
        };
        Ok(Self {
            config: Arc::new(config),
            builder: Arc::new(ContextBuilder::default()),
            llm,
            search_roots: Arc::new(search_roots),
        })
    }

    /// Fresh catalog snapshot for one request.
    pub fn load_catalog(&self) -> Result<Catalog> {
        let paths = resolve_metadata_paths(self.config.metadata_dir.as_deref(), &self.search_roots)?;
        load_catalog(&paths)
    }
}

pub fn routes(state: ChatState) -> Router {
    Router::new()
        .route("/api/tool-chat", post(handlers::tool_chat))
        .with_state(state)
}
