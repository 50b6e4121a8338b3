use std::sync::Arc;

use crate::extract::TextExtractor;
use crate::llm_client::LlmClient;
use crate::store::StoreClient;

/// Shared application state injected into all route handlers via Axum extractors.
/// Collaborator handles are constructed once at startup and reused read-only;
/// no request ever mutates them.
#[derive(Clone)]
pub struct AppState {
    pub store: StoreClient,
    pub llm: LlmClient,
    /// Page-text extraction collaborator. PDF-backed in production.
    pub extractor: Arc<dyn TextExtractor>,
}
