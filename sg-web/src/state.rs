use std::sync::Arc;
use tokio::sync::RwLock;

use sg_core::domain::NormalizedCard;
use sg_grapher::apis::ScryfallClient;
use sg_grapher::config::GrapherConfig;

/// The current search result set. Replaced wholesale on every new query,
/// never patched incrementally.
pub struct SearchResults {
    pub query: String,
    pub cards: Vec<NormalizedCard>,
}

#[derive(Clone)]
pub struct AppState {
    pub client: Arc<ScryfallClient>,
    pub results: Arc<RwLock<Option<SearchResults>>>,
}

impl AppState {
    pub fn new(config: &GrapherConfig) -> Self {
        Self {
            client: Arc::new(ScryfallClient::new(config)),
            results: Arc::new(RwLock::new(None)),
        }
    }
}
