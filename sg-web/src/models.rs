use serde::{Deserialize, Serialize};

use sg_core::domain::graph::GraphConfig;
use sg_core::domain::NormalizedCard;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub query: String,
    pub total: usize,
    pub cards: Vec<NormalizedCard>,
}

/// Chart request: a query plus either a preset id or an inline config.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartRequest {
    pub query: String,
    #[serde(default)]
    pub preset: Option<String>,
    #[serde(default)]
    pub config: Option<GraphConfig>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
