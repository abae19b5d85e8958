use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::info;

use sg_core::common::error::GrapherError;
use sg_core::common::types::CardApi;
use sg_core::domain::graph::{ChartData, GraphConfig, GraphPreset};
use sg_core::domain::NormalizedCard;

use sg_grapher::pipeline::presets::{get_preset, GRAPH_PRESETS};
use sg_grapher::pipeline::{normalize_cards, transform};

use crate::models::{ChartRequest, ErrorResponse, SearchParams, SearchResponse};
use crate::state::{AppState, SearchResults};

/// Error envelope for every handler. The pipeline itself never fails;
/// everything here is either a boundary fetch failure or a bad request.
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl From<GrapherError> for ApiError {
    fn from(err: GrapherError) -> Self {
        Self {
            status: StatusCode::BAD_GATEWAY,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            error: self.message,
        });
        (self.status, body).into_response()
    }
}

pub async fn list_presets() -> Json<&'static Vec<GraphPreset>> {
    Json(&*GRAPH_PRESETS)
}

pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, ApiError> {
    let cards = cards_for_query(&state, &params.q).await?;
    Ok(Json(SearchResponse {
        total: cards.len(),
        query: params.q,
        cards,
    }))
}

pub async fn chart(
    State(state): State<AppState>,
    Json(request): Json<ChartRequest>,
) -> Result<Json<ChartData>, ApiError> {
    let config = resolve_config(&request)?;
    let cards = cards_for_query(&state, &request.query).await?;
    Ok(Json(transform(&cards, &config)))
}

pub async fn healthz() -> &'static str {
    "ok"
}

pub async fn metrics_endpoint() -> String {
    sg_grapher::observability::metrics::render().unwrap_or_default()
}

fn resolve_config(request: &ChartRequest) -> Result<GraphConfig, ApiError> {
    match (&request.preset, &request.config) {
        (Some(id), _) => get_preset(id)
            .map(|preset| preset.config.clone())
            .ok_or_else(|| ApiError::bad_request(format!("unknown preset '{}'", id))),
        (None, Some(config)) => Ok(config.clone()),
        (None, None) => Err(ApiError::bad_request(
            "request must carry either 'preset' or 'config'",
        )),
    }
}

/// Serve the cached result set when the query matches; otherwise fetch,
/// normalize, and replace it.
async fn cards_for_query(state: &AppState, query: &str) -> Result<Vec<NormalizedCard>, ApiError> {
    {
        let results = state.results.read().await;
        if let Some(current) = results.as_ref() {
            if current.query == query {
                return Ok(current.cards.clone());
            }
        }
    }

    let raw = state.client.search(query).await?;
    let cards = normalize_cards(&raw);
    info!(query, cards = cards.len(), "result set replaced");

    let mut results = state.results.write().await;
    *results = Some(SearchResults {
        query: query.to_string(),
        cards: cards.clone(),
    });
    Ok(cards)
}
