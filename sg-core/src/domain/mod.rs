//! Canonical, layout-independent card records.
//!
//! [`NormalizedCard`] is the only shape downstream code (transformer, CLI,
//! web boundary) ever sees; the normalizer owns the mapping from the raw
//! wire records. Serialized names are camelCase for the browser frontend.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::common::types::CardLayout;

pub mod graph;

/// Back side of a transform / modal DFC / battle card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackFace {
    pub name: String,
    pub image_url: Option<String>,
    pub oracle_text: Option<String>,
    pub type_line: String,
    pub mana_cost: Option<String>,
    pub colors: Option<Vec<String>>,
    pub power: Option<f64>,
    pub toughness: Option<f64>,
    pub defense: Option<f64>,
}

/// A card record normalized across all layouts.
///
/// Numeric fields that failed to parse on the wire (`*`, `X`, malformed
/// prices) are `None`, never zero; `types`/`supertypes`/`subtypes` come
/// from the front face's type line only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedCard {
    pub id: String,
    pub name: String,
    pub layout: CardLayout,
    pub cmc: f64,
    pub colors: Vec<String>,
    pub color_identity: Vec<String>,
    pub types: Vec<String>,
    pub supertypes: Vec<String>,
    pub subtypes: Vec<String>,
    pub rarity: String,
    pub set: String,
    pub set_name: String,
    pub collector_number: String,
    pub oracle_text: Option<String>,
    pub power: Option<f64>,
    pub toughness: Option<f64>,
    pub defense: Option<f64>,
    pub price_usd: Option<f64>,
    pub price_eur: Option<f64>,
    pub released_at: Option<NaiveDate>,
    pub image_url: Option<String>,
    pub back_face: Option<BackFace>,
}
