//! Raw Scryfall wire types, deserialized straight off the search API.
//!
//! Parsing is deliberately tolerant: every field the grapher can live
//! without is either `Option` or defaulted, so a sparse or slightly odd
//! record never sinks a whole search page.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::common::error::Result;

/// The structural shape of a card record. Scryfall tags every card with one
/// of these; anything we do not recognize collapses into [`CardLayout::Other`]
/// and is treated as a plain single-faced card downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CardLayout {
    #[default]
    Normal,
    Split,
    Flip,
    Transform,
    ModalDfc,
    Meld,
    Leveler,
    Class,
    Saga,
    Adventure,
    Mutate,
    Prototype,
    Battle,
    #[serde(other)]
    Other,
}

impl CardLayout {
    /// Layouts whose second face is a genuine back face worth surfacing.
    pub fn is_double_faced(self) -> bool {
        matches!(
            self,
            CardLayout::Transform | CardLayout::ModalDfc | CardLayout::Battle
        )
    }
}

/// One printed side of a multi-faced card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardFace {
    #[serde(default)]
    pub name: String,
    pub mana_cost: Option<String>,
    #[serde(default)]
    pub type_line: String,
    pub oracle_text: Option<String>,
    pub colors: Option<Vec<String>>,
    pub power: Option<String>,
    pub toughness: Option<String>,
    pub defense: Option<String>,
    pub image_uris: Option<ImageUris>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageUris {
    pub small: Option<String>,
    pub normal: Option<String>,
    pub large: Option<String>,
    pub png: Option<String>,
    pub art_crop: Option<String>,
    pub border_crop: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CardPrices {
    pub usd: Option<String>,
    pub usd_foil: Option<String>,
    pub eur: Option<String>,
    pub eur_foil: Option<String>,
}

/// A raw card as returned by `/cards/search`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScryfallCard {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub layout: CardLayout,
    pub mana_cost: Option<String>,
    #[serde(default)]
    pub cmc: f64,
    #[serde(default)]
    pub type_line: String,
    pub oracle_text: Option<String>,
    pub power: Option<String>,
    pub toughness: Option<String>,
    pub defense: Option<String>,
    pub colors: Option<Vec<String>>,
    #[serde(default)]
    pub color_identity: Vec<String>,
    pub keywords: Option<Vec<String>>,
    #[serde(default)]
    pub rarity: String,
    #[serde(default)]
    pub set: String,
    #[serde(default)]
    pub set_name: String,
    #[serde(default)]
    pub collector_number: String,
    #[serde(default)]
    pub prices: CardPrices,
    pub card_faces: Option<Vec<CardFace>>,
    pub image_uris: Option<ImageUris>,
    #[serde(default)]
    pub released_at: String,
}

impl ScryfallCard {
    /// Front (primary) face of a multi-faced card, if any.
    pub fn front_face(&self) -> Option<&CardFace> {
        self.card_faces.as_ref().and_then(|faces| faces.first())
    }

    /// Second face of a multi-faced card, if any.
    pub fn back_face(&self) -> Option<&CardFace> {
        self.card_faces.as_ref().and_then(|faces| faces.get(1))
    }
}

/// One page of a paginated search response.
#[derive(Debug, Clone, Deserialize)]
pub struct ScryfallSearchResponse {
    #[serde(default)]
    pub total_cards: usize,
    #[serde(default)]
    pub has_more: bool,
    pub next_page: Option<String>,
    #[serde(default)]
    pub data: Vec<ScryfallCard>,
}

/// Contract the fetch client fulfills, so callers (and tests) can swap in
/// a fake without touching the network.
#[async_trait]
pub trait CardApi: Send + Sync {
    fn api_name(&self) -> &'static str;

    /// Fetch every card matching a Scryfall search query, following
    /// pagination to the end.
    async fn search(&self, query: &str) -> Result<Vec<ScryfallCard>>;

    /// Fetch a single card by (fuzzy) name.
    async fn card_named(&self, name: &str) -> Result<ScryfallCard>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn layout_round_trips_snake_case() {
        let layout: CardLayout = serde_json::from_value(json!("modal_dfc")).unwrap();
        assert_eq!(layout, CardLayout::ModalDfc);
        assert_eq!(serde_json::to_value(layout).unwrap(), json!("modal_dfc"));
    }

    #[test]
    fn unknown_layout_falls_back_to_other() {
        let layout: CardLayout = serde_json::from_value(json!("art_series")).unwrap();
        assert_eq!(layout, CardLayout::Other);
        assert!(!layout.is_double_faced());
    }

    #[test]
    fn sparse_card_deserializes() {
        let card: ScryfallCard = serde_json::from_value(json!({
            "id": "abc",
            "name": "Mystery Card"
        }))
        .unwrap();
        assert_eq!(card.layout, CardLayout::Normal);
        assert_eq!(card.cmc, 0.0);
        assert!(card.prices.usd.is_none());
        assert!(card.front_face().is_none());
    }
}
