//! End-to-end harness: a fake CardApi stands in for the network, and the
//! records flow through normalize and transform the way the CLI and the
//! web boundary drive them.

mod common;

use async_trait::async_trait;
use serde_json::json;

use common::{config, raw_card};
use sg_core::common::error::{GrapherError, Result};
use sg_core::common::types::{CardApi, ScryfallCard};
use sg_core::domain::graph::{GraphField, GraphMetric};
use sg_grapher::pipeline::{normalize_cards, transform};

struct FakeCardApi {
    cards: Vec<ScryfallCard>,
}

#[async_trait]
impl CardApi for FakeCardApi {
    fn api_name(&self) -> &'static str {
        "fake"
    }

    async fn search(&self, _query: &str) -> Result<Vec<ScryfallCard>> {
        Ok(self.cards.clone())
    }

    async fn card_named(&self, name: &str) -> Result<ScryfallCard> {
        self.cards
            .iter()
            .find(|card| card.name == name)
            .cloned()
            .ok_or_else(|| GrapherError::Api {
                message: format!("no card named {}", name),
            })
    }
}

fn fixture_cards() -> Vec<ScryfallCard> {
    vec![
        raw_card(json!({
            "id": "aaa",
            "name": "Cheap Creature",
            "layout": "normal",
            "cmc": 1.0,
            "type_line": "Creature — Goblin",
            "power": "1",
            "toughness": "1",
            "colors": ["R"],
            "rarity": "common",
            "set": "tst",
            "prices": { "usd": "0.10" },
            "released_at": "2020-01-01"
        })),
        raw_card(json!({
            "id": "bbb",
            "name": "Pricey Split",
            "layout": "split",
            "cmc": 3.0,
            "type_line": "Instant // Sorcery",
            "rarity": "rare",
            "set": "tst",
            "card_faces": [
                { "name": "Left", "type_line": "Instant", "oracle_text": "Draw a card.", "colors": ["U"] },
                { "name": "Right", "type_line": "Sorcery", "oracle_text": "Deal 1 damage.", "colors": ["R"] }
            ],
            "prices": { "usd": "7.50" },
            "released_at": "2021-05-05"
        })),
        raw_card(json!({
            "id": "ccc",
            "name": "Priceless Wonder",
            "layout": "normal",
            "cmc": 5.0,
            "type_line": "Enchantment",
            "rarity": "mythic",
            "set": "tst",
            "prices": {},
            "released_at": "2022-09-09"
        })),
    ]
}

#[tokio::test]
async fn search_normalize_transform_end_to_end() {
    let api = FakeCardApi {
        cards: fixture_cards(),
    };

    let raw = api.search("set:tst").await.unwrap();
    let cards = normalize_cards(&raw);
    assert_eq!(cards.len(), 3);

    // Split card got the union of its faces' colors
    assert_eq!(cards[1].colors, vec!["U", "R"]);
    assert_eq!(
        cards[1].oracle_text.as_deref(),
        Some("Draw a card.\n//\nDeal 1 damage.")
    );

    let chart = transform(&cards, &config(GraphField::Cmc, GraphMetric::Count));
    let keys: Vec<&str> = chart.data.iter().map(|p| p.key.as_str()).collect();
    assert_eq!(keys, vec!["1", "3", "5"]);

    // Drill-down ids cover exactly the input records
    let ids: Vec<&str> = chart
        .data
        .iter()
        .flat_map(|p| p.cards.iter().map(String::as_str))
        .collect();
    assert_eq!(ids, vec!["aaa", "bbb", "ccc"]);
}

#[tokio::test]
async fn repeated_invocations_on_growing_prefixes_are_independent() {
    let all = fixture_cards();

    // Simulate progressive rendering over a paginated fetch: each prefix
    // is normalized and charted from scratch
    for len in 1..=all.len() {
        let cards = normalize_cards(&all[..len]);
        let chart = transform(&cards, &config(GraphField::Rarity, GraphMetric::Count));
        let total: usize = chart.data.iter().map(|p| p.count).sum();
        assert_eq!(total, len);
    }
}

#[tokio::test]
async fn card_named_resolves_or_reports() {
    let api = FakeCardApi {
        cards: fixture_cards(),
    };

    let card = api.card_named("Cheap Creature").await.unwrap();
    assert_eq!(card.id, "aaa");

    let err = api.card_named("Missing").await.unwrap_err();
    assert!(err.to_string().contains("Missing"));
}
