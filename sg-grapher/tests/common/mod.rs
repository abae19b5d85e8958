//! Shared fixture builders for the integration harnesses.

#![allow(dead_code)]

use chrono::NaiveDate;
use serde_json::Value;

use sg_core::common::types::{CardLayout, ScryfallCard};
use sg_core::domain::graph::{
    ChartType, FilterField, FilterOp, FilterValue, GraphAxis, GraphConfig, GraphField,
    GraphFilter, GraphMetric, GraphMetricAxis,
};
use sg_core::domain::NormalizedCard;

/// Deserialize a raw wire card from an inline JSON fixture.
pub fn raw_card(json: Value) -> ScryfallCard {
    serde_json::from_value(json).expect("fixture must deserialize")
}

/// A minimal canonical card; tests override the fields they care about.
pub fn card(id: &str) -> NormalizedCard {
    NormalizedCard {
        id: id.to_string(),
        name: format!("Card {}", id),
        layout: CardLayout::Normal,
        cmc: 0.0,
        colors: vec![],
        color_identity: vec![],
        types: vec![],
        supertypes: vec![],
        subtypes: vec![],
        rarity: "common".to_string(),
        set: "tst".to_string(),
        set_name: "Test Set".to_string(),
        collector_number: "1".to_string(),
        oracle_text: None,
        power: None,
        toughness: None,
        defense: None,
        price_usd: None,
        price_eur: None,
        released_at: NaiveDate::from_ymd_opt(2020, 1, 1),
        image_url: None,
        back_face: None,
    }
}

/// A chart configuration with no filters.
pub fn config(field: GraphField, metric: GraphMetric) -> GraphConfig {
    GraphConfig {
        id: "test".to_string(),
        name: "Test".to_string(),
        description: None,
        x_axis: GraphAxis {
            field,
            label: "x".to_string(),
        },
        y_axis: GraphMetricAxis {
            metric,
            label: "y".to_string(),
        },
        chart_type: ChartType::Bar,
        filters: vec![],
    }
}

pub fn filter(field: FilterField, operator: FilterOp, value: FilterValue) -> GraphFilter {
    GraphFilter {
        field,
        operator,
        value,
    }
}
