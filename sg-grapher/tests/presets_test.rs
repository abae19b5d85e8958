//! Harness for the preset catalog: shape of the shipped data and the
//! lookup helpers.

mod common;

use std::collections::HashSet;

use common::card;
use sg_core::domain::graph::{FilterField, FilterOp, FilterValue, GraphField, GraphMetric};
use sg_grapher::pipeline::presets::{
    analysis_presets, essential_presets, get_preset, GRAPH_PRESETS,
};
use sg_grapher::pipeline::transform;

#[test]
fn catalog_ships_ten_presets_with_unique_ids() {
    assert_eq!(GRAPH_PRESETS.len(), 10);

    let ids: HashSet<&str> = GRAPH_PRESETS.iter().map(|p| p.config.id.as_str()).collect();
    assert_eq!(ids.len(), GRAPH_PRESETS.len());
}

#[test]
fn lookup_by_id() {
    let preset = get_preset("mana-curve").expect("mana-curve ships");
    assert_eq!(preset.config.x_axis.field, GraphField::Cmc);
    assert_eq!(preset.config.y_axis.metric, GraphMetric::Count);
    assert!(preset.config.filters.is_empty());

    assert!(get_preset("no-such-preset").is_none());
}

#[test]
fn categories_split_the_catalog() {
    let essential = essential_presets();
    let analysis = analysis_presets();
    assert_eq!(essential.len(), 4);
    assert_eq!(analysis.len(), 6);
    assert_eq!(essential.len() + analysis.len(), GRAPH_PRESETS.len());
}

#[test]
fn price_presets_filter_out_priceless_cards() {
    for id in ["price-by-rarity", "value-by-color", "price-ranges"] {
        let preset = get_preset(id).unwrap();
        assert!(
            preset.config.filters.iter().any(|f| {
                f.field == FilterField::HasPrice
                    && f.operator == FilterOp::Exists
                    && f.value == FilterValue::Bool(true)
            }),
            "{} must require a price",
            id
        );
    }
}

#[test]
fn power_distribution_counts_creatures_only() {
    let preset = get_preset("power-distribution").unwrap();

    let mut creature = card("creature");
    creature.types = vec!["Creature".to_string()];
    creature.power = Some(3.0);

    let mut sorcery = card("sorcery");
    sorcery.types = vec!["Sorcery".to_string()];

    let mut powerless = card("powerless");
    powerless.types = vec!["Creature".to_string()];

    let chart = transform(
        &[creature, sorcery, powerless],
        &preset.config,
    );

    let total: usize = chart.data.iter().map(|p| p.count).sum();
    assert_eq!(total, 1);
    assert_eq!(chart.data[0].cards, vec!["creature".to_string()]);
}

#[test]
fn every_preset_runs_against_an_empty_and_a_small_set() {
    let mut sample = card("sample");
    sample.cmc = 3.0;
    sample.types = vec!["Creature".to_string()];
    sample.colors = vec!["G".to_string()];
    sample.power = Some(3.0);
    sample.price_usd = Some(1.50);

    for preset in GRAPH_PRESETS.iter() {
        let empty = transform(&[], &preset.config);
        assert!(empty.data.is_empty(), "{}", preset.config.id);

        let one = transform(std::slice::from_ref(&sample), &preset.config);
        assert_eq!(
            one.data.iter().map(|p| p.count).sum::<usize>(),
            1,
            "{} must keep the sample card",
            preset.config.id
        );
    }
}
