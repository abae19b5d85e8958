//! Turns a set of normalized cards plus a graph configuration into an
//! ordered, chart-ready series.
//!
//! Strictly ordered pipeline: filter (AND across predicates), group by the
//! x-axis field, aggregate the y-axis metric per group, then sort with a
//! field-specific policy. Pure and deterministic: grouping uses a BTreeMap
//! and every sort is stable, so equal inputs always produce equal output.

use chrono::Datelike;
use std::cmp::Ordering;
use std::collections::BTreeMap;

use sg_core::domain::graph::{
    ChartData, ChartDataPoint, FilterField, FilterOp, FilterValue, GraphConfig, GraphField,
    GraphFilter, GraphMetric,
};
use sg_core::domain::NormalizedCard;

use crate::observability::metrics;

const RARITY_ORDER: [&str; 6] = ["Common", "Uncommon", "Rare", "Mythic", "Special", "Bonus"];
const COLOR_ORDER: [&str; 7] = [
    "White",
    "Blue",
    "Black",
    "Red",
    "Green",
    "Multicolor",
    "Colorless",
];

/// Build the chart series for one configuration.
pub fn transform(cards: &[NormalizedCard], config: &GraphConfig) -> ChartData {
    let filtered = apply_filters(cards, &config.filters);
    metrics::transform::records_filtered(filtered.len());

    let grouped = group_by(&filtered, config.x_axis.field);
    metrics::transform::groups(grouped.len());

    let mut points = aggregate(grouped, config.y_axis.metric);
    sort_points(&mut points, config.x_axis.field);

    metrics::transform::chart_built(config.x_axis.field.to_string());
    ChartData {
        data: points,
        x_label: config.x_axis.label.clone(),
        y_label: config.y_axis.label.clone(),
        chart_type: config.chart_type,
    }
}

/// Keep a card iff it satisfies every predicate.
fn apply_filters<'a>(
    cards: &'a [NormalizedCard],
    filters: &[GraphFilter],
) -> Vec<&'a NormalizedCard> {
    cards
        .iter()
        .filter(|card| filters.iter().all(|filter| matches_filter(card, filter)))
        .collect()
}

/// Predicate semantics per (field, operator, operand shape). Any
/// combination we do not recognize passes: a malformed custom filter
/// produces a fuller chart, never a crash.
fn matches_filter(card: &NormalizedCard, filter: &GraphFilter) -> bool {
    match filter.field {
        FilterField::Type => list_field_matches(&card.types, filter),
        FilterField::Color => list_field_matches(&card.colors, filter),
        FilterField::Rarity => match (filter.operator, &filter.value) {
            (FilterOp::In, FilterValue::List(values)) => values.contains(&card.rarity),
            (_, FilterValue::Str(value)) => card.rarity == *value,
            _ => true,
        },
        FilterField::Cmc => match (filter.operator, &filter.value) {
            (FilterOp::Range, FilterValue::NumRange([lo, hi])) => {
                card.cmc >= *lo && card.cmc <= *hi
            }
            (_, FilterValue::Num(value)) => card.cmc == *value,
            _ => true,
        },
        FilterField::HasPrice => match &filter.value {
            FilterValue::Bool(true) => card.price_usd.is_some(),
            _ => true,
        },
        FilterField::HasPower => match &filter.value {
            FilterValue::Bool(true) => card.power.is_some(),
            _ => true,
        },
    }
}

/// Shared semantics for the multi-valued fields (type, color): membership
/// intersects, equality means list-contains.
fn list_field_matches(field_values: &[String], filter: &GraphFilter) -> bool {
    match (filter.operator, &filter.value) {
        (FilterOp::In, FilterValue::List(values)) => {
            values.iter().any(|value| field_values.contains(value))
        }
        (_, FilterValue::Str(value)) => field_values.contains(value),
        _ => true,
    }
}

/// Partition cards by group key, preserving determinism via BTreeMap and
/// input order within each group.
fn group_by<'a>(
    cards: &[&'a NormalizedCard],
    field: GraphField,
) -> BTreeMap<String, Vec<&'a NormalizedCard>> {
    let mut groups: BTreeMap<String, Vec<&NormalizedCard>> = BTreeMap::new();
    for &card in cards {
        groups.entry(group_key(card, field)).or_default().push(card);
    }
    groups
}

/// The bucket a card lands in under a grouping field.
fn group_key(card: &NormalizedCard, field: GraphField) -> String {
    match field {
        GraphField::Cmc => {
            let floored = card.cmc.floor() as i64;
            if floored > 10 {
                "10+".to_string()
            } else {
                floored.to_string()
            }
        }

        GraphField::Color => match card.colors.len() {
            0 => "Colorless".to_string(),
            1 => color_display_name(&card.colors[0]),
            _ => "Multicolor".to_string(),
        },

        GraphField::Type => card
            .types
            .first()
            .cloned()
            .unwrap_or_else(|| "Other".to_string()),

        GraphField::Rarity => capitalize(&card.rarity),

        GraphField::Set => card.set.to_uppercase(),

        GraphField::Power => stat_key(card.power),

        GraphField::Toughness => stat_key(card.toughness),

        GraphField::Year => card
            .released_at
            .map(|date| date.year().to_string())
            .unwrap_or_else(|| "Unknown".to_string()),

        GraphField::PriceRange => match card.price_usd {
            None => "No Price".to_string(),
            Some(price) if price < 1.0 => "$0-1".to_string(),
            Some(price) if price < 5.0 => "$1-5".to_string(),
            Some(price) if price < 10.0 => "$5-10".to_string(),
            Some(price) if price < 25.0 => "$10-25".to_string(),
            Some(_) => "$25+".to_string(),
        },
    }
}

fn color_display_name(symbol: &str) -> String {
    match symbol {
        "W" => "White".to_string(),
        "U" => "Blue".to_string(),
        "B" => "Black".to_string(),
        "R" => "Red".to_string(),
        "G" => "Green".to_string(),
        other => other.to_string(),
    }
}

/// Power/toughness bucket: absent is its own bucket, values above 5
/// collapse into the overflow sentinel.
fn stat_key(value: Option<f64>) -> String {
    match value {
        None => "N/A".to_string(),
        Some(v) if v > 5.0 => "5+".to_string(),
        Some(v) => v.to_string(),
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Compute the metric for every group. Zero-vs-absent policy per metric:
/// the averaging and extremum metrics skip absent values and fall back to
/// 0 for groups with none present; totalPrice counts absent as 0. Filters,
/// in contrast, exclude absent outright. Changing either side changes
/// observable chart output.
fn aggregate(
    groups: BTreeMap<String, Vec<&NormalizedCard>>,
    metric: GraphMetric,
) -> Vec<ChartDataPoint> {
    groups
        .into_iter()
        .map(|(key, members)| {
            let value = match metric {
                GraphMetric::Count => members.len() as f64,
                GraphMetric::AvgPrice => mean_of(&members, |card| card.price_usd),
                GraphMetric::TotalPrice => members
                    .iter()
                    .map(|card| card.price_usd.unwrap_or(0.0))
                    .sum(),
                GraphMetric::AvgCmc => {
                    members.iter().map(|card| card.cmc).sum::<f64>() / members.len() as f64
                }
                GraphMetric::AvgPower => mean_of(&members, |card| card.power),
                GraphMetric::AvgToughness => mean_of(&members, |card| card.toughness),
                GraphMetric::MinPrice => extremum_of(&members, |card| card.price_usd, f64::min),
                GraphMetric::MaxPrice => extremum_of(&members, |card| card.price_usd, f64::max),
            };

            ChartDataPoint {
                label: key.clone(),
                value: round2(value),
                count: members.len(),
                cards: members.iter().map(|card| card.id.clone()).collect(),
                key,
            }
        })
        .collect()
}

fn mean_of(cards: &[&NormalizedCard], get: impl Fn(&NormalizedCard) -> Option<f64>) -> f64 {
    let values: Vec<f64> = cards.iter().filter_map(|card| get(card)).collect();
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

fn extremum_of(
    cards: &[&NormalizedCard],
    get: impl Fn(&NormalizedCard) -> Option<f64>,
    pick: impl Fn(f64, f64) -> f64,
) -> f64 {
    cards
        .iter()
        .filter_map(|card| get(card))
        .reduce(pick)
        .unwrap_or(0.0)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Sort policy per grouping field; not plain alphabetical.
fn sort_points(points: &mut [ChartDataPoint], field: GraphField) {
    match field {
        // Numeric ascending; the overflow sentinel always lands last and
        // the "N/A" bucket just before it
        GraphField::Cmc | GraphField::Power | GraphField::Toughness => {
            points.sort_by(|a, b| cmp_ranks(stat_rank(&a.key), stat_rank(&b.key)));
        }

        GraphField::Year => {
            points.sort_by_key(|point| point.key.parse::<i64>().unwrap_or(i64::MAX));
        }

        GraphField::Rarity => {
            points.sort_by_key(|point| canonical_position(&RARITY_ORDER, &point.label));
        }

        GraphField::Color => {
            points.sort_by_key(|point| canonical_position(&COLOR_ORDER, &point.label));
        }

        // Everything else: largest aggregate first
        GraphField::Set | GraphField::Type | GraphField::PriceRange => {
            points.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal));
        }
    }
}

/// Rank for the numeric buckets: plain numbers first in order, then the
/// "N/A" bucket, then the overflow sentinel.
fn stat_rank(key: &str) -> (u8, f64) {
    if key == "10+" || key == "5+" {
        return (2, 0.0);
    }
    match key.parse::<f64>() {
        Ok(value) => (0, value),
        Err(_) => (1, 0.0),
    }
}

fn cmp_ranks(a: (u8, f64), b: (u8, f64)) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Position within a canonical ordering; labels outside the list keep
/// their relative order after it.
fn canonical_position(order: &[&str], label: &str) -> usize {
    order
        .iter()
        .position(|entry| *entry == label)
        .unwrap_or(order.len())
}
