//! Pre-defined graph configurations for one-click analysis.
//!
//! Pure data: the transformer treats a preset's config exactly like a
//! hand-assembled one.

use once_cell::sync::Lazy;

use sg_core::domain::graph::{
    ChartType, FilterField, FilterOp, FilterValue, GraphAxis, GraphConfig, GraphField,
    GraphFilter, GraphMetric, GraphMetricAxis, GraphPreset, PresetCategory,
};

#[allow(clippy::too_many_arguments)]
fn preset(
    id: &str,
    name: &str,
    description: &str,
    category: PresetCategory,
    field: GraphField,
    x_label: &str,
    metric: GraphMetric,
    y_label: &str,
    chart_type: ChartType,
    filters: Vec<GraphFilter>,
    icon: &str,
) -> GraphPreset {
    GraphPreset {
        config: GraphConfig {
            id: id.to_string(),
            name: name.to_string(),
            description: Some(description.to_string()),
            x_axis: GraphAxis {
                field,
                label: x_label.to_string(),
            },
            y_axis: GraphMetricAxis {
                metric,
                label: y_label.to_string(),
            },
            chart_type,
            filters,
        },
        category,
        icon: icon.to_string(),
    }
}

fn has_price_filter() -> GraphFilter {
    GraphFilter {
        field: FilterField::HasPrice,
        operator: FilterOp::Exists,
        value: FilterValue::Bool(true),
    }
}

pub static GRAPH_PRESETS: Lazy<Vec<GraphPreset>> = Lazy::new(|| {
    vec![
        preset(
            "mana-curve",
            "Mana Curve",
            "Distribution of cards by mana value",
            PresetCategory::Essential,
            GraphField::Cmc,
            "Mana Value",
            GraphMetric::Count,
            "Number of Cards",
            ChartType::Bar,
            vec![],
            "📊",
        ),
        preset(
            "color-distribution",
            "Color Distribution",
            "Breakdown by color identity",
            PresetCategory::Essential,
            GraphField::Color,
            "Color",
            GraphMetric::Count,
            "Number of Cards",
            ChartType::Pie,
            vec![],
            "🎨",
        ),
        preset(
            "type-breakdown",
            "Type Breakdown",
            "Cards by card type",
            PresetCategory::Essential,
            GraphField::Type,
            "Card Type",
            GraphMetric::Count,
            "Number of Cards",
            ChartType::HorizontalBar,
            vec![],
            "🃏",
        ),
        preset(
            "rarity-distribution",
            "Rarity Distribution",
            "Cards by rarity",
            PresetCategory::Essential,
            GraphField::Rarity,
            "Rarity",
            GraphMetric::Count,
            "Number of Cards",
            ChartType::Pie,
            vec![],
            "💎",
        ),
        preset(
            "price-by-rarity",
            "Price by Rarity",
            "Average price for each rarity",
            PresetCategory::Analysis,
            GraphField::Rarity,
            "Rarity",
            GraphMetric::AvgPrice,
            "Average Price (USD)",
            ChartType::Bar,
            vec![has_price_filter()],
            "💰",
        ),
        preset(
            "power-distribution",
            "Power Distribution",
            "Creature power values",
            PresetCategory::Analysis,
            GraphField::Power,
            "Power",
            GraphMetric::Count,
            "Number of Creatures",
            ChartType::Bar,
            vec![
                GraphFilter {
                    field: FilterField::Type,
                    operator: FilterOp::In,
                    value: FilterValue::List(vec!["Creature".to_string()]),
                },
                GraphFilter {
                    field: FilterField::HasPower,
                    operator: FilterOp::Exists,
                    value: FilterValue::Bool(true),
                },
            ],
            "💪",
        ),
        preset(
            "set-comparison",
            "Set Comparison",
            "Card count by set",
            PresetCategory::Analysis,
            GraphField::Set,
            "Set",
            GraphMetric::Count,
            "Number of Cards",
            ChartType::HorizontalBar,
            vec![],
            "📚",
        ),
        preset(
            "value-by-color",
            "Value by Color",
            "Total collection value by color",
            PresetCategory::Analysis,
            GraphField::Color,
            "Color",
            GraphMetric::TotalPrice,
            "Total Value (USD)",
            ChartType::Bar,
            vec![has_price_filter()],
            "💵",
        ),
        preset(
            "yearly-releases",
            "Yearly Releases",
            "Cards released by year",
            PresetCategory::Analysis,
            GraphField::Year,
            "Year",
            GraphMetric::Count,
            "Number of Cards",
            ChartType::Line,
            vec![],
            "📅",
        ),
        preset(
            "price-ranges",
            "Price Ranges",
            "Card distribution by price range",
            PresetCategory::Analysis,
            GraphField::PriceRange,
            "Price Range",
            GraphMetric::Count,
            "Number of Cards",
            ChartType::Bar,
            vec![has_price_filter()],
            "💸",
        ),
    ]
});

/// Look up a preset by id.
pub fn get_preset(id: &str) -> Option<&'static GraphPreset> {
    GRAPH_PRESETS.iter().find(|preset| preset.config.id == id)
}

pub fn presets_by_category(category: PresetCategory) -> Vec<&'static GraphPreset> {
    GRAPH_PRESETS
        .iter()
        .filter(|preset| preset.category == category)
        .collect()
}

/// The most commonly used presets.
pub fn essential_presets() -> Vec<&'static GraphPreset> {
    presets_by_category(PresetCategory::Essential)
}

/// The more advanced presets.
pub fn analysis_presets() -> Vec<&'static GraphPreset> {
    presets_by_category(PresetCategory::Analysis)
}
