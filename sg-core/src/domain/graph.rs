//! Declarative chart configuration and the chart-ready output types.
//!
//! A [`GraphConfig`] says what to plot (grouping field, metric, chart
//! shape, filters); the transformer interprets it over a set of
//! [`NormalizedCard`](super::NormalizedCard)s. Wire names are camelCase to
//! match the frontend.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// X-axis grouping field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GraphField {
    Cmc,
    Color,
    Type,
    Rarity,
    Set,
    Power,
    Toughness,
    Year,
    PriceRange,
}

/// Y-axis aggregation metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GraphMetric {
    Count,
    AvgPrice,
    TotalPrice,
    AvgCmc,
    AvgPower,
    AvgToughness,
    MinPrice,
    MaxPrice,
}

/// Chart shape. Orthogonal to the data computation; echoed through to the
/// renderer untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartType {
    Bar,
    HorizontalBar,
    Pie,
    Line,
    Scatter,
    Area,
}

/// Field a filter predicate applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterField {
    Type,
    Color,
    Rarity,
    Cmc,
    HasPrice,
    HasPower,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterOp {
    Equals,
    In,
    Range,
    Exists,
}

/// Filter operand. Untagged so the frontend can send plain JSON scalars,
/// `[lo, hi]` pairs, or string lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Bool(bool),
    Num(f64),
    Str(String),
    NumRange([f64; 2]),
    List(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphFilter {
    pub field: FilterField,
    pub operator: FilterOp,
    pub value: FilterValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphAxis {
    pub field: GraphField,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphMetricAxis {
    pub metric: GraphMetric,
    pub label: String,
}

/// A full chart specification, assembled by the caller per render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphConfig {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub x_axis: GraphAxis,
    pub y_axis: GraphMetricAxis,
    pub chart_type: ChartType,
    #[serde(default)]
    pub filters: Vec<GraphFilter>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PresetCategory {
    Essential,
    Analysis,
    Custom,
}

/// A named, pre-built chart configuration shipped as static data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphPreset {
    #[serde(flatten)]
    pub config: GraphConfig,
    pub category: PresetCategory,
    pub icon: String,
}

/// One bucket of the computed series. `cards` carries the originating
/// record ids so a chart click can drill back into the full records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDataPoint {
    pub key: String,
    pub label: String,
    pub value: f64,
    pub count: usize,
    pub cards: Vec<String>,
}

/// The transformer's output: ordered points plus echoed axis metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub data: Vec<ChartDataPoint>,
    pub x_label: String,
    pub y_label: String,
    pub chart_type: ChartType,
}

impl fmt::Display for GraphField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GraphField::Cmc => "cmc",
            GraphField::Color => "color",
            GraphField::Type => "type",
            GraphField::Rarity => "rarity",
            GraphField::Set => "set",
            GraphField::Power => "power",
            GraphField::Toughness => "toughness",
            GraphField::Year => "year",
            GraphField::PriceRange => "priceRange",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for GraphField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cmc" => Ok(GraphField::Cmc),
            "color" => Ok(GraphField::Color),
            "type" => Ok(GraphField::Type),
            "rarity" => Ok(GraphField::Rarity),
            "set" => Ok(GraphField::Set),
            "power" => Ok(GraphField::Power),
            "toughness" => Ok(GraphField::Toughness),
            "year" => Ok(GraphField::Year),
            "priceRange" => Ok(GraphField::PriceRange),
            other => Err(format!("unknown graph field '{}'", other)),
        }
    }
}

impl fmt::Display for GraphMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GraphMetric::Count => "count",
            GraphMetric::AvgPrice => "avgPrice",
            GraphMetric::TotalPrice => "totalPrice",
            GraphMetric::AvgCmc => "avgCmc",
            GraphMetric::AvgPower => "avgPower",
            GraphMetric::AvgToughness => "avgToughness",
            GraphMetric::MinPrice => "minPrice",
            GraphMetric::MaxPrice => "maxPrice",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for GraphMetric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "count" => Ok(GraphMetric::Count),
            "avgPrice" => Ok(GraphMetric::AvgPrice),
            "totalPrice" => Ok(GraphMetric::TotalPrice),
            "avgCmc" => Ok(GraphMetric::AvgCmc),
            "avgPower" => Ok(GraphMetric::AvgPower),
            "avgToughness" => Ok(GraphMetric::AvgToughness),
            "minPrice" => Ok(GraphMetric::MinPrice),
            "maxPrice" => Ok(GraphMetric::MaxPrice),
            other => Err(format!("unknown graph metric '{}'", other)),
        }
    }
}

impl FromStr for ChartType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bar" => Ok(ChartType::Bar),
            "horizontalBar" => Ok(ChartType::HorizontalBar),
            "pie" => Ok(ChartType::Pie),
            "line" => Ok(ChartType::Line),
            "scatter" => Ok(ChartType::Scatter),
            "area" => Ok(ChartType::Area),
            other => Err(format!("unknown chart type '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn config_deserializes_from_frontend_json() {
        let config: GraphConfig = serde_json::from_value(json!({
            "id": "custom-1",
            "name": "Custom",
            "xAxis": { "field": "priceRange", "label": "Price Range" },
            "yAxis": { "metric": "count", "label": "Cards" },
            "chartType": "horizontalBar",
            "filters": [
                { "field": "hasPrice", "operator": "exists", "value": true },
                { "field": "cmc", "operator": "range", "value": [1.0, 3.0] },
                { "field": "type", "operator": "in", "value": ["Creature"] }
            ]
        }))
        .unwrap();

        assert_eq!(config.x_axis.field, GraphField::PriceRange);
        assert_eq!(config.chart_type, ChartType::HorizontalBar);
        assert_eq!(config.filters[0].value, FilterValue::Bool(true));
        assert_eq!(config.filters[1].value, FilterValue::NumRange([1.0, 3.0]));
        assert_eq!(
            config.filters[2].value,
            FilterValue::List(vec!["Creature".to_string()])
        );
    }

    #[test]
    fn field_names_round_trip_through_fromstr() {
        for field in [
            GraphField::Cmc,
            GraphField::Color,
            GraphField::Type,
            GraphField::Rarity,
            GraphField::Set,
            GraphField::Power,
            GraphField::Toughness,
            GraphField::Year,
            GraphField::PriceRange,
        ] {
            assert_eq!(field.to_string().parse::<GraphField>().unwrap(), field);
        }
    }
}
