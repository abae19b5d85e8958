use clap::{Parser, Subcommand};
use tracing::info;

use sg_core::domain::graph::{
    ChartData, ChartType, GraphAxis, GraphConfig, GraphField, GraphMetric, GraphMetricAxis,
};

use sg_grapher::apis::ScryfallClient;
use sg_grapher::config::GrapherConfig;
use sg_grapher::observability::logging::init_logging;
use sg_grapher::pipeline::presets::{get_preset, GRAPH_PRESETS};
use sg_grapher::pipeline::{normalize_cards, transform};

#[derive(Parser)]
#[command(name = "sg-grapher")]
#[command(about = "Scryfall grapher - fetch, normalize, and chart card data")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search Scryfall and print the normalized cards
    Search {
        /// Scryfall search query, e.g. "c:r t:dragon"
        query: String,
        /// Emit the normalized records as JSON
        #[arg(long)]
        json: bool,
        /// Print at most this many cards
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Build chart data for a query
    Chart {
        /// Scryfall search query
        query: String,
        /// Use a named preset (see `presets`)
        #[arg(long, conflicts_with_all = ["x_axis", "metric"])]
        preset: Option<String>,
        /// Grouping field for a custom chart (cmc, color, type, rarity,
        /// set, power, toughness, year, priceRange)
        #[arg(long)]
        x_axis: Option<String>,
        /// Metric for a custom chart (count, avgPrice, totalPrice, avgCmc,
        /// avgPower, avgToughness, minPrice, maxPrice)
        #[arg(long)]
        metric: Option<String>,
        /// Chart shape for a custom chart
        #[arg(long, default_value = "bar")]
        chart_type: String,
        /// Emit the chart data as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the available graph presets
    Presets,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging();
    let config = GrapherConfig::from_env();

    match cli.command {
        Commands::Search { query, json, limit } => {
            let cards = fetch_and_normalize(&config, &query).await?;
            let shown = limit.unwrap_or(cards.len()).min(cards.len());

            if json {
                println!("{}", serde_json::to_string_pretty(&cards[..shown])?);
            } else {
                for card in &cards[..shown] {
                    println!(
                        "{:<40} {:<6} {:<10} cmc {}",
                        card.name,
                        card.set.to_uppercase(),
                        card.rarity,
                        card.cmc
                    );
                }
                println!("{} cards ({} shown)", cards.len(), shown);
            }
        }

        Commands::Chart {
            query,
            preset,
            x_axis,
            metric,
            chart_type,
            json,
        } => {
            let graph_config = resolve_config(preset.as_deref(), x_axis, metric, &chart_type)?;
            let cards = fetch_and_normalize(&config, &query).await?;
            let chart = transform(&cards, &graph_config);

            if json {
                println!("{}", serde_json::to_string_pretty(&chart)?);
            } else {
                print_chart(&graph_config, &chart);
            }
        }

        Commands::Presets => {
            for preset in GRAPH_PRESETS.iter() {
                println!(
                    "{} {:<20} {:<46} [{} by {}]",
                    preset.icon,
                    preset.config.id,
                    preset
                        .config
                        .description
                        .as_deref()
                        .unwrap_or(&preset.config.name),
                    preset.config.y_axis.metric,
                    preset.config.x_axis.field,
                );
            }
        }
    }

    Ok(())
}

async fn fetch_and_normalize(
    config: &GrapherConfig,
    query: &str,
) -> anyhow::Result<Vec<sg_core::domain::NormalizedCard>> {
    let client = ScryfallClient::new(config);
    let raw = client
        .search_with_progress(query, |fetched, total| {
            info!("fetched {} of {} cards", fetched.len(), total);
        })
        .await?;
    Ok(normalize_cards(&raw))
}

/// Build the chart configuration from either a preset id or the custom
/// axis/metric flags.
fn resolve_config(
    preset: Option<&str>,
    x_axis: Option<String>,
    metric: Option<String>,
    chart_type: &str,
) -> anyhow::Result<GraphConfig> {
    if let Some(id) = preset {
        let preset = get_preset(id)
            .ok_or_else(|| anyhow::anyhow!("unknown preset '{}'; run `sg-grapher presets`", id))?;
        return Ok(preset.config.clone());
    }

    let (Some(x_axis), Some(metric)) = (x_axis, metric) else {
        anyhow::bail!("provide either --preset or both --x-axis and --metric");
    };

    let field: GraphField = x_axis.parse().map_err(anyhow::Error::msg)?;
    let metric: GraphMetric = metric.parse().map_err(anyhow::Error::msg)?;
    let chart_type: ChartType = chart_type.parse().map_err(anyhow::Error::msg)?;

    Ok(GraphConfig {
        id: "custom".to_string(),
        name: "Custom".to_string(),
        description: None,
        x_axis: GraphAxis {
            label: field.to_string(),
            field,
        },
        y_axis: GraphMetricAxis {
            label: metric.to_string(),
            metric,
        },
        chart_type,
        filters: vec![],
    })
}

fn print_chart(config: &GraphConfig, chart: &ChartData) {
    println!("{} ({:?})", config.name, chart.chart_type);
    println!("{:<16} {:>12} {:>8}", chart.x_label, chart.y_label, "cards");
    for point in &chart.data {
        println!("{:<16} {:>12} {:>8}", point.label, point.value, point.count);
    }
}
