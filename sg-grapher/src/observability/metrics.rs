//! Metrics for the grapher, following Prometheus naming conventions.
//!
//! Recording is a no-op until [`init`] installs the Prometheus recorder;
//! the CLI skips init entirely and the helpers cost nothing.

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;
use std::fmt;

/// All metric names used in the system, so there are no magic strings at
/// the call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricName {
    // Scryfall fetch
    SourcesRequestsSuccess,
    SourcesRequestsError,
    SourcesRequestDuration,
    SourcesPayloadBytes,
    SourcesPagesFetched,

    // Normalizer
    NormalizeRecordsProcessed,
    NormalizeBackFaces,
    NormalizeBatchSize,

    // Transformer
    TransformChartsBuilt,
    TransformRecordsFiltered,
    TransformGroups,
}

impl MetricName {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricName::SourcesRequestsSuccess => "sg_sources_requests_success_total",
            MetricName::SourcesRequestsError => "sg_sources_requests_error_total",
            MetricName::SourcesRequestDuration => "sg_sources_request_duration_seconds",
            MetricName::SourcesPayloadBytes => "sg_sources_payload_bytes",
            MetricName::SourcesPagesFetched => "sg_sources_pages_fetched_total",

            MetricName::NormalizeRecordsProcessed => "sg_normalize_records_processed_total",
            MetricName::NormalizeBackFaces => "sg_normalize_back_faces_total",
            MetricName::NormalizeBatchSize => "sg_normalize_batch_size",

            MetricName::TransformChartsBuilt => "sg_transform_charts_built_total",
            MetricName::TransformRecordsFiltered => "sg_transform_records_filtered",
            MetricName::TransformGroups => "sg_transform_groups",
        }
    }
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

static PROMETHEUS_HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

/// Install the Prometheus recorder. Idempotent; called by the web server.
pub fn init() -> Result<(), Box<dyn std::error::Error>> {
    if PROMETHEUS_HANDLE.get().is_some() {
        return Ok(());
    }
    let handle = PrometheusBuilder::new().install_recorder()?;
    let _ = PROMETHEUS_HANDLE.set(handle);
    Ok(())
}

/// Render the current metrics in Prometheus exposition format, if the
/// recorder has been installed.
pub fn render() -> Option<String> {
    PROMETHEUS_HANDLE.get().map(|handle| handle.render())
}

pub mod sources {
    use super::MetricName;

    pub fn request_success() {
        ::metrics::counter!(MetricName::SourcesRequestsSuccess.as_str()).increment(1);
    }

    pub fn request_error() {
        ::metrics::counter!(MetricName::SourcesRequestsError.as_str()).increment(1);
    }

    pub fn request_duration(secs: f64) {
        ::metrics::histogram!(MetricName::SourcesRequestDuration.as_str()).record(secs);
    }

    pub fn payload_bytes(bytes: usize) {
        ::metrics::histogram!(MetricName::SourcesPayloadBytes.as_str()).record(bytes as f64);
    }

    pub fn pages_fetched(pages: usize) {
        ::metrics::counter!(MetricName::SourcesPagesFetched.as_str()).increment(pages as u64);
    }
}

pub mod normalize {
    use super::MetricName;

    pub fn records_processed(count: usize) {
        ::metrics::counter!(MetricName::NormalizeRecordsProcessed.as_str())
            .increment(count as u64);
    }

    pub fn back_face_extracted() {
        ::metrics::counter!(MetricName::NormalizeBackFaces.as_str()).increment(1);
    }

    pub fn batch_size(size: usize) {
        ::metrics::histogram!(MetricName::NormalizeBatchSize.as_str()).record(size as f64);
    }
}

pub mod transform {
    use super::MetricName;

    pub fn chart_built(field: String) {
        ::metrics::counter!(MetricName::TransformChartsBuilt.as_str(), "field" => field)
            .increment(1);
    }

    pub fn records_filtered(count: usize) {
        ::metrics::histogram!(MetricName::TransformRecordsFiltered.as_str()).record(count as f64);
    }

    pub fn groups(count: usize) {
        ::metrics::histogram!(MetricName::TransformGroups.as_str()).record(count as f64);
    }
}
