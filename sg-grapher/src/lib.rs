//! Main library crate for the Scryfall grapher.

// Re-export the main modules needed for integration tests and the web crate
pub mod apis;
pub mod common;
pub mod config;
pub mod observability;
pub mod pipeline;

// Re-export commonly used types
pub use sg_core::domain::{BackFace, NormalizedCard};
pub use sg_core::domain::graph::{ChartData, GraphConfig, GraphPreset};
