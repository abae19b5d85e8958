pub mod common;
pub mod domain;

pub use common::error::{GrapherError, Result};
pub use domain::*;
