//! Utility functions.
//!
//! This module provides layout constants and input parsing helpers.

mod layout_config;
mod parse;

pub use layout_config::{PlotConfig, SamplingConfig, ViewportConfig};
pub use parse::parse_numbers;
