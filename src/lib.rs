//! Funcplot - a terminal function plotter.
//!
//! Funcplot samples polynomial, trigonometric, exponential and logarithmic
//! functions over a coordinate range and draws them on a terminal canvas.
//! A numbered menu changes parameters and ranges, and curves can be saved to
//! and restored from a plain text file.
//!
//! # Features
//!
//! - Closed family of parametrized functions
//! - Fixed-resolution sampling with an explicit domain-failure policy
//! - Braille canvas with grid, axes and tick labels
//! - Numbered menu driven through a command queue
//! - Plain-text curve files, one curve per line
//!
//! # Example
//!
//! ```
//! use funcplot::data::{MathFunction, Range, Sampler};
//!
//! let parabola = MathFunction::polynomial(vec![1.0, 0.0, -1.0]);
//! let sampled = Sampler::default()
//!     .generate(&parabola, Range::new(-10.0, 10.0), 100)
//!     .unwrap();
//! assert_eq!(sampled.points.len(), 101);
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod command;
pub mod data;
pub mod error;
pub mod headless;
pub mod ui;
pub mod util;

pub use error::{PlotError, Result};
