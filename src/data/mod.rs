//! Plot data and its persistence.
//!
//! This module holds the function family, the sampler, the coordinate
//! system and the curve collection, plus the text format curves are
//! saved in.

mod collection;
mod coords;
mod curve;
mod function;
mod point;
pub mod record;
mod sampler;
mod store;

pub use collection::{PlotCollection, RegenerateReport};
pub use coords::CoordinateSystem;
pub use curve::Curve;
pub use function::{LogParams, MathFunction, TrigKind};
pub use point::{Point, Range};
pub use sampler::{DomainPolicy, Sampled, Sampler};
pub use store::{CurveStore, LoadReport, SkippedLine};
