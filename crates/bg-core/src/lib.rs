/// Configuration, types, and shared structures for braillegraph.
///
/// This crate contains the types, traits, and configuration logic shared
/// by the graph engine and the command-line front end.

pub mod config;
pub mod error;
pub mod traits;

pub use config::{GraphConfig, NegativePolicy, Orientation};
pub use error::CoreError;
pub use traits::GraphRenderer;

/// Length of one bar, in Braille dots.
pub type Magnitude = u32;
