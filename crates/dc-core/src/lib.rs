/// Configuration and shared error types for dotcell.
///
/// Every other crate in the workspace reads its settings from
/// [`ConverterConfig`] and reports lookup/format problems as [`CoreError`].

pub mod config;
pub mod error;

pub use config::{CellSize, ConverterConfig, DotPolicy, EncoderConfig, OutputConfig};
pub use error::CoreError;
