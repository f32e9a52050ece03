//! Command implementations behind the `gwalk` binary.

pub mod commands;

pub use commands::{parse_edge, LabeledGraph};
