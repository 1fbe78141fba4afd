//! chartdoc-rs: editing core for chart documents.
//!
//! This crate provides a Rust-idiomatic editing layer over a chart's two
//! documents (row/series data and shape-specific rendering options): pure
//! mutation operations, a keyboard grid-navigation state machine, and a
//! deterministic shape-to-shape transform engine.

pub mod api;
pub mod core;
pub mod edit;
pub mod error;
pub mod grid;
pub mod telemetry;
pub mod transform;

pub use api::ChartSession;
pub use error::{DocError, DocResult};
