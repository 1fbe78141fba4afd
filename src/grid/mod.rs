//! Keyboard-driven grid navigation over the chart data document.
//!
//! The grid is the spreadsheet-like view of labels × datasets: a header row of
//! dataset titles above a body of value cells, one column per dataset. The
//! navigator is a synchronous state machine; it plans a transition per key and
//! the caller applies any auto-growth through the mutation layer before the
//! focus moves.

mod editor;
mod layout;
mod navigator;

pub use editor::{cell_text, commit_cell};
pub use layout::{GridDims, GridPos, GridSection, is_focusable};
pub use navigator::{AutoGrow, GridNavigator, NavKey, Transition};
