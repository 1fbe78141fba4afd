//! The mutation layer: pure, total edit operations over the document pair.
//!
//! Every operation takes the current document and returns a new instance;
//! invalid input yields the unchanged document rather than an error, so a UI
//! driving these functions never crashes on bad keystrokes. Structural floors
//! (at least one row, at least one dataset) are enforced silently.

mod cell_input;
mod data_edits;
mod options_edits;

pub use cell_input::parse_cell_input;
pub use data_edits::{
    duplicate_dataset, duplicate_row, insert_dataset, insert_row, remove_dataset, remove_row,
    set_cell_value, set_dataset_label, set_label,
};
pub use options_edits::set_style_field;
