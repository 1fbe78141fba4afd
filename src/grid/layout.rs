use serde::{Deserialize, Serialize};

use crate::core::ChartData;

/// Vertical region of the grid.
///
/// `Footer` is part of the address space for hosts that render one, but this
/// layout exposes no focusable controls there; transitions into it no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GridSection {
    Header,
    Body,
    Footer,
}

/// A cell coordinate. Columns are dataset indices in both header and body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridPos {
    pub section: GridSection,
    pub row: usize,
    pub column: usize,
}

impl GridPos {
    #[must_use]
    pub fn new(section: GridSection, row: usize, column: usize) -> Self {
        Self {
            section,
            row,
            column,
        }
    }
}

/// Grid dimensions derived from the document: body rows × dataset columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDims {
    pub rows: usize,
    pub columns: usize,
}

impl GridDims {
    #[must_use]
    pub fn of(data: &ChartData) -> Self {
        Self {
            rows: data.row_count(),
            columns: data.dataset_count(),
        }
    }
}

/// Whether a focusable control exists at `pos`.
#[must_use]
pub fn is_focusable(dims: GridDims, pos: GridPos) -> bool {
    match pos.section {
        GridSection::Header => pos.row == 0 && pos.column < dims.columns,
        GridSection::Body => pos.row < dims.rows && pos.column < dims.columns,
        GridSection::Footer => false,
    }
}
