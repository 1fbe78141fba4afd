use crate::core::{ChartDocument, DataCell};
use crate::edit;

use super::layout::{GridPos, GridSection};

/// The text a grid cell displays: the dataset title for header cells, the
/// formatted value for body cells (empty for null or placeholder cells).
/// `None` when no cell exists at `pos`.
#[must_use]
pub fn cell_text(doc: &ChartDocument, pos: GridPos) -> Option<String> {
    match pos.section {
        GridSection::Header => {
            if pos.row != 0 {
                return None;
            }
            doc.data
                .datasets
                .get(pos.column)
                .map(|series| series.label.clone())
        }
        GridSection::Body => {
            let cell = doc
                .data
                .datasets
                .get(pos.column)?
                .data
                .get(pos.row)
                .copied()?;
            Some(match cell.and_then(DataCell::number) {
                Some(value) => format_cell_number(value),
                None => String::new(),
            })
        }
        GridSection::Footer => None,
    }
}

/// Commits raw text typed into the cell at `pos` through the mutation layer.
/// Header cells set the dataset title; body cells go through numeric cell
/// parsing. Addresses without a cell leave the document unchanged.
#[must_use]
pub fn commit_cell(doc: &ChartDocument, pos: GridPos, raw: &str) -> ChartDocument {
    let data = match pos.section {
        GridSection::Header if pos.row == 0 => edit::set_dataset_label(&doc.data, pos.column, raw),
        GridSection::Body => edit::set_cell_value(&doc.data, pos.column, pos.row, raw),
        GridSection::Header | GridSection::Footer => doc.data.clone(),
    };
    ChartDocument {
        shape: doc.shape,
        data,
        options: doc.options.clone(),
    }
}

fn format_cell_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
