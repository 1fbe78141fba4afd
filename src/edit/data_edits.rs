use tracing::{debug, trace};

use crate::core::{ChartData, Color, ColorSource, DataCell, Dataset, SeriesColor, ShapeClass, ShapeTag};

use super::cell_input::parse_cell_input;

/// Sets the row label at `row`. Out-of-range rows leave the document unchanged.
#[must_use]
pub fn set_label(data: &ChartData, row: usize, text: &str) -> ChartData {
    let mut next = data.clone();
    match next.labels.get_mut(row) {
        Some(label) => {
            trace!(row, text, "set row label");
            *label = text.to_owned();
        }
        None => trace!(row, "set_label out of range, edit dropped"),
    }
    next
}

/// Sets the dataset title at `dataset`.
#[must_use]
pub fn set_dataset_label(data: &ChartData, dataset: usize, text: &str) -> ChartData {
    let mut next = data.clone();
    match next.datasets.get_mut(dataset) {
        Some(series) => {
            trace!(dataset, text, "set dataset label");
            series.label = text.to_owned();
        }
        None => trace!(dataset, "set_dataset_label out of range, edit dropped"),
    }
    next
}

/// Commits raw cell text at `(dataset, row)`.
///
/// The input is accepted when it is empty (null cell) or parses as an integer
/// after stripping non-digit characters; otherwise the document is returned
/// unchanged. Live typing routinely passes through invalid states, so
/// rejection is silent.
#[must_use]
pub fn set_cell_value(data: &ChartData, dataset: usize, row: usize, raw: &str) -> ChartData {
    let mut next = data.clone();
    let Some(parsed) = parse_cell_input(raw) else {
        trace!(dataset, row, raw, "non-numeric cell input, edit dropped");
        return next;
    };
    let Some(cell) = next
        .datasets
        .get_mut(dataset)
        .and_then(|series| series.data.get_mut(row))
    else {
        trace!(dataset, row, "set_cell_value out of range, edit dropped");
        return next;
    };
    *cell = parsed.map(DataCell::Number);
    next
}

fn adjacent_segment(colors: &[Color], at: usize) -> Color {
    if at > 0 && at - 1 < colors.len() {
        colors[at - 1]
    } else {
        colors.first().copied().unwrap_or_else(Color::placeholder)
    }
}

fn insert_segment_color(color: &mut SeriesColor, at: usize) {
    if let SeriesColor::PerSegment(colors) = color {
        let placeholder = adjacent_segment(colors, at);
        let index = at.min(colors.len());
        colors.insert(index, placeholder);
    }
}

fn remove_segment_color(color: &mut SeriesColor, at: usize) {
    if let SeriesColor::PerSegment(colors) = color {
        if at < colors.len() {
            colors.remove(at);
        }
    }
}

fn duplicate_segment_color(color: &mut SeriesColor, at: usize) {
    if let SeriesColor::PerSegment(colors) = color {
        if at < colors.len() {
            let copy = colors[at];
            colors.insert(at + 1, copy);
        }
    }
}

/// Inserts an empty label and a null cell into every dataset at `at`,
/// extending per-row color arrays with a copy of the adjacent color so the
/// length invariant holds.
#[must_use]
pub fn insert_row(data: &ChartData, at: usize) -> ChartData {
    let mut next = data.clone();
    if at > next.labels.len() {
        trace!(at, "insert_row out of range, edit dropped");
        return next;
    }

    next.labels.insert(at, String::new());
    for series in &mut next.datasets {
        let index = at.min(series.data.len());
        series.data.insert(index, None);
        insert_segment_color(&mut series.background_color, at);
        insert_segment_color(&mut series.border_color, at);
    }
    debug!(at, rows = next.labels.len(), "inserted row");
    next
}

/// Removes the row at `at`. A no-op when only one row remains: dataset arrays
/// must never collapse to zero length.
#[must_use]
pub fn remove_row(data: &ChartData, at: usize) -> ChartData {
    let mut next = data.clone();
    if next.labels.len() <= 1 || at >= next.labels.len() {
        trace!(at, rows = next.labels.len(), "remove_row floored, edit dropped");
        return next;
    }

    next.labels.remove(at);
    for series in &mut next.datasets {
        if at < series.data.len() {
            series.data.remove(at);
        }
        remove_segment_color(&mut series.background_color, at);
        remove_segment_color(&mut series.border_color, at);
    }
    debug!(at, rows = next.labels.len(), "removed row");
    next
}

/// Clones the label and every dataset's value/color at `at`, inserting the
/// copies immediately after.
#[must_use]
pub fn duplicate_row(data: &ChartData, at: usize) -> ChartData {
    let mut next = data.clone();
    if at >= next.labels.len() {
        trace!(at, "duplicate_row out of range, edit dropped");
        return next;
    }

    let label = next.labels[at].clone();
    next.labels.insert(at + 1, label);
    for series in &mut next.datasets {
        if at < series.data.len() {
            let copy = series.data[at];
            series.data.insert(at + 1, copy);
        }
        duplicate_segment_color(&mut series.background_color, at);
        duplicate_segment_color(&mut series.border_color, at);
    }
    debug!(at, rows = next.labels.len(), "duplicated row");
    next
}

/// Inserts a new dataset at `at` with `labels.len()` null cells and fresh
/// styling drawn from `colors`.
#[must_use]
pub fn insert_dataset(
    data: &ChartData,
    shape: ShapeTag,
    at: usize,
    colors: &mut dyn ColorSource,
) -> ChartData {
    let mut next = data.clone();
    if at > next.datasets.len() {
        trace!(at, "insert_dataset out of range, edit dropped");
        return next;
    }

    let rows = next.labels.len();
    let mut series = Dataset::empty(String::new(), rows);
    match shape.class() {
        ShapeClass::Series => {
            let base = colors.next_color();
            series.background_color = SeriesColor::Scalar(base);
            series.border_color = SeriesColor::Scalar(base.with_alpha(1.0));
        }
        ShapeClass::Segmented => {
            let segments = colors.next_colors(rows);
            series.border_color =
                SeriesColor::PerSegment(segments.iter().map(|c| c.with_alpha(1.0)).collect());
            series.background_color = SeriesColor::PerSegment(segments);
        }
    }
    next.datasets.insert(at, series);
    debug!(at, datasets = next.datasets.len(), "inserted dataset");
    next
}

/// Removes the dataset at `at`. Rejected when it would drop the count to zero.
#[must_use]
pub fn remove_dataset(data: &ChartData, at: usize) -> ChartData {
    let mut next = data.clone();
    if next.datasets.len() <= 1 || at >= next.datasets.len() {
        trace!(
            at,
            datasets = next.datasets.len(),
            "remove_dataset floored, edit dropped"
        );
        return next;
    }

    next.datasets.remove(at);
    debug!(at, datasets = next.datasets.len(), "removed dataset");
    next
}

/// Clones the dataset at `at`, inserting the copy immediately after.
#[must_use]
pub fn duplicate_dataset(data: &ChartData, at: usize) -> ChartData {
    let mut next = data.clone();
    if at >= next.datasets.len() {
        trace!(at, "duplicate_dataset out of range, edit dropped");
        return next;
    }

    let copy = next.datasets[at].clone();
    next.datasets.insert(at + 1, copy);
    debug!(at, datasets = next.datasets.len(), "duplicated dataset");
    next
}
