use std::fmt;

use super::data::SeriesColor;
use super::document::ChartDocument;
use super::shape::ShapeClass;

/// A structural invariant broken by a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    EmptyLabels,
    EmptyDatasets,
    RowLengthMismatch {
        dataset: usize,
        expected: usize,
        actual: usize,
    },
    ColorArityMismatch {
        dataset: usize,
        field: &'static str,
    },
    SegmentCountMismatch {
        dataset: usize,
        field: &'static str,
        expected: usize,
        actual: usize,
    },
    OptionsShapeMismatch,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::EmptyLabels => write!(f, "labels must contain at least one row"),
            Violation::EmptyDatasets => write!(f, "datasets must contain at least one series"),
            Violation::RowLengthMismatch {
                dataset,
                expected,
                actual,
            } => write!(
                f,
                "dataset {dataset} has {actual} cells, expected {expected} (one per label)"
            ),
            Violation::ColorArityMismatch { dataset, field } => write!(
                f,
                "dataset {dataset} field {field} has the wrong color arity for this shape"
            ),
            Violation::SegmentCountMismatch {
                dataset,
                field,
                expected,
                actual,
            } => write!(
                f,
                "dataset {dataset} field {field} has {actual} segment colors, expected {expected}"
            ),
            Violation::OptionsShapeMismatch => {
                write!(f, "options tree does not match the document shape")
            }
        }
    }
}

/// Checks every structural invariant; an empty result means the document is
/// valid. No side effects; intended for tests and debug builds.
#[must_use]
pub fn validate(doc: &ChartDocument) -> Vec<Violation> {
    let mut violations = Vec::new();
    let rows = doc.data.row_count();

    if rows == 0 {
        violations.push(Violation::EmptyLabels);
    }
    if doc.data.datasets.is_empty() {
        violations.push(Violation::EmptyDatasets);
    }
    if doc.options.shape() != doc.shape {
        violations.push(Violation::OptionsShapeMismatch);
    }

    let class = doc.shape.class();
    for (index, dataset) in doc.data.datasets.iter().enumerate() {
        if dataset.data.len() != rows {
            violations.push(Violation::RowLengthMismatch {
                dataset: index,
                expected: rows,
                actual: dataset.data.len(),
            });
        }

        for (field, color) in [
            ("backgroundColor", &dataset.background_color),
            ("borderColor", &dataset.border_color),
        ] {
            if !color.matches_class(class) {
                violations.push(Violation::ColorArityMismatch {
                    dataset: index,
                    field,
                });
            } else if let SeriesColor::PerSegment(segments) = color {
                if class == ShapeClass::Segmented && segments.len() != rows {
                    violations.push(Violation::SegmentCountMismatch {
                        dataset: index,
                        field,
                        expected: rows,
                        actual: segments.len(),
                    });
                }
            }
        }
    }

    violations
}
