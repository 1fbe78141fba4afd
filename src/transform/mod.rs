//! The shape-to-shape transform engine.
//!
//! Converts a document pair from one chart shape to another, preserving as
//! much user intent as the target shape's model can express. The options tree
//! is rebuilt by running the target shape's field-mapping table over the
//! source document and merging onto the target's default document, so every
//! required path exists even when the source had none of the candidates. The
//! result is deterministic: the only injected state is the color source, which
//! tests pin.

mod mappings;
mod series_style;

use tracing::{debug, warn};

use crate::core::{ChartData, ChartDocument, ChartOptions, ColorSource, ShapeTag, value_path};

pub use mappings::{FieldMapping, mapping_for};
pub use series_style::reconcile_dataset;

/// Converts `(data, options)` from shape `from` to shape `to`.
///
/// Total: every input combination yields a valid target document, falling back
/// to the target's defaults where the source cannot be read. Identity pairs
/// return clones.
#[must_use]
pub fn transform(
    from: ShapeTag,
    to: ShapeTag,
    data: &ChartData,
    options: &ChartOptions,
    colors: &mut dyn ColorSource,
) -> (ChartData, ChartOptions) {
    if from == to {
        return (data.clone(), options.clone());
    }

    if options.shape() != from {
        // Closed shape set; a mismatched tag means the source pair cannot be
        // trusted, so reset to the target's default document wholesale.
        warn!(
            from = from.as_str(),
            to = to.as_str(),
            actual = options.shape().as_str(),
            "source options do not match the source shape, resetting to target defaults"
        );
        let reset = ChartDocument::new(to).materialized(colors);
        return (reset.data, reset.options);
    }

    let next_options = transform_options(from, to, options);
    let next_data = transform_data(from, to, data, colors);
    debug!(
        from = from.as_str(),
        to = to.as_str(),
        datasets = next_data.dataset_count(),
        "transformed document"
    );
    (next_data, next_options)
}

fn transform_options(from: ShapeTag, to: ShapeTag, options: &ChartOptions) -> ChartOptions {
    let source = options.to_value();
    let mut target = ChartOptions::default_for(to).to_value();

    for mapping in mapping_for(to) {
        let found = mapping
            .sources
            .iter()
            .find_map(|path| value_path::get(&source, path));
        if let Some(value) = found {
            value_path::set(&mut target, mapping.target, value.clone());
        }
    }

    match ChartOptions::from_value(to, target) {
        Ok(next) => next,
        Err(error) => {
            // Mapped source values conflicting with the target schema degrade
            // to the default tree rather than failing the transform.
            warn!(
                from = from.as_str(),
                to = to.as_str(),
                %error,
                "mapped options rejected by target schema, using defaults"
            );
            ChartOptions::default_for(to)
        }
    }
}

fn transform_data(
    from: ShapeTag,
    to: ShapeTag,
    data: &ChartData,
    colors: &mut dyn ColorSource,
) -> ChartData {
    let rows = data.row_count();
    ChartData {
        labels: data.labels.clone(),
        datasets: data
            .datasets
            .iter()
            .enumerate()
            .map(|(index, dataset)| reconcile_dataset(dataset, index, from, to, rows, colors))
            .collect(),
    }
}
