use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::debug;

use super::color::ColorSource;
use super::data::{ChartData, DataCell, SeriesColor};
use super::options::ChartOptions;
use super::shape::{ShapeClass, ShapeTag};

/// Deterministic values substituted for `generate` placeholder cells.
const SAMPLE_VALUES: [f64; 10] = [12.0, 19.0, 8.0, 15.0, 6.0, 11.0, 17.0, 4.0, 9.0, 14.0];

/// One chart's document pair plus its shape tag. A single editing session owns
/// exactly one `ChartDocument`; every mutation produces a new instance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDocument {
    pub shape: ShapeTag,
    pub data: ChartData,
    pub options: ChartOptions,
}

impl ChartDocument {
    /// The shape's default document pair, with `generate` placeholder cells
    /// still in place.
    #[must_use]
    pub fn new(shape: ShapeTag) -> Self {
        Self {
            shape,
            data: ChartData::template(shape),
            options: ChartOptions::default_for(shape),
        }
    }

    #[must_use]
    pub fn is_materialized(&self) -> bool {
        self.data.is_materialized()
    }

    /// Replaces `generate` placeholder cells with synthesized values and draws
    /// fresh styling from `colors` for the affected datasets.
    ///
    /// Idempotent: a document without placeholder cells is returned unchanged.
    #[must_use]
    pub fn materialized(&self, colors: &mut dyn ColorSource) -> Self {
        if self.is_materialized() {
            return self.clone();
        }

        let rows = self.data.row_count();
        let mut data = self.data.clone();
        for (index, dataset) in data.datasets.iter_mut().enumerate() {
            if !dataset.needs_materialization() {
                continue;
            }

            match self.shape.class() {
                ShapeClass::Series => {
                    let base = colors.next_color();
                    dataset.background_color = SeriesColor::Scalar(base);
                    dataset.border_color = SeriesColor::Scalar(base.with_alpha(1.0));
                }
                ShapeClass::Segmented => {
                    let segments = colors.next_colors(rows);
                    dataset.border_color =
                        SeriesColor::PerSegment(segments.iter().map(|c| c.with_alpha(1.0)).collect());
                    dataset.background_color = SeriesColor::PerSegment(segments);
                }
            }

            for (row, cell) in dataset.data.iter_mut().enumerate() {
                if matches!(cell, Some(DataCell::Generate)) {
                    let value = SAMPLE_VALUES[(index * 3 + row) % SAMPLE_VALUES.len()];
                    *cell = Some(DataCell::Number(value));
                }
            }
        }

        debug!(shape = self.shape.as_str(), rows, "materialized placeholder document");
        Self {
            shape: self.shape,
            data,
            options: self.options.clone(),
        }
    }
}

#[derive(Deserialize)]
struct RawDocument {
    shape: ShapeTag,
    data: ChartData,
    options: Value,
}

impl<'de> Deserialize<'de> for ChartDocument {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawDocument::deserialize(deserializer)?;
        let options =
            ChartOptions::from_value(raw.shape, raw.options).map_err(serde::de::Error::custom)?;
        Ok(Self {
            shape: raw.shape,
            data: raw.data,
            options,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::core::{ChartDocument, DataCell, PaletteColorSource, SeriesColor, ShapeTag};

    #[test]
    fn materialization_replaces_placeholders_exactly_once() {
        let mut colors = PaletteColorSource::new();
        let doc = ChartDocument::new(ShapeTag::Bar);
        assert!(!doc.is_materialized());

        let materialized = doc.materialized(&mut colors);
        assert!(materialized.is_materialized());
        for cell in &materialized.data.datasets[0].data {
            assert!(matches!(cell, Some(DataCell::Number(_))));
        }

        let again = materialized.materialized(&mut colors);
        assert_eq!(again, materialized);
    }

    #[test]
    fn segmented_shapes_materialize_per_row_colors() {
        let mut colors = PaletteColorSource::new();
        let doc = ChartDocument::new(ShapeTag::Pie).materialized(&mut colors);
        match &doc.data.datasets[0].background_color {
            SeriesColor::PerSegment(segments) => {
                assert_eq!(segments.len(), doc.data.labels.len());
            }
            SeriesColor::Scalar(_) => panic!("pie datasets must carry per-segment colors"),
        }
    }
}
