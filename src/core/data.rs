use std::fmt;

use indexmap::IndexMap;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::color::Color;
use super::shape::{ShapeClass, ShapeTag};

/// A single data cell.
///
/// `Generate` is the placeholder the host writes into freshly instantiated
/// documents; it is replaced exactly once when the document is materialized.
/// On the wire it is the literal string `"generate"`; numbers serialize as
/// plain JSON numbers. Empty cells are `null` and modeled as `Option::None`
/// at the `Vec` level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DataCell {
    Number(f64),
    Generate,
}

impl DataCell {
    #[must_use]
    pub fn number(self) -> Option<f64> {
        match self {
            DataCell::Number(value) => Some(value),
            DataCell::Generate => None,
        }
    }
}

impl Serialize for DataCell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DataCell::Number(value) => serializer.serialize_f64(*value),
            DataCell::Generate => serializer.serialize_str("generate"),
        }
    }
}

impl<'de> Deserialize<'de> for DataCell {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct CellVisitor;

        impl Visitor<'_> for CellVisitor {
            type Value = DataCell;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a number or the string \"generate\"")
            }

            fn visit_f64<E: de::Error>(self, value: f64) -> Result<DataCell, E> {
                Ok(DataCell::Number(value))
            }

            fn visit_i64<E: de::Error>(self, value: i64) -> Result<DataCell, E> {
                Ok(DataCell::Number(value as f64))
            }

            fn visit_u64<E: de::Error>(self, value: u64) -> Result<DataCell, E> {
                Ok(DataCell::Number(value as f64))
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<DataCell, E> {
                if value == "generate" {
                    Ok(DataCell::Generate)
                } else {
                    Err(E::custom(format!("unrecognized data cell: {value:?}")))
                }
            }
        }

        deserializer.deserialize_any(CellVisitor)
    }
}

/// Per-series color representation.
///
/// `Series` shapes store one scalar per dataset; `Segmented` shapes store one
/// color per row. On the wire this is a string or an array of strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SeriesColor {
    Scalar(Color),
    PerSegment(Vec<Color>),
}

impl SeriesColor {
    /// The scalar a `Series` shape would read: the color itself, or the first
    /// segment of an array.
    #[must_use]
    pub fn first(&self) -> Option<Color> {
        match self {
            SeriesColor::Scalar(color) => Some(*color),
            SeriesColor::PerSegment(colors) => colors.first().copied(),
        }
    }

    #[must_use]
    pub fn matches_class(&self, class: ShapeClass) -> bool {
        matches!(
            (self, class),
            (SeriesColor::Scalar(_), ShapeClass::Series)
                | (SeriesColor::PerSegment(_), ShapeClass::Segmented)
        )
    }
}

fn default_background() -> SeriesColor {
    SeriesColor::Scalar(Color::placeholder())
}

fn default_border() -> SeriesColor {
    SeriesColor::Scalar(Color::placeholder().with_alpha(1.0))
}

/// One named series of values, one per label/row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub data: Vec<Option<DataCell>>,
    #[serde(default = "default_background")]
    pub background_color: SeriesColor,
    #[serde(default = "default_border")]
    pub border_color: SeriesColor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point_style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_tension: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cutout: Option<String>,
    /// Style keys this crate does not interpret; preserved across round trips.
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

impl Dataset {
    /// A dataset of `rows` null cells with placeholder styling.
    #[must_use]
    pub fn empty(label: impl Into<String>, rows: usize) -> Self {
        Self {
            label: label.into(),
            data: vec![None; rows],
            background_color: default_background(),
            border_color: default_border(),
            border_width: None,
            point_style: None,
            tension: None,
            line_tension: None,
            fill: None,
            cutout: None,
            extra: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn needs_materialization(&self) -> bool {
        self.data
            .iter()
            .any(|cell| matches!(cell, Some(DataCell::Generate)))
    }
}

/// The chart's underlying data: labeled rows crossed with named series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub datasets: Vec<Dataset>,
}

impl ChartData {
    /// The default document template for a freshly instantiated chart block:
    /// three rows, one dataset, `generate` placeholder cells.
    #[must_use]
    pub fn template(_shape: ShapeTag) -> Self {
        let labels: Vec<String> = (1..=3).map(|i| i.to_string()).collect();
        let mut dataset = Dataset::empty("Dataset 1", labels.len());
        dataset.data = vec![Some(DataCell::Generate); labels.len()];
        Self {
            labels,
            datasets: vec![dataset],
        }
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn dataset_count(&self) -> usize {
        self.datasets.len()
    }

    #[must_use]
    pub fn is_materialized(&self) -> bool {
        !self.datasets.iter().any(Dataset::needs_materialization)
    }
}
