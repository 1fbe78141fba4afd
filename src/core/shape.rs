use serde::{Deserialize, Serialize};

/// One of the five supported chart kinds, each with its own options schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeTag {
    #[serde(rename = "bar")]
    Bar,
    #[serde(rename = "line")]
    Line,
    #[serde(rename = "pie")]
    Pie,
    #[serde(rename = "polarArea")]
    PolarArea,
    #[serde(rename = "radar")]
    Radar,
}

/// How a shape represents per-series color.
///
/// `Series` shapes carry one scalar color per dataset; `Segmented` shapes
/// carry a color per row, aligned with `labels`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeClass {
    Series,
    Segmented,
}

impl ShapeTag {
    pub const ALL: [ShapeTag; 5] = [
        ShapeTag::Bar,
        ShapeTag::Line,
        ShapeTag::Pie,
        ShapeTag::PolarArea,
        ShapeTag::Radar,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ShapeTag::Bar => "bar",
            ShapeTag::Line => "line",
            ShapeTag::Pie => "pie",
            ShapeTag::PolarArea => "polarArea",
            ShapeTag::Radar => "radar",
        }
    }

    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "bar" => Some(ShapeTag::Bar),
            "line" => Some(ShapeTag::Line),
            "pie" => Some(ShapeTag::Pie),
            "polarArea" => Some(ShapeTag::PolarArea),
            "radar" => Some(ShapeTag::Radar),
            _ => None,
        }
    }

    #[must_use]
    pub fn class(self) -> ShapeClass {
        match self {
            ShapeTag::Pie | ShapeTag::PolarArea => ShapeClass::Segmented,
            ShapeTag::Bar | ShapeTag::Line | ShapeTag::Radar => ShapeClass::Series,
        }
    }

    /// Whether datasets of this shape carry a curve/tension property.
    #[must_use]
    pub fn has_curve(self) -> bool {
        matches!(self, ShapeTag::Line | ShapeTag::Radar)
    }
}
