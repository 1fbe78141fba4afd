use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{DocError, DocResult};

use super::shape::ShapeTag;

fn default_true() -> bool {
    true
}

fn default_legend_position() -> String {
    "top".to_owned()
}

fn default_legend_align() -> String {
    "center".to_owned()
}

fn default_pie_padding() -> f64 {
    20.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridLineOptions {
    #[serde(default = "default_true")]
    pub display: bool,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl Default for GridLineOptions {
    fn default() -> Self {
        Self {
            display: true,
            extra: IndexMap::new(),
        }
    }
}

/// Tick configuration shared by cartesian and radial axes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisTicks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_size: Option<f64>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// A bare `{ display }` subtree (`angleLines`, `pointLabels`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleOptions {
    #[serde(default = "default_true")]
    pub display: bool,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl Default for ToggleOptions {
    fn default() -> Self {
        Self {
            display: true,
            extra: IndexMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartesianAxis {
    #[serde(default)]
    pub grid: GridLineOptions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stacked: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticks: Option<AxisTicks>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartesianScales {
    #[serde(default)]
    pub x: CartesianAxis,
    #[serde(default)]
    pub y: CartesianAxis,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendOptions {
    #[serde(default = "default_true")]
    pub display: bool,
    #[serde(default = "default_legend_position")]
    pub position: String,
    #[serde(default = "default_legend_align")]
    pub align: String,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl Default for LegendOptions {
    fn default() -> Self {
        Self {
            display: true,
            position: default_legend_position(),
            align: default_legend_align(),
            extra: IndexMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipOptions {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl Default for TooltipOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            extra: IndexMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartesianPlugins {
    #[serde(default)]
    pub legend: LegendOptions,
    #[serde(default)]
    pub tooltip: TooltipOptions,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// Options tree for bar and line charts.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartesianOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_axis: Option<String>,
    #[serde(default)]
    pub scales: CartesianScales,
    #[serde(default)]
    pub plugins: CartesianPlugins,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutOptions {
    #[serde(default = "default_pie_padding")]
    pub padding: f64,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            padding: default_pie_padding(),
            extra: IndexMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PiePlugins {
    #[serde(default)]
    pub legend: LegendOptions,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// Options tree for pie charts.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PieOptions {
    #[serde(default)]
    pub plugins: PiePlugins,
    #[serde(default)]
    pub layout: LayoutOptions,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadialAxis {
    #[serde(default)]
    pub grid: GridLineOptions,
    #[serde(default = "default_radial_ticks")]
    pub ticks: AxisTicks,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angle_lines: Option<ToggleOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point_labels: Option<ToggleOptions>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_min: Option<f64>,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

fn default_radial_ticks() -> AxisTicks {
    AxisTicks {
        display: Some(true),
        step_size: None,
        extra: IndexMap::new(),
    }
}

impl Default for RadialAxis {
    fn default() -> Self {
        Self {
            grid: GridLineOptions::default(),
            ticks: default_radial_ticks(),
            angle_lines: None,
            point_labels: None,
            min: None,
            max: None,
            suggested_min: None,
            extra: IndexMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadialScales {
    #[serde(default)]
    pub r: RadialAxis,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// Options tree for polar-area and radar charts.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RadialOptions {
    #[serde(default)]
    pub scales: RadialScales,
    #[serde(default)]
    pub plugins: PiePlugins,
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

/// Rendering configuration, tagged by shape so the mutation and transform
/// layers operate over a closed, exhaustively matched set of trees.
///
/// The wire form is the bare tree; the shape tag travels separately, so
/// deserialization goes through [`ChartOptions::from_value`] with an explicit
/// shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ChartOptions {
    Bar(CartesianOptions),
    Line(CartesianOptions),
    Pie(PieOptions),
    PolarArea(RadialOptions),
    Radar(RadialOptions),
}

impl ChartOptions {
    #[must_use]
    pub fn shape(&self) -> ShapeTag {
        match self {
            ChartOptions::Bar(_) => ShapeTag::Bar,
            ChartOptions::Line(_) => ShapeTag::Line,
            ChartOptions::Pie(_) => ShapeTag::Pie,
            ChartOptions::PolarArea(_) => ShapeTag::PolarArea,
            ChartOptions::Radar(_) => ShapeTag::Radar,
        }
    }

    /// The default options document for a shape. Every required subtree is
    /// present, so readers never null-check nested paths.
    #[must_use]
    pub fn default_for(shape: ShapeTag) -> Self {
        match shape {
            ShapeTag::Bar => ChartOptions::Bar(CartesianOptions::default()),
            ShapeTag::Line => ChartOptions::Line(CartesianOptions::default()),
            ShapeTag::Pie => ChartOptions::Pie(PieOptions::default()),
            ShapeTag::PolarArea => ChartOptions::PolarArea(RadialOptions::default()),
            ShapeTag::Radar => ChartOptions::Radar(RadialOptions {
                scales: RadialScales {
                    r: RadialAxis {
                        angle_lines: Some(ToggleOptions::default()),
                        point_labels: Some(ToggleOptions::default()),
                        ..RadialAxis::default()
                    },
                    extra: IndexMap::new(),
                },
                ..RadialOptions::default()
            }),
        }
    }

    pub fn from_value(shape: ShapeTag, value: Value) -> DocResult<Self> {
        let mapped = |e: serde_json::Error| {
            DocError::InvalidPayload(format!("{} options: {e}", shape.as_str()))
        };
        Ok(match shape {
            ShapeTag::Bar => ChartOptions::Bar(serde_json::from_value(value).map_err(mapped)?),
            ShapeTag::Line => ChartOptions::Line(serde_json::from_value(value).map_err(mapped)?),
            ShapeTag::Pie => ChartOptions::Pie(serde_json::from_value(value).map_err(mapped)?),
            ShapeTag::PolarArea => {
                ChartOptions::PolarArea(serde_json::from_value(value).map_err(mapped)?)
            }
            ShapeTag::Radar => ChartOptions::Radar(serde_json::from_value(value).map_err(mapped)?),
        })
    }

    /// The tree as a JSON value. Infallible for these types; a serialization
    /// failure degrades to an empty object rather than panicking.
    #[must_use]
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or_else(|_| Value::Object(serde_json::Map::new()))
    }
}
