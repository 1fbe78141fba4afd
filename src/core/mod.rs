mod color;
mod data;
mod document;
mod options;
mod shape;
mod validate;
pub mod value_path;

pub use color::{Color, ColorSource, PaletteColorSource};
pub use data::{ChartData, DataCell, Dataset, SeriesColor};
pub use document::ChartDocument;
pub use options::{
    AxisTicks, CartesianAxis, CartesianOptions, ChartOptions, GridLineOptions, LayoutOptions,
    LegendOptions, PieOptions, RadialAxis, RadialOptions, ToggleOptions, TooltipOptions,
};
pub use shape::{ShapeClass, ShapeTag};
pub use validate::{Violation, validate};
