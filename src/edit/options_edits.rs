use serde_json::Value;
use tracing::trace;

use crate::core::{ChartOptions, value_path};

/// Sets an options field addressed by a dotted path, creating intermediate
/// objects along the way. Unknown paths land in the pass-through maps; a
/// value that conflicts with the shape's schema (for example a string where a
/// boolean lives) leaves the document unchanged.
#[must_use]
pub fn set_style_field(options: &ChartOptions, path: &str, value: Value) -> ChartOptions {
    let shape = options.shape();
    let mut tree = options.to_value();
    value_path::set(&mut tree, path, value);
    match ChartOptions::from_value(shape, tree) {
        Ok(next) => next,
        Err(error) => {
            trace!(path, %error, "style edit conflicts with shape schema, edit dropped");
            options.clone()
        }
    }
}
