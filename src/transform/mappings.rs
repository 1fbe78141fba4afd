use crate::core::ShapeTag;

/// One target field with its prioritized source-lookup chain. The first
/// candidate present in the source document wins; when none is present the
/// target shape's default document supplies the value (or leaves the path
/// absent for optional fields).
#[derive(Debug, Clone, Copy)]
pub struct FieldMapping {
    pub target: &'static str,
    pub sources: &'static [&'static str],
}

const fn mapping(target: &'static str, sources: &'static [&'static str]) -> FieldMapping {
    FieldMapping { target, sources }
}

#[cfg(test)]
const LEGEND_MAPPINGS: [FieldMapping; 3] = [
    mapping("plugins.legend.display", &["plugins.legend.display"]),
    mapping("plugins.legend.position", &["plugins.legend.position"]),
    mapping("plugins.legend.align", &["plugins.legend.align"]),
];

const CARTESIAN_MAPPINGS: [FieldMapping; 12] = [
    mapping("indexAxis", &["indexAxis"]),
    mapping(
        "scales.x.grid.display",
        &["scales.x.grid.display", "scales.r.angleLines.display"],
    ),
    mapping("scales.x.stacked", &["scales.x.stacked"]),
    mapping(
        "scales.y.grid.display",
        &["scales.y.grid.display", "scales.r.grid.display"],
    ),
    mapping("scales.y.stacked", &["scales.y.stacked", "scales.r.stacked"]),
    mapping("scales.y.min", &["scales.y.min", "scales.r.min"]),
    mapping("scales.y.max", &["scales.y.max", "scales.r.max"]),
    mapping(
        "scales.y.ticks.stepSize",
        &["scales.y.ticks.stepSize", "scales.r.ticks.stepSize"],
    ),
    mapping("plugins.legend.display", &["plugins.legend.display"]),
    mapping("plugins.legend.position", &["plugins.legend.position"]),
    mapping("plugins.legend.align", &["plugins.legend.align"]),
    mapping("plugins.tooltip.enabled", &["plugins.tooltip.enabled"]),
];

const PIE_MAPPINGS: [FieldMapping; 4] = [
    mapping("plugins.legend.display", &["plugins.legend.display"]),
    mapping("plugins.legend.position", &["plugins.legend.position"]),
    mapping("plugins.legend.align", &["plugins.legend.align"]),
    mapping("layout.padding", &["layout.padding"]),
];

const RADIAL_MAPPINGS: [FieldMapping; 11] = [
    mapping(
        "scales.r.grid.display",
        &["scales.r.grid.display", "scales.y.grid.display"],
    ),
    mapping("scales.r.ticks.display", &["scales.r.ticks.display"]),
    mapping(
        "scales.r.ticks.stepSize",
        &["scales.r.ticks.stepSize", "scales.y.ticks.stepSize"],
    ),
    mapping(
        "scales.r.angleLines.display",
        &["scales.r.angleLines.display", "scales.x.grid.display"],
    ),
    mapping("scales.r.pointLabels.display", &["scales.r.pointLabels.display"]),
    mapping("scales.r.min", &["scales.r.min", "scales.y.min"]),
    mapping("scales.r.max", &["scales.r.max", "scales.y.max"]),
    mapping("scales.r.suggestedMin", &["scales.r.suggestedMin"]),
    mapping("plugins.legend.display", &["plugins.legend.display"]),
    mapping("plugins.legend.position", &["plugins.legend.position"]),
    mapping("plugins.legend.align", &["plugins.legend.align"]),
];

/// The field-mapping table for a target shape.
#[must_use]
pub fn mapping_for(target: ShapeTag) -> &'static [FieldMapping] {
    match target {
        ShapeTag::Bar | ShapeTag::Line => &CARTESIAN_MAPPINGS,
        ShapeTag::Pie => &PIE_MAPPINGS,
        ShapeTag::PolarArea | ShapeTag::Radar => &RADIAL_MAPPINGS,
    }
}
