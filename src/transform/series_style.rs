use crate::core::{Color, ColorSource, Dataset, SeriesColor, ShapeClass, ShapeTag};

/// Rebuilds one dataset's styling for the target shape. Values and labels are
/// copied verbatim; colors are reconciled between scalar and per-segment
/// representations; the curve property is canonicalized.
#[must_use]
pub fn reconcile_dataset(
    source: &Dataset,
    index: usize,
    from: ShapeTag,
    to: ShapeTag,
    rows: usize,
    colors: &mut dyn ColorSource,
) -> Dataset {
    let mut target = source.clone();

    if from.class() != to.class() {
        match to.class() {
            ShapeClass::Segmented => {
                target.background_color =
                    broadcast_scalar(&source.background_color, index, rows, colors);
                target.border_color = broadcast_border(&source.border_color, rows);
            }
            ShapeClass::Series => {
                target.background_color = collapse_to_scalar(&source.background_color);
                target.border_color = collapse_to_scalar(&source.border_color);
            }
        }
    }

    // Only one canonical curve name survives; shapes without curves drop both.
    target.tension = if to.has_curve() {
        source.tension.or(source.line_tension)
    } else {
        None
    };
    target.line_tension = None;

    if !to.has_curve() {
        target.fill = None;
        target.point_style = None;
    }
    if to != ShapeTag::Pie {
        target.cutout = None;
    }

    target
}

/// Scalar → per-segment reconciliation.
///
/// Dataset 0 keeps its own color for segment 0 and receives freshly generated
/// colors for the rest, sharing dataset 0's alpha channel. Every other dataset
/// broadcasts its scalar to all segments.
fn broadcast_scalar(
    color: &SeriesColor,
    index: usize,
    rows: usize,
    colors: &mut dyn ColorSource,
) -> SeriesColor {
    let base = color.first().unwrap_or_else(Color::placeholder);
    if index == 0 {
        let mut segments = Vec::with_capacity(rows);
        segments.push(base);
        segments.extend(
            colors
                .next_colors(rows.saturating_sub(1))
                .into_iter()
                .map(|c| c.with_alpha(base.a)),
        );
        SeriesColor::PerSegment(segments)
    } else {
        SeriesColor::PerSegment(vec![base; rows])
    }
}

fn broadcast_border(color: &SeriesColor, rows: usize) -> SeriesColor {
    let base = color.first().unwrap_or_else(Color::placeholder);
    SeriesColor::PerSegment(vec![base; rows])
}

/// Per-segment → scalar reconciliation: the color at index 0 wins.
fn collapse_to_scalar(color: &SeriesColor) -> SeriesColor {
    SeriesColor::Scalar(color.first().unwrap_or_else(Color::placeholder))
}

#[cfg(test)]
mod tests {
    use crate::core::{Color, ColorSource, Dataset, SeriesColor, ShapeTag};

    use super::reconcile_dataset;

    struct FixedSource(Color);

    impl ColorSource for FixedSource {
        fn next_colors(&mut self, count: usize) -> Vec<Color> {
            vec![self.0; count]
        }
    }

    fn series_dataset(color: Color) -> Dataset {
        let mut dataset = Dataset::empty("s", 3);
        dataset.background_color = SeriesColor::Scalar(color);
        dataset.border_color = SeriesColor::Scalar(color.with_alpha(1.0));
        dataset
    }

    #[test]
    fn dataset_zero_keeps_its_color_and_shares_alpha() {
        let owned = Color::rgba(10, 20, 30, 0.5);
        let fresh = Color::rgba(200, 100, 50, 0.9);
        let mut colors = FixedSource(fresh);

        let out = reconcile_dataset(
            &series_dataset(owned),
            0,
            ShapeTag::Bar,
            ShapeTag::Pie,
            3,
            &mut colors,
        );
        match out.background_color {
            SeriesColor::PerSegment(segments) => {
                assert_eq!(segments[0], owned);
                assert_eq!(segments[1], fresh.with_alpha(0.5));
                assert_eq!(segments[2], fresh.with_alpha(0.5));
            }
            SeriesColor::Scalar(_) => panic!("expected per-segment colors"),
        }
    }

    #[test]
    fn later_datasets_broadcast_their_scalar() {
        let owned = Color::rgba(10, 20, 30, 0.5);
        let mut colors = FixedSource(Color::rgb(1, 2, 3));

        let out = reconcile_dataset(
            &series_dataset(owned),
            1,
            ShapeTag::Bar,
            ShapeTag::PolarArea,
            3,
            &mut colors,
        );
        assert_eq!(
            out.background_color,
            SeriesColor::PerSegment(vec![owned; 3])
        );
    }

    #[test]
    fn segmented_to_series_takes_index_zero() {
        let mut dataset = Dataset::empty("s", 2);
        dataset.background_color = SeriesColor::PerSegment(vec![
            Color::rgb(1, 1, 1),
            Color::rgb(2, 2, 2),
        ]);
        let mut colors = FixedSource(Color::rgb(9, 9, 9));

        let out = reconcile_dataset(&dataset, 0, ShapeTag::Pie, ShapeTag::Bar, 2, &mut colors);
        assert_eq!(out.background_color, SeriesColor::Scalar(Color::rgb(1, 1, 1)));
    }

    #[test]
    fn curve_name_is_canonicalized() {
        let mut dataset = Dataset::empty("s", 2);
        dataset.line_tension = Some(0.4);
        let mut colors = FixedSource(Color::rgb(9, 9, 9));

        let line = reconcile_dataset(&dataset, 0, ShapeTag::Bar, ShapeTag::Line, 2, &mut colors);
        assert_eq!(line.tension, Some(0.4));
        assert_eq!(line.line_tension, None);

        let bar = reconcile_dataset(&dataset, 0, ShapeTag::Line, ShapeTag::Bar, 2, &mut colors);
        assert_eq!(bar.tension, None);
        assert_eq!(bar.line_tension, None);
    }
}
