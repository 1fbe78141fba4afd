use chartdoc_rs::core::{
    ChartData, ChartOptions, Color, ColorSource, DataCell, Dataset, SeriesColor, ShapeTag,
    value_path,
};
use chartdoc_rs::edit::set_style_field;
use chartdoc_rs::transform::transform;

struct SeqColorSource(u8);

impl ColorSource for SeqColorSource {
    fn next_colors(&mut self, count: usize) -> Vec<Color> {
        (0..count)
            .map(|_| {
                self.0 = self.0.wrapping_add(1);
                Color::rgba(self.0, 0, 0, 0.8)
            })
            .collect()
    }
}

fn bar_data(datasets: usize) -> ChartData {
    let labels: Vec<String> = ["1", "2", "3"].iter().map(|s| s.to_string()).collect();
    let datasets = (0..datasets)
        .map(|i| {
            let mut dataset = Dataset::empty(format!("Dataset {}", i + 1), labels.len());
            dataset.data = vec![
                Some(DataCell::Number(5.0)),
                None,
                Some(DataCell::Number(7.0)),
            ];
            dataset.background_color =
                SeriesColor::Scalar(Color::rgba(50 + i as u8, 100, 150, 0.5));
            dataset.border_color = SeriesColor::Scalar(Color::rgba(50 + i as u8, 100, 150, 1.0));
            dataset
        })
        .collect();
    ChartData {
        labels,
        datasets,
    }
}

#[test]
fn bar_to_line_preserves_cartesian_intent() {
    let data = bar_data(1);
    let mut options = ChartOptions::default_for(ShapeTag::Bar);
    options = set_style_field(&options, "scales.y.stacked", serde_json::json!(true));
    options = set_style_field(&options, "scales.x.grid.display", serde_json::json!(false));

    let mut colors = SeqColorSource(0);
    let (line_data, line_options) =
        transform(ShapeTag::Bar, ShapeTag::Line, &data, &options, &mut colors);

    assert_eq!(line_options.shape(), ShapeTag::Line);
    let tree = line_options.to_value();
    assert_eq!(tree["scales"]["y"]["stacked"], true);
    assert_eq!(tree["scales"]["x"]["grid"]["display"], false);
    // The source had no step size, so the target default (absent) wins.
    assert_eq!(value_path::get(&tree, "scales.y.ticks.stepSize"), None);

    assert_eq!(line_data.labels, data.labels);
    assert_eq!(line_data.datasets[0].data, data.datasets[0].data);
}

#[test]
fn bar_to_pie_reconciles_scalar_colors_into_segments() {
    let data = bar_data(2);
    let options = ChartOptions::default_for(ShapeTag::Bar);
    let mut colors = SeqColorSource(0);

    let (pie_data, pie_options) =
        transform(ShapeTag::Bar, ShapeTag::Pie, &data, &options, &mut colors);

    assert_eq!(pie_options.shape(), ShapeTag::Pie);

    // Dataset 0: keeps its color at segment 0, fresh colors share its alpha.
    match &pie_data.datasets[0].background_color {
        SeriesColor::PerSegment(segments) => {
            assert_eq!(segments.len(), 3);
            assert_eq!(segments[0], Color::rgba(50, 100, 150, 0.5));
            assert_eq!(segments[1], Color::rgba(1, 0, 0, 0.5));
            assert_eq!(segments[2], Color::rgba(2, 0, 0, 0.5));
        }
        SeriesColor::Scalar(_) => panic!("expected per-segment colors"),
    }

    // Dataset 1: broadcasts its own scalar.
    assert_eq!(
        pie_data.datasets[1].background_color,
        SeriesColor::PerSegment(vec![Color::rgba(51, 100, 150, 0.5); 3])
    );
}

#[test]
fn pie_to_bar_collapses_to_the_first_segment_color() {
    let mut dataset = Dataset::empty("Dataset 1", 2);
    dataset.data = vec![Some(DataCell::Number(1.0)), Some(DataCell::Number(2.0))];
    dataset.background_color =
        SeriesColor::PerSegment(vec![Color::rgb(11, 11, 11), Color::rgb(22, 22, 22)]);
    dataset.border_color =
        SeriesColor::PerSegment(vec![Color::rgb(33, 33, 33), Color::rgb(44, 44, 44)]);
    let data = ChartData {
        labels: vec!["a".into(), "b".into()],
        datasets: vec![dataset],
    };
    let options = ChartOptions::default_for(ShapeTag::Pie);
    let mut colors = SeqColorSource(0);

    let (bar_data, _) = transform(ShapeTag::Pie, ShapeTag::Bar, &data, &options, &mut colors);
    assert_eq!(
        bar_data.datasets[0].background_color,
        SeriesColor::Scalar(Color::rgb(11, 11, 11))
    );
    assert_eq!(
        bar_data.datasets[0].border_color,
        SeriesColor::Scalar(Color::rgb(33, 33, 33))
    );
}

#[test]
fn cartesian_settings_survive_a_radar_round_trip_where_expressible() {
    let data = bar_data(1);
    let mut options = ChartOptions::default_for(ShapeTag::Bar);
    options = set_style_field(&options, "scales.y.grid.display", serde_json::json!(false));
    options = set_style_field(&options, "scales.y.ticks.stepSize", serde_json::json!(5));

    let mut colors = SeqColorSource(0);
    let (radar_data, radar_options) =
        transform(ShapeTag::Bar, ShapeTag::Radar, &data, &options, &mut colors);
    let tree = radar_options.to_value();
    assert_eq!(tree["scales"]["r"]["grid"]["display"], false);
    assert_eq!(tree["scales"]["r"]["ticks"]["stepSize"], 5.0);

    let (_, bar_again) = transform(
        ShapeTag::Radar,
        ShapeTag::Bar,
        &radar_data,
        &radar_options,
        &mut colors,
    );
    let tree = bar_again.to_value();
    assert_eq!(tree["scales"]["y"]["grid"]["display"], false);
    assert_eq!(tree["scales"]["y"]["ticks"]["stepSize"], 5.0);
}

#[test]
fn line_tension_is_canonicalized_and_dropped_for_bars() {
    let mut data = bar_data(1);
    data.datasets[0].line_tension = Some(0.4);
    let options = ChartOptions::default_for(ShapeTag::Line);
    let mut colors = SeqColorSource(0);

    let (line_data, _) = transform(ShapeTag::Line, ShapeTag::Radar, &data, &options, &mut colors);
    assert_eq!(line_data.datasets[0].tension, Some(0.4));
    assert_eq!(line_data.datasets[0].line_tension, None);

    let (bar_data, _) = transform(ShapeTag::Line, ShapeTag::Bar, &data, &options, &mut colors);
    assert_eq!(bar_data.datasets[0].tension, None);
    assert_eq!(bar_data.datasets[0].line_tension, None);
}

#[test]
fn identity_transform_returns_the_documents_unchanged() {
    let data = bar_data(2);
    let options = ChartOptions::default_for(ShapeTag::Bar);
    let mut colors = SeqColorSource(0);

    let (same_data, same_options) =
        transform(ShapeTag::Bar, ShapeTag::Bar, &data, &options, &mut colors);
    assert_eq!(same_data, data);
    assert_eq!(same_options, options);
}

#[test]
fn mismatched_source_options_reset_to_target_defaults() {
    let data = bar_data(1);
    // Options tagged as pie while the caller claims bar: untrusted input.
    let options = ChartOptions::default_for(ShapeTag::Pie);
    let mut colors = SeqColorSource(0);

    let (reset_data, reset_options) =
        transform(ShapeTag::Bar, ShapeTag::Line, &data, &options, &mut colors);
    assert_eq!(reset_options, ChartOptions::default_for(ShapeTag::Line));
    assert!(reset_data.is_materialized());
    assert_eq!(reset_data.labels, vec!["1", "2", "3"]);
}

#[test]
fn pie_layout_padding_survives_between_segmented_shapes() {
    let data = bar_data(1);
    let mut options = ChartOptions::default_for(ShapeTag::Pie);
    options = set_style_field(&options, "layout.padding", serde_json::json!(32));

    let mut colors = SeqColorSource(0);
    let (_, polar) = transform(
        ShapeTag::Pie,
        ShapeTag::PolarArea,
        &data,
        &options,
        &mut colors,
    );
    // Polar has no layout block, so padding is lost there...
    assert_eq!(value_path::get(&polar.to_value(), "layout.padding"), None);

    let (_, pie_again) = transform(ShapeTag::PolarArea, ShapeTag::Pie, &data, &polar, &mut colors);
    // ...and re-entering pie falls back to the default padding.
    assert_eq!(pie_again.to_value()["layout"]["padding"], 20.0);
}
