use chartdoc_rs::core::{
    ChartDocument, Color, ColorSource, PaletteColorSource, SeriesColor, ShapeTag, validate,
};
use chartdoc_rs::edit::{
    duplicate_dataset, duplicate_row, insert_dataset, insert_row, remove_dataset, remove_row,
    set_cell_value, set_label,
};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum EditOp {
    InsertRow(usize),
    RemoveRow(usize),
    DuplicateRow(usize),
    InsertDataset(usize),
    RemoveDataset(usize),
    DuplicateDataset(usize),
    SetCell(usize, usize, String),
    SetLabel(usize, String),
}

fn edit_op() -> impl Strategy<Value = EditOp> {
    prop_oneof![
        (0usize..8).prop_map(EditOp::InsertRow),
        (0usize..8).prop_map(EditOp::RemoveRow),
        (0usize..8).prop_map(EditOp::DuplicateRow),
        (0usize..6).prop_map(EditOp::InsertDataset),
        (0usize..6).prop_map(EditOp::RemoveDataset),
        (0usize..6).prop_map(EditOp::DuplicateDataset),
        (0usize..6, 0usize..8, "[0-9a-z]{0,4}").prop_map(|(d, r, v)| EditOp::SetCell(d, r, v)),
        (0usize..8, "[a-z]{0,6}").prop_map(|(r, v)| EditOp::SetLabel(r, v)),
    ]
}

struct CountingSource(u8);

impl ColorSource for CountingSource {
    fn next_colors(&mut self, count: usize) -> Vec<Color> {
        (0..count)
            .map(|_| {
                self.0 = self.0.wrapping_add(1);
                Color::rgba(self.0, self.0 / 2, self.0 / 3, 0.8)
            })
            .collect()
    }
}

fn apply(doc: &ChartDocument, op: &EditOp, colors: &mut dyn ColorSource) -> ChartDocument {
    let shape = doc.shape;
    let data = match op {
        EditOp::InsertRow(at) => insert_row(&doc.data, *at),
        EditOp::RemoveRow(at) => remove_row(&doc.data, *at),
        EditOp::DuplicateRow(at) => duplicate_row(&doc.data, *at),
        EditOp::InsertDataset(at) => insert_dataset(&doc.data, shape, *at, colors),
        EditOp::RemoveDataset(at) => remove_dataset(&doc.data, *at),
        EditOp::DuplicateDataset(at) => duplicate_dataset(&doc.data, *at),
        EditOp::SetCell(d, r, v) => set_cell_value(&doc.data, *d, *r, v),
        EditOp::SetLabel(r, v) => set_label(&doc.data, *r, v),
    };
    ChartDocument {
        shape,
        data,
        options: doc.options.clone(),
    }
}

proptest! {
    #[test]
    fn row_and_color_invariants_hold_after_every_edit(
        shape_index in 0usize..5,
        ops in proptest::collection::vec(edit_op(), 1..40)
    ) {
        let shape = ShapeTag::ALL[shape_index];
        let mut palette = PaletteColorSource::new();
        let mut doc = ChartDocument::new(shape).materialized(&mut palette);
        let mut colors = CountingSource(0);

        for op in &ops {
            doc = apply(&doc, op, &mut colors);

            let violations = validate(&doc);
            prop_assert!(
                violations.is_empty(),
                "after {:?}: {:?}",
                op,
                violations
            );
            prop_assert!(doc.data.row_count() >= 1);
            prop_assert!(doc.data.dataset_count() >= 1);
            for dataset in &doc.data.datasets {
                prop_assert_eq!(dataset.data.len(), doc.data.row_count());
                if let SeriesColor::PerSegment(segments) = &dataset.background_color {
                    prop_assert_eq!(segments.len(), doc.data.row_count());
                }
            }
        }
    }

    #[test]
    fn rejected_cell_input_never_changes_the_document(
        raw in "[^0-9]*",
        row in 0usize..3
    ) {
        prop_assume!(!raw.trim().is_empty());
        let mut palette = PaletteColorSource::new();
        let doc = ChartDocument::new(ShapeTag::Bar).materialized(&mut palette);
        let next = set_cell_value(&doc.data, 0, row, &raw);
        prop_assert_eq!(next, doc.data);
    }
}
