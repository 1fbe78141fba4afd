use serde_json::Value;
use tracing::debug;

use crate::core::{
    ChartDocument, ColorSource, PaletteColorSource, ShapeTag, Violation, validate,
};
use crate::edit;
use crate::grid::{self, AutoGrow, GridDims, GridNavigator, GridPos, GridSection, NavKey, is_focusable};
use crate::transform::transform;

/// One editing session: owns a document pair, the grid focus machine, and the
/// injected color source. All host edits flow through here so every state
/// change stays a synchronous read-modify-write over documents this session
/// owns exclusively.
pub struct ChartSession {
    document: ChartDocument,
    navigator: GridNavigator,
    colors: Box<dyn ColorSource>,
}

impl ChartSession {
    /// Starts a session on the shape's default document, materializing the
    /// placeholder cells with the default palette.
    #[must_use]
    pub fn new(shape: ShapeTag) -> Self {
        Self::with_color_source(shape, Box::new(PaletteColorSource::new()))
    }

    #[must_use]
    pub fn with_color_source(shape: ShapeTag, colors: Box<dyn ColorSource>) -> Self {
        Self::from_document(ChartDocument::new(shape), colors)
    }

    /// Adopts an existing document, materializing it if the host never did.
    #[must_use]
    pub fn from_document(document: ChartDocument, mut colors: Box<dyn ColorSource>) -> Self {
        let document = document.materialized(colors.as_mut());
        let session = Self {
            document,
            navigator: GridNavigator::new(),
            colors,
        };
        session.debug_validate();
        session
    }

    #[must_use]
    pub fn document(&self) -> &ChartDocument {
        &self.document
    }

    #[must_use]
    pub fn shape(&self) -> ShapeTag {
        self.document.shape
    }

    #[must_use]
    pub fn validate(&self) -> Vec<Violation> {
        validate(&self.document)
    }

    // --- grid surface -----------------------------------------------------

    #[must_use]
    pub fn focus(&self) -> Option<GridPos> {
        self.navigator.focus()
    }

    pub fn set_focus(&mut self, pos: GridPos) {
        let dims = GridDims::of(&self.document.data);
        self.navigator.set_focus(dims, pos);
    }

    pub fn blur(&mut self) {
        self.navigator.blur();
    }

    #[must_use]
    pub fn cell_text(&self, pos: GridPos) -> Option<String> {
        grid::cell_text(&self.document, pos)
    }

    pub fn commit_cell(&mut self, pos: GridPos, raw: &str) {
        self.document = grid::commit_cell(&self.document, pos, raw);
        self.debug_validate();
    }

    pub fn commit_active_cell(&mut self, raw: &str) {
        if let Some(pos) = self.navigator.focus() {
            self.commit_cell(pos, raw);
        }
    }

    /// Runs one key through the navigation machine. Growth the transition
    /// depends on is applied first, through the mutation layer, with the
    /// boundary re-checked against the current document; the focus only moves
    /// when the target cell exists afterwards.
    pub fn handle_key(&mut self, key: NavKey) {
        let dims = GridDims::of(&self.document.data);
        let transition = self.navigator.plan(key, dims);
        if let Some(grow) = transition.grow {
            self.apply_grow(grow);
        }
        let dims_after = GridDims::of(&self.document.data);
        match transition.focus {
            Some(pos) if is_focusable(dims_after, pos) => self.navigator.adopt(Some(pos)),
            Some(_) => {}
            None => self.navigator.adopt(None),
        }
    }

    fn apply_grow(&mut self, grow: AutoGrow) {
        let dims = GridDims::of(&self.document.data);
        let Some(pos) = self.navigator.focus() else {
            return;
        };

        match grow {
            AutoGrow::AppendDataset => {
                let at_last_column = pos.column + 1 == dims.columns;
                let at_boundary = at_last_column
                    && match pos.section {
                        GridSection::Header => true,
                        GridSection::Body => pos.row + 1 == dims.rows,
                        GridSection::Footer => false,
                    };
                if at_boundary {
                    self.document.data = edit::insert_dataset(
                        &self.document.data,
                        self.document.shape,
                        dims.columns,
                        self.colors.as_mut(),
                    );
                }
            }
            AutoGrow::AppendRow => {
                if pos.section == GridSection::Body && pos.row + 1 == dims.rows {
                    self.document.data = edit::insert_row(&self.document.data, dims.rows);
                }
            }
        }
        self.debug_validate();
    }

    // --- mutation surface -------------------------------------------------

    pub fn set_label(&mut self, row: usize, text: &str) {
        self.document.data = edit::set_label(&self.document.data, row, text);
        self.debug_validate();
    }

    pub fn set_dataset_label(&mut self, dataset: usize, text: &str) {
        self.document.data = edit::set_dataset_label(&self.document.data, dataset, text);
        self.debug_validate();
    }

    pub fn set_cell_value(&mut self, dataset: usize, row: usize, raw: &str) {
        self.document.data = edit::set_cell_value(&self.document.data, dataset, row, raw);
        self.debug_validate();
    }

    pub fn insert_row(&mut self, at: usize) {
        self.document.data = edit::insert_row(&self.document.data, at);
        self.debug_validate();
    }

    pub fn remove_row(&mut self, at: usize) {
        self.document.data = edit::remove_row(&self.document.data, at);
        self.debug_validate();
    }

    pub fn duplicate_row(&mut self, at: usize) {
        self.document.data = edit::duplicate_row(&self.document.data, at);
        self.debug_validate();
    }

    pub fn insert_dataset(&mut self, at: usize) {
        self.document.data = edit::insert_dataset(
            &self.document.data,
            self.document.shape,
            at,
            self.colors.as_mut(),
        );
        self.debug_validate();
    }

    pub fn remove_dataset(&mut self, at: usize) {
        self.document.data = edit::remove_dataset(&self.document.data, at);
        self.debug_validate();
    }

    pub fn duplicate_dataset(&mut self, at: usize) {
        self.document.data = edit::duplicate_dataset(&self.document.data, at);
        self.debug_validate();
    }

    pub fn set_style_field(&mut self, path: &str, value: Value) {
        self.document.options = edit::set_style_field(&self.document.options, path, value);
        self.debug_validate();
    }

    // --- shape change -----------------------------------------------------

    /// Converts the document to another shape through the transform engine.
    /// The grid focus is preserved when the target cell still exists.
    pub fn change_shape(&mut self, to: ShapeTag) {
        let from = self.document.shape;
        if from == to {
            return;
        }

        let (data, options) = transform(
            from,
            to,
            &self.document.data,
            &self.document.options,
            self.colors.as_mut(),
        );
        self.document = ChartDocument {
            shape: to,
            data,
            options,
        };
        debug!(from = from.as_str(), to = to.as_str(), "changed chart shape");

        let dims = GridDims::of(&self.document.data);
        if let Some(pos) = self.navigator.focus() {
            if !is_focusable(dims, pos) {
                self.navigator.blur();
            }
        }
        self.debug_validate();
    }

    fn debug_validate(&self) {
        debug_assert!(
            self.validate().is_empty(),
            "document invariant broken: {:?}",
            self.validate()
        );
    }
}
