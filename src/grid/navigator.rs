use serde::{Deserialize, Serialize};
use tracing::trace;

use super::layout::{GridDims, GridPos, GridSection, is_focusable};

/// Navigation input. Arrow keys only move; Tab and Enter additionally grow
/// the grid at its structural boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavKey {
    Tab,
    ShiftTab,
    Enter,
    ShiftEnter,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
}

/// Growth the caller must apply through the mutation layer before the focus
/// target exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoGrow {
    /// Append a dataset at the end (Tab at the last dataset column).
    AppendDataset,
    /// Append a row at the end (Enter at the last body row).
    AppendRow,
}

/// A planned transition: the focus to adopt and any growth it depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub focus: Option<GridPos>,
    pub grow: Option<AutoGrow>,
}

impl Transition {
    fn stay(focus: Option<GridPos>) -> Self {
        Self { focus, grow: None }
    }

    fn move_to(pos: GridPos) -> Self {
        Self {
            focus: Some(pos),
            grow: None,
        }
    }

    fn grow_to(pos: GridPos, grow: AutoGrow) -> Self {
        Self {
            focus: Some(pos),
            grow: Some(grow),
        }
    }
}

/// Tracks the active cell. Transitions are synchronous; the machine never
/// blocks and owns no timers. Auto-growth is returned to the caller, which
/// re-checks the boundary against the document when it applies the edit, so a
/// stale append is a no-op.
#[derive(Debug, Clone, Default)]
pub struct GridNavigator {
    focus: Option<GridPos>,
}

impl GridNavigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn focus(&self) -> Option<GridPos> {
        self.focus
    }

    /// Host-driven focus change (click, programmatic restore). Targets without
    /// a focusable control clear the focus instead.
    pub fn set_focus(&mut self, dims: GridDims, pos: GridPos) {
        self.focus = is_focusable(dims, pos).then_some(pos);
    }

    /// Focus left the grid entirely.
    pub fn blur(&mut self) {
        trace!("grid focus lost");
        self.focus = None;
    }

    pub fn adopt(&mut self, focus: Option<GridPos>) {
        self.focus = focus;
    }

    /// Plans the transition for `key` against the current grid dimensions
    /// without mutating the focus. Targets without a focusable control keep
    /// the focus where it is.
    #[must_use]
    pub fn plan(&self, key: NavKey, dims: GridDims) -> Transition {
        let Some(pos) = self.focus else {
            return Transition::stay(None);
        };

        match key {
            NavKey::ArrowRight => self.step_to(dims, pos.section, pos.row, pos.column + 1),
            NavKey::ShiftTab | NavKey::ArrowLeft => {
                if pos.column == 0 {
                    Transition::stay(self.focus)
                } else {
                    self.step_to(dims, pos.section, pos.row, pos.column - 1)
                }
            }
            NavKey::Tab => self.plan_tab(dims, pos),
            NavKey::ArrowDown => self.plan_down(dims, pos),
            NavKey::Enter => {
                if pos.section == GridSection::Body && pos.row + 1 == dims.rows {
                    trace!(column = pos.column, "enter at last body row, appending row");
                    Transition::grow_to(
                        GridPos::new(GridSection::Body, dims.rows, 0),
                        AutoGrow::AppendRow,
                    )
                } else {
                    self.plan_down(dims, pos)
                }
            }
            NavKey::ArrowUp | NavKey::ShiftEnter => self.plan_up(dims, pos),
        }
    }

    fn plan_tab(&self, dims: GridDims, pos: GridPos) -> Transition {
        if pos.column + 1 < dims.columns {
            return self.step_to(dims, pos.section, pos.row, pos.column + 1);
        }

        // Only the true structural boundary appends: the last dataset column
        // of the header row or of the body's last row.
        let at_boundary = match pos.section {
            GridSection::Header => true,
            GridSection::Body => pos.row + 1 == dims.rows,
            GridSection::Footer => false,
        };
        if at_boundary {
            trace!(section = ?pos.section, "tab at last dataset column, appending dataset");
            Transition::grow_to(
                GridPos::new(GridSection::Header, 0, dims.columns),
                AutoGrow::AppendDataset,
            )
        } else {
            Transition::stay(self.focus)
        }
    }

    fn plan_down(&self, dims: GridDims, pos: GridPos) -> Transition {
        match pos.section {
            GridSection::Header => {
                self.step_to(dims, GridSection::Body, 0, pos.column)
            }
            GridSection::Body => self.step_to(dims, GridSection::Body, pos.row + 1, pos.column),
            GridSection::Footer => Transition::stay(self.focus),
        }
    }

    fn plan_up(&self, dims: GridDims, pos: GridPos) -> Transition {
        match pos.section {
            GridSection::Body if pos.row == 0 => {
                self.step_to(dims, GridSection::Header, 0, pos.column)
            }
            GridSection::Body => self.step_to(dims, GridSection::Body, pos.row - 1, pos.column),
            GridSection::Header | GridSection::Footer => Transition::stay(self.focus),
        }
    }

    fn step_to(&self, dims: GridDims, section: GridSection, row: usize, column: usize) -> Transition {
        let target = GridPos::new(section, row, column);
        if is_focusable(dims, target) {
            Transition::move_to(target)
        } else {
            Transition::stay(self.focus)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AutoGrow, GridDims, GridNavigator, GridPos, GridSection, NavKey};

    fn navigator_at(section: GridSection, row: usize, column: usize) -> GridNavigator {
        let mut nav = GridNavigator::new();
        nav.adopt(Some(GridPos::new(section, row, column)));
        nav
    }

    #[test]
    fn arrow_right_never_appends() {
        let dims = GridDims { rows: 1, columns: 1 };
        let nav = navigator_at(GridSection::Body, 0, 0);
        let t = nav.plan(NavKey::ArrowRight, dims);
        assert_eq!(t.grow, None);
        assert_eq!(t.focus, Some(GridPos::new(GridSection::Body, 0, 0)));
    }

    #[test]
    fn tab_at_body_boundary_appends_dataset() {
        let dims = GridDims { rows: 1, columns: 1 };
        let nav = navigator_at(GridSection::Body, 0, 0);
        let t = nav.plan(NavKey::Tab, dims);
        assert_eq!(t.grow, Some(AutoGrow::AppendDataset));
        assert_eq!(t.focus, Some(GridPos::new(GridSection::Header, 0, 1)));
    }

    #[test]
    fn tab_mid_body_is_a_no_op_at_the_row_edge() {
        let dims = GridDims { rows: 3, columns: 2 };
        let nav = navigator_at(GridSection::Body, 0, 1);
        let t = nav.plan(NavKey::Tab, dims);
        assert_eq!(t.grow, None);
        assert_eq!(t.focus, Some(GridPos::new(GridSection::Body, 0, 1)));
    }

    #[test]
    fn shift_tab_clamps_at_column_zero() {
        let dims = GridDims { rows: 2, columns: 2 };
        let nav = navigator_at(GridSection::Body, 1, 0);
        let t = nav.plan(NavKey::ShiftTab, dims);
        assert_eq!(t.grow, None);
        assert_eq!(t.focus, Some(GridPos::new(GridSection::Body, 1, 0)));
    }

    #[test]
    fn enter_at_last_body_row_appends_row() {
        let dims = GridDims { rows: 2, columns: 2 };
        let nav = navigator_at(GridSection::Body, 1, 1);
        let t = nav.plan(NavKey::Enter, dims);
        assert_eq!(t.grow, Some(AutoGrow::AppendRow));
        assert_eq!(t.focus, Some(GridPos::new(GridSection::Body, 2, 0)));
    }

    #[test]
    fn up_from_body_row_zero_crosses_into_the_header() {
        let dims = GridDims { rows: 2, columns: 2 };
        let nav = navigator_at(GridSection::Body, 0, 1);
        let t = nav.plan(NavKey::ArrowUp, dims);
        assert_eq!(t.focus, Some(GridPos::new(GridSection::Header, 0, 1)));
    }

    #[test]
    fn keys_without_focus_do_nothing() {
        let dims = GridDims { rows: 2, columns: 2 };
        let nav = GridNavigator::new();
        let t = nav.plan(NavKey::Tab, dims);
        assert_eq!(t.focus, None);
        assert_eq!(t.grow, None);
    }
}
