use std::mem;

use serde::{Deserialize, Serialize};
use wordsearch_core::{CellMap, CellPos, GridLayout, Point};

use crate::{CellMarks, CellRun, SnapDirection};

/// Default [`DragSettings::dead_zone`], in pixels.
pub const DEFAULT_DEAD_ZONE: f64 = 0.5;

/// Tuning for drag gestures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragSettings {
    /// Pointer movements closer than this to the press position, in pixels,
    /// do not select an end cell.
    pub dead_zone: f64,
}

impl Default for DragSettings {
    fn default() -> Self {
        Self {
            dead_zone: DEFAULT_DEAD_ZONE,
        }
    }
}

/// An in-progress drag gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drag {
    /// The cell the drag started on.
    pub start_cell: CellPos,
    /// The exact pointer position of the press.
    pub start_pixel: Point,
    /// The most recently snapped end cell, if any.
    pub end_cell: Option<CellPos>,
}

/// Whether a drag gesture is in progress.
#[derive(Debug, Default, Clone, Copy, PartialEq, derive_more::IsVariant)]
pub enum DragState {
    /// No pointer button is held over the grid.
    #[default]
    Idle,
    /// A press started on a cell and has not been released yet.
    Dragging(Drag),
}

/// The press/move/release state machine of a single drag gesture.
///
/// While dragging, the run between the start cell and the snapped end cell is
/// kept highlighted in a caller-owned [`CellMap<CellMarks>`]. Only the
/// [`CellMarks::HIGHLIGHTED`] flag is ever touched.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Selection {
    state: DragState,
    highlighted: Option<CellRun>,
    settings: DragSettings,
}

impl Selection {
    /// Creates an idle selection.
    #[must_use]
    pub fn new(settings: DragSettings) -> Self {
        Self {
            state: DragState::Idle,
            highlighted: None,
            settings,
        }
    }

    /// Returns the drag settings.
    #[must_use]
    pub fn settings(&self) -> DragSettings {
        self.settings
    }

    /// Returns the current drag state.
    #[must_use]
    pub fn state(&self) -> DragState {
        self.state
    }

    /// Returns the currently highlighted run.
    #[must_use]
    pub fn highlighted(&self) -> Option<&CellRun> {
        self.highlighted.as_ref()
    }

    /// Snaps the pointer at `current` to the end cell of a drag that started
    /// at `start_pixel`.
    ///
    /// The drag angle selects one of four lines through the start pixel. The
    /// pointer is projected onto that line: vertical drags keep the start
    /// column, horizontal drags keep the start row, and diagonal drags use the
    /// closest point on the 45° line. The end cell is whichever cell strictly
    /// contains the projected point.
    ///
    /// Returns `None` inside the dead zone, when the angle is undefined, or
    /// when the projected point is not inside a cell.
    #[must_use]
    pub fn end_cell(
        &self,
        layout: &GridLayout,
        start_pixel: Point,
        current: Point,
    ) -> Option<CellPos> {
        let distance = start_pixel.distance(current);
        if distance.is_nan() || distance < self.settings.dead_zone {
            return None;
        }

        let direction = SnapDirection::between(start_pixel, current)?;
        let target = match direction {
            SnapDirection::Vertical => Point::new(start_pixel.x, current.y),
            SnapDirection::Horizontal => Point::new(current.x, start_pixel.y),
            SnapDirection::AntiDiagonal | SnapDirection::Diagonal => {
                let along = start_pixel + direction.line_direction();
                Point::closest_point_on_line(start_pixel, along, current)
            }
        };
        layout.cell_at(target)
    }

    /// Starts a drag if `pixel` is on a cell.
    ///
    /// Returns the start cell, or `None` if the press was ignored because it
    /// missed every cell or a drag is already in progress.
    pub fn press(&mut self, layout: &GridLayout, pixel: Point) -> Option<CellPos> {
        if self.state.is_dragging() {
            log::debug!("ignoring press at {pixel:?}: already dragging");
            return None;
        }
        let start_cell = layout.cell_at(pixel)?;
        log::trace!("drag started on {start_cell}");
        self.state = DragState::Dragging(Drag {
            start_cell,
            start_pixel: pixel,
            end_cell: None,
        });
        Some(start_cell)
    }

    /// Moves the pointer to `pixel` and refreshes the highlight.
    ///
    /// When an end cell is snapped, the previous highlight is cleared and the
    /// run from the start cell to the end cell is highlighted in the same
    /// call. If the endpoints are not on a straight line the highlight is left
    /// empty. When no end cell is snapped, the previous end cell and highlight
    /// are kept.
    ///
    /// Returns `true` if the end cell was updated.
    pub fn drag_to(
        &mut self,
        layout: &GridLayout,
        pixel: Point,
        marks: &mut CellMap<CellMarks>,
    ) -> bool {
        let DragState::Dragging(drag) = self.state else {
            return false;
        };
        let Some(end_cell) = self.end_cell(layout, drag.start_pixel, pixel) else {
            return false;
        };
        self.state = DragState::Dragging(Drag {
            end_cell: Some(end_cell),
            ..drag
        });

        let run = CellRun::between(drag.start_cell, end_cell);
        self.clear_highlight(marks);
        if let Some(run) = &run {
            for &pos in run {
                if let Some(cell) = marks.get_mut(pos) {
                    cell.insert(CellMarks::HIGHLIGHTED);
                }
            }
        }
        self.highlighted = run;
        true
    }

    /// Ends the drag and clears the highlight.
    ///
    /// Returns the run between the start and end cells, or `None` if no drag
    /// was in progress, no end cell was ever snapped, or the endpoints are not
    /// on a straight line.
    pub fn release(&mut self, marks: &mut CellMap<CellMarks>) -> Option<CellRun> {
        let state = mem::take(&mut self.state);
        self.clear_highlight(marks);
        let DragState::Dragging(drag) = state else {
            return None;
        };
        CellRun::between(drag.start_cell, drag.end_cell?)
    }

    fn clear_highlight(&mut self, marks: &mut CellMap<CellMarks>) {
        if let Some(run) = self.highlighted.take() {
            for &pos in &run {
                if let Some(cell) = marks.get_mut(pos) {
                    cell.remove(CellMarks::HIGHLIGHTED);
                }
            }
        }
    }
}
