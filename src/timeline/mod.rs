//! The timeline engine: window computation, zoom, position mapping,
//! hierarchy flattening, grid generation and drag interaction.

pub mod drag;
pub mod grid;
pub mod layout;
pub mod position;
pub mod range;
pub mod rows;
pub mod zoom;

pub use drag::{DragController, DragMode, DragPreview, MoveThrottle, TaskUpdate};
pub use grid::{today_marker, today_scroll_offset, DayKind, GridCell, HolidayCalendar};
pub use layout::{layout_rows, RowBar, MIN_BAR_WIDTH};
pub use position::{date_to_pixel, pixel_to_date};
pub use range::{DateRange, DisplayUnit};
pub use rows::{flatten, VisibleRow};
pub use zoom::{DynamicSizes, FontSizes, ZoomState};

use chrono::NaiveDate;

use crate::model::{Project, Task};
use crate::store::{StoreError, TaskPatch, TaskStore};

/// View state of one timeline: display unit, zoom, viewport width and the
/// single active drag.
///
/// All data lives in the host's store; the controller only derives layout
/// from the snapshots it is handed and recomputes its window whenever an
/// input changes. `grid_cells` and `rows` are cheap enough to call per
/// cycle.
#[derive(Debug)]
pub struct TimelineController {
    unit: DisplayUnit,
    zoom: ZoomState,
    anchor: NaiveDate,
    viewport_width: f32,
    range: DateRange,
    drag: DragController,
}

impl TimelineController {
    pub fn new(unit: DisplayUnit, anchor: NaiveDate, viewport_width: f32) -> Self {
        let zoom = ZoomState::default();
        let range = compute_range(unit, zoom, anchor, viewport_width);
        Self {
            unit,
            zoom,
            anchor,
            viewport_width,
            range,
            drag: DragController::new(),
        }
    }

    pub fn unit(&self) -> DisplayUnit {
        self.unit
    }

    pub fn zoom(&self) -> ZoomState {
        self.zoom
    }

    pub fn range(&self) -> &DateRange {
        &self.range
    }

    pub fn sizes(&self) -> DynamicSizes {
        DynamicSizes::for_zoom(self.zoom, self.unit)
    }

    /// Total content width of the window, for the host's scroll area.
    pub fn content_width(&self) -> f32 {
        self.range.total_width(self.unit)
    }

    // --- View state changes; each recomputes the window ---

    pub fn set_unit(&mut self, unit: DisplayUnit) {
        self.unit = unit;
        self.refresh();
    }

    pub fn set_anchor(&mut self, anchor: NaiveDate) {
        self.anchor = anchor;
        self.refresh();
    }

    pub fn set_viewport_width(&mut self, width: f32) {
        self.viewport_width = width;
        self.refresh();
    }

    pub fn set_zoom(&mut self, level: u16) {
        self.zoom = self.zoom.set(level);
        self.refresh();
    }

    pub fn zoom_in(&mut self) {
        self.zoom = self.zoom.zoom_in();
        self.refresh();
    }

    pub fn zoom_out(&mut self) {
        self.zoom = self.zoom.zoom_out();
        self.refresh();
    }

    pub fn reset_zoom(&mut self) {
        self.zoom = self.zoom.reset();
        self.refresh();
    }

    /// Pick the zoom level at which the whole window fits the viewport.
    pub fn fit_to_screen(&mut self) {
        let count = self.range.unit_count(self.unit);
        self.zoom = self.zoom.fit_to_screen(self.unit, count, self.viewport_width);
        self.refresh();
    }

    fn refresh(&mut self) {
        self.range = compute_range(self.unit, self.zoom, self.anchor, self.viewport_width);
    }

    // --- Derived layout ---

    pub fn rows<'a>(&self, tasks: &'a [Task], projects: &[Project]) -> Vec<VisibleRow<'a>> {
        flatten(tasks, projects)
    }

    pub fn layout(&self, rows: &[VisibleRow<'_>], today: NaiveDate) -> Vec<RowBar> {
        layout_rows(rows, &self.range, self.unit, today)
    }

    pub fn grid(&self, holidays: &HolidayCalendar) -> Vec<GridCell> {
        grid::grid_cells(&self.range, self.unit, holidays)
    }

    pub fn today_marker(&self, today: NaiveDate) -> f32 {
        today_marker(today, &self.range, self.unit)
    }

    /// Scroll offset that centers today in the viewport.
    pub fn scroll_to_today(&self, today: NaiveDate) -> f32 {
        today_scroll_offset(self.today_marker(today), self.viewport_width)
    }

    // --- Drag plumbing ---

    pub fn begin_drag(&mut self, task: &Task, mode: DragMode, pointer_x: f32, today: NaiveDate) {
        self.drag.start(task, mode, pointer_x, today);
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn drag_moved(&mut self, tasks: &[Task], pointer_x: f32) -> Option<DragPreview> {
        self.drag.pointer_moved(tasks, pointer_x, self.range.cell_width)
    }

    pub fn cancel_drag(&mut self) {
        self.drag.cancel();
    }

    /// End the active drag and hand the committed dates to the store.
    ///
    /// Returns the update on success, `None` when there was nothing to
    /// commit (idle controller or vanished task).
    pub fn commit_drag(
        &mut self,
        store: &mut impl TaskStore,
        tasks: &[Task],
    ) -> Result<Option<TaskUpdate>, StoreError> {
        match self.drag.end_drag(tasks) {
            Some(update) => {
                store.update_task(update.task_id, TaskPatch::dates(update.start, update.due))?;
                Ok(Some(update))
            }
            None => Ok(None),
        }
    }
}

fn compute_range(
    unit: DisplayUnit,
    zoom: ZoomState,
    anchor: NaiveDate,
    viewport_width: f32,
) -> DateRange {
    let sizes = DynamicSizes::for_zoom(zoom, unit);
    DateRange::compute(unit, anchor, viewport_width, sizes.cell_width)
}
