//! Timeline layout and drag interaction engine for Gantt-style task
//! trackers.
//!
//! The crate computes everything a renderer needs to paint a timeline
//! (the visible date window, collapse-aware row ordering, bar geometry,
//! grid cells and the today marker) and turns pointer drags into clamped
//! date mutations. It owns no data: projects and tasks arrive as
//! immutable snapshots from a host store, and every change the engine
//! proposes goes back out through the [`store::TaskStore`] seam.
//!
//! Typical wiring:
//!
//! ```
//! use chrono::NaiveDate;
//! use gantt_timeline::model::{Project, Task};
//! use gantt_timeline::store::MemoryStore;
//! use gantt_timeline::timeline::{DisplayUnit, DragMode, HolidayCalendar, TimelineController};
//!
//! let today = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
//! let project = Project::new("Release 1.0");
//! let task = Task::new("Design", project.id, today, today + chrono::Duration::days(2));
//! let mut store = MemoryStore::new(vec![project], vec![task]);
//!
//! let mut timeline = TimelineController::new(DisplayUnit::Day, today, 1200.0);
//! let rows = timeline.rows(&store.tasks, &store.projects);
//! let bars = timeline.layout(&rows, today);
//! assert_eq!(bars.len(), 1);
//!
//! // Drag the bar two cells to the right and persist the result.
//! let cell = timeline.range().cell_width;
//! timeline.begin_drag(&store.tasks[0], DragMode::Move, 0.0, today);
//! let tasks = store.tasks.clone();
//! timeline.drag_moved(&tasks, 2.0 * cell);
//! timeline.commit_drag(&mut store, &tasks).unwrap();
//! assert_eq!(store.tasks[0].start, Some(today + chrono::Duration::days(2)));
//!
//! let _grid = timeline.grid(&HolidayCalendar::default());
//! ```

pub mod model;
pub mod store;
pub mod timeline;

pub use model::{Project, Task, TaskStatus};
pub use store::{MemoryStore, StoreError, TaskPatch, TaskStore};
pub use timeline::{
    DateRange, DisplayUnit, DragController, DragMode, DragPreview, DynamicSizes, GridCell,
    HolidayCalendar, RowBar, TaskUpdate, TimelineController, VisibleRow, ZoomState,
};
