//! Pointer-drag state machine for moving and resizing task bars.
//!
//! One controller owns at most one in-flight drag. A drag is anchored on
//! the task's dates and the pointer position at drag start; every move
//! recomputes the candidate pair from those anchors, so the result is
//! independent of which intermediate move events were delivered.

use chrono::{Duration, NaiveDate};
use std::time::{Duration as StdDuration, Instant};
use uuid::Uuid;

use crate::model::Task;

/// Which dates a drag mutates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragMode {
    /// Shift start and due together.
    Move,
    /// Shift only the start, clamped at the due date.
    ResizeStart,
    /// Shift only the due date, clamped at the start.
    ResizeEnd,
}

/// Drag deltas are clamped to ~a century of days so absurd pointer
/// coordinates cannot push chrono out of range.
const MAX_DRAG_DAYS: i64 = 36_500;

/// Transient state of one in-flight drag. Never persisted.
#[derive(Debug, Clone)]
struct DragState {
    task_id: Uuid,
    mode: DragMode,
    anchor_start: NaiveDate,
    anchor_due: NaiveDate,
    pointer_anchor_x: f32,
    days_delta: i64,
}

/// Non-committed candidate pair, recomputed on every pointer move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragPreview {
    pub task_id: Uuid,
    pub start: NaiveDate,
    pub due: NaiveDate,
    pub days_delta: i64,
}

/// Committed date mutation, handed to the store after a drag ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskUpdate {
    pub task_id: Uuid,
    pub start: NaiveDate,
    pub due: NaiveDate,
}

/// `Idle -> Dragging -> Idle` via commit or cancel.
///
/// Starting a new drag while one is active implicitly cancels the prior
/// drag; the pointer can only be in one place. If the dragged task
/// disappears from the snapshot mid-drag the controller cancels itself
/// instead of panicking.
#[derive(Debug, Default)]
pub struct DragController {
    state: Option<DragState>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_some()
    }

    /// Id of the task being dragged, if any.
    pub fn dragging_task(&self) -> Option<Uuid> {
        self.state.as_ref().map(|s| s.task_id)
    }

    /// Begin a drag, capturing the task's resolved dates and the pointer
    /// position as anchors. Any active drag is discarded first.
    pub fn start(&mut self, task: &Task, mode: DragMode, pointer_x: f32, today: NaiveDate) {
        let (anchor_start, anchor_due) = task.resolved_dates(today);
        self.state = Some(DragState {
            task_id: task.id,
            mode,
            anchor_start,
            anchor_due,
            pointer_anchor_x: pointer_x,
            days_delta: 0,
        });
    }

    /// Track a pointer move and return the clamped preview pair.
    ///
    /// No-ops when idle; self-cancels when the task is gone from the
    /// snapshot.
    pub fn pointer_moved(
        &mut self,
        snapshot: &[Task],
        pointer_x: f32,
        px_per_day: f32,
    ) -> Option<DragPreview> {
        let state = self.state.as_mut()?;
        if !snapshot.iter().any(|t| t.id == state.task_id) {
            self.state = None;
            return None;
        }
        state.days_delta = days_delta(pointer_x - state.pointer_anchor_x, px_per_day);
        let (start, due) = apply_delta(
            state.mode,
            state.anchor_start,
            state.anchor_due,
            state.days_delta,
        );
        Some(DragPreview {
            task_id: state.task_id,
            start,
            due,
            days_delta: state.days_delta,
        })
    }

    /// Commit the drag and return the final pair for the store.
    ///
    /// The pair is recomputed from the anchors and the last accepted
    /// delta, so dropped intermediate moves can never leak an unclamped
    /// candidate into the commit. Self-cancels on a vanished task.
    pub fn end_drag(&mut self, snapshot: &[Task]) -> Option<TaskUpdate> {
        let state = self.state.take()?;
        if !snapshot.iter().any(|t| t.id == state.task_id) {
            return None;
        }
        let (start, due) = apply_delta(
            state.mode,
            state.anchor_start,
            state.anchor_due,
            state.days_delta,
        );
        Some(TaskUpdate {
            task_id: state.task_id,
            start,
            due,
        })
    }

    /// Abort the drag, discarding all preview state.
    pub fn cancel(&mut self) {
        self.state = None;
    }
}

fn days_delta(delta_x: f32, px_per_day: f32) -> i64 {
    if px_per_day <= 0.0 {
        return 0;
    }
    let days = (delta_x / px_per_day).round();
    (days as i64).clamp(-MAX_DRAG_DAYS, MAX_DRAG_DAYS)
}

/// Candidate date pair for a delta, clamped so start never passes due.
fn apply_delta(mode: DragMode, start: NaiveDate, due: NaiveDate, days: i64) -> (NaiveDate, NaiveDate) {
    let (start, due) = match mode {
        DragMode::Move => (shift(start, days), shift(due, days)),
        DragMode::ResizeStart => (shift(start, days).min(due), due),
        DragMode::ResizeEnd => (start, shift(due, days).max(start)),
    };
    // Also repairs a start > due pair inherited from bad input: a commit
    // must always satisfy the invariant even when the source didn't.
    (start, due.max(start))
}

fn shift(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_add_signed(Duration::days(days)).unwrap_or(date)
}

/// Frame-rate limiter for pointer-move recomputation.
///
/// Callers pass the current instant so the throttle stays testable.
/// Dropping moves is always safe: the commit path only depends on the
/// anchors and the last accepted delta.
#[derive(Debug, Clone, Copy)]
pub struct MoveThrottle {
    interval: StdDuration,
    last: Option<Instant>,
}

impl MoveThrottle {
    /// Roughly one update per rendering frame.
    pub fn per_frame() -> Self {
        Self::new(StdDuration::from_millis(16))
    }

    pub fn new(interval: StdDuration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    /// True when enough time has passed to accept another move.
    pub fn accept(&mut self, now: Instant) -> bool {
        match self.last {
            Some(last) if now.duration_since(last) < self.interval => false,
            _ => {
                self.last = Some(now);
                true
            }
        }
    }
}
