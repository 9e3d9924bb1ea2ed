use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Scheduling status of a task, as reported by the owning store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
    Overdue,
}

/// A single task or milestone row in the timeline.
///
/// Tasks are owned by the external store; the engine treats each slice it
/// receives as an immutable snapshot for one computation cycle. The dates
/// are optional because records can arrive with missing or unparseable
/// values; use [`Task::resolved_dates`] wherever a concrete date is
/// required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub project_id: Uuid,
    /// Direct parent task, `None` for a top-level task of its project.
    pub parent_id: Option<Uuid>,
    /// Indentation level recorded by the store. Trusted as-is, never
    /// recomputed from the parent chain.
    #[serde(default)]
    pub level: u32,
    pub name: String,
    pub start: Option<NaiveDate>,
    pub due: Option<NaiveDate>,
    /// Hides the task's subtree when set.
    #[serde(default)]
    pub collapsed: bool,
    /// Milestones are zero-duration markers.
    #[serde(default)]
    pub milestone: bool,
    #[serde(default)]
    pub status: TaskStatus,
}

impl Task {
    /// Create a new top-level task with sensible defaults.
    pub fn new(
        name: impl Into<String>,
        project_id: Uuid,
        start: NaiveDate,
        due: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            project_id,
            parent_id: None,
            level: 0,
            name: name.into(),
            start: Some(start),
            due: Some(due),
            collapsed: false,
            milestone: false,
            status: TaskStatus::NotStarted,
        }
    }

    /// Create a new milestone.
    pub fn new_milestone(name: impl Into<String>, project_id: Uuid, date: NaiveDate) -> Self {
        Self {
            milestone: true,
            ..Self::new(name, project_id, date, date)
        }
    }

    /// Start and due dates with any missing side substituted by `today`.
    ///
    /// The record itself is never corrected; the data stays with the
    /// store. A `start > due` pair is returned as-is; downstream layout
    /// floors widths and drag anchors clamp, so the inversion never
    /// produces negative geometry.
    pub fn resolved_dates(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        (self.start.unwrap_or(today), self.due.unwrap_or(today))
    }

    pub fn expanded(&self) -> bool {
        !self.collapsed
    }
}
