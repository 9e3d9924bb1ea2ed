//! Mutation seam between the engine and whatever owns the task data.
//!
//! The engine never mutates a snapshot. Every change it proposes (a
//! committed drag, a collapse toggle) goes through [`TaskStore`], and the
//! store answers with fresh snapshots on the next cycle.

use chrono::NaiveDate;
use thiserror::Error;
use uuid::Uuid;

use crate::model::{Project, Task};

/// Partial task mutation handed to the store.
///
/// Unset fields are left untouched by the store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub start: Option<NaiveDate>,
    pub due: Option<NaiveDate>,
    pub collapsed: Option<bool>,
}

impl TaskPatch {
    /// Patch that reschedules both dates, as produced by a drag commit.
    pub fn dates(start: NaiveDate, due: NaiveDate) -> Self {
        Self {
            start: Some(start),
            due: Some(due),
            collapsed: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no task with id {0}")]
    TaskNotFound(Uuid),
    #[error("no project with id {0}")]
    ProjectNotFound(Uuid),
}

/// Operations the engine needs from the data owner.
pub trait TaskStore {
    fn update_task(&mut self, id: Uuid, patch: TaskPatch) -> Result<(), StoreError>;
    fn toggle_task_collapsed(&mut self, id: Uuid) -> Result<(), StoreError>;
    fn toggle_project_collapsed(&mut self, id: Uuid) -> Result<(), StoreError>;
}

/// Reference in-memory store.
///
/// Hosts with a real backend implement [`TaskStore`] themselves; this one
/// backs the tests and small embedded uses.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub projects: Vec<Project>,
    pub tasks: Vec<Task>,
}

impl MemoryStore {
    pub fn new(projects: Vec<Project>, tasks: Vec<Task>) -> Self {
        Self { projects, tasks }
    }

    /// Collapse or expand every top-level task at once.
    ///
    /// Subtask collapse flags are left alone so re-expanding restores the
    /// previous shape of each subtree.
    pub fn set_all_collapsed(&mut self, collapsed: bool) {
        for task in self.tasks.iter_mut().filter(|t| t.parent_id.is_none()) {
            task.collapsed = collapsed;
        }
    }

    fn task_mut(&mut self, id: Uuid) -> Result<&mut Task, StoreError> {
        self.tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::TaskNotFound(id))
    }
}

impl TaskStore for MemoryStore {
    fn update_task(&mut self, id: Uuid, patch: TaskPatch) -> Result<(), StoreError> {
        let task = self.task_mut(id)?;
        if let Some(start) = patch.start {
            task.start = Some(start);
        }
        if let Some(due) = patch.due {
            task.due = Some(due);
        }
        if let Some(collapsed) = patch.collapsed {
            task.collapsed = collapsed;
        }
        Ok(())
    }

    fn toggle_task_collapsed(&mut self, id: Uuid) -> Result<(), StoreError> {
        let task = self.task_mut(id)?;
        task.collapsed = !task.collapsed;
        Ok(())
    }

    fn toggle_project_collapsed(&mut self, id: Uuid) -> Result<(), StoreError> {
        let project = self
            .projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::ProjectNotFound(id))?;
        project.collapsed = !project.collapsed;
        Ok(())
    }
}
