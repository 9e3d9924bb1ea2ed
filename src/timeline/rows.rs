//! Collapse-aware flattening of the project → task → subtask hierarchy.

use std::collections::HashMap;

use uuid::Uuid;

use crate::model::{Project, Task};

/// One entry in the flattened, ordered list of rows to paint.
#[derive(Debug, Clone, Copy)]
pub struct VisibleRow<'a> {
    pub task: &'a Task,
    /// Ancestor-chain length within the project: 0 for top-level tasks.
    pub depth: u32,
    /// Last sibling of its group; rendering hint for tree connector lines.
    pub is_last_child: bool,
}

/// Flatten the task graph into the ordered list of visible rows.
///
/// A task is visible iff its project and every ancestor task are expanded;
/// collapsing any ancestor hides the whole subtree regardless of the
/// descendants' own collapse flags. Sibling order is preserved exactly as
/// given and nothing is sorted here; ordering is the store's concern.
///
/// Builds a one-pass `parent -> children` index up front, so a full
/// flatten is O(n) in the number of tasks rather than a re-filter of the
/// slice per node. Tasks whose parent is absent from the snapshot emit no
/// rows: a missing ancestor cannot be expanded.
pub fn flatten<'a>(tasks: &'a [Task], projects: &[Project]) -> Vec<VisibleRow<'a>> {
    let mut roots: HashMap<Uuid, Vec<usize>> = HashMap::new();
    let mut children: HashMap<Uuid, Vec<usize>> = HashMap::new();
    for (index, task) in tasks.iter().enumerate() {
        match task.parent_id {
            Some(parent) => children.entry(parent).or_default().push(index),
            None => roots.entry(task.project_id).or_default().push(index),
        }
    }

    let mut rows = Vec::with_capacity(tasks.len());
    for project in projects.iter().filter(|p| p.expanded()) {
        let Some(top) = roots.get(&project.id) else {
            continue;
        };
        for (position, &index) in top.iter().enumerate() {
            push_subtree(
                tasks,
                &children,
                index,
                0,
                position + 1 == top.len(),
                &mut rows,
            );
        }
    }
    rows
}

fn push_subtree<'a>(
    tasks: &'a [Task],
    children: &HashMap<Uuid, Vec<usize>>,
    index: usize,
    depth: u32,
    is_last: bool,
    rows: &mut Vec<VisibleRow<'a>>,
) {
    let task = &tasks[index];
    rows.push(VisibleRow {
        task,
        depth,
        is_last_child: is_last,
    });
    if task.collapsed {
        return;
    }
    let Some(kids) = children.get(&task.id) else {
        return;
    };
    for (position, &child) in kids.iter().enumerate() {
        push_subtree(tasks, children, child, depth + 1, position + 1 == kids.len(), rows);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn task(name: &str, project: &Project, parent: Option<&Task>) -> Task {
        let mut t = Task::new(name, project.id, date(2025, 5, 1), date(2025, 5, 3));
        if let Some(parent) = parent {
            t.parent_id = Some(parent.id);
            t.level = parent.level + 1;
        }
        t
    }

    fn names<'a>(rows: &[VisibleRow<'a>]) -> Vec<&'a str> {
        rows.iter().map(|r| r.task.name.as_str()).collect()
    }

    #[test]
    fn emits_expanded_subtrees_in_sibling_order() {
        let project = Project::new("Alpha");
        let a = task("A", &project, None);
        let a1 = task("A1", &project, Some(&a));
        let a2 = task("A2", &project, Some(&a));
        let b = task("B", &project, None);

        let tasks = vec![a, a1, a2, b];
        let rows = flatten(&tasks, &[project]);
        assert_eq!(names(&rows), vec!["A", "A1", "A2", "B"]);
        assert_eq!(rows.iter().map(|r| r.depth).collect::<Vec<_>>(), vec![0, 1, 1, 0]);
    }

    #[test]
    fn collapsing_a_task_hides_its_whole_subtree() {
        let project = Project::new("Alpha");
        let mut a = task("A", &project, None);
        a.collapsed = true;
        let a1 = task("A1", &project, Some(&a));
        let mut a1_1 = task("A1-1", &project, Some(&a1));
        // The descendant's own state is irrelevant under a collapsed ancestor.
        a1_1.collapsed = false;

        let tasks = vec![a, a1, a1_1];
        let rows = flatten(&tasks, &[project]);
        assert_eq!(names(&rows), vec!["A"]);
    }

    #[test]
    fn collapsing_a_grandparent_hides_grandchildren_of_expanded_parents() {
        let project = Project::new("Alpha");
        let mut a = task("A", &project, None);
        a.collapsed = true;
        let a1 = task("A1", &project, Some(&a));
        assert!(a1.expanded());
        let a1_1 = task("A1-1", &project, Some(&a1));

        let tasks = vec![a, a1, a1_1];
        let visible = flatten(&tasks, &[project]);
        assert!(!visible.iter().any(|r| r.task.name == "A1-1"));
    }

    #[test]
    fn collapsed_projects_contribute_no_rows() {
        let mut project = Project::new("Alpha");
        project.collapsed = true;
        let a = task("A", &project, None);
        assert!(flatten(&[a], &[project]).is_empty());
    }

    #[test]
    fn depth_matches_ancestor_chain_length() {
        let project = Project::new("Alpha");
        let a = task("A", &project, None);
        let a1 = task("A1", &project, Some(&a));
        let a1_1 = task("A1-1", &project, Some(&a1));

        let tasks = vec![a, a1, a1_1];
        let rows = flatten(&tasks, &[project]);
        assert_eq!(rows.iter().map(|r| r.depth).collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn last_sibling_is_marked_per_group() {
        let project = Project::new("Alpha");
        let a = task("A", &project, None);
        let a1 = task("A1", &project, Some(&a));
        let a2 = task("A2", &project, Some(&a));
        let b = task("B", &project, None);

        let tasks = vec![a, a1, a2, b];
        let rows = flatten(&tasks, &[project]);
        let marks: Vec<(&str, bool)> = rows
            .iter()
            .map(|r| (r.task.name.as_str(), r.is_last_child))
            .collect();
        assert_eq!(
            marks,
            vec![("A", false), ("A1", false), ("A2", true), ("B", true)]
        );
    }

    #[test]
    fn flatten_is_idempotent_on_an_unchanged_snapshot() {
        let project = Project::new("Alpha");
        let a = task("A", &project, None);
        let a1 = task("A1", &project, Some(&a));
        let b = task("B", &project, None);
        let tasks = vec![a, a1, b];
        let projects = vec![project];

        let first = names(&flatten(&tasks, &projects));
        let second = names(&flatten(&tasks, &projects));
        assert_eq!(first, second);
    }

    #[test]
    fn orphaned_tasks_emit_no_rows() {
        let project = Project::new("Alpha");
        let mut orphan = task("Orphan", &project, None);
        orphan.parent_id = Some(Uuid::new_v4());
        assert!(flatten(&[orphan], &[project]).is_empty());
    }

    #[test]
    fn tasks_appear_under_their_own_project_only() {
        let alpha = Project::new("Alpha");
        let beta = Project::new("Beta");
        let a = task("A", &alpha, None);
        let b = task("B", &beta, None);

        let tasks = vec![b, a];
        let rows = flatten(&tasks, &[alpha, beta]);
        // Project order wins over slice order across projects.
        assert_eq!(names(&rows), vec!["A", "B"]);
    }
}
