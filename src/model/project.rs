use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A project grouping tasks on the timeline.
///
/// The engine reads `id` and `collapsed`; `name` and `color` pass through
/// to the renderer untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    /// Display color as a hex string, e.g. `"#4682b4"`.
    pub color: String,
    /// Hides every task of the project when set.
    #[serde(default)]
    pub collapsed: bool,
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            color: "#4682b4".to_string(), // Steel blue
            collapsed: false,
        }
    }

    pub fn expanded(&self) -> bool {
        !self.collapsed
    }
}
