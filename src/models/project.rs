use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A project record. Absent `title` or `owner` values are stored as-is and
/// left out of the serialized object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

impl Project {
    /// Build a project with a freshly generated identifier.
    pub fn new(title: Option<String>, owner: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            owner,
        }
    }

    pub fn title_contains(&self, needle: &str) -> bool {
        self.title
            .as_deref()
            .is_some_and(|title| title.contains(needle))
    }
}
