use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

use crate::models::Project;

/// Ordered collection of projects in insertion order.
///
/// No uniqueness or format checks happen here; handlers own those rules.
#[derive(Debug, Default)]
pub struct Projects {
    items: Vec<Project>,
}

impl Projects {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, project: Project) {
        self.items.push(project);
    }

    /// Position of the project whose id, spelled in its stored lowercase
    /// hyphenated form, is exactly `id`.
    pub fn position(&self, id: &str) -> Option<usize> {
        let mut buf = Uuid::encode_buffer();
        self.items
            .iter()
            .position(|p| &*p.id.hyphenated().encode_lower(&mut buf) == id)
    }

    /// Swap in `project` at `index`, returning the record it replaced.
    ///
    /// Panics if `index` is out of bounds, like slice indexing.
    pub fn replace(&mut self, index: usize, project: Project) -> Project {
        std::mem::replace(&mut self.items[index], project)
    }

    /// Remove the project at `index`, keeping the order of the rest.
    ///
    /// Panics if `index` is out of bounds, like `Vec::remove`.
    pub fn remove(&mut self, index: usize) -> Project {
        self.items.remove(index)
    }

    pub fn all(&self) -> &[Project] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Shared project store. Every handler takes one guard for its whole
/// read-modify-write, so lookups and the mutation that follows them are
/// never interleaved with another request.
#[derive(Debug, Default)]
pub struct ProjectStore {
    inner: RwLock<Projects>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, Projects> {
        self.inner.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, Projects> {
        self.inner.write().await
    }
}
