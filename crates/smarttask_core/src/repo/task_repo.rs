//! Task repository contract and in-memory arena implementation.
//!
//! # Responsibility
//! - Provide lookup/update/delete by id without linear scans.
//! - Return owned snapshots from list queries.
//!
//! # Invariants
//! - `index` maps every live id to its slot in `slots`.
//! - Slot order equals insertion order; compaction keeps relative order.
//! - Removed ids leave a tombstone until the next compaction.

use crate::model::task::{Task, TaskId, TaskStatus};
use std::collections::HashMap;

const COMPACT_MIN_TOMBSTONES: usize = 32;

/// Storage interface used by `TaskService`.
pub trait TaskRepository {
    /// Stores `task`. An existing task with the same id is replaced in place
    /// and returned.
    fn insert(&mut self, task: Task) -> Option<Task>;
    fn get(&self, id: TaskId) -> Option<&Task>;
    fn get_mut(&mut self, id: TaskId) -> Option<&mut Task>;
    fn remove(&mut self, id: TaskId) -> Option<Task>;
    /// Owned copies in insertion order, restricted to `status` when set.
    fn list(&self, status: Option<TaskStatus>) -> Vec<Task>;
    fn len(&self) -> usize;
    /// Largest id currently stored.
    fn max_id(&self) -> Option<TaskId>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Arena-backed repository: ordered slots plus an id index.
#[derive(Debug, Default)]
pub struct InMemoryTaskRepository {
    slots: Vec<Option<Task>>,
    index: HashMap<TaskId, usize>,
}

impl InMemoryTaskRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn tombstones(&self) -> usize {
        self.slots.len() - self.index.len()
    }

    fn compact_if_sparse(&mut self) {
        let tombstones = self.tombstones();
        if tombstones < COMPACT_MIN_TOMBSTONES || tombstones <= self.index.len() {
            return;
        }

        self.slots.retain(Option::is_some);
        self.index.clear();
        for (slot, task) in self.slots.iter().enumerate() {
            if let Some(task) = task {
                self.index.insert(task.id(), slot);
            }
        }
        log::trace!(
            "event=arena_compact module=repo status=ok removed={} live={}",
            tombstones,
            self.index.len()
        );
    }

    fn live(&self) -> impl Iterator<Item = &Task> {
        self.slots.iter().flatten()
    }
}

impl TaskRepository for InMemoryTaskRepository {
    fn insert(&mut self, task: Task) -> Option<Task> {
        if let Some(&slot) = self.index.get(&task.id()) {
            return self.slots[slot].replace(task);
        }

        self.index.insert(task.id(), self.slots.len());
        self.slots.push(Some(task));
        None
    }

    fn get(&self, id: TaskId) -> Option<&Task> {
        let slot = *self.index.get(&id)?;
        self.slots[slot].as_ref()
    }

    fn get_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        let slot = *self.index.get(&id)?;
        self.slots[slot].as_mut()
    }

    fn remove(&mut self, id: TaskId) -> Option<Task> {
        let slot = self.index.remove(&id)?;
        let removed = self.slots[slot].take();
        self.compact_if_sparse();
        removed
    }

    fn list(&self, status: Option<TaskStatus>) -> Vec<Task> {
        self.live()
            .filter(|task| status.map_or(true, |status| task.status() == status))
            .cloned()
            .collect()
    }

    fn len(&self) -> usize {
        self.index.len()
    }

    fn max_id(&self) -> Option<TaskId> {
        self.index.keys().copied().max()
    }
}
