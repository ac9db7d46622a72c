//! Task registry service.
//!
//! # Responsibility
//! - Assign monotonically increasing ids and create plain/urgent tasks.
//! - Expose CRUD plus pending/completed partitions as owned snapshots.
//!
//! # Invariants
//! - `next_id` starts at 1 (or after the largest pre-existing id), grows by
//!   one per creation and never goes back; deleted ids are never handed out
//!   again.
//! - The only mutators of `completed` are `mark_completed` and `execute`.
//! - Unknown ids are reported through `bool`/`Option`, never as errors, and
//!   are not logged.

use crate::model::task::{Execution, Task, TaskId, TaskStatus};
use crate::repo::task_repo::{InMemoryTaskRepository, TaskRepository};
use log::debug;

const FIRST_TASK_ID: TaskId = 1;

/// Registry of tasks for one process lifetime.
#[derive(Debug)]
pub struct TaskService<R: TaskRepository = InMemoryTaskRepository> {
    repo: R,
    next_id: TaskId,
}

impl TaskService<InMemoryTaskRepository> {
    /// Creates an empty in-memory registry.
    pub fn new() -> Self {
        Self::with_repository(InMemoryTaskRepository::new())
    }

    /// Creates an in-memory registry pre-populated with demo tasks.
    ///
    /// The seed is a convenience for interactive sessions; it is not part
    /// of the registry contract.
    pub fn with_sample_tasks() -> Self {
        let mut service = Self::new();
        service.create_plain("Study Rust fundamentals", "HIGH");
        service.create_plain("Read chapter 3 of the manual", "MEDIUM");
        service.create_urgent("Deliver SmartTask project", "HIGH", "2026-03-01");
        service.create_plain("Practice algorithm exercises", "LOW");
        service
    }
}

impl Default for TaskService<InMemoryTaskRepository> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: TaskRepository> TaskService<R> {
    /// Creates a registry over `repo`.
    ///
    /// Numbering continues after the largest id already stored, so tasks
    /// present in `repo` are never shadowed by new ones.
    pub fn with_repository(repo: R) -> Self {
        let next_id = repo.max_id().map_or(FIRST_TASK_ID, |max| max + 1);
        Self { repo, next_id }
    }

    /// Id the next creation will receive.
    pub fn next_id(&self) -> TaskId {
        self.next_id
    }

    fn allocate_id(&mut self) -> TaskId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn store(&mut self, task: Task) -> Task {
        debug!(
            "event=task_create module=registry status=ok id={} kind={}",
            task.id(),
            task.type_label()
        );
        let displaced = self.repo.insert(task.clone());
        debug_assert!(displaced.is_none(), "registry ids must be unique");
        task
    }

    /// Creates a pending plain task and returns a copy of it.
    pub fn create_plain(&mut self, name: impl Into<String>, priority: impl AsRef<str>) -> Task {
        let id = self.allocate_id();
        self.store(Task::plain(id, name, priority))
    }

    /// Creates a pending urgent task and returns a copy of it.
    pub fn create_urgent(
        &mut self,
        name: impl Into<String>,
        priority: impl AsRef<str>,
        deadline: impl Into<String>,
    ) -> Task {
        let id = self.allocate_id();
        self.store(Task::urgent(id, name, priority, deadline))
    }

    /// Returns a copy of the task with `id`, if it exists.
    pub fn find_by_id(&self, id: TaskId) -> Option<Task> {
        self.repo.get(id).cloned()
    }

    /// Snapshot of every task in insertion order.
    pub fn all(&self) -> Vec<Task> {
        self.repo.list(None)
    }

    /// Snapshot of pending tasks in insertion order.
    pub fn pending(&self) -> Vec<Task> {
        self.repo.list(Some(TaskStatus::Pending))
    }

    /// Snapshot of completed tasks in insertion order.
    pub fn completed(&self) -> Vec<Task> {
        self.repo.list(Some(TaskStatus::Completed))
    }

    /// Marks a pending task completed.
    ///
    /// Returns `false` without mutating when `id` is unknown or the task is
    /// already completed; callers re-query `find_by_id` to tell them apart.
    pub fn mark_completed(&mut self, id: TaskId) -> bool {
        let Some(task) = self.repo.get_mut(id) else {
            return false;
        };
        if !task.complete() {
            return false;
        }
        debug!("event=task_complete module=registry status=ok id={id}");
        true
    }

    /// Runs the task's own variant action on the live record.
    ///
    /// Returns `None` for an unknown id. An already completed task yields an
    /// `AlreadyCompleted` execution and stays unchanged.
    pub fn execute(&mut self, id: TaskId) -> Option<Execution> {
        let execution = self.repo.get_mut(id)?.execute();
        if execution.changed() {
            debug!("event=task_execute module=registry status=ok id={id}");
        }
        Some(execution)
    }

    /// Removes the task with `id`. Its id is retired for good.
    pub fn delete(&mut self, id: TaskId) -> bool {
        if self.repo.remove(id).is_none() {
            return false;
        }
        debug!(
            "event=task_delete module=registry status=ok id={id} remaining={}",
            self.repo.len()
        );
        true
    }

    /// Number of tasks currently held.
    pub fn count(&self) -> usize {
        self.repo.len()
    }
}
