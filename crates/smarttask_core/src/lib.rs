//! Core domain logic for SmartTask.
//! This crate is the single source of truth for task registry invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{
    Execution, ExecutionOutcome, Priority, Task, TaskId, TaskKind, TaskStatus,
};
pub use repo::task_repo::{InMemoryTaskRepository, TaskRepository};
pub use service::task_service::TaskService;
pub use view::table::{
    render_task_table, ALL_TASKS_TITLE, COMPLETED_TASKS_TITLE, PENDING_TASKS_TITLE,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
