//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record shared by plain and urgent tasks.
//! - Dispatch variant behavior (`type_label`, `execute`, `describe`,
//!   `to_row_string`) through a closed `TaskKind`.
//!
//! # Invariants
//! - `id` is assigned once by the registry and never changes.
//! - `priority` is upper-cased at construction and on every update.
//! - `deadline` exists only on `TaskKind::Urgent` and is stored verbatim.

use std::fmt::{Display, Formatter};

/// Registry-assigned task identifier. Positive, never reused.
pub type TaskId = u64;

/// Upper-cased priority text.
///
/// Any text is accepted; only the case normalization is guaranteed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Priority(String);

impl Priority {
    pub const HIGH: &'static str = "HIGH";
    pub const MEDIUM: &'static str = "MEDIUM";
    pub const LOW: &'static str = "LOW";

    /// Builds a priority from raw user text, upper-casing it.
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().to_uppercase())
    }

    pub fn high() -> Self {
        Self(Self::HIGH.to_string())
    }

    pub fn medium() -> Self {
        Self(Self::MEDIUM.to_string())
    }

    pub fn low() -> Self {
        Self(Self::LOW.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Symbol shown next to the priority in tabular rows.
    pub fn glyph(&self) -> &'static str {
        match self.0.as_str() {
            Self::HIGH => "🔴",
            Self::MEDIUM => "🟡",
            Self::LOW => "🟢",
            _ => "⚪",
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.0)
    }
}

/// Completion state projected from `Task::is_completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskStatus {
    Pending,
    Completed,
}

impl TaskStatus {
    pub fn from_completed(completed: bool) -> Self {
        if completed {
            Self::Completed
        } else {
            Self::Pending
        }
    }

    /// Fixed-width human label used in table rows.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "⏳ Pending  ",
            Self::Completed => "✅ Completed",
        }
    }

    fn word(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Completed => "Completed",
        }
    }
}

/// Closed set of task variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskKind {
    /// Ordinary task without extra fields.
    Plain,
    /// Task carrying a free-form deadline (no date validation).
    Urgent { deadline: String },
}

impl TaskKind {
    /// Constant label per variant.
    pub fn type_label(&self) -> &'static str {
        match self {
            Self::Plain => "NORMAL",
            Self::Urgent { .. } => "URGENT",
        }
    }
}

/// Result of running a task's own `execute` action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionOutcome {
    /// The task moved from pending to completed.
    Completed,
    /// The task was already completed; nothing changed.
    AlreadyCompleted,
}

/// Outcome plus the variant-specific message for the caller to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Execution {
    pub outcome: ExecutionOutcome,
    pub message: String,
}

impl Execution {
    pub fn changed(&self) -> bool {
        self.outcome == ExecutionOutcome::Completed
    }
}

/// Canonical task record.
///
/// Only the registry builds tasks with fresh ids; copies handed out by it
/// are detached snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    name: String,
    priority: Priority,
    completed: bool,
    kind: TaskKind,
}

impl Task {
    /// Creates a pending plain task.
    pub fn plain(id: TaskId, name: impl Into<String>, priority: impl AsRef<str>) -> Self {
        Self::with_kind(id, name, priority, TaskKind::Plain)
    }

    /// Creates a pending urgent task. `deadline` is stored as-is.
    pub fn urgent(
        id: TaskId,
        name: impl Into<String>,
        priority: impl AsRef<str>,
        deadline: impl Into<String>,
    ) -> Self {
        Self::with_kind(
            id,
            name,
            priority,
            TaskKind::Urgent {
                deadline: deadline.into(),
            },
        )
    }

    fn with_kind(
        id: TaskId,
        name: impl Into<String>,
        priority: impl AsRef<str>,
        kind: TaskKind,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            priority: Priority::new(priority),
            completed: false,
            kind,
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn priority(&self) -> &Priority {
        &self.priority
    }

    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn status(&self) -> TaskStatus {
        TaskStatus::from_completed(self.completed)
    }

    /// Deadline text for urgent tasks, `None` for plain ones.
    pub fn deadline(&self) -> Option<&str> {
        match &self.kind {
            TaskKind::Plain => None,
            TaskKind::Urgent { deadline } => Some(deadline.as_str()),
        }
    }

    /// Replaces the priority, re-applying upper-case normalization.
    pub fn set_priority(&mut self, raw: impl AsRef<str>) {
        self.priority = Priority::new(raw);
    }

    pub fn type_label(&self) -> &'static str {
        self.kind.type_label()
    }

    /// Flips a pending task to completed. Returns whether anything changed.
    pub(crate) fn complete(&mut self) -> bool {
        if self.completed {
            return false;
        }
        self.completed = true;
        true
    }

    /// Runs the variant action: completes a pending task and reports a
    /// variant-specific message, or reports a no-op when already completed.
    pub fn execute(&mut self) -> Execution {
        if !self.complete() {
            let message = match &self.kind {
                TaskKind::Plain => format!("Task was already completed: {}", self.name),
                TaskKind::Urgent { .. } => {
                    format!("Urgent task was already completed: {}", self.name)
                }
            };
            return Execution {
                outcome: ExecutionOutcome::AlreadyCompleted,
                message,
            };
        }

        let message = match &self.kind {
            TaskKind::Plain => format!(
                "Normal task executed and marked as completed: {}",
                self.name
            ),
            TaskKind::Urgent { deadline } => format!(
                "URGENT task completed: {} | Deadline was: {deadline}",
                self.name
            ),
        };
        Execution {
            outcome: ExecutionOutcome::Completed,
            message,
        }
    }

    /// One-line summary of every field.
    pub fn describe(&self) -> String {
        let status = self.status().word();
        match &self.kind {
            TaskKind::Plain => format!(
                "Normal task #{} | Name: {:<28} | Priority: {:<6} | Status: {status}",
                self.id, self.name, self.priority
            ),
            TaskKind::Urgent { deadline } => format!(
                "Urgent task #{} | Name: {:<28} | Priority: {:<6} | Deadline: {:<12} | Status: {status}",
                self.id, self.name, self.priority, deadline
            ),
        }
    }

    /// Fixed-width table row. Urgent tasks append the deadline.
    pub fn to_row_string(&self) -> String {
        let label = format!("[{}]", self.type_label());
        let row = format!(
            "| {:<4} | {:<10} | {:<28} | {} {:<6} | {} |",
            self.id,
            label,
            self.name,
            self.priority.glyph(),
            self.priority,
            self.status().label()
        );
        match &self.kind {
            TaskKind::Plain => row,
            TaskKind::Urgent { deadline } => format!("{row} Deadline: {deadline} |"),
        }
    }
}

impl Display for Task {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_row_string())
    }
}
