//! Tabular rendering for task lists.
//!
//! # Invariants
//! - Rows come from `Task::to_row_string`, one per task, in input order.
//! - Rendering never fails; an empty list yields a notice instead of a table.

use crate::model::task::Task;

pub const ALL_TASKS_TITLE: &str = "ALL TASKS";
pub const PENDING_TASKS_TITLE: &str = "PENDING TASKS";
pub const COMPLETED_TASKS_TITLE: &str = "COMPLETED TASKS";

pub const EMPTY_LIST_NOTICE: &str = "⚠ No tasks in this category.";

const TABLE_RULE: &str =
    "+------+------------+------------------------------+-----------+--------------+";
const TABLE_HEADER: &str =
    "| ID   | TYPE       | NAME                         | PRIORITY  | STATUS       |";

/// Renders `tasks` under `title`, each line prefixed with two spaces.
pub fn render_task_table(title: &str, tasks: &[Task]) -> String {
    let mut lines = vec![format!(
        "══════════════════════ {title} ══════════════════════"
    )];

    if tasks.is_empty() {
        lines.push(EMPTY_LIST_NOTICE.to_string());
    } else {
        lines.extend([TABLE_RULE, TABLE_HEADER, TABLE_RULE].map(str::to_string));
        lines.extend(tasks.iter().map(Task::to_row_string));
        lines.push(TABLE_RULE.to_string());
        lines.push(format!("Total: {} task(s).", tasks.len()));
    }

    lines.iter().map(|line| format!("  {line}\n")).collect()
}

#[cfg(test)]
mod tests {
    use super::{render_task_table, EMPTY_LIST_NOTICE, PENDING_TASKS_TITLE};
    use crate::model::task::Task;

    #[test]
    fn empty_list_renders_notice_only() {
        let rendered = render_task_table(PENDING_TASKS_TITLE, &[]);

        assert!(rendered.contains(PENDING_TASKS_TITLE));
        assert!(rendered.contains(EMPTY_LIST_NOTICE));
        assert!(!rendered.contains("Total:"));
    }

    #[test]
    fn rows_follow_input_order_with_total() {
        let tasks = vec![
            Task::plain(7, "first", "low"),
            Task::urgent(3, "second", "high", "2026-03-01"),
        ];

        let rendered = render_task_table("ALL TASKS", &tasks);
        let first = rendered.find("first").expect("first row present");
        let second = rendered.find("second").expect("second row present");
        assert!(first < second);
        assert!(rendered.contains("Deadline: 2026-03-01"));
        assert!(rendered.trim_end().ends_with("Total: 2 task(s)."));
    }

    #[test]
    fn every_line_is_indented_and_terminated() {
        let tasks = vec![Task::plain(1, "only", "medium")];

        let rendered = render_task_table("ALL TASKS", &tasks);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 7);
        assert!(lines.iter().all(|line| line.starts_with("  ")));
        assert!(rendered.ends_with('\n'));
        assert_eq!(lines[2], format!("  {}", super::TABLE_HEADER));
        assert_eq!(lines[4], format!("  {}", tasks[0].to_row_string()));
    }
}
