//! Interactive menu loop over a `TaskService`.
//!
//! # Responsibility
//! - Prompt, validate raw input and render registry results.
//! - Never mutate tasks except through registry operations.
//!
//! # Invariants
//! - Option `0` or end of input ends the loop.
//! - Lists are rendered from registry snapshots.

use log::info;
use smarttask_core::{
    render_task_table, Task, TaskId, TaskService, ALL_TASKS_TITLE, COMPLETED_TASKS_TITLE,
    PENDING_TASKS_TITLE,
};
use std::io::{BufRead, Write};

use crate::error::ShellResult;
use crate::prompt::Prompt;

const MENU: &str = "
  ═══════════════ MAIN MENU ═══════════════
    1. List all tasks
    2. List pending tasks
    3. List completed tasks
    4. Add NORMAL task
    5. Add URGENT task
    6. Mark task as completed
    7. Delete task by ID
    8. Show task details
    9. Execute task
    0. Exit
  ═════════════════════════════════════════";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

pub struct Shell<R, W> {
    registry: TaskService,
    prompt: Prompt<R, W>,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(registry: TaskService, input: R, output: W) -> Self {
        Self {
            registry,
            prompt: Prompt::new(input, output),
        }
    }

    #[cfg(test)]
    pub fn finish(self) -> (TaskService, W) {
        (self.registry, self.prompt.into_output())
    }

    /// Runs the menu until the user exits or input ends.
    pub fn run(&mut self) -> ShellResult<()> {
        self.banner()?;
        loop {
            self.prompt.say(MENU)?;
            let Some(choice) = self.prompt.ask_int("    Select an option: ")? else {
                break;
            };

            let flow = match choice {
                1 => {
                    let tasks = self.registry.all();
                    self.list(ALL_TASKS_TITLE, &tasks)?
                }
                2 => {
                    let tasks = self.registry.pending();
                    self.list(PENDING_TASKS_TITLE, &tasks)?
                }
                3 => {
                    let tasks = self.registry.completed();
                    self.list(COMPLETED_TASKS_TITLE, &tasks)?
                }
                4 => self.add_normal()?,
                5 => self.add_urgent()?,
                6 => self.mark_completed()?,
                7 => self.delete()?,
                8 => self.show_detail()?,
                9 => self.execute()?,
                0 => {
                    self.prompt.say("\n  👋 Goodbye. Keep tracking your tasks!")?;
                    Flow::Exit
                }
                _ => {
                    self.prompt.say("\n  ❌ Invalid option. Choose between 0 and 9.")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Exit {
                break;
            }
        }
        info!(
            "event=shell_exit module=cli status=ok tasks={}",
            self.registry.count()
        );
        Ok(())
    }

    fn banner(&mut self) -> ShellResult<()> {
        self.prompt.say("\n  ╔══════════════════════════════════════════╗")?;
        self.prompt.say("  ║        SmartTask — Task Management       ║")?;
        self.prompt.say("  ╚══════════════════════════════════════════╝")
    }

    fn list(&mut self, title: &str, tasks: &[Task]) -> ShellResult<Flow> {
        self.prompt
            .say(format!("\n{}", render_task_table(title, tasks).trim_end()))?;
        Ok(Flow::Continue)
    }

    /// Reads a non-empty name. `Ok(None)` means end of input, `Ok(Some(None))`
    /// a rejected blank name.
    fn ask_name(&mut self) -> ShellResult<Option<Option<String>>> {
        let Some(name) = self.prompt.ask("  Name: ")? else {
            return Ok(None);
        };
        if name.trim().is_empty() {
            self.prompt.say("  ❌ The name cannot be empty.")?;
            return Ok(Some(None));
        }
        Ok(Some(Some(name)))
    }

    fn add_normal(&mut self) -> ShellResult<Flow> {
        self.prompt.say("\n  ─── Add Normal Task ───")?;
        let name = match self.ask_name()? {
            None => return Ok(Flow::Exit),
            Some(None) => return Ok(Flow::Continue),
            Some(Some(name)) => name,
        };
        let Some(priority) = self.prompt.ask_priority()? else {
            return Ok(Flow::Exit);
        };

        let task = self.registry.create_plain(name, priority.as_str());
        self.prompt
            .say(format!("  ✅ Normal task added with ID: {}", task.id()))?;
        Ok(Flow::Continue)
    }

    fn add_urgent(&mut self) -> ShellResult<Flow> {
        self.prompt.say("\n  ─── Add Urgent Task ───")?;
        let name = match self.ask_name()? {
            None => return Ok(Flow::Exit),
            Some(None) => return Ok(Flow::Continue),
            Some(Some(name)) => name,
        };
        let Some(priority) = self.prompt.ask_priority()? else {
            return Ok(Flow::Exit);
        };
        let Some(deadline) = self.prompt.ask("  Deadline (YYYY-MM-DD): ")? else {
            return Ok(Flow::Exit);
        };

        let task = self
            .registry
            .create_urgent(name, priority.as_str(), deadline);
        self.prompt
            .say(format!("  🚨 Urgent task added with ID: {}", task.id()))?;
        Ok(Flow::Continue)
    }

    /// Reads an id; `Ok(None)` means end of input. Negative numbers map to
    /// `Some(None)` and are reported as unknown ids by callers.
    fn ask_id(&mut self, label: &str) -> ShellResult<Option<(i64, Option<TaskId>)>> {
        let Some(raw) = self.prompt.ask_int(label)? else {
            return Ok(None);
        };
        Ok(Some((raw, TaskId::try_from(raw).ok())))
    }

    fn not_found(&mut self, raw: i64) -> ShellResult<Flow> {
        self.prompt.say(format!("  ❌ No task exists with ID {raw}"))?;
        Ok(Flow::Continue)
    }

    fn mark_completed(&mut self) -> ShellResult<Flow> {
        let Some((raw, id)) = self.ask_id("\n  Enter the ID of the task to complete: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(id) = id else {
            return self.not_found(raw);
        };

        if self.registry.mark_completed(id) {
            self.prompt
                .say(format!("  ✅ Task #{id} marked as completed."))?;
        } else if self.registry.find_by_id(id).is_some() {
            self.prompt
                .say(format!("  ⚠ Task #{id} was already completed."))?;
        } else {
            return self.not_found(raw);
        }
        Ok(Flow::Continue)
    }

    fn delete(&mut self) -> ShellResult<Flow> {
        let Some((raw, id)) = self.ask_id("\n  Enter the ID of the task to delete: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(task) = id.and_then(|id| self.registry.find_by_id(id)) else {
            return self.not_found(raw);
        };

        self.prompt
            .say(format!("  Task to delete: {}", task.name()))?;
        let Some(answer) = self.prompt.ask("  Confirm deletion? (y/N): ")? else {
            return Ok(Flow::Exit);
        };
        if answer.trim().eq_ignore_ascii_case("y") && self.registry.delete(task.id()) {
            self.prompt
                .say(format!("  ✅ Task #{} deleted.", task.id()))?;
        } else {
            self.prompt.say("  ⚠ Deletion cancelled.")?;
        }
        Ok(Flow::Continue)
    }

    fn show_detail(&mut self) -> ShellResult<Flow> {
        let Some((raw, id)) = self.ask_id("\n  Enter the task ID: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(task) = id.and_then(|id| self.registry.find_by_id(id)) else {
            return self.not_found(raw);
        };

        self.prompt
            .say(format!("\n  📋 Detail: {}", task.describe()))?;
        Ok(Flow::Continue)
    }

    fn execute(&mut self) -> ShellResult<Flow> {
        let Some((raw, id)) = self.ask_id("\n  Enter the ID of the task to execute: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(execution) = id.and_then(|id| self.registry.execute(id)) else {
            return self.not_found(raw);
        };

        let marker = if execution.changed() { "✅" } else { "⚠" };
        self.prompt
            .say(format!("  {marker} {}", execution.message))?;
        Ok(Flow::Continue)
    }
}
