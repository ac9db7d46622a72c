use smarttask_core::{
    ExecutionOutcome, InMemoryTaskRepository, Task, TaskRepository, TaskService,
};
use std::collections::HashSet;

fn ids(tasks: &[Task]) -> Vec<u64> {
    tasks.iter().map(Task::id).collect()
}

#[test]
fn report_and_filing_scenario() {
    let mut registry = TaskService::new();

    let report = registry.create_plain("Write report", "low");
    assert_eq!(report.id(), 1);
    assert!(!report.is_completed());
    assert_eq!(report.priority().as_str(), "LOW");

    let filing = registry.create_urgent("Submit filing", "high", "2026-03-01");
    assert_eq!(filing.id(), 2);

    assert!(registry.mark_completed(1));
    assert!(!registry.mark_completed(1));

    assert_eq!(ids(&registry.pending()), vec![2]);
    assert_eq!(ids(&registry.completed()), vec![1]);

    assert!(registry.delete(2));
    assert!(registry.find_by_id(2).is_none());
    assert_eq!(registry.count(), 1);
}

#[test]
fn ids_are_unique_and_strictly_increasing_across_kinds() {
    let mut registry = TaskService::new();
    let mut seen = HashSet::new();
    let mut last = 0;

    for round in 0..20 {
        let task = if round % 3 == 0 {
            registry.create_urgent(format!("urgent {round}"), "high", "soon")
        } else {
            registry.create_plain(format!("plain {round}"), "medium")
        };
        assert!(task.id() > last);
        assert!(seen.insert(task.id()));
        assert!(!task.is_completed());
        last = task.id();
        if round % 4 == 0 {
            registry.delete(task.id());
        }
    }

    assert_eq!(last, 20);
    assert_eq!(registry.next_id(), 21);
}

#[test]
fn deleted_ids_are_never_reused() {
    let mut registry = TaskService::new();
    let first = registry.create_plain("first", "low");
    let second = registry.create_plain("second", "low");

    assert!(registry.delete(second.id()));
    let third = registry.create_plain("third", "low");

    assert_eq!(first.id(), 1);
    assert_eq!(third.id(), 3);
    assert!(registry.find_by_id(2).is_none());
}

#[test]
fn unknown_ids_report_failure_without_mutation() {
    let mut registry = TaskService::new();
    registry.create_plain("only", "low");

    assert!(registry.find_by_id(42).is_none());
    assert!(!registry.mark_completed(42));
    assert!(!registry.delete(42));
    assert!(registry.execute(42).is_none());
    assert_eq!(registry.count(), 1);
    assert_eq!(registry.pending().len(), 1);
}

#[test]
fn mark_completed_and_execute_share_completion_state() {
    let mut registry = TaskService::new();
    let urgent = registry.create_urgent("Submit filing", "high", "2026-03-01");
    let plain = registry.create_plain("Write report", "low");

    let execution = registry.execute(urgent.id()).expect("task exists");
    assert_eq!(execution.outcome, ExecutionOutcome::Completed);
    assert!(execution.message.contains("2026-03-01"));
    assert!(!registry.mark_completed(urgent.id()));

    assert!(registry.mark_completed(plain.id()));
    let noop = registry.execute(plain.id()).expect("task exists");
    assert_eq!(noop.outcome, ExecutionOutcome::AlreadyCompleted);

    assert!(registry.pending().is_empty());
    assert_eq!(ids(&registry.completed()), vec![1, 2]);
}

#[test]
fn already_completed_is_disambiguated_by_requery() {
    let mut registry = TaskService::new();
    let task = registry.create_plain("done", "low");
    assert!(registry.mark_completed(task.id()));

    assert!(!registry.mark_completed(task.id()));
    let found = registry.find_by_id(task.id()).expect("still present");
    assert!(found.is_completed());
}

#[test]
fn snapshots_do_not_alias_registry_state() {
    let mut registry = TaskService::with_sample_tasks();
    assert!(registry.mark_completed(4));

    let mut all = registry.all();
    all.clear();
    let mut pending = registry.pending();
    pending[0].execute();
    pending[0].set_priority("none");
    let mut completed = registry.completed();
    completed[0].set_priority("dropped");
    completed.clear();
    let mut found = registry.find_by_id(1).expect("seeded task");
    found.execute();

    assert_eq!(registry.all().len(), 4);
    assert_eq!(registry.pending().len(), 3);
    let done = registry.completed();
    assert_eq!(ids(&done), vec![4]);
    assert_eq!(done[0].priority().as_str(), "LOW");
    let live = registry.find_by_id(1).expect("seeded task");
    assert!(!live.is_completed());
    assert_eq!(live.priority().as_str(), "HIGH");
}

#[test]
fn partitions_always_add_up_to_count() {
    let mut registry = TaskService::with_sample_tasks();
    let check = |registry: &TaskService| {
        let all = registry.all();
        assert_eq!(all.len(), registry.count());
        assert_eq!(all.len(), registry.pending().len() + registry.completed().len());
    };

    check(&registry);
    registry.mark_completed(2);
    check(&registry);
    registry.execute(3);
    check(&registry);
    registry.delete(2);
    check(&registry);
    registry.create_urgent("late", "low", "yesterday");
    check(&registry);

    assert_eq!(ids(&registry.all()), vec![1, 3, 4, 5]);
    assert_eq!(ids(&registry.completed()), vec![3]);
}

#[test]
fn prefilled_repository_keeps_existing_tasks_and_ids() {
    let mut repo = InMemoryTaskRepository::new();
    repo.insert(Task::plain(1, "pre-existing", "low"));
    repo.insert(Task::urgent(4, "imported", "high", "2026-03-01"));

    let mut registry = TaskService::with_repository(repo);
    assert_eq!(registry.next_id(), 5);

    let created = registry.create_plain("new", "high");
    assert_eq!(created.id(), 5);
    assert_eq!(registry.count(), 3);
    assert_eq!(
        registry.find_by_id(1).map(|task| task.name().to_string()).as_deref(),
        Some("pre-existing")
    );
    assert_eq!(ids(&registry.all()), vec![1, 4, 5]);
}

#[test]
fn empty_repository_starts_numbering_at_one() {
    let mut registry = TaskService::with_repository(InMemoryTaskRepository::new());
    assert_eq!(registry.create_plain("first", "low").id(), 1);
}
