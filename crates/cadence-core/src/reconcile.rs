//! Reconciliation of an in-memory weekly task list against the store.
//!
//! Given the persisted identifiers for one week and the user's desired
//! task list, [`reconcile`] computes the minimal delete/upsert plan with
//! an anti-wipe guard: an empty desired list never means "delete
//! everything", since a transient empty state must not clear real data.

use std::borrow::Cow;
use std::collections::HashSet;

use uuid::Uuid;

use crate::models::{TaskId, WeeklyTask};

/// Source of fresh unique task identifiers.
///
/// Injected rather than called implicitly so that tests can substitute a
/// deterministic generator.
pub trait IdGenerator: Send + Sync {
    /// Generates a new identifier, unique across the store's lifetime.
    fn generate(&self) -> TaskId;
}

/// Random UUID v4 generator, the production id source.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> TaskId {
        Uuid::new_v4().to_string()
    }
}

/// Assigns a fresh identifier to every task lacking one.
///
/// Returns `Cow::Borrowed` of the input when every task already has an
/// id, so callers can cheaply detect that no normalization was needed.
pub fn normalize_ids<'a>(
    tasks: &'a [WeeklyTask],
    ids: &dyn IdGenerator,
) -> Cow<'a, [WeeklyTask]> {
    if tasks.iter().all(|task| task.id.is_some()) {
        return Cow::Borrowed(tasks);
    }

    let mut owned = tasks.to_vec();
    for task in &mut owned {
        if task.id.is_none() {
            task.id = Some(ids.generate());
        }
    }
    Cow::Owned(owned)
}

/// The persistence operations needed to move one week's task set from
/// its stored state to the desired state.
#[derive(Debug, Clone, PartialEq)]
pub struct ReconcilePlan {
    /// Week this plan applies to
    pub week_number: u8,

    /// Identifiers to delete, sorted for deterministic application
    pub to_delete: Vec<TaskId>,

    /// Tasks to upsert by id; every desired task, even unchanged ones
    pub to_upsert: Vec<WeeklyTask>,

    /// Set when the anti-wipe guard fired; both op lists are empty then
    pub aborted: bool,
}

impl ReconcilePlan {
    fn aborted(week_number: u8) -> Self {
        Self {
            week_number,
            to_delete: Vec::new(),
            to_upsert: Vec::new(),
            aborted: true,
        }
    }
}

/// Computes the delete/upsert plan for one week.
///
/// `desired` must already be normalized (see [`normalize_ids`]); ids in
/// the store that are absent from the desired list are scheduled for
/// deletion, and every desired task is scheduled for an idempotent
/// upsert-by-id. Deletions are meant to be applied before upserts, but
/// the two passes are independent: failure of one must not block the
/// other.
pub fn reconcile(
    week_number: u8,
    existing_ids: &HashSet<TaskId>,
    desired: &[WeeklyTask],
) -> ReconcilePlan {
    debug_assert!(
        desired.iter().all(|task| task.id.is_some()),
        "reconcile requires normalized tasks"
    );

    if desired.is_empty() && !existing_ids.is_empty() {
        return ReconcilePlan::aborted(week_number);
    }

    let desired_ids: HashSet<&TaskId> = desired.iter().filter_map(|t| t.id.as_ref()).collect();

    let mut to_delete: Vec<TaskId> = existing_ids
        .iter()
        .filter(|id| !desired_ids.contains(*id))
        .cloned()
        .collect();
    to_delete.sort();

    ReconcilePlan {
        week_number,
        to_delete,
        to_upsert: desired.to_vec(),
        aborted: false,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU64, Ordering};

    use super::*;
    use crate::models::{Priority, TaskType};

    /// Counter-based generator for deterministic tests.
    #[derive(Default)]
    struct SeqGenerator(AtomicU64);

    impl IdGenerator for SeqGenerator {
        fn generate(&self) -> TaskId {
            format!("task-{}", self.0.fetch_add(1, Ordering::Relaxed))
        }
    }

    fn task(id: Option<&str>, title: &str) -> WeeklyTask {
        WeeklyTask {
            id: id.map(String::from),
            week_number: 3,
            day_of_week: None,
            title: title.to_string(),
            description: String::new(),
            priority: Priority::Medium,
            estimated_hours: 2.0,
            is_completed: false,
            task_type: TaskType::Action,
        }
    }

    fn id_set(ids: &[&str]) -> HashSet<TaskId> {
        ids.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_normalize_assigns_missing_ids_only() {
        let tasks = vec![task(Some("a"), "keep"), task(None, "new")];
        let normalized = normalize_ids(&tasks, &SeqGenerator::default());
        assert!(matches!(normalized, Cow::Owned(_)));
        assert_eq!(normalized[0].id.as_deref(), Some("a"));
        assert_eq!(normalized[1].id.as_deref(), Some("task-0"));
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let gen = SeqGenerator::default();
        let tasks = vec![task(None, "one"), task(None, "two")];
        let first = normalize_ids(&tasks, &gen).into_owned();
        let second = normalize_ids(&first, &gen);
        // Second pass borrows: no new ids are generated.
        assert!(matches!(second, Cow::Borrowed(_)));
        assert_eq!(second.as_ref(), first.as_slice());
    }

    #[test]
    fn test_diff_correctness() {
        let existing = id_set(&["a", "b", "c"]);
        let desired = vec![task(Some("b"), "b"), task(Some("d"), "d")];
        let plan = reconcile(3, &existing, &desired);

        assert!(!plan.aborted);
        assert_eq!(plan.to_delete, vec!["a".to_string(), "c".to_string()]);
        let upserted: Vec<&str> = plan
            .to_upsert
            .iter()
            .map(|t| t.id.as_deref().unwrap())
            .collect();
        assert_eq!(upserted, vec!["b", "d"]);
    }

    #[test]
    fn test_anti_wipe_guard() {
        let existing = id_set(&["a", "b"]);
        let plan = reconcile(3, &existing, &[]);
        assert!(plan.aborted);
        assert!(plan.to_delete.is_empty());
        assert!(plan.to_upsert.is_empty());
    }

    #[test]
    fn test_empty_existing_and_empty_desired_is_noop() {
        let plan = reconcile(3, &HashSet::new(), &[]);
        assert!(!plan.aborted);
        assert!(plan.to_delete.is_empty());
        assert!(plan.to_upsert.is_empty());
    }

    #[test]
    fn test_unchanged_tasks_still_upserted() {
        let existing = id_set(&["a"]);
        let desired = vec![task(Some("a"), "unchanged")];
        let plan = reconcile(3, &existing, &desired);
        assert!(plan.to_delete.is_empty());
        assert_eq!(plan.to_upsert.len(), 1);
    }

    #[test]
    fn test_uuid_generator_yields_unique_ids() {
        let gen = UuidGenerator;
        assert_ne!(gen.generate(), gen.generate());
    }
}
