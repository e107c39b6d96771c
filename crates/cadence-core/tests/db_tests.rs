use cadence_core::{
    calendar, Database, ItemStatus, Priority, Quarter, TaskType, WeeklyStrategyItem, WeeklyTask,
};
use tempfile::NamedTempFile;

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

fn strategy_item(week: u8) -> WeeklyStrategyItem {
    WeeklyStrategyItem {
        week_number: week,
        quarter: Quarter::from_week(week),
        title: format!("Week {week}: Content marketing"),
        narrative: "First quarter focus.".to_string(),
        focus_theme: "Content marketing".to_string(),
        tactics: vec!["Publish two posts".to_string(), "Pitch a guest article".to_string()],
        deadline_date: calendar::week_deadline(2025, week).expect("valid week"),
        priority: Priority::Medium,
        status: ItemStatus::Planned,
    }
}

fn task(id: &str, week: u8, title: &str) -> WeeklyTask {
    WeeklyTask {
        id: Some(id.to_string()),
        week_number: week,
        day_of_week: None,
        title: title.to_string(),
        description: String::new(),
        priority: Priority::Medium,
        estimated_hours: 1.0,
        is_completed: false,
        task_type: TaskType::Action,
    }
}

#[test]
fn test_database_initialization() {
    let (_temp_file, _db) = create_test_db();
    assert!(_temp_file.path().exists());
}

#[test]
fn test_database_reopen_keeps_schema() {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    {
        let _db = Database::new(temp_file.path()).expect("Failed to create database");
    }
    // Second open runs the migration check against the existing schema.
    let db = Database::new(temp_file.path()).expect("Failed to reopen database");
    assert_eq!(db.count_strategy_items(2025).expect("count"), 0);
}

#[test]
fn test_replace_annual_plan_roundtrip() {
    let (_temp_file, mut db) = create_test_db();

    let items: Vec<WeeklyStrategyItem> = (1..=52).map(strategy_item).collect();
    db.replace_annual_plan(2025, &items)
        .expect("Failed to persist calendar");

    assert_eq!(db.count_strategy_items(2025).expect("count"), 52);

    let stored = db
        .list_strategy_items(2025, None)
        .expect("Failed to list items");
    assert_eq!(stored.len(), 52);
    assert_eq!(stored[0], items[0]);
    assert_eq!(stored[51].week_number, 52);
}

#[test]
fn test_replace_annual_plan_is_atomic_swap() {
    let (_temp_file, mut db) = create_test_db();

    let items: Vec<WeeklyStrategyItem> = (1..=52).map(strategy_item).collect();
    db.replace_annual_plan(2025, &items).expect("first write");
    db.replace_annual_plan(2025, &items).expect("second write");

    // No duplicates after regeneration.
    assert_eq!(db.count_strategy_items(2025).expect("count"), 52);
}

#[test]
fn test_list_strategy_items_quarter_filter() {
    let (_temp_file, mut db) = create_test_db();

    let items: Vec<WeeklyStrategyItem> = (1..=52).map(strategy_item).collect();
    db.replace_annual_plan(2025, &items).expect("write");

    let q3 = db
        .list_strategy_items(2025, Some(Quarter::Q3))
        .expect("Failed to list Q3");
    assert_eq!(q3.len(), 13);
    assert_eq!(q3.first().map(|i| i.week_number), Some(27));
    assert_eq!(q3.last().map(|i| i.week_number), Some(39));
}

#[test]
fn test_get_strategy_item() {
    let (_temp_file, mut db) = create_test_db();

    let items: Vec<WeeklyStrategyItem> = (1..=52).map(strategy_item).collect();
    db.replace_annual_plan(2025, &items).expect("write");

    let item = db
        .get_strategy_item(2025, 10)
        .expect("query")
        .expect("week 10 exists");
    assert_eq!(item.week_number, 10);
    assert_eq!(item.tactics.len(), 2);

    assert!(db.get_strategy_item(2024, 10).expect("query").is_none());
}

#[test]
fn test_upsert_tasks_inserts_and_updates() {
    let (_temp_file, mut db) = create_test_db();

    let written = db
        .upsert_tasks(&[task("a", 4, "Original")])
        .expect("insert");
    assert_eq!(written, 1);

    let mut updated = task("a", 4, "Renamed");
    updated.is_completed = true;
    updated.day_of_week = Some(3);
    db.upsert_tasks(&[updated]).expect("update");

    let stored = db.get_tasks(4).expect("list");
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].title, "Renamed");
    assert!(stored[0].is_completed);
    assert_eq!(stored[0].day_of_week, Some(3));
}

#[test]
fn test_upsert_rejects_task_without_id() {
    let (_temp_file, mut db) = create_test_db();

    let mut anonymous = task("x", 4, "No id");
    anonymous.id = None;
    assert!(db.upsert_tasks(&[anonymous]).is_err());
}

#[test]
fn test_delete_tasks_skips_missing_ids() {
    let (_temp_file, mut db) = create_test_db();

    db.upsert_tasks(&[task("a", 4, "A"), task("b", 4, "B")])
        .expect("insert");

    let removed = db
        .delete_tasks(&["a".to_string(), "ghost".to_string()])
        .expect("delete");
    assert_eq!(removed, 1);

    let ids = db.list_task_ids(4).expect("ids");
    assert!(ids.contains("b"));
    assert!(!ids.contains("a"));
}

#[test]
fn test_get_tasks_orders_assigned_days_first() {
    let (_temp_file, mut db) = create_test_db();

    let mut monday = task("m", 4, "Monday");
    monday.day_of_week = Some(1);
    let mut friday = task("f", 4, "Friday");
    friday.day_of_week = Some(5);
    let floating = task("u", 4, "Unassigned");

    db.upsert_tasks(&[floating, friday, monday]).expect("insert");

    let stored = db.get_tasks(4).expect("list");
    let titles: Vec<&str> = stored.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["Monday", "Friday", "Unassigned"]);
}

#[test]
fn test_find_task() {
    let (_temp_file, mut db) = create_test_db();

    db.upsert_tasks(&[task("a", 4, "Findable")]).expect("insert");

    let found = db
        .find_task(&"a".to_string())
        .expect("query")
        .expect("task exists");
    assert_eq!(found.title, "Findable");

    assert!(db.find_task(&"missing".to_string()).expect("query").is_none());
}

#[test]
fn test_week_completion_counts() {
    let (_temp_file, mut db) = create_test_db();

    let mut done = task("d", 6, "Done");
    done.is_completed = true;
    db.upsert_tasks(&[done, task("p", 6, "Pending")])
        .expect("insert");

    let stats = db.week_completion(6).expect("stats");
    assert_eq!(stats.completed, 1);
    assert_eq!(stats.total, 2);

    // A week with no tasks reports zeros, not an error.
    let empty = db.week_completion(50).expect("stats");
    assert_eq!(empty.total, 0);
    assert_eq!(empty.completed, 0);
}

#[test]
fn test_tasks_are_week_scoped() {
    let (_temp_file, mut db) = create_test_db();

    db.upsert_tasks(&[task("a", 4, "Week four"), task("b", 5, "Week five")])
        .expect("insert");

    assert_eq!(db.get_tasks(4).expect("list").len(), 1);
    assert_eq!(db.get_tasks(5).expect("list").len(), 1);
    assert!(db.get_tasks(6).expect("list").is_empty());
}
