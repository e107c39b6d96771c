use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{NamedTempFile, TempDir};

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing
fn cadence_cmd() -> Command {
    let mut cmd = Command::cargo_bin("cadence").expect("Failed to find cadence binary");
    cmd.arg("--no-color");
    cmd
}

/// Writes a plan sections JSON file with one qualifying section.
fn write_sections_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create sections file");
    write!(
        file,
        r#"[
            {{"id": 1, "title": "Резюме", "order": 1,
              "narrative": "- Target SMB segment first\n- Double the newsletter audience"}},
            {{"id": 2, "title": "Команда", "order": 2, "narrative": null}}
        ]"#
    )
    .expect("Failed to write sections file");
    file
}

#[test]
fn test_cli_generate_calendar() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let sections = write_sections_file();

    cadence_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "generate",
            sections.path().to_str().unwrap(),
            "--year",
            "2025",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Generated 52 weekly strategy items for 2025.",
        ));
}

#[test]
fn test_cli_generate_nothing_to_expand() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    let mut empty = NamedTempFile::new().expect("Failed to create sections file");
    write!(
        empty,
        r#"[{{"id": 1, "title": "Команда", "order": 1, "narrative": null}}]"#
    )
    .expect("Failed to write sections file");

    cadence_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "generate",
            empty.path().to_str().unwrap(),
            "--year",
            "2025",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to expand"));
}

#[test]
fn test_cli_generate_missing_file_fails() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    cadence_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "generate",
            "/nonexistent/sections.json",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read sections file"));
}

#[test]
fn test_cli_calendar_empty() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    cadence_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "calendar",
            "--year",
            "2025",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No calendar generated yet."));
}

#[test]
fn test_cli_calendar_quarter_filter() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap().to_string();
    let sections = write_sections_file();

    cadence_cmd()
        .args([
            "--database-file",
            &db_arg,
            "generate",
            sections.path().to_str().unwrap(),
            "--year",
            "2025",
        ])
        .assert()
        .success();

    cadence_cmd()
        .args([
            "--database-file",
            &db_arg,
            "calendar",
            "--year",
            "2025",
            "--quarter",
            "q2",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Week 14:"))
        .stdout(predicate::str::contains("Week 26:"))
        .stdout(predicate::str::contains("Week 13:").not());
}

#[test]
fn test_cli_calendar_rejects_bad_quarter() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    cadence_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "calendar",
            "--year",
            "2025",
            "--quarter",
            "q5",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid quarter"));
}

#[test]
fn test_cli_task_add_and_list() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap().to_string();

    cadence_cmd()
        .args([
            "--database-file",
            &db_arg,
            "task",
            "add",
            "3",
            "Draft newsletter",
            "--priority",
            "high",
            "--day",
            "2",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created task:"))
        .stdout(predicate::str::contains("Draft newsletter"));

    cadence_cmd()
        .args(["--database-file", &db_arg, "task", "list", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("○ Draft newsletter"))
        .stdout(predicate::str::contains("high"));
}

#[test]
fn test_cli_task_list_empty_week() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    cadence_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "task",
            "list",
            "40",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks for this week."));
}

#[test]
fn test_cli_task_add_rejects_bad_week() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    cadence_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "task",
            "add",
            "53",
            "Too late",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("week"));
}

/// Extracts the task id from `task add` output ("(ID: <uuid>)").
fn extract_task_id(stdout: &[u8]) -> String {
    let text = String::from_utf8_lossy(stdout);
    let start = text.find("(ID: ").expect("output contains a task id") + 5;
    let end = text[start..].find(')').expect("id is closed") + start;
    text[start..end].to_string()
}

#[test]
fn test_cli_task_done_and_move_and_rm() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap().to_string();

    let output = cadence_cmd()
        .args([
            "--database-file",
            &db_arg,
            "task",
            "add",
            "5",
            "Ship the deck",
        ])
        .output()
        .expect("Failed to run task add");
    let id = extract_task_id(&output.stdout);

    cadence_cmd()
        .args(["--database-file", &db_arg, "task", "done", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Ship the deck"));

    cadence_cmd()
        .args(["--database-file", &db_arg, "task", "move", &id, "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Moved task:"));

    cadence_cmd()
        .args(["--database-file", &db_arg, "task", "move", &id, "8"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Day must be between"));

    cadence_cmd()
        .args(["--database-file", &db_arg, "task", "rm", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed task:"));

    cadence_cmd()
        .args(["--database-file", &db_arg, "task", "list", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks for this week."));
}

#[test]
fn test_cli_task_done_unknown_id_fails() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    cadence_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "task",
            "done",
            "no-such-id",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_cli_week_shows_board() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap().to_string();
    let sections = write_sections_file();

    cadence_cmd()
        .args([
            "--database-file",
            &db_arg,
            "generate",
            sections.path().to_str().unwrap(),
            "--year",
            "2025",
        ])
        .assert()
        .success();

    cadence_cmd()
        .args([
            "--database-file",
            &db_arg,
            "task",
            "add",
            "1",
            "Kickoff call",
            "--day",
            "1",
        ])
        .assert()
        .success();

    cadence_cmd()
        .args(["--database-file", &db_arg, "week", "1", "--year", "2025"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Week 1 of 2025"))
        .stdout(predicate::str::contains("Week 1:"))
        .stdout(predicate::str::contains("Monday"))
        .stdout(predicate::str::contains("Kickoff call"));
}

#[test]
fn test_cli_week_without_calendar() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    cadence_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "week",
            "30",
            "--year",
            "2025",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No strategy item for this week."));
}
