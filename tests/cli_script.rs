use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

fn script_command(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("meal_ledger_cli").unwrap();
    cmd.env("MEAL_LEDGER_HOME", home.path())
        .env("MEAL_LEDGER_CLI_SCRIPT", "1");
    cmd
}

#[test]
fn script_mode_records_and_lists_an_allocation() {
    let home = TempDir::new().unwrap();

    script_command(&home)
        .write_stdin("record 100 2024-06-03 Hall\nhistory\nexit\n")
        .assert()
        .success()
        .stdout(contains("Recorded allocation #1 for Hall."))
        .stdout(contains("Total meals   : 2"))
        .stdout(contains("Excess amount : 0.00 tk"))
        .stdout(contains("Allocation history"))
        .stdout(contains("#1"));

    let json = std::fs::read_to_string(home.path().join("records.json")).unwrap();
    assert!(json.contains("\"Hall\""));
}

#[test]
fn malformed_start_date_warns_and_falls_back_to_today() {
    let home = TempDir::new().unwrap();

    // 100 funds exactly two meals from any start day, so the assertions
    // hold no matter what "today" is when this runs.
    script_command(&home)
        .write_stdin("record 100 not-a-date Hall\nexit\n")
        .assert()
        .success()
        .stdout(contains("Ignoring invalid date `not-a-date`; starting today."))
        .stdout(contains("Recorded allocation #1 for Hall."))
        .stdout(contains("Total meals   : 2"));

    let today = chrono::Utc::now().date_naive().format("%Y-%m-%d").to_string();
    let json = std::fs::read_to_string(home.path().join("records.json")).unwrap();
    assert!(json.contains(&format!("\"start_date\": \"{}\"", today)));
}

#[test]
fn rate_changes_persist_across_runs() {
    let home = TempDir::new().unwrap();

    script_command(&home)
        .write_stdin("rates set friday-lunch 140\nexit\n")
        .assert()
        .success()
        .stdout(contains("Friday lunch set to 140.00 tk."));

    script_command(&home)
        .write_stdin("rates\nexit\n")
        .assert()
        .success()
        .stdout(contains("friday-lunch"))
        .stdout(contains("140.00 tk"));
}

#[test]
fn invalid_budget_reports_and_keeps_running() {
    let home = TempDir::new().unwrap();

    script_command(&home)
        .write_stdin("record abc\nrecord 100 2024-06-03\nexit\n")
        .assert()
        .success()
        .stdout(contains("Invalid budget"))
        .stdout(contains("Usage: record <amount> [start-date] [payee]"))
        .stdout(contains("Recorded allocation #1 for Default."));
}

#[test]
fn garbage_rate_input_coerces_to_zero() {
    let home = TempDir::new().unwrap();

    script_command(&home)
        .write_stdin("rates set weekday-supper banana\nrates\nexit\n")
        .assert()
        .success()
        .stdout(contains("Weekday supper set to 0.00 tk."));
}

#[test]
fn history_show_prints_the_meal_breakdown() {
    let home = TempDir::new().unwrap();

    script_command(&home)
        .write_stdin("record 220 2024-06-06 Mess\nhistory show 1\nexit\n")
        .assert()
        .success()
        .stdout(contains("Record #1"))
        .stdout(contains("Meals funded : 3"))
        .stdout(contains("2024-06-07 (Friday) Lunch"))
        .stdout(contains("Rates at calculation time:"));
}

#[test]
fn unknown_commands_get_a_suggestion() {
    let home = TempDir::new().unwrap();

    script_command(&home)
        .write_stdin("recrd 100\nexit\n")
        .assert()
        .success()
        .stdout(contains("Unknown command `recrd`"))
        .stdout(contains("Suggestion: `record`?"));
}

#[test]
fn uppercase_typos_still_get_a_suggestion() {
    let home = TempDir::new().unwrap();

    script_command(&home)
        .write_stdin("RECRD 100\nexit\n")
        .assert()
        .success()
        .stdout(contains("Unknown command `RECRD`"))
        .stdout(contains("Suggestion: `record`?"));
}

#[test]
fn help_and_version_describe_the_tool() {
    let home = TempDir::new().unwrap();

    script_command(&home)
        .write_stdin("help\nversion\nexit\n")
        .assert()
        .success()
        .stdout(contains("Available commands"))
        .stdout(contains("record"))
        .stdout(contains("rates"))
        .stdout(contains("history"))
        .stdout(contains("Record schema: v1"));
}
