use predicates::prelude::*;

mod common;
use common::{add_event, ath, event_rows, init_db, list_stdout, setup_test_db};

#[test]
fn test_add_warns_about_overlap_but_saves() {
    let db_path = setup_test_db("conflict_warn");
    init_db(&db_path);

    add_event(&db_path, "Morning drills", "2099-06-01 10:00", "2099-06-01 11:00", &[]);

    ath()
        .args([
            "--db",
            &db_path,
            "add",
            "Sprint session",
            "--start",
            "2099-06-01 10:30",
            "--end",
            "2099-06-01 11:30",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Schedule conflict with 1 event(s)"))
        .stdout(predicate::str::contains("Morning drills"));

    let rows = event_rows(&list_stdout(&db_path, &[]));
    assert_eq!(rows.len(), 2, "both events should be stored");
}

#[test]
fn test_touching_events_conflict() {
    let db_path = setup_test_db("conflict_touching");
    init_db(&db_path);

    add_event(&db_path, "Early slot", "2099-06-01 09:00", "2099-06-01 10:00", &[]);

    ath()
        .args([
            "--db",
            &db_path,
            "check",
            "--start",
            "2099-06-01 10:00",
            "--end",
            "2099-06-01 11:00",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Early slot"));
}

#[test]
fn test_strict_add_refuses_conflicts() {
    let db_path = setup_test_db("conflict_strict");
    init_db(&db_path);

    add_event(&db_path, "League match", "2099-06-01 18:00", "2099-06-01 20:00", &["--type", "match"]);

    ath()
        .args([
            "--db",
            &db_path,
            "add",
            "Team dinner",
            "--start",
            "2099-06-01 19:30",
            "--end",
            "2099-06-01 21:00",
            "--strict",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("conflicting event(s) found"));

    assert_eq!(event_rows(&list_stdout(&db_path, &[])).len(), 1);
}

#[test]
fn test_check_is_scoped_to_team() {
    let db_path = setup_test_db("conflict_team");
    init_db(&db_path);

    add_event(&db_path, "Alpha practice", "2099-06-01 10:00", "2099-06-01 11:00", &["--team", "1"]);
    add_event(&db_path, "Beta practice", "2099-06-01 11:00", "2099-06-01 12:00", &["--team", "2"]);

    ath()
        .args([
            "--db",
            &db_path,
            "check",
            "--start",
            "2099-06-01 10:30",
            "--end",
            "2099-06-01 11:30",
            "--team",
            "1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alpha practice"))
        .stdout(predicate::str::contains("Beta practice").not());
}

#[test]
fn test_warning_names_three_and_summarizes_rest() {
    let db_path = setup_test_db("conflict_preview");
    init_db(&db_path);

    for i in 1..=5 {
        add_event(
            &db_path,
            &format!("Court booking {i}"),
            "2099-07-01 08:00",
            "2099-07-01 09:00",
            &[],
        );
    }

    let out = ath()
        .args([
            "--db",
            &db_path,
            "check",
            "--start",
            "2099-07-01 08:30",
            "--end",
            "2099-07-01 08:45",
        ])
        .output()
        .expect("failed to run check");
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    let named = stdout.lines().filter(|l| l.contains("Court booking")).count();
    assert_eq!(named, 3);
    assert!(stdout.contains("+2 more"));
}

#[test]
fn test_edit_does_not_conflict_with_itself() {
    let db_path = setup_test_db("conflict_edit_self");
    init_db(&db_path);

    add_event(&db_path, "Yoga", "2099-06-01 07:00", "2099-06-01 08:00", &[]);

    ath()
        .args([
            "--db",
            &db_path,
            "edit",
            "1",
            "--end",
            "2099-06-01 08:30",
            "--strict",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated event 1"));

    let rows = event_rows(&list_stdout(&db_path, &[]));
    assert!(rows[0].contains("08:30"));
}

#[test]
fn test_rejects_end_before_start() {
    let db_path = setup_test_db("conflict_bad_range");
    init_db(&db_path);

    ath()
        .args([
            "--db",
            &db_path,
            "add",
            "Backwards",
            "--start",
            "2099-06-01 12:00",
            "--end",
            "2099-06-01 11:00",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid time range"));
}
