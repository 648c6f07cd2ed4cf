use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

fn bm() -> Command {
    Command::cargo_bin("bm").expect("binary")
}

#[test]
fn help_works() {
    bm().arg("--help")
        .assert()
        .success()
        .stdout(contains("Business management dashboard"));
}

#[test]
fn subcommand_help_works() {
    for cmd in ["overview", "tasks", "ask", "completions"] {
        bm().arg(cmd).arg("--help").assert().success();
    }
}

#[test]
fn ask_commission_question_gets_commission_template() {
    bm().args(["ask", "What", "is", "the", "commission", "rate?"])
        .assert()
        .success()
        .stdout(contains("Commission Information"))
        .stdout(contains("Standard policies: 12.5%"));
}

#[test]
fn ask_overlapping_keywords_resolve_to_contract_rule() {
    bm().args(["ask", "cancel", "my", "contract"])
        .assert()
        .success()
        .stdout(contains("Contract Information"));
}

#[test]
fn ask_unmatched_input_gets_general_template() {
    bm().args(["ask", "hello"])
        .assert()
        .success()
        .stdout(contains("General Business Information"));
}

#[test]
fn ask_requires_a_question() {
    bm().arg("ask").assert().failure();
}

#[test]
fn ask_json_emits_the_exchange() {
    let output = bm()
        .args(["ask", "--json", "water", "damage"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let exchange: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON");
    assert_eq!(exchange["question"], "water damage");
    assert!(exchange["response"]
        .as_str()
        .expect("response string")
        .contains("Claims Processing"));
}

#[test]
fn overview_prints_seeded_session_report() {
    bm().arg("overview")
        .assert()
        .success()
        .stdout(contains("Total tasks: 5"))
        .stdout(contains("Department performance:"))
        .stdout(contains("Recent tasks:"))
        .stdout(contains("Schedule team training session"));
}

#[test]
fn overview_json_reports_seed_counts() {
    let output = bm()
        .args(["overview", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON");
    assert_eq!(report["total_tasks"], 5);
    assert_eq!(report["completed"], 0);
    assert_eq!(report["urgent"], 1);
    assert_eq!(report["recent"].as_array().expect("recent array").len(), 5);
    assert_eq!(report["departments"]["Contract Admin"]["total"], 2);
}

#[test]
fn tasks_filters_by_department() {
    bm().args(["tasks", "--department", "contract-admin"])
        .assert()
        .success()
        .stdout(contains("Update contract templates"))
        .stdout(contains("Schedule team training session"))
        .stdout(contains("Investigate claim #45678").not());
}

#[test]
fn tasks_recent_limits_output() {
    bm().args(["tasks", "--recent", "1"])
        .assert()
        .success()
        .stdout(contains("Schedule team training session"))
        .stdout(contains("Review Q3 commission reports").not());
}
