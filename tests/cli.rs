mod common;

use common::TestEnv;
use predicates::str::contains;

#[test]
fn classify_prints_key_and_title() {
    let env = TestEnv::new();
    env.cmd()
        .args(["classify", "--z", "3.2", "--status", "current"])
        .assert()
        .success()
        .stdout("3.1\t3.1 – Small aneurysm (current)\n");
}

#[test]
fn classify_without_numeric_z_has_no_classification() {
    let env = TestEnv::new();
    env.cmd()
        .args(["classify", "--z", "pending", "--status", "regressed"])
        .assert()
        .success()
        .stdout("no classification\n");
}

#[test]
fn classify_accepts_negative_z() {
    let env = TestEnv::new();
    env.cmd()
        .args(["classify", "--z", "-1.5"])
        .assert()
        .success()
        .stdout(contains("1\t1 – No involvement"));
}

#[test]
fn plan_shows_panel_fields() {
    let env = TestEnv::new();
    env.cmd()
        .args(["plan", "5.1"])
        .assert()
        .success()
        .stdout(contains("Management plan – Risk 5.1"))
        .stdout(contains("Anticoagulation: Warfarin, LMWH, or DOAC"))
        .stdout(contains("Notes: β-blockers and statins may be considered"));
}

#[test]
fn plan_accepts_risk_prefix() {
    let env = TestEnv::new();
    env.cmd()
        .args(["plan", "Risk 4.3"])
        .assert()
        .success()
        .stdout(contains("Management plan – Risk 4.3"));
}

#[test]
fn unknown_key_is_rejected() {
    let env = TestEnv::new();
    env.cmd()
        .args(["plan", "6"])
        .assert()
        .failure()
        .stderr(contains("unknown risk level"));
}

#[test]
fn unknown_status_is_rejected() {
    let env = TestEnv::new();
    env.cmd()
        .args(["classify", "--z", "3", "--status", "sideways"])
        .assert()
        .failure();
}

#[test]
fn color_flag_paints_levels() {
    let env = TestEnv::new();
    env.cmd()
        .args(["--color", "levels"])
        .assert()
        .success()
        .stdout(contains("\u{1b}[31m5.1\u{1b}[0m"))
        .stdout(contains("\u{1b}[38;5;208m4.1\u{1b}[0m"));
}
