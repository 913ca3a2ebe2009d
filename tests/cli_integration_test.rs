use assert_cmd::Command;
use indoc::indoc;
use std::fs;
use tempfile::TempDir;

fn quotemap(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_quotemap"));
    cmd.current_dir(dir.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("QUOTEMAP_CONFIG");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let assert = cmd.assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

#[test]
fn test_price_terminal_output() {
    let dir = TempDir::new().unwrap();
    let out = stdout_of(quotemap(&dir).args(["price", "60000"]));
    assert!(out.contains("Quote for 60,000 nodes"));
    assert!(out.contains("$45,000"));
    assert!(out.contains("$540,000"));
}

#[test]
fn test_price_json_output() {
    let dir = TempDir::new().unwrap();
    let out = stdout_of(quotemap(&dir).args(["price", "100", "--format", "json"]));
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["monthly_cost"], 10_000.0);
    assert_eq!(value["floor_applied"], true);
}

#[test]
fn test_price_non_numeric_falls_back_to_seed() {
    let dir = TempDir::new().unwrap();
    let out = stdout_of(quotemap(&dir).args(["price", "abc", "-f", "json"]));
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["node_count"], 10_000);
}

#[test]
fn test_price_negative_count_is_clamped() {
    let dir = TempDir::new().unwrap();
    let out = stdout_of(quotemap(&dir).args(["price", "-20", "--format", "json"]));
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["node_count"], 100);
}

#[test]
fn test_roi_markdown_output() {
    let dir = TempDir::new().unwrap();
    let out = stdout_of(quotemap(&dir).args(["roi", "--format", "markdown"]));
    assert!(out.contains("## ROI projection"));
    assert!(out.contains("**$2,801,160**"));
}

#[test]
fn test_roi_accepts_negative_text_and_clamps() {
    let dir = TempDir::new().unwrap();
    let args = ["roi", "--mttd-days", "-3", "--format", "json"];
    let out = stdout_of(quotemap(&dir).args(args));
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["input"]["current_mttd_days"], 1);
}

#[test]
fn test_config_file_changes_schedule_and_format() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".quotemap.toml"),
        indoc! {r#"
            [pricing]
            minimum_monthly_fee = 0.0

            [[pricing.tiers]]
            upper_bound = 1000
            unit_price = 2.0

            [[pricing.tiers]]
            unit_price = 1.0

            [output]
            default_format = "json"
        "#},
    )
    .unwrap();

    let out = stdout_of(quotemap(&dir).args(["price", "1500"]));
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["monthly_cost"], 2_500.0);
}

#[test]
fn test_explicit_missing_config_fails() {
    let dir = TempDir::new().unwrap();
    let assert = quotemap(&dir)
        .args(["--config", "missing.toml", "price"])
        .assert()
        .failure();
    let stderr = String::from_utf8(assert.get_output().stderr.clone()).unwrap();
    assert!(stderr.contains("E022"));
}

#[test]
fn test_ask_replies_from_dictionary() {
    let dir = TempDir::new().unwrap();
    let args = ["ask", "do", "you", "offer", "a", "trial?"];
    let out = stdout_of(quotemap(&dir).args(args));
    assert!(out.contains("30-day proof of value"));
}

#[test]
fn test_ask_honours_format_after_message() {
    let dir = TempDir::new().unwrap();
    let out = stdout_of(quotemap(&dir).args(["ask", "pricing", "--format", "json"]));
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["matched_keyword"], "pricing");
}

#[test]
fn test_tiers_lists_schedule() {
    let dir = TempDir::new().unwrap();
    let out = stdout_of(quotemap(&dir).args(["tiers", "--format", "markdown"]));
    assert!(out.contains("| 6 | 500,001+ | $0.20 |"));
}

#[test]
fn test_init_writes_config_once() {
    let dir = TempDir::new().unwrap();
    quotemap(&dir).arg("init").assert().success();
    assert!(dir.path().join(".quotemap.toml").exists());

    quotemap(&dir).arg("init").assert().failure();
    quotemap(&dir).args(["init", "--force"]).assert().success();
}
