//! Integration tests that run the airdrop-manager binary.

use assert_cmd::Command;
use indoc::indoc;
use serde_json::Value;
use tempfile::TempDir;

fn airdrop_manager(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_airdrop-manager"));
    cmd.current_dir(dir.path())
        .env_remove("AIRDROP_CONFIG")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let assert = cmd.assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

#[test]
fn portfolio_json_reports_every_project_and_totals() {
    let dir = TempDir::new().unwrap();
    let stdout = stdout_of(airdrop_manager(&dir).args([
        "portfolio",
        "--set",
        "lighter.points=10,000",
        "--set",
        "lighter.expenses=500",
        "--set",
        "extended.expenses=1000",
        "--format",
        "json",
    ]));

    let json: Value = serde_json::from_str(&stdout).expect("stdout is JSON");
    assert_eq!(json["projects"].as_array().unwrap().len(), 3);
    assert_eq!(json["portfolio"]["total_expenses"], 1500.0);
    assert_eq!(json["portfolio"]["total_value"], 700_000.0);
    assert_eq!(json["portfolio"]["net_profit"], 698_500.0);
}

#[test]
fn evaluate_prints_a_single_card() {
    let dir = TempDir::new().unwrap();
    let stdout = stdout_of(airdrop_manager(&dir).args([
        "--plain",
        "evaluate",
        "--project",
        "lighter",
        "--points",
        "10000",
        "--expenses",
        "500",
    ]));

    assert!(stdout.contains("Lighter (LIT)"));
    assert!(stdout.contains("+139,900%"));
    assert!(!stdout.contains("Extended"));
}

#[test]
fn unknown_project_fails() {
    let dir = TempDir::new().unwrap();
    airdrop_manager(&dir)
        .args(["evaluate", "--project", "ghost"])
        .assert()
        .failure();
}

#[test]
fn bad_assignment_fails() {
    let dir = TempDir::new().unwrap();
    airdrop_manager(&dir)
        .args(["portfolio", "--set", "lighter.points"])
        .assert()
        .failure();
}

#[test]
fn discovered_config_replaces_project_table() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(".airdrop.toml"),
        indoc! {r#"
            [display]
            default_format = "json"

            [[projects]]
            id = "zeta"
            name = "Zeta"
            ticker = "ZET"
            airdrop_percent = 10
            estimated_total_points = 1_000_000
            default_fdv = 200_000_000
            slider_max = 1_000_000_000
        "#},
    )
    .unwrap();

    let stdout = stdout_of(airdrop_manager(&dir).args(["portfolio", "--set", "zeta.points=100"]));
    let json: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["projects"][0]["definition"]["id"], "zeta");
    // 10% of 200M over 1M points = $20 per point
    assert_eq!(json["projects"][0]["metrics"]["my_value"], 2000.0);
}

#[test]
fn invalid_explicit_config_is_fatal() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "[[projects]]\nid = \"x\"\n").unwrap();

    airdrop_manager(&dir)
        .args(["--config", path.to_str().unwrap(), "projects"])
        .assert()
        .failure();
}

#[test]
fn init_writes_config_once() {
    let dir = TempDir::new().unwrap();
    airdrop_manager(&dir).arg("init").assert().success();
    assert!(dir.path().join(".airdrop.toml").exists());

    airdrop_manager(&dir).arg("init").assert().failure();
    airdrop_manager(&dir).args(["init", "--force"]).assert().success();
}

#[test]
fn session_reads_commands_from_stdin() {
    let dir = TempDir::new().unwrap();
    let stdout = stdout_of(
        airdrop_manager(&dir)
            .args(["session", "--format", "json"])
            .write_stdin("set lighter points 10000\nset lighter expenses 500\nquit\n"),
    );

    // initial frame + one per edit
    let frames: Vec<Value> = serde_json::Deserializer::from_str(&stdout)
        .into_iter::<Value>()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(frames.len(), 3);
    assert_eq!(frames[2]["portfolio"]["total_value"], 700_000.0);
}
