//! End-to-end tests for the cargopay binary
//!
//! Every run points `--config` at a temporary file so the user's
//! configuration is never read or written.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::{tempdir, TempDir};

struct Env {
    dir: TempDir,
}

impl Env {
    fn new() -> Self {
        Self {
            dir: tempdir().unwrap(),
        }
    }

    fn config_path(&self) -> PathBuf {
        self.dir.path().join("config.json")
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_cargopay"))
            .arg("--config")
            .arg(self.config_path())
            .args(args)
            .env_remove("RUST_LOG")
            .output()
            .unwrap()
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn write(path: &Path, content: &str) {
    std::fs::write(path, content).unwrap();
}

#[test]
fn test_cargos_lists_catalog() {
    let env = Env::new();
    let output = env.run(&["cargos", "--format", "json"]);
    assert!(output.status.success(), "{}", stderr(&output));

    let cargos: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let cargos = cargos.as_array().unwrap();
    assert_eq!(cargos.len(), 32);
    assert_eq!(cargos[0]["name"], "Batteries");
}

#[test]
fn test_compute_reference_trip() {
    let env = Env::new();
    let output = env.run(&[
        "compute",
        "--cargo",
        "Passengers",
        "--distance",
        "100",
        "--speed",
        "100",
        "--format",
        "json",
    ]);
    assert!(output.status.success(), "{}", stderr(&output));

    let quote: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let income = quote["income"].as_f64().unwrap();
    assert!((income - 21.236856778462727).abs() < 1e-6);
    assert_eq!(quote["cargo"]["name"], "Passengers");
    assert_eq!(quote["floored"], false);
}

#[test]
fn test_compute_unknown_cargo_fails() {
    let env = Env::new();
    let output = env.run(&["compute", "--cargo", "Uranium", "--distance", "10", "--speed", "50"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Unknown cargo: Uranium"));
}

#[test]
fn test_compute_zero_speed_fails() {
    let env = Env::new();
    let output = env.run(&["compute", "--cargo", "Coal", "--distance", "10", "--speed", "0"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Invalid speed"));
}

#[test]
fn test_sweep_csv_to_stdout() {
    let env = Env::new();
    let output = env.run(&[
        "sweep", "--cargo", "Coal", "--min", "0", "--max", "9", "--speeds", "50,100", "--format",
        "csv",
    ]);
    assert!(output.status.success(), "{}", stderr(&output));

    let text = stdout(&output);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "speed,distance,time,income");
    assert_eq!(lines.len(), 1 + 2 * 10);
    assert!(lines[1].starts_with("50.0,0.0,"));
    assert!(lines[11].starts_with("100.0,0.0,"));
}

#[test]
fn test_sweep_mismatched_flags_fails() {
    let env = Env::new();
    let output = env.run(&["sweep", "--speeds", "50,100", "--aircraft-flags", "true"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Mismatched lengths"));
}

#[test]
fn test_sweep_from_scenario_to_file() {
    let env = Env::new();
    let scenario = env.path("scenario.toml");
    write(
        &scenario,
        r#"
cargo = "Mail"
distance_min = 10
distance_max = 20

[[vehicles]]
speed = 88

[[vehicles]]
speed = 476
aircraft = true
"#,
    );
    let csv_path = env.path("mail.csv");

    let output = env.run(&[
        "sweep",
        "--scenario",
        scenario.to_str().unwrap(),
        "--output",
        csv_path.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "{}", stderr(&output));

    let content = std::fs::read_to_string(&csv_path).unwrap();
    assert_eq!(content.lines().count(), 1 + 2 * 11);
}

#[test]
fn test_sweep_table_report() {
    let env = Env::new();
    let output = env.run(&["sweep", "--cargo", "Goods", "--max", "100", "--presets"]);
    assert!(output.status.success(), "{}", stderr(&output));

    let text = stdout(&output);
    assert!(text.contains("Goods"));
    assert!(text.contains("275km/h"));
}

#[test]
fn test_config_roundtrip_drives_defaults() {
    let env = Env::new();
    let output = env.run(&[
        "config",
        "--set-cargo",
        "Valuables",
        "--set-distance",
        "5",
        "8",
        "--set-speeds",
        "64",
        "--set-output",
        "json",
    ]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(env.config_path().exists());

    let output = env.run(&["sweep"]);
    assert!(output.status.success(), "{}", stderr(&output));
    let result: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(result["cargo"]["name"], "Valuables");
    assert_eq!(result["samples"].as_array().unwrap().len(), 4);
}

#[test]
fn test_config_rejects_unknown_cargo() {
    let env = Env::new();
    let output = env.run(&["config", "--set-cargo", "Uranium"]);
    assert!(!output.status.success());
    assert!(!env.config_path().exists());
}

#[test]
fn test_config_reset_replaces_corrupt_file() {
    let env = Env::new();
    write(&env.config_path(), "{ not json");

    let output = env.run(&["sweep"]);
    assert!(!output.status.success());

    let output = env.run(&["config", "--reset"]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).contains("Configuration reset to defaults"));

    let content = std::fs::read_to_string(env.config_path()).unwrap();
    let saved: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(saved["default_cargo"], "Passengers");

    let output = env.run(&["sweep", "--max", "3"]);
    assert!(output.status.success(), "{}", stderr(&output));
}

#[test]
fn test_config_show_names_active_file() {
    let env = Env::new();
    let output = env.run(&["config", "--show"]);
    assert!(output.status.success(), "{}", stderr(&output));

    let expected = format!("Config file:    {}", env.config_path().display());
    assert!(stdout(&output).contains(&expected), "{}", stdout(&output));
}

#[test]
fn test_export_writes_workbook() {
    let env = Env::new();
    let xlsx = env.path("coal.xlsx");
    let output = env.run(&[
        "export",
        "--cargo",
        "Coal",
        "--max",
        "200",
        "--speeds",
        "64,112",
        "--output",
        xlsx.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(xlsx.exists());
}
