//! End-to-end tests for the comuna-registry binary

use std::fs;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use tempfile::{tempdir, TempDir};

/// Run the binary with an isolated config dir and the given store file
fn run_registry(home: &TempDir, store: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_comuna-registry"))
        .args(args)
        .arg("--data-file")
        .arg(store)
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join("config"))
        .env_remove("RUST_LOG")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("Failed to execute comuna-registry")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_add_then_query() {
    let home = tempdir().unwrap();
    let store = home.path().join("comunas.txt");

    let output = run_registry(
        &home,
        &store,
        &[
            "add",
            "--id",
            "7",
            "--zone",
            "Norte",
            "--population",
            "1200",
            "--name",
            "Alto Verde",
            "--code",
            "70",
            "--date",
            "2024-03-15",
        ],
    );
    assert!(output.status.success(), "add failed: {}", stderr(&output));
    assert_eq!(
        fs::read_to_string(&store).unwrap(),
        "7,Norte,1200,Alto Verde,70,2024-03-15\n"
    );

    let output = run_registry(&home, &store, &["zone", "NORTE"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Alto Verde"));

    let output = run_registry(&home, &store, &["name", "alto verde", "--format", "json"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("\"registration_date\": \"2024-03-15\""));
}

#[test]
fn test_missing_id_exits_with_error() {
    let home = tempdir().unwrap();
    let store = home.path().join("comunas.txt");

    let output = run_registry(&home, &store, &["id", "999"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("No comuna found with id 999"));
}

#[test]
fn test_add_rejects_bad_date() {
    let home = tempdir().unwrap();
    let store = home.path().join("comunas.txt");

    let output = run_registry(
        &home,
        &store,
        &[
            "add", "--id", "1", "--zone", "Sur", "--population", "1", "--name", "Valle",
            "--code", "1", "--date", "2024-02-30",
        ],
    );
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Invalid date: 2024-02-30"));
    assert!(!store.exists());
}

#[test]
fn test_demo_session() {
    let home = tempdir().unwrap();
    let store = home.path().join("comunas.txt");

    let output = run_registry(&home, &store, &["demo"]);
    assert!(output.status.success(), "demo failed: {}", stderr(&output));

    let out = stdout(&output);
    assert!(out.contains("Comunas in zone Norte:"));
    assert!(out.contains("Los Colores"));
    assert!(out.contains("Requested comuna not found"));

    let err = stderr(&output);
    assert!(err.contains("No comuna found with id 999"));
    assert!(err.contains("Invalid date: -2/-1/-1999"));

    assert!(fs::read_to_string(&store)
        .unwrap()
        .starts_with("1,Norte,10000,Los Colores,1,"));
}
