//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

fn todolist() -> Command {
    Command::cargo_bin("todolist").unwrap()
}

#[test]
fn test_serve_help() {
    todolist()
        .arg("serve")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--database-url"))
        .stdout(predicate::str::contains("--memory"))
        .stdout(predicate::str::contains("--cors-permissive"));
}

#[test]
fn test_serve_memory_conflicts_with_database_url() {
    todolist()
        .args(["serve", "--memory", "--database-url", "postgres://x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_config_path_honours_env() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    todolist()
        .env("TODOLIST_CONFIG", &path)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_init_then_show() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    todolist()
        .env("TODOLIST_CONFIG", &path)
        .args(["config", "init"])
        .assert()
        .success();
    assert!(path.exists());

    // Second init without --force fails
    todolist()
        .env("TODOLIST_CONFIG", &path)
        .args(["config", "init"])
        .assert()
        .failure();

    todolist()
        .env("TODOLIST_CONFIG", &path)
        .env("TODOLIST_BIND", "127.0.0.1:4000")
        .env_remove("DATABASE_URL")
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("127.0.0.1:4000"))
        .stdout(predicate::str::contains("max_connections = 5"));
}
