#![cfg(unix)]

mod common;

use common::TestEnv;
use predicates::prelude::*;

// ============================================================================
// check
// ============================================================================

#[test]
fn check_passes_when_everything_is_in_place() {
    let env = TestEnv::new();
    env.install_fake_doxygen();
    env.seed_sources();

    env.cmd()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("doxygen 1.9.8"))
        .stdout(predicate::str::contains("2 files matching *.java"));
}

#[test]
fn check_fails_when_the_generator_is_missing() {
    let env = TestEnv::new();
    env.seed_sources();

    env.cmd()
        .arg("check")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not found on PATH"));
}

#[test]
fn check_fails_when_sources_are_missing() {
    let env = TestEnv::new();
    env.install_fake_doxygen();

    env.cmd()
        .arg("check")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "decompiled source directory not found",
        ));
}

// ============================================================================
// status
// ============================================================================

#[test]
fn status_reports_missing_pieces_and_exits_zero() {
    let env = TestEnv::new();

    env.cmd()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("docforge Status"))
        .stdout(predicate::str::contains("not found"))
        .stdout(predicate::str::contains("missing"))
        .stdout(predicate::str::contains("not generated"));
}

#[test]
fn status_text_reports_a_generated_reference() {
    let env = TestEnv::new();
    env.install_fake_doxygen();
    env.seed_sources();
    env.seed_stale_output();

    env.cmd()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Doxygen: 1.9.8"))
        .stdout(predicate::str::contains("2 files matching *.java"))
        .stdout(predicate::str::contains("Last generated:"));
}

#[test]
fn status_json_is_parseable_and_complete() {
    let env = TestEnv::new();
    env.install_fake_doxygen();
    env.seed_sources();
    env.seed_stale_output();

    let assert = env
        .cmd()
        .args(["status", "--format", "json"])
        .assert()
        .success();
    let status: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).expect("valid json");

    assert_eq!(status["doxygen"]["available"], true);
    assert_eq!(status["doxygen"]["version"], "1.9.8");
    assert_eq!(status["source"]["exists"], true);
    assert_eq!(status["source"]["files"], 2);
    assert_eq!(status["output"]["exists"], true);
    assert_eq!(status["output"]["files"], 1);
    assert!(status["output"]["generated_at"].is_string());
}

#[test]
fn status_json_handles_a_bare_checkout() {
    let env = TestEnv::new();

    let assert = env
        .cmd()
        .args(["status", "--format", "json"])
        .assert()
        .success();
    let status: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).expect("valid json");

    assert_eq!(status["doxygen"]["available"], false);
    assert_eq!(status["doxygen"]["version"], serde_json::Value::Null);
    assert_eq!(status["source"]["exists"], false);
    assert_eq!(status["output"]["exists"], false);
}

// ============================================================================
// clean
// ============================================================================

#[test]
fn clean_removes_the_generated_reference() {
    let env = TestEnv::new();
    env.seed_stale_output();

    env.cmd()
        .arg("clean")
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed"))
        .stdout(predicate::str::contains("1 files"));

    assert!(!env.output_dir().exists());
}

#[test]
fn clean_without_output_is_a_no_op() {
    let env = TestEnv::new();

    env.cmd()
        .arg("clean")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to clean"));
}

// ============================================================================
// config
// ============================================================================

#[test]
fn config_init_show_and_path_round_trip() {
    let env = TestEnv::new();

    env.cmd()
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));
    assert!(env.root.join("docforge.toml").exists());

    env.cmd()
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));

    env.cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("docforge.toml"));

    env.cmd()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[paths]"))
        .stdout(predicate::str::contains("source = \"decompiled\""));
}

#[test]
fn config_init_force_overwrites() {
    let env = TestEnv::new();
    common::write_file(&env.root.join("docforge.toml"), "# scribbles\n");

    env.cmd()
        .args(["config", "init", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    let restored = std::fs::read_to_string(env.root.join("docforge.toml")).unwrap();
    assert!(restored.contains("source = \"decompiled\""));
}

#[test]
fn config_show_json_round_trips() {
    let env = TestEnv::new();

    let assert = env
        .cmd()
        .args(["config", "show", "--format", "json"])
        .assert()
        .success();
    let config: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).expect("valid json");

    assert_eq!(config["doxygen"]["binary"], "doxygen");
    assert_eq!(config["doxygen"]["file_pattern"], "*.java");
    assert_eq!(config["paths"]["output"], "static/api");
}

#[test]
fn invalid_config_file_is_rejected() {
    let env = TestEnv::new();
    env.install_fake_doxygen();
    env.seed_sources();
    common::write_file(
        &env.root.join("docforge.toml"),
        "[doxygen]\nfile_pattern = \"\"\n",
    );

    env.cmd()
        .arg("check")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("file_pattern"));
}
