//! Integration tests for the tagscript CLI

use assert_cmd::assert::OutputAssertExt;
use assert_cmd::cargo_bin;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tagscript_testkit::temp_dir_in_workspace;

fn tagscript() -> Command {
    Command::new(cargo_bin!(env!("CARGO_PKG_NAME")))
}

#[test]
fn test_cli_version_flag() {
    tagscript()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tagscript"));
}

#[test]
fn test_cli_help_flag() {
    tagscript()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("render"))
        .stdout(predicate::str::contains("placeholders"));
}

#[test]
fn test_render_with_vars_and_builtins() {
    tagscript()
        .args(["render", "Hi {upper:{user.name}}, {sum:1;2}!"])
        .args(["--var", "user.name=ann"])
        .assert()
        .success()
        .stdout("Hi ANN, 3!");
}

#[test]
fn test_render_unknown_passes_through() {
    tagscript()
        .args(["render", "{nope} \\{x\\}"])
        .assert()
        .success()
        .stdout("{nope} {x}");
}

#[test]
fn test_render_no_builtins() {
    tagscript()
        .args(["render", "{upper:a}{v}", "--no-builtins", "--var", "v=1"])
        .assert()
        .success()
        .stdout("{upper:a}1");
}

#[test]
fn test_render_json_output() {
    let output = tagscript()
        .args(["render", "--json", "{embed.title:Hi}{emoji:👍}done"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["content"], "done");
    assert_eq!(value["extras"], serde_json::json!([{"title": "Hi"}]));
    assert_eq!(value["tags"], serde_json::json!(["👍"]));
}

#[test]
fn test_render_from_file_with_config() {
    let temp = temp_dir_in_workspace();
    let template = temp.path().join("welcome.txt");
    let config = temp.path().join("tagscript.toml");
    fs::write(&template, "Welcome {user.name} to {guild.name}").unwrap();
    fs::write(
        &config,
        "[vars]\n\"user.name\" = \"Ann\"\n\"guild.name\" = \"Rustaceans\"\n",
    )
    .unwrap();

    tagscript()
        .arg("render")
        .arg("--file")
        .arg(&template)
        .arg("--config")
        .arg(&config)
        .args(["--var", "user.name=Bo"])
        .assert()
        .success()
        .stdout("Welcome Bo to Rustaceans");
}

#[test]
fn test_render_from_stdin() {
    assert_cmd::Command::new(cargo_bin!(env!("CARGO_PKG_NAME")))
        .arg("render")
        .write_stdin("{lower:STDIN}")
        .assert()
        .success()
        .stdout("stdin");
}

#[test]
fn test_render_missing_file_fails() {
    let temp = temp_dir_in_workspace();
    tagscript()
        .arg("render")
        .arg("--file")
        .arg(temp.path().join("missing.txt"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("Error:"));
}

#[test]
fn test_invalid_config_fails() {
    let temp = temp_dir_in_workspace();
    let config = temp.path().join("tagscript.toml");
    fs::write(&config, "[engine]\nmax_depth = 999\n").unwrap();

    tagscript()
        .args(["render", "x", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("CONFIG_INVALID_VALUE"));
}

#[test]
fn test_malformed_var_rejected() {
    tagscript()
        .args(["render", "x", "--var", "novalue"])
        .assert()
        .failure();
}

#[test]
fn test_placeholders_json() {
    let output = tagscript()
        .args(["placeholders", "--json", "--var", "user.name=Ann"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["variables"], serde_json::json!(["user.name"]));
    let functions = value["functions"].as_array().unwrap();
    assert!(functions.contains(&serde_json::json!("embed.title")));
    assert!(functions.contains(&serde_json::json!("if")));
}

#[test]
fn test_placeholders_human() {
    tagscript()
        .args(["placeholders", "--no-builtins", "--var", "a=1"])
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("Variables:"))
        .stdout(predicate::str::contains("{a}"))
        .stdout(predicate::str::contains("(none)"));
}
