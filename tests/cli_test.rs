//! Integration tests for CLI command dispatch against temp documents.

use std::fs;
use std::sync::Arc;

use clap::Parser;
use rstest::rstest;
use serde_json::{json, Value};
use tempfile::TempDir;

use dotpath::cli::{execute_command, Cli, CliError};
use dotpath::config::Settings;
use dotpath::exitcode;
use dotpath::infrastructure::di::ServiceContainer;
use dotpath::infrastructure::traits::RealFileSystem;
use dotpath::util::testing;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

fn run(args: &[&str]) -> Result<i32, CliError> {
    let cli = Cli::try_parse_from(std::iter::once("dotpath").chain(args.iter().copied()))
        .expect("valid arguments");
    let container =
        ServiceContainer::with_deps(Settings::default(), Arc::new(RealFileSystem), cli.format);
    execute_command(&cli, &container)
}

fn doc(temp: &TempDir, content: &str) -> String {
    let path = temp.path().join("doc.json");
    fs::write(&path, content).unwrap();
    path.to_string_lossy().into_owned()
}

#[rstest]
#[case(&["a"], exitcode::OK)]
#[case(&["a", "b.c"], exitcode::OK)]
#[case(&["a", "missing"], exitcode::MISSING)]
fn given_keys_when_has_then_exit_code_reports_presence(
    #[case] keys: &[&str],
    #[case] expected: i32,
) {
    let temp = TempDir::new().unwrap();
    let file = doc(&temp, r#"{"a": 1, "b": {"c": 2}}"#);
    let mut args = vec!["has", file.as_str()];
    args.extend_from_slice(keys);

    assert_eq!(run(&args).unwrap(), expected);
}

#[test]
fn given_set_and_forget_when_run_then_document_updated() {
    let temp = TempDir::new().unwrap();
    let file = doc(&temp, r#"{"a": 1}"#);

    assert_eq!(run(&["set", &file, "b.c", "[1,2]"]).unwrap(), exitcode::OK);
    assert_eq!(run(&["set", &file, "d", "42", "--string"]).unwrap(), exitcode::OK);
    assert_eq!(run(&["forget", &file, "a"]).unwrap(), exitcode::OK);

    let tree: Value = serde_json::from_str(&fs::read_to_string(&file).unwrap()).unwrap();
    assert_eq!(tree, json!({"b": {"c": [1, 2]}, "d": "42"}));
}

#[test]
fn given_forced_toml_format_when_set_then_written_as_toml() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("settings.conf");
    let file = file.to_string_lossy();

    run(&["--format", "toml", "set", &file, "server.port", "8080"]).unwrap();

    let content = fs::read_to_string(file.as_ref()).unwrap();
    assert!(content.contains("[server]"));
    assert!(content.contains("port = 8080"));
}

#[test]
fn given_missing_document_when_get_then_noinput_error() {
    let temp = TempDir::new().unwrap();
    let file = temp.path().join("absent.json");

    let err = run(&["get", &file.to_string_lossy(), "a"]).unwrap_err();

    assert_eq!(err.exit_code(), exitcode::NOINPUT);
}

#[test]
fn given_invalid_document_when_keys_then_dataerr() {
    let temp = TempDir::new().unwrap();
    let file = doc(&temp, "{oops");

    let err = run(&["keys", &file]).unwrap_err();

    assert_eq!(err.exit_code(), exitcode::DATAERR);
}

#[test]
fn given_no_command_when_run_then_usage_error() {
    let err = run(&[]).unwrap_err();

    assert_eq!(err.exit_code(), exitcode::USAGE);
}

#[test]
fn given_pull_when_run_then_key_removed() {
    let temp = TempDir::new().unwrap();
    let file = doc(&temp, r#"{"token": "t", "x": 1}"#);

    assert_eq!(run(&["pull", &file, "token"]).unwrap(), exitcode::OK);

    let tree: Value = serde_json::from_str(&fs::read_to_string(&file).unwrap()).unwrap();
    assert_eq!(tree, json!({"x": 1}));
}
