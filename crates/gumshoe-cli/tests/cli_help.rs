use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_help_shows_all_commands() {
    cargo_bin_cmd!("gumshoe")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("ask"))
        .stdout(predicate::str::contains("stream"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_ask_help_shows_overrides() {
    cargo_bin_cmd!("gumshoe")
        .args(["ask", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--model"))
        .stdout(predicate::str::contains("--max-tokens"))
        .stdout(predicate::str::contains("--show-reasoning"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("gumshoe")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1"));
}

/// No prompt is a usage error: diagnostic on stderr, exit 1, and no
/// network activity (no endpoint or credential is configured here).
#[test]
fn test_ask_without_prompt_is_usage_error() {
    let home = TempDir::new().unwrap();

    cargo_bin_cmd!("gumshoe")
        .env("GUMSHOE_HOME", home.path())
        .env_remove("API_KEY")
        .env_remove("GROQ_BASE_URL")
        .arg("ask")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("Error: "))
        .stderr(predicate::str::contains("no prompt provided"));
}

/// Whitespace-only prompts count as missing too.
#[test]
fn test_ask_blank_prompt_is_usage_error() {
    let home = TempDir::new().unwrap();

    cargo_bin_cmd!("gumshoe")
        .env("GUMSHOE_HOME", home.path())
        .env_remove("API_KEY")
        .env_remove("GROQ_BASE_URL")
        .args(["ask", "  ", " "])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("no prompt provided"));
}
