use assert_cmd::prelude::*;
use chrono::{Duration, SecondsFormat, Utc};
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::tempdir;

/// Command for the built binary, isolated from the caller's environment.
fn tripjournal(config_dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("tripjournal"));
    cmd.arg("--config")
        .arg(config_dir.join("config.yaml"))
        .env_remove("TRIPJOURNAL_CONFIG")
        .env_remove("TRIPJOURNAL_FORMAT")
        .env_remove("TRIPJOURNAL_PASSWORD")
        .env_remove("TRIPJOURNAL_DEBUG")
        // Nothing listens here; commands that must stay offline fail loudly if they don't
        .env("TRIPJOURNAL_API_HOST", "http://127.0.0.1:9/");
    cmd
}

fn write_config(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("config.yaml");
    fs::write(&path, contents).expect("failed to write config");
    path
}

fn write_token(dir: &Path, expires_in: Duration) -> PathBuf {
    let path = dir.join("credentials.yaml");
    let expires = (Utc::now() + expires_in).to_rfc3339_opts(SecondsFormat::Secs, true);
    let contents = format!(
        "tripjournal:\n  access_token: stored-token\n  token_type: bearer\n  expirationDate: {expires}\n"
    );
    fs::write(&path, contents).expect("failed to write credentials");
    path
}

#[test]
fn version_prints_package_version() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    tripjournal(temp.path())
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));

    Ok(())
}

#[test]
fn status_uses_custom_config_path() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let config_path = write_config(
        temp.path(),
        "api_host: http://journal.test:8000\nusername: alice\n",
    );

    let assert = tripjournal(temp.path())
        .env_remove("TRIPJOURNAL_API_HOST")
        .arg("status")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(stdout.contains(&config_path.to_string_lossy().to_string()));
    assert!(stdout.contains("http://journal.test:8000/"));
    assert!(stdout.contains("Not logged in"));

    Ok(())
}

#[test]
fn status_reports_live_session_as_json() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    write_config(temp.path(), "username: alice\n");
    write_token(temp.path(), Duration::minutes(4));

    let assert = tripjournal(temp.path())
        .args(["status", "--format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    let body: serde_json::Value = serde_json::from_str(&stdout)?;
    assert_eq!(body["data"]["authenticated"], true);
    assert_eq!(body["data"]["username"], "alice");
    assert_eq!(body["data"]["session_expired"], false);
    assert!(body["data"]["expires_in_seconds"].as_i64().unwrap_or_default() > 0);
    assert!(body["meta"]["version"].is_string());

    Ok(())
}

#[test]
fn status_reports_expired_session() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    write_token(temp.path(), Duration::minutes(-2));

    tripjournal(temp.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Session expired"));

    Ok(())
}

#[test]
fn trip_list_requires_login() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    tripjournal(temp.path())
        .args(["trip", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not logged in"));

    Ok(())
}

#[test]
fn data_command_with_expired_token_reports_expiry() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let credentials = write_token(temp.path(), Duration::minutes(-1));

    tripjournal(temp.path())
        .args(["media", "delete", "5", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Your session has expired"));

    let remaining = fs::read_to_string(&credentials)?;
    assert!(!remaining.contains("stored-token"));

    // Second run: token is gone, so the user is simply logged out
    tripjournal(temp.path())
        .args(["media", "delete", "5", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not logged in"));

    Ok(())
}

#[test]
fn logout_clears_stored_token() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let credentials = write_token(temp.path(), Duration::minutes(4));

    tripjournal(temp.path())
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged out"));

    let remaining = fs::read_to_string(&credentials)?;
    assert!(!remaining.contains("stored-token"));

    tripjournal(temp.path())
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not logged in"));

    Ok(())
}

#[test]
fn trip_create_rejects_bad_date() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    tripjournal(temp.path())
        .args(["trip", "create", "--name", "x", "--start", "someday", "--end", "2024-06-08"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid date"));

    Ok(())
}

#[test]
fn media_create_with_missing_file_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    write_token(temp.path(), Duration::minutes(4));

    tripjournal(temp.path())
        .args(["media", "create", "--event", "1", "--file"])
        .arg(temp.path().join("nope.jpg"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope.jpg"));

    Ok(())
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn login_stores_token_and_username() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();

    let login = server
        .mock("POST", "/token")
        .match_header("content-type", "application/x-www-form-urlencoded")
        .match_body(mockito::Matcher::AllOf(vec![
            mockito::Matcher::Regex("username=alice".to_string()),
            mockito::Matcher::Regex("password=s3cret".to_string()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"access_token":"fresh-token","token_type":"bearer"}"#)
        .create();

    let temp = tempdir()?;

    tripjournal(temp.path())
        .env("TRIPJOURNAL_API_HOST", server.url())
        .env("TRIPJOURNAL_PASSWORD", "s3cret")
        .args(["login", "--username", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged in as"));

    login.assert();

    let credentials = fs::read_to_string(temp.path().join("credentials.yaml"))?;
    assert!(credentials.contains("fresh-token"));
    assert!(credentials.contains("expirationDate"));

    let config = fs::read_to_string(temp.path().join("config.yaml"))?;
    assert!(config.contains("username: alice"));

    Ok(())
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn login_failure_shows_server_detail() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();

    let _login = server
        .mock("POST", "/token")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"detail":"Incorrect username or password"}"#)
        .create();

    let temp = tempdir()?;

    tripjournal(temp.path())
        .env("TRIPJOURNAL_API_HOST", server.url())
        .env("TRIPJOURNAL_PASSWORD", "wrong")
        .args(["login", "-u", "alice"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("401"))
        .stderr(predicate::str::contains("Incorrect username or password"));

    assert!(!temp.path().join("credentials.yaml").exists());

    Ok(())
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn trip_list_sends_stored_token() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();

    let trips = server
        .mock("GET", "/trips")
        .match_header("authorization", "Bearer stored-token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[
                {"id": 1, "name": "Lisbon", "start_date": "2024-06-01T08:00:00Z",
                 "end_date": "2024-06-08T08:00:00Z", "events": []},
                {"id": 2, "name": "Kyoto", "start_date": "2024-10-01T00:00:00",
                 "end_date": "2024-10-10T00:00:00", "events": []}
            ]"#,
        )
        .create();

    let temp = tempdir()?;
    write_token(temp.path(), Duration::minutes(4));

    let assert = tripjournal(temp.path())
        .env("TRIPJOURNAL_API_HOST", server.url())
        .args(["trip", "list", "--format", "table"])
        .assert()
        .success();

    trips.assert();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(stdout.contains("Lisbon"));
    assert!(stdout.contains("Kyoto"));
    assert!(stdout.contains("2024-10-01"));

    Ok(())
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn trip_delete_with_yes_skips_prompt() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();

    let delete = server
        .mock("DELETE", "/trips/7")
        .match_header("authorization", "Bearer stored-token")
        .with_status(204)
        .create();

    let temp = tempdir()?;
    write_token(temp.path(), Duration::minutes(4));

    tripjournal(temp.path())
        .env("TRIPJOURNAL_API_HOST", server.url())
        .args(["trip", "delete", "7", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted trip 7"));

    delete.assert();

    Ok(())
}

#[cfg_attr(not(feature = "http-tests"), ignore)]
#[test]
fn trip_update_merges_current_values() -> Result<(), Box<dyn std::error::Error>> {
    let mut server = mockito::Server::new();

    let trip_body = r#"{"id": 3, "name": "Porto", "start_date": "2024-06-01T08:00:00Z",
                        "end_date": "2024-06-08T08:00:00Z", "events": []}"#;

    let _current = server
        .mock("GET", "/trips/3")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(trip_body)
        .create();

    let update = server
        .mock("PUT", "/trips/3")
        .match_body(mockito::Matcher::Json(serde_json::json!({
            "name": "Porto & Douro",
            "start_date": "2024-06-01T08:00:00Z",
            "end_date": "2024-06-08T08:00:00Z"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(trip_body.replace("\"Porto\"", "\"Porto & Douro\""))
        .create();

    let temp = tempdir()?;
    write_token(temp.path(), Duration::minutes(4));

    tripjournal(temp.path())
        .env("TRIPJOURNAL_API_HOST", server.url())
        .args(["trip", "update", "3", "--name", "Porto & Douro", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Porto & Douro"));

    update.assert();

    Ok(())
}
