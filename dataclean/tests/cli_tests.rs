use anyhow::Result;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::TempDir;

/// Runs the binary from an empty project directory, isolated from the caller's env.
struct DashboardTestEnv {
    tmp: TempDir,
}

impl DashboardTestEnv {
    fn new() -> Result<Self> {
        Ok(Self {
            tmp: tempfile::tempdir()?,
        })
    }

    fn write_config(&self, yaml: &str) -> Result<()> {
        std::fs::write(self.tmp.path().join("dataclean.yaml"), yaml)?;
        Ok(())
    }

    fn dataclean(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("dataclean"));
        cmd.current_dir(self.tmp.path())
            .env_remove("DATACLEAN_API_URL")
            .env_remove("DATACLEAN_TIMEOUT_SECS")
            .env_remove("DATACLEAN_SOURCE")
            .env_remove("DATACLEAN_PASSWORD")
            .env_remove("RUST_LOG");
        cmd
    }
}

#[test]
fn test_monitors_lists_every_monitor() -> Result<()> {
    let env = DashboardTestEnv::new()?;
    env.dataclean()
        .arg("monitors")
        .assert()
        .success()
        .stdout(predicate::str::contains("Customer Data Quality"))
        .stdout(predicate::str::contains("67%"))
        .stdout(predicate::str::contains("4 of 4 monitors"));
    Ok(())
}

#[test]
fn test_monitors_search_is_case_insensitive() -> Result<()> {
    let env = DashboardTestEnv::new()?;
    env.dataclean()
        .args(["monitors", "--search", "CATALOG"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Product Catalog Health"))
        .stdout(predicate::str::contains("Transaction Integrity").not());
    Ok(())
}

#[test]
fn test_monitor_detail_shows_checks() -> Result<()> {
    let env = DashboardTestEnv::new()?;
    env.dataclean()
        .args(["monitor", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Referential Integrity"))
        .stdout(predicate::str::contains("Pass rate: 50%"));
    Ok(())
}

#[test]
fn test_unknown_monitor_fails() -> Result<()> {
    let env = DashboardTestEnv::new()?;
    env.dataclean()
        .args(["monitor", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Monitor '99' not found"))
        .stderr(predicate::str::contains("dataclean::domain::monitor_not_found"));
    Ok(())
}

#[test]
fn test_alerts_grouped_by_monitor() -> Result<()> {
    let env = DashboardTestEnv::new()?;
    env.dataclean()
        .arg("alerts")
        .assert()
        .success()
        .stdout(predicate::str::contains("Transaction Integrity"))
        .stdout(predicate::str::contains("User Activity Logs"))
        .stdout(predicate::str::contains("Product Catalog Health").not());
    Ok(())
}

#[test]
fn test_alerts_for_one_monitor_are_split_by_status() -> Result<()> {
    let env = DashboardTestEnv::new()?;
    env.dataclean()
        .args(["alerts", "--monitor", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Open (1)"))
        .stdout(predicate::str::contains("Acknowledged (1)"))
        .stdout(predicate::str::contains("Resolved").not());
    Ok(())
}

#[test]
fn test_integrations_from_fixtures() -> Result<()> {
    let env = DashboardTestEnv::new()?;
    env.dataclean()
        .args(["integrations", "--fixtures"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Production Snowflake"))
        .stdout(predicate::str::contains("1,250,000"))
        .stdout(predicate::str::contains("success rate 83.3%"));
    Ok(())
}

#[test]
fn test_source_choice_is_logged_on_stderr() -> Result<()> {
    let env = DashboardTestEnv::new()?;
    env.dataclean()
        .args(["integrations", "--fixtures"])
        .env("RUST_LOG", "info")
        .assert()
        .success()
        .stderr(predicate::str::contains("Using demo integrations"))
        .stdout(predicate::str::contains("Using demo integrations").not());
    Ok(())
}

#[test]
fn test_integrations_source_from_config_file() -> Result<()> {
    let env = DashboardTestEnv::new()?;
    env.write_config("source: fixtures\n")?;
    env.dataclean()
        .args(["integrations", "--search", "staging"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Staging Snowflake"))
        .stdout(predicate::str::contains("Production Snowflake").not());
    Ok(())
}

#[test]
fn test_unreachable_api_reports_failure_not_empty_list() -> Result<()> {
    let env = DashboardTestEnv::new()?;
    env.dataclean()
        .arg("integrations")
        .env("DATACLEAN_API_URL", "http://127.0.0.1:9")
        .env("DATACLEAN_TIMEOUT_SECS", "2")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load integrations"))
        .stdout(predicate::str::contains("No integrations configured").not());
    Ok(())
}

#[test]
fn test_invalid_config_is_rejected() -> Result<()> {
    let env = DashboardTestEnv::new()?;
    env.write_config("api-base-url: ftp://example.com\n")?;
    env.dataclean()
        .arg("integrations")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load dashboard configuration"))
        .stderr(predicate::str::contains("ftp://example.com"));
    Ok(())
}

#[test]
fn test_create_integration_with_fixtures() -> Result<()> {
    let env = DashboardTestEnv::new()?;
    env.dataclean()
        .args([
            "create-integration",
            "--fixtures",
            "--name",
            "Prod",
            "--account",
            "xy12345",
            "--username",
            "svc",
            "--password",
            "secret",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Connection successful"))
        .stdout(predicate::str::contains("Integration 'Prod' created"))
        .stdout(predicate::str::contains("4 integration(s) configured"));
    Ok(())
}

#[test]
fn test_create_integration_requires_password() -> Result<()> {
    let env = DashboardTestEnv::new()?;
    env.dataclean()
        .args([
            "create-integration",
            "--fixtures",
            "--name",
            "Prod",
            "--account",
            "xy",
            "--username",
            "svc",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--password"));
    Ok(())
}
