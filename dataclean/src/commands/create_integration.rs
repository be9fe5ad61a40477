// dataclean/src/commands/create_integration.rs
//
// USE CASE: Snowflake connection dialog, non-interactively.
// Test the connection first; creation is refused until it succeeds.

use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Utc};

use dataclean_core::application::{Dashboard, TopLevel};
use dataclean_core::domain::catalog::SNOWFLAKE;
use dataclean_core::domain::draft::TestOutcome;
use dataclean_core::infrastructure::config::load_dashboard_config;
use dataclean_core::infrastructure::error::CREATE_FAILED_FALLBACK;

use super::integration_source;
use crate::cli::ConnectionArgs;

pub async fn execute(
    project_dir: &Path,
    connection: ConnectionArgs,
    force_fixtures: bool,
    now: DateTime<Utc>,
) -> anyhow::Result<()> {
    let config = load_dashboard_config(project_dir).with_context(|| {
        format!("Failed to load dashboard configuration from {:?}", project_dir)
    })?;
    let source = integration_source(&config, force_fixtures, now)?;

    let mut dashboard = Dashboard::default();
    dashboard.switch_to(TopLevel::Integrations);
    dashboard.navigator_mut().open_integration_type_selector();
    dashboard.navigator_mut().choose_integration_type(SNOWFLAKE.id)?;

    let form = dashboard.connection_form_mut();
    form.name = connection.name.clone();
    form.account = connection.account;
    form.warehouse = connection.warehouse;
    form.username = connection.username;
    form.password = connection.password;

    println!("🔌 Testing connection to {}...", dashboard.connection_form().account);
    match dashboard.test_connection(source.as_ref()).await? {
        TestOutcome::Success => println!("   ✅ Connection successful"),
        TestOutcome::Failure => {
            eprintln!(
                "❌ Connection test failed. Check the account and the API at {}",
                config.api_base_url
            );
            std::process::exit(1);
        }
    }

    let created = dashboard
        .create_integration(source.as_ref(), &config.default_schema, &config.default_database)
        .await?;

    if !created {
        let detail = dashboard
            .connection_form()
            .api_error
            .as_deref()
            .unwrap_or(CREATE_FAILED_FALLBACK);
        eprintln!("❌ {}", detail);
        std::process::exit(1);
    }

    println!("✨ Integration '{}' created.", connection.name);
    match dashboard.integrations().error() {
        Some(message) => eprintln!("⚠️  Could not reload integrations: {}", message),
        None => println!(
            "   {} integration(s) configured.",
            dashboard.integrations().items().len()
        ),
    }
    Ok(())
}
