// dataclean/src/commands/integrations.rs
//
// USE CASE: Load the integration list through the configured source.

use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Utc};

use dataclean_core::application::{Dashboard, TopLevel};
use dataclean_core::infrastructure::adapters::fixtures;
use dataclean_core::infrastructure::config::load_dashboard_config;

use super::{integration_source, table, thousands};

pub async fn execute(
    project_dir: &Path,
    search: Option<String>,
    force_fixtures: bool,
    now: DateTime<Utc>,
) -> anyhow::Result<()> {
    let config = load_dashboard_config(project_dir).with_context(|| {
        format!("Failed to load dashboard configuration from {:?}", project_dir)
    })?;
    let source = integration_source(&config, force_fixtures, now)?;

    let mut dashboard = Dashboard::new(Vec::new(), Vec::new(), fixtures::sync_history());
    dashboard.switch_to(TopLevel::Integrations);
    if let Some(query) = search {
        dashboard.set_search(query);
    }

    println!("🔌 Loading integrations...");
    dashboard.reload_integrations(source.as_ref()).await;

    // A failed load must not read as "no integrations".
    if let Some(message) = dashboard.integrations().error() {
        eprintln!("❌ Failed to load integrations: {}", message);
        std::process::exit(1);
    }

    let integrations = dashboard.visible_integrations();
    if integrations.is_empty() {
        println!("No integrations configured.");
    } else {
        let mut out = table([
            "ID",
            "Integration",
            "Type",
            "Status",
            "Last Sync",
            "Records Synced",
        ]);
        for i in &integrations {
            out.add_row(vec![
                i.id.clone(),
                format!("{} {}", i.icon, i.name),
                i.source_type.clone(),
                i.status.to_string(),
                i.last_sync_display(now),
                thousands(i.records_synced),
            ]);
        }
        println!("{}", out);
    }

    let history = dashboard.sync_history();
    let rate = dashboard
        .success_rate()
        .map(|r| format!("{:.1}%", r))
        .unwrap_or_else(|| "n/a".to_string());
    println!("\n🕒 Sync history (success rate {})", rate);

    let mut out = table(["Time", "Status", "Records", "Duration"]);
    for run in history {
        out.add_row(vec![
            run.timestamp.format("%Y-%m-%d %H:%M").to_string(),
            run.status.to_string(),
            thousands(run.records_synced),
            run.duration_display(),
        ]);
    }
    println!("{}", out);
    Ok(())
}
