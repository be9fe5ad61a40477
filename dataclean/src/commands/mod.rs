// dataclean/src/commands/mod.rs
//
// One module per subcommand plus the table helpers they share.

pub mod alerts;
pub mod create_integration;
pub mod integrations;
pub mod monitors;

use chrono::{DateTime, Utc};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};

use dataclean_core::application::Dashboard;
use dataclean_core::infrastructure::adapters::fixtures;
use dataclean_core::infrastructure::adapters::{
    FixtureIntegrationSource, FixtureSet, HttpIntegrationSource,
};
use dataclean_core::infrastructure::config::{DashboardConfig, SourceKind};
use dataclean_core::ports::IntegrationSource;
use tracing::info;

/// Monitors and alerts only exist as demo data; no API serves them.
pub(crate) fn demo_dashboard(now: DateTime<Utc>) -> Dashboard {
    let set = FixtureSet::new(now);
    Dashboard::new(set.monitors, set.alerts, set.sync_history)
}

/// `--fixtures` wins over the configured source.
pub(crate) fn integration_source(
    config: &DashboardConfig,
    force_fixtures: bool,
    now: DateTime<Utc>,
) -> anyhow::Result<Box<dyn IntegrationSource>> {
    if force_fixtures || config.source == SourceKind::Fixtures {
        info!(forced = force_fixtures, "Using demo integrations");
        return Ok(Box::new(FixtureIntegrationSource::new(fixtures::integrations(now))));
    }
    info!(
        api = %config.api_base_url,
        timeout_secs = ?config.timeout_secs,
        "Using integration API"
    );
    Ok(Box::new(HttpIntegrationSource::new(config)?))
}

pub(crate) fn table<I, S>(header: I) -> Table
where
    I: IntoIterator<Item = S>,
    S: Into<comfy_table::Cell>,
{
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Disabled)
        .set_header(header);
    table
}

/// 1250000 -> "1,250,000"
pub(crate) fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
