// dataclean/src/commands/alerts.rs
//
// USE CASE: Alerts grouped by monitor, or one monitor's alerts by status.

use chrono::{DateTime, Utc};

use dataclean_core::application::TopLevel;
use dataclean_core::domain::Alert;
use dataclean_core::domain::recency::format_relative;

use super::{demo_dashboard, table, thousands};

pub fn execute(
    search: Option<String>,
    monitor: Option<String>,
    now: DateTime<Utc>,
) -> anyhow::Result<()> {
    let mut dashboard = demo_dashboard(now);
    dashboard.switch_to(TopLevel::Alerts);

    if let Some(monitor_id) = monitor {
        dashboard.select_monitor_group(&monitor_id)?;
        let detail = dashboard
            .selected_alert_detail()
            .ok_or_else(|| anyhow::anyhow!("No alerts for monitor '{}'", monitor_id))?;

        let summary = &detail.summary;
        println!("\n🚨 {} ({}.{})", summary.monitor_name, summary.database, summary.table);
        println!(
            "   {} alerts, {} critical, {} high, last {}",
            summary.alert_count,
            summary.critical_count,
            summary.high_count,
            format_relative(summary.last_alert, now)
        );

        for (label, bucket) in [
            ("Open", &detail.alerts.open),
            ("Acknowledged", &detail.alerts.acknowledged),
            ("Resolved", &detail.alerts.resolved),
        ] {
            if bucket.is_empty() {
                continue;
            }
            println!("\n{} ({})", label, bucket.len());
            println!("{}", alert_table(bucket, now));
        }
        return Ok(());
    }

    if let Some(query) = search {
        dashboard.set_search(query);
    }
    let groups = dashboard.visible_alert_groups();
    if groups.is_empty() {
        println!("No alerts match '{}'.", dashboard.search_query());
        return Ok(());
    }

    let mut out = table([
        "ID",
        "Monitor",
        "Table",
        "Database",
        "Alerts",
        "Critical",
        "High",
        "Last Alert",
    ]);
    for g in &groups {
        out.add_row(vec![
            g.monitor_id.clone(),
            g.monitor_name.clone(),
            g.table.clone(),
            g.database.clone(),
            g.alert_count.to_string(),
            g.critical_count.to_string(),
            g.high_count.to_string(),
            format_relative(g.last_alert, now),
        ]);
    }
    println!("{}", out);
    Ok(())
}

fn alert_table(alerts: &[&Alert], now: DateTime<Utc>) -> comfy_table::Table {
    let mut out = table([
        "Check",
        "Severity",
        "Message",
        "Affected Rows",
        "Threshold",
        "Actual",
        "Raised",
    ]);
    for a in alerts {
        out.add_row(vec![
            a.check_name.clone(),
            a.severity.to_string(),
            a.message.clone(),
            thousands(a.affected_rows),
            a.threshold.clone(),
            a.actual_value.clone(),
            a.raised_display(now),
        ]);
    }
    out
}
