// dataclean/src/commands/monitors.rs
//
// USE CASE: Browse monitors and drill into one.

use chrono::{DateTime, Utc};

use dataclean_core::application::TopLevel;
use dataclean_core::domain::{Monitor, PassRate};

use super::{demo_dashboard, table};

fn pass_rate_cell(rate: Option<PassRate>) -> String {
    rate.map(|r| r.to_string()).unwrap_or_else(|| "n/a".to_string())
}

pub fn execute(search: Option<String>, now: DateTime<Utc>) -> anyhow::Result<()> {
    let mut dashboard = demo_dashboard(now);
    dashboard.switch_to(TopLevel::Monitors);
    if let Some(query) = search {
        dashboard.set_search(query);
    }

    let monitors = dashboard.visible_monitors();
    if monitors.is_empty() {
        println!("No monitors match '{}'.", dashboard.search_query());
        return Ok(());
    }

    let mut out = table([
        "ID",
        "Monitor",
        "Table",
        "Database",
        "Status",
        "Health",
        "Pass Rate",
        "Checks",
        "Last Run",
    ]);
    for m in &monitors {
        let tally = m.tally();
        out.add_row(vec![
            m.id.clone(),
            m.name.clone(),
            m.table.clone(),
            m.database.clone(),
            m.status.to_string(),
            m.health().as_str().to_string(),
            pass_rate_cell(m.pass_rate()),
            format!("{}✓ {}! {}✗", tally.passing, tally.warning, tally.failing),
            m.last_run_display(now),
        ]);
    }

    println!("{}", out);
    println!("📊 {} of {} monitors", monitors.len(), dashboard.monitors().len());
    Ok(())
}

pub fn detail(id: &str, now: DateTime<Utc>) -> anyhow::Result<()> {
    let mut dashboard = demo_dashboard(now);
    let monitor: Monitor = dashboard.select_monitor(id)?.clone();

    println!("\n🔍 {} (#{})", monitor.name, monitor.id);
    println!("   Table:     {}.{}", monitor.database, monitor.table);
    println!("   Status:    {} ({})", monitor.status, monitor.health().as_str());
    println!("   Pass rate: {}", pass_rate_cell(monitor.pass_rate()));
    println!("   Last run:  {}\n", monitor.last_run_display(now));

    if monitor.checks.is_empty() {
        println!("No checks configured yet.");
        return Ok(());
    }

    let mut out = table([
        "Check",
        "Type",
        "Status",
        "Threshold",
        "Last Run",
        "Description",
    ]);
    for c in &monitor.checks {
        out.add_row(vec![
            c.name.clone(),
            c.check_type.clone(),
            c.status.to_string(),
            c.threshold.clone().unwrap_or_default(),
            c.last_run_display(now),
            c.description.clone(),
        ]);
    }
    println!("{}", out);
    Ok(())
}
