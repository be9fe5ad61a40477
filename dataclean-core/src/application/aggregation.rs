// dataclean-core/src/application/aggregation.rs
//
// Derived values recomputed from the current collections on every read.

use std::collections::HashMap;

use crate::domain::{
    Alert, AlertStatus, MonitorWithAlerts, PassRate, QualityCheck, Severity, SyncRecord,
    SyncStatus,
};

/// `round(100 * passing / total)`. `None` for a monitor without checks.
pub fn compute_pass_rate(checks: &[QualityCheck]) -> Option<PassRate> {
    PassRate::from_checks(checks)
}

/// Percentage of successful syncs. `None` when there is no history.
pub fn compute_success_rate(history: &[SyncRecord]) -> Option<f64> {
    if history.is_empty() {
        return None;
    }
    let successes = history
        .iter()
        .filter(|h| h.status == SyncStatus::Success)
        .count();
    Some(100.0 * successes as f64 / history.len() as f64)
}

/// Partitions alerts by `monitor_id`, groups ordered by first appearance.
///
/// Monitor name/table/database come from the first alert of each group.
/// `last_alert` is the latest timestamp in the group.
pub fn group_alerts_by_monitor(alerts: &[Alert]) -> Vec<MonitorWithAlerts> {
    let mut groups: Vec<MonitorWithAlerts> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for alert in alerts {
        let slot = *index.entry(alert.monitor_id.as_str()).or_insert_with(|| {
            groups.push(MonitorWithAlerts {
                monitor_id: alert.monitor_id.clone(),
                monitor_name: alert.monitor_name.clone(),
                table: alert.table.clone(),
                database: alert.database.clone(),
                alert_count: 0,
                critical_count: 0,
                high_count: 0,
                last_alert: alert.timestamp,
            });
            groups.len() - 1
        });

        let group = &mut groups[slot];
        group.alert_count += 1;
        match alert.severity {
            Severity::Critical => group.critical_count += 1,
            Severity::High => group.high_count += 1,
            Severity::Medium | Severity::Low => {}
        }
        if alert.timestamp > group.last_alert {
            group.last_alert = alert.timestamp;
        }
    }

    groups
}

pub fn alerts_for_monitor<'a>(alerts: &'a [Alert], monitor_id: &str) -> Vec<&'a Alert> {
    alerts.iter().filter(|a| a.monitor_id == monitor_id).collect()
}

/// Alerts of one monitor split by lifecycle, input order preserved.
#[derive(Debug, Default, PartialEq)]
pub struct AlertBuckets<'a> {
    pub open: Vec<&'a Alert>,
    pub acknowledged: Vec<&'a Alert>,
    pub resolved: Vec<&'a Alert>,
}

pub fn partition_by_status<'a, I>(alerts: I) -> AlertBuckets<'a>
where
    I: IntoIterator<Item = &'a Alert>,
{
    alerts
        .into_iter()
        .fold(AlertBuckets::default(), |mut buckets, alert| {
            match alert.status {
                AlertStatus::Open => buckets.open.push(alert),
                AlertStatus::Acknowledged => buckets.acknowledged.push(alert),
                AlertStatus::Resolved => buckets.resolved.push(alert),
            }
            buckets
        })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::CheckStatus;
    use chrono::{DateTime, Duration, TimeZone, Utc};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 12, 5, 15, 0, 0).unwrap()
    }

    fn alert(id: &str, monitor_id: &str, severity: Severity, minutes_ago: i64) -> Alert {
        Alert {
            id: id.into(),
            monitor_id: monitor_id.into(),
            monitor_name: format!("Monitor {}", monitor_id),
            table: "t".into(),
            database: "db".into(),
            check_name: "check".into(),
            severity,
            status: AlertStatus::Open,
            message: String::new(),
            timestamp: now() - Duration::minutes(minutes_ago),
            affected_rows: 1,
            threshold: String::new(),
            actual_value: String::new(),
        }
    }

    fn check(status: CheckStatus) -> QualityCheck {
        QualityCheck {
            id: "c".into(),
            name: "c".into(),
            check_type: "Null Check".into(),
            status,
            last_run: now(),
            description: String::new(),
            threshold: None,
        }
    }

    fn sync(status: SyncStatus) -> SyncRecord {
        SyncRecord {
            id: "s".into(),
            timestamp: now(),
            status,
            records_synced: 0,
            duration: std::time::Duration::from_secs(0),
        }
    }

    #[test]
    fn test_pass_rate_matches_rounded_ratio() {
        let checks = vec![
            check(CheckStatus::Passing),
            check(CheckStatus::Passing),
            check(CheckStatus::Warning),
        ];
        assert_eq!(compute_pass_rate(&checks).unwrap().value(), 67);
        assert_eq!(compute_pass_rate(&[check(CheckStatus::Failing)]).unwrap().value(), 0);
        assert_eq!(compute_pass_rate(&[]), None);
    }

    #[test]
    fn test_group_alerts_scenario() {
        let alerts = vec![
            alert("a1", "1", Severity::High, 10),
            alert("a2", "1", Severity::Critical, 5),
            alert("a3", "2", Severity::Low, 30),
        ];
        let groups = group_alerts_by_monitor(&alerts);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].monitor_id, "1");
        assert_eq!(groups[0].alert_count, 2);
        assert_eq!(groups[0].critical_count, 1);
        assert_eq!(groups[0].high_count, 1);
        assert_eq!(groups[1].monitor_id, "2");
        assert_eq!(groups[1].alert_count, 1);
        assert_eq!(groups[1].critical_count, 0);
    }

    #[test]
    fn test_group_is_a_partition_in_first_seen_order() {
        let alerts = vec![
            alert("a1", "2", Severity::Low, 1),
            alert("a2", "1", Severity::Low, 2),
            alert("a3", "2", Severity::Medium, 3),
            alert("a4", "3", Severity::High, 4),
            alert("a5", "1", Severity::Critical, 5),
        ];
        let groups = group_alerts_by_monitor(&alerts);

        let order: Vec<_> = groups.iter().map(|g| g.monitor_id.as_str()).collect();
        assert_eq!(order, vec!["2", "1", "3"]);
        let total: usize = groups.iter().map(|g| g.alert_count).sum();
        assert_eq!(total, alerts.len());
        for g in &groups {
            assert_eq!(alerts_for_monitor(&alerts, &g.monitor_id).len(), g.alert_count);
        }
    }

    #[test]
    fn test_last_alert_is_most_recent_regardless_of_input_order() {
        let alerts = vec![
            alert("old", "1", Severity::Low, 120),
            alert("newest", "1", Severity::Low, 3),
            alert("mid", "1", Severity::Low, 25),
        ];
        let groups = group_alerts_by_monitor(&alerts);
        assert_eq!(groups[0].last_alert, now() - Duration::minutes(3));
    }

    #[test]
    fn test_group_empty_input() {
        assert!(group_alerts_by_monitor(&[]).is_empty());
    }

    #[test]
    fn test_success_rate() {
        let history = vec![
            sync(SyncStatus::Success),
            sync(SyncStatus::Success),
            sync(SyncStatus::Success),
            sync(SyncStatus::Failed),
            sync(SyncStatus::Success),
            sync(SyncStatus::Success),
        ];
        let rate = compute_success_rate(&history).unwrap();
        assert!((rate - 83.333).abs() < 0.01);
        assert_eq!(compute_success_rate(&[]), None);
    }

    #[test]
    fn test_partition_by_status_keeps_order() {
        let mut alerts = vec![
            alert("a1", "1", Severity::High, 1),
            alert("a2", "1", Severity::High, 2),
            alert("a3", "1", Severity::High, 3),
            alert("a4", "1", Severity::High, 4),
        ];
        alerts[1].status = AlertStatus::Resolved;
        alerts[3].status = AlertStatus::Acknowledged;

        let buckets = partition_by_status(&alerts);
        let ids = |v: &Vec<&Alert>| v.iter().map(|a| a.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(&buckets.open), vec!["a1", "a3"]);
        assert_eq!(ids(&buckets.acknowledged), vec!["a4"]);
        assert_eq!(ids(&buckets.resolved), vec!["a2"]);
    }
}
