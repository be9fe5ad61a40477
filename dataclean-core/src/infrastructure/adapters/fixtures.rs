// dataclean-core/src/infrastructure/adapters/fixtures.rs
//
// Compiled-in demo datasets. Relative ages ("2 minutes ago") are anchored
// on the `now` handed in, so the projection stays stable in tests.

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::sync::Mutex;
use tracing::info;

use crate::domain::catalog::SNOWFLAKE;
use crate::domain::{
    Alert, AlertStatus, CheckStatus, Integration, IntegrationRequest, IntegrationStatus, Monitor,
    MonitorStatus, QualityCheck, Severity, SyncRecord, SyncStatus,
};
use crate::error::DatacleanError;
use crate::ports::IntegrationSource;

/// Everything the dashboard shows when no backend is involved.
#[derive(Debug, Clone)]
pub struct FixtureSet {
    pub monitors: Vec<Monitor>,
    pub alerts: Vec<Alert>,
    pub integrations: Vec<Integration>,
    pub sync_history: Vec<SyncRecord>,
}

impl FixtureSet {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            monitors: monitors(now),
            alerts: alerts(now),
            integrations: integrations(now),
            sync_history: sync_history(),
        }
    }
}

fn check(
    id: &str,
    name: &str,
    check_type: &str,
    status: CheckStatus,
    last_run: DateTime<Utc>,
    description: &str,
    threshold: &str,
) -> QualityCheck {
    QualityCheck {
        id: id.into(),
        name: name.into(),
        check_type: check_type.into(),
        status,
        last_run,
        description: description.into(),
        threshold: Some(threshold.into()),
    }
}

pub fn monitors(now: DateTime<Utc>) -> Vec<Monitor> {
    let two_min = now - Duration::minutes(2);
    let five_min = now - Duration::minutes(5);
    let ten_min = now - Duration::minutes(10);
    let two_hours = now - Duration::hours(2);

    vec![
        Monitor {
            id: "1".into(),
            name: "Customer Data Quality".into(),
            table: "customers".into(),
            database: "production_db".into(),
            status: MonitorStatus::Active,
            last_run: two_min,
            checks: vec![
                check(
                    "c1",
                    "Null Check - Email",
                    "Null Check",
                    CheckStatus::Passing,
                    two_min,
                    "Ensures email column has no null values",
                    "< 1%",
                ),
                check(
                    "c2",
                    "Uniqueness - Customer ID",
                    "Uniqueness",
                    CheckStatus::Passing,
                    two_min,
                    "Validates customer_id uniqueness",
                    "100%",
                ),
                check(
                    "c3",
                    "Format Validation - Phone",
                    "Format",
                    CheckStatus::Warning,
                    two_min,
                    "Checks phone number format",
                    "> 98%",
                ),
            ],
        },
        Monitor {
            id: "2".into(),
            name: "Transaction Integrity".into(),
            table: "transactions".into(),
            database: "production_db".into(),
            status: MonitorStatus::Active,
            last_run: five_min,
            checks: vec![
                check(
                    "c4",
                    "Range Check - Amount",
                    "Range",
                    CheckStatus::Passing,
                    five_min,
                    "Validates transaction amounts are positive",
                    "> 0",
                ),
                check(
                    "c5",
                    "Referential Integrity",
                    "Referential",
                    CheckStatus::Failing,
                    five_min,
                    "Checks foreign key relationships",
                    "100%",
                ),
            ],
        },
        Monitor {
            id: "3".into(),
            name: "Product Catalog Health".into(),
            table: "products".into(),
            database: "catalog_db".into(),
            status: MonitorStatus::Active,
            last_run: ten_min,
            checks: vec![
                check(
                    "c6",
                    "Completeness - Description",
                    "Completeness",
                    CheckStatus::Passing,
                    ten_min,
                    "Ensures product descriptions are filled",
                    "> 95%",
                ),
                check(
                    "c7",
                    "Data Freshness",
                    "Freshness",
                    CheckStatus::Passing,
                    ten_min,
                    "Monitors data update recency",
                    "< 24h",
                ),
            ],
        },
        Monitor {
            id: "4".into(),
            name: "User Activity Logs".into(),
            table: "activity_logs".into(),
            database: "analytics_db".into(),
            status: MonitorStatus::Inactive,
            last_run: two_hours,
            checks: vec![check(
                "c8",
                "Timestamp Validation",
                "Format",
                CheckStatus::Passing,
                two_hours,
                "Validates timestamp format",
                "100%",
            )],
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn alert(
    id: &str,
    monitor: (&str, &str, &str, &str),
    check_name: &str,
    severity: Severity,
    status: AlertStatus,
    message: &str,
    timestamp: DateTime<Utc>,
    affected_rows: u64,
    threshold: &str,
    actual_value: &str,
) -> Alert {
    let (monitor_id, monitor_name, table, database) = monitor;
    Alert {
        id: id.into(),
        monitor_id: monitor_id.into(),
        monitor_name: monitor_name.into(),
        table: table.into(),
        database: database.into(),
        check_name: check_name.into(),
        severity,
        status,
        message: message.into(),
        timestamp,
        affected_rows,
        threshold: threshold.into(),
        actual_value: actual_value.into(),
    }
}

pub fn alerts(now: DateTime<Utc>) -> Vec<Alert> {
    let customers = ("1", "Customer Data Quality", "customers", "production_db");
    let transactions = ("2", "Transaction Integrity", "transactions", "production_db");
    let activity = ("4", "User Activity Logs", "activity_logs", "analytics_db");

    vec![
        alert(
            "a1",
            customers,
            "Null Check - Email",
            Severity::High,
            AlertStatus::Open,
            "Email column has 150 null values exceeding threshold",
            now - Duration::minutes(10),
            150,
            "< 1%",
            "1.5%",
        ),
        alert(
            "a2",
            customers,
            "Format Validation - Phone",
            Severity::Medium,
            AlertStatus::Open,
            "Phone numbers not matching expected format",
            now - Duration::minutes(25),
            320,
            "> 98%",
            "96.8%",
        ),
        alert(
            "a3",
            transactions,
            "Referential Integrity",
            Severity::Critical,
            AlertStatus::Open,
            "Foreign key violations detected in transaction records",
            now - Duration::minutes(5),
            45,
            "100%",
            "99.5%",
        ),
        alert(
            "a4",
            transactions,
            "Range Check - Amount",
            Severity::High,
            AlertStatus::Acknowledged,
            "Transaction amounts outside acceptable range",
            now - Duration::hours(1),
            12,
            "> 0",
            "-12 records",
        ),
        alert(
            "a5",
            activity,
            "Timestamp Validation",
            Severity::Low,
            AlertStatus::Resolved,
            "Timestamp format inconsistencies found",
            now - Duration::hours(2),
            8,
            "100%",
            "99.9%",
        ),
    ]
}

pub fn integrations(now: DateTime<Utc>) -> Vec<Integration> {
    let snowflake = |id: &str, name: &str, status, last_sync, records_synced| Integration {
        id: id.into(),
        name: name.into(),
        source_type: SNOWFLAKE.id.into(),
        status,
        last_sync,
        records_synced,
        icon: SNOWFLAKE.icon.into(),
    };

    vec![
        snowflake(
            "1",
            "Production Snowflake",
            IntegrationStatus::Connected,
            now - Duration::minutes(5),
            1_250_000,
        ),
        snowflake(
            "2",
            "Analytics Snowflake",
            IntegrationStatus::Connected,
            now - Duration::hours(1),
            850_000,
        ),
        snowflake(
            "3",
            "Staging Snowflake",
            IntegrationStatus::Error,
            now - Duration::days(2),
            0,
        ),
    ]
}

pub fn sync_history() -> Vec<SyncRecord> {
    let run = |id: &str, hour: u32, minute: u32, status, records_synced, secs| SyncRecord {
        id: id.into(),
        timestamp: Utc
            .with_ymd_and_hms(2025, 12, 5, hour, minute, 0)
            .single()
            .unwrap_or_default(),
        status,
        records_synced,
        duration: std::time::Duration::from_secs(secs),
    };

    vec![
        run("1", 14, 30, SyncStatus::Success, 125_000, 135),
        run("2", 14, 0, SyncStatus::Success, 123_500, 130),
        run("3", 13, 30, SyncStatus::Success, 124_200, 138),
        run("4", 13, 0, SyncStatus::Failed, 0, 0),
        run("5", 12, 30, SyncStatus::Success, 122_800, 132),
        run("6", 12, 0, SyncStatus::Success, 121_500, 128),
    ]
}

/// In-memory stand-in for the integration API.
pub struct FixtureIntegrationSource {
    integrations: Mutex<Vec<Integration>>,
}

impl FixtureIntegrationSource {
    pub fn new(integrations: Vec<Integration>) -> Self {
        Self {
            integrations: Mutex::new(integrations),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<Integration>>, DatacleanError> {
        self.integrations
            .lock()
            .map_err(|_| DatacleanError::InternalError("fixture store poisoned".into()))
    }
}

#[async_trait]
impl IntegrationSource for FixtureIntegrationSource {
    async fn list_integrations(&self) -> Result<Vec<Integration>, DatacleanError> {
        Ok(self.lock()?.clone())
    }

    async fn create_integration(&self, request: &IntegrationRequest) -> Result<(), DatacleanError> {
        let mut store = self.lock()?;
        let created = Integration {
            id: (store.len() + 1).to_string(),
            name: request.name.clone(),
            source_type: SNOWFLAKE.id.into(),
            status: IntegrationStatus::Connected,
            last_sync: Utc::now(),
            records_synced: 0,
            icon: SNOWFLAKE.icon.into(),
        }
        .validated()?;

        info!(name = %created.name, "Fixture integration created");
        // Replace wholesale so readers never see a half-updated list
        let mut next = store.clone();
        next.push(created);
        *store = next;
        Ok(())
    }

    async fn ping(&self) -> Result<(), DatacleanError> {
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 12, 5, 15, 0, 0).unwrap()
    }

    #[test]
    fn test_fixtures_are_valid_records() {
        let set = FixtureSet::new(now());
        for m in &set.monitors {
            assert!(m.clone().validated().is_ok(), "monitor {} invalid", m.id);
        }
        for a in &set.alerts {
            assert!(a.clone().validated().is_ok(), "alert {} invalid", a.id);
        }
        for i in &set.integrations {
            assert!(i.clone().validated().is_ok(), "integration {} invalid", i.id);
        }
        assert_eq!(set.sync_history.len(), 6);
    }

    #[test]
    fn test_fixture_ages_render_like_the_dashboard() {
        let set = FixtureSet::new(now());
        assert_eq!(set.monitors[0].last_run_display(now()), "2 minutes ago");
        assert_eq!(set.alerts[3].raised_display(now()), "1 hour ago");
        assert_eq!(set.integrations[2].last_sync_display(now()), "2 days ago");
    }

    #[test]
    fn test_alerts_only_reference_known_monitors() {
        let set = FixtureSet::new(now());
        for a in &set.alerts {
            assert!(set.monitors.iter().any(|m| m.id == a.monitor_id));
        }
    }

    #[tokio::test]
    async fn test_fixture_source_create_appends() {
        let source = FixtureIntegrationSource::new(integrations(now()));
        let request = IntegrationRequest {
            name: "Dev Snowflake".into(),
            account: "acc".into(),
            warehouse: "wh".into(),
            username: "u".into(),
            password: "p".into(),
            schema_name: "hackathon".into(),
            database_name: "hackathon".into(),
        };
        source.create_integration(&request).await.unwrap();

        let listed = source.list_integrations().await.unwrap();
        assert_eq!(listed.len(), 4);
        assert_eq!(listed[3].id, "4");
        assert_eq!(listed[3].name, "Dev Snowflake");
    }
}
