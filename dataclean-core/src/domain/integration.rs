// dataclean-core/src/domain/integration.rs

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::error::DomainError;
use crate::domain::recency::format_relative;
use crate::domain::status::{IntegrationStatus, SyncStatus};

/// A configured connection to an external data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Integration {
    #[validate(length(min = 1, message = "integration id cannot be empty"))]
    pub id: String,
    #[validate(length(min = 1, message = "integration name cannot be empty"))]
    pub name: String,
    /// Source kind, e.g. "snowflake"
    #[serde(rename = "type")]
    pub source_type: String,
    pub status: IntegrationStatus,
    pub last_sync: DateTime<Utc>,
    pub records_synced: u64,
    pub icon: String,
}

impl Integration {
    pub fn validated(self) -> Result<Self, DomainError> {
        self.validate()?;
        Ok(self)
    }

    pub fn last_sync_display(&self, now: DateTime<Utc>) -> String {
        format_relative(self.last_sync, now)
    }
}

/// One past synchronization attempt, displayed in the integration detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncRecord {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub status: SyncStatus,
    pub records_synced: u64,
    pub duration: Duration,
}

impl SyncRecord {
    /// "2m 15s", "45s", "0s"
    pub fn duration_display(&self) -> String {
        let secs = self.duration.as_secs();
        let (minutes, seconds) = (secs / 60, secs % 60);
        if minutes == 0 {
            format!("{}s", seconds)
        } else {
            format!("{}m {:02}s", minutes, seconds)
        }
    }
}

/// Body of `POST /integration`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct IntegrationRequest {
    #[validate(length(min = 1, message = "integration name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "account is required"))]
    pub account: String,
    pub warehouse: String,
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
    pub schema_name: String,
    pub database_name: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(secs: u64) -> SyncRecord {
        SyncRecord {
            id: "1".into(),
            timestamp: Utc.with_ymd_and_hms(2025, 12, 5, 14, 30, 0).unwrap(),
            status: SyncStatus::Success,
            records_synced: 125_000,
            duration: Duration::from_secs(secs),
        }
    }

    #[test]
    fn test_duration_display() {
        assert_eq!(record(135).duration_display(), "2m 15s");
        assert_eq!(record(128).duration_display(), "2m 08s");
        assert_eq!(record(45).duration_display(), "45s");
        assert_eq!(record(0).duration_display(), "0s");
    }

    #[test]
    fn test_request_requires_credentials() {
        let request = IntegrationRequest {
            name: "Prod".into(),
            account: "xy12345".into(),
            warehouse: "COMPUTE_WH".into(),
            username: "svc".into(),
            password: String::new(),
            schema_name: "hackathon".into(),
            database_name: "hackathon".into(),
        };
        let err = DomainError::from(request.validate().unwrap_err());
        assert!(matches!(err, DomainError::Validation { ref field, .. } if field == "password"));
    }

    #[test]
    fn test_request_serializes_backend_field_names() {
        let request = IntegrationRequest {
            name: "Prod".into(),
            account: "acc".into(),
            warehouse: "wh".into(),
            username: "u".into(),
            password: "p".into(),
            schema_name: "hackathon".into(),
            database_name: "hackathon".into(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["schema_name"], "hackathon");
        assert_eq!(json["database_name"], "hackathon");
    }
}
