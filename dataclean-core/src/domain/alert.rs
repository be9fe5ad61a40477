// dataclean-core/src/domain/alert.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::error::DomainError;
use crate::domain::recency::format_relative;
use crate::domain::status::{AlertStatus, Severity};

/// Raised when a monitor's check fails or degrades.
///
/// `monitor_id` is a weak reference: the alert does not own the monitor and
/// outlives it if the monitor disappears.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Alert {
    #[validate(length(min = 1, message = "alert id cannot be empty"))]
    pub id: String,
    #[validate(length(min = 1, message = "monitor id cannot be empty"))]
    pub monitor_id: String,
    pub monitor_name: String,
    pub table: String,
    pub database: String,
    pub check_name: String,
    pub severity: Severity,
    pub status: AlertStatus,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub affected_rows: u64,
    pub threshold: String,
    pub actual_value: String,
}

impl Alert {
    pub fn validated(self) -> Result<Self, DomainError> {
        self.validate()?;
        Ok(self)
    }

    pub fn raised_display(&self, now: DateTime<Utc>) -> String {
        format_relative(self.timestamp, now)
    }
}

/// Per-monitor alert summary. Never stored: recomputed from the alert collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonitorWithAlerts {
    pub monitor_id: String,
    pub monitor_name: String,
    pub table: String,
    pub database: String,
    pub alert_count: usize,
    pub critical_count: usize,
    pub high_count: usize,
    /// Timestamp of the most recently raised alert in the group.
    pub last_alert: DateTime<Utc>,
}
