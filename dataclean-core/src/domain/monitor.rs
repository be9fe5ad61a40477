// dataclean-core/src/domain/monitor.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::error::DomainError;
use crate::domain::recency::format_relative;
use crate::domain::status::{CheckStatus, MonitorStatus};

/// A single validation rule. Has no identity outside its owning [`Monitor`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct QualityCheck {
    #[validate(length(min = 1, message = "check id cannot be empty"))]
    pub id: String,
    #[validate(length(min = 1, message = "check name cannot be empty"))]
    pub name: String,
    /// Free-form category label ("Null Check", "Range"...)
    #[serde(rename = "type")]
    pub check_type: String,
    pub status: CheckStatus,
    pub last_run: DateTime<Utc>,
    pub description: String,
    /// Display-only threshold, e.g. "< 1%"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold: Option<String>,
}

/// A recurring data-quality job bound to one table of one database.
///
/// The pass rate is not stored: it is always derived from `checks`,
/// so it can never disagree with them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Monitor {
    #[validate(length(min = 1, message = "monitor id cannot be empty"))]
    pub id: String,
    #[validate(length(min = 1, message = "monitor name cannot be empty"))]
    pub name: String,
    #[validate(length(min = 1, message = "table cannot be empty"))]
    pub table: String,
    #[validate(length(min = 1, message = "database cannot be empty"))]
    pub database: String,
    pub status: MonitorStatus,
    pub last_run: DateTime<Utc>,
    /// Insertion order is display order.
    #[validate(nested)]
    #[serde(default)]
    pub checks: Vec<QualityCheck>,
}

impl QualityCheck {
    pub fn validated(self) -> Result<Self, DomainError> {
        self.validate()?;
        Ok(self)
    }

    pub fn last_run_display(&self, now: DateTime<Utc>) -> String {
        format_relative(self.last_run, now)
    }
}

impl Monitor {
    /// Rejects the record instead of handing out a partially valid monitor.
    pub fn validated(self) -> Result<Self, DomainError> {
        self.validate()?;
        Ok(self)
    }

    pub fn pass_rate(&self) -> Option<PassRate> {
        PassRate::from_checks(&self.checks)
    }

    pub fn tally(&self) -> CheckTally {
        CheckTally::from_checks(&self.checks)
    }

    pub fn health(&self) -> HealthTier {
        HealthTier::of(self)
    }

    pub fn last_run_display(&self, now: DateTime<Utc>) -> String {
        format_relative(self.last_run, now)
    }
}

// --- PASS RATE ---

/// Integer percentage in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct PassRate(u8);

impl PassRate {
    pub const FULL: PassRate = PassRate(100);

    pub fn new(value: i64) -> Result<Self, DomainError> {
        match u8::try_from(value) {
            Ok(v) if v <= 100 => Ok(PassRate(v)),
            _ => Err(DomainError::validation(
                "pass_rate",
                format!("must be within 0..=100, got {}", value),
            )),
        }
    }

    /// `round(100 * passing / total)`, half rounded up. `None` when `total` is 0.
    pub fn from_counts(passing: usize, total: usize) -> Option<Self> {
        if total == 0 {
            return None;
        }
        let passing = passing.min(total) as u64;
        let total = total as u64;
        let rounded = (200 * passing + total) / (2 * total);
        Some(PassRate(rounded as u8))
    }

    pub fn from_checks(checks: &[QualityCheck]) -> Option<Self> {
        let passing = checks
            .iter()
            .filter(|c| c.status == CheckStatus::Passing)
            .count();
        Self::from_counts(passing, checks.len())
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for PassRate {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        PassRate::new(value)
    }
}

impl From<PassRate> for u8 {
    fn from(rate: PassRate) -> u8 {
        rate.0
    }
}

impl std::fmt::Display for PassRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0)
    }
}

// --- CHECK TALLY & HEALTH ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CheckTally {
    pub passing: usize,
    pub warning: usize,
    pub failing: usize,
}

impl CheckTally {
    pub fn from_checks(checks: &[QualityCheck]) -> Self {
        checks.iter().fold(Self::default(), |mut acc, c| {
            match c.status {
                CheckStatus::Passing => acc.passing += 1,
                CheckStatus::Warning => acc.warning += 1,
                CheckStatus::Failing => acc.failing += 1,
            }
            acc
        })
    }

    pub fn total(&self) -> usize {
        self.passing + self.warning + self.failing
    }
}

/// Badge shown on monitor cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthTier {
    Inactive,
    Healthy,
    Degraded,
    Critical,
}

impl HealthTier {
    const DEGRADED_FLOOR: u8 = 80;

    pub fn of(monitor: &Monitor) -> Self {
        if monitor.status == MonitorStatus::Inactive {
            return HealthTier::Inactive;
        }
        match monitor.pass_rate() {
            None => HealthTier::Healthy,
            Some(rate) if rate == PassRate::FULL => HealthTier::Healthy,
            Some(rate) if rate.value() >= Self::DEGRADED_FLOOR => HealthTier::Degraded,
            Some(_) => HealthTier::Critical,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inactive => "inactive",
            Self::Healthy => "healthy",
            Self::Degraded => "degraded",
            Self::Critical => "critical",
        }
    }
}
