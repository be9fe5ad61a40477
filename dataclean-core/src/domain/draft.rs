// dataclean-core/src/domain/draft.rs
//
// Form records behind the add-check, create-monitor and Snowflake dialogs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::catalog::{CheckKind, DATABASES, Schedule};
use crate::domain::error::DomainError;
use crate::domain::integration::IntegrationRequest;
use crate::domain::monitor::Monitor;
use crate::domain::status::MonitorStatus;

// --- ADD CHECK ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FailureAction {
    #[default]
    Logging,
    Drop,
}

/// Parameters that only some check kinds carry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CheckParams {
    None,
    Range { min: Option<f64>, max: Option<f64> },
    Format { pattern: String },
    Custom { sql: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct CheckDraft {
    pub kind: CheckKind,
    #[validate(length(min = 1, message = "check name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "a column must be selected"))]
    pub column: String,
    pub action: FailureAction,
    pub params: CheckParams,
}

impl CheckDraft {
    pub fn validated(self) -> Result<Self, DomainError> {
        self.validate()?;

        match (&self.kind, &self.params) {
            (CheckKind::Range, CheckParams::Range { min, max }) => {
                if let (Some(min), Some(max)) = (min, max) {
                    if min > max {
                        return Err(DomainError::validation(
                            "params",
                            format!("minimum {} is greater than maximum {}", min, max),
                        ));
                    }
                }
            }
            (CheckKind::Format, CheckParams::Format { pattern }) if pattern.trim().is_empty() => {
                return Err(DomainError::validation("params", "format pattern is required"));
            }
            (CheckKind::Custom, CheckParams::Custom { sql }) if sql.trim().is_empty() => {
                return Err(DomainError::validation("params", "custom SQL query is required"));
            }
            (CheckKind::Format, CheckParams::Format { .. })
            | (CheckKind::Custom, CheckParams::Custom { .. }) => {}
            (CheckKind::Range | CheckKind::Format | CheckKind::Custom, other) => {
                return Err(DomainError::validation(
                    "params",
                    format!("{} check cannot use {:?} parameters", self.kind.as_str(), other),
                ));
            }
            (_, CheckParams::None) => {}
            (kind, other) => {
                return Err(DomainError::validation(
                    "params",
                    format!("{} check takes no parameters, got {:?}", kind.as_str(), other),
                ));
            }
        }

        Ok(self)
    }
}

// --- CREATE MONITOR ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct MonitorDraft {
    #[validate(length(min = 1, message = "monitor name is required"))]
    pub name: String,
    #[validate(custom(function = "validate_database"))]
    pub database: String,
    #[validate(length(min = 1, message = "table name is required"))]
    pub table: String,
    pub schedule: Schedule,
    #[serde(default)]
    pub description: Option<String>,
}

fn validate_database(database: &str) -> Result<(), validator::ValidationError> {
    if DATABASES.contains(&database) {
        Ok(())
    } else {
        let mut err = validator::ValidationError::new("unknown_database");
        err.message = Some(format!("unknown database '{}'", database).into());
        Err(err)
    }
}

impl MonitorDraft {
    /// Builds an active monitor with no checks yet.
    pub fn into_monitor(self, id: String, now: DateTime<Utc>) -> Result<Monitor, DomainError> {
        self.validate()?;
        Monitor {
            id,
            name: self.name,
            table: self.table,
            database: self.database,
            status: MonitorStatus::Active,
            last_run: now,
            checks: Vec::new(),
        }
        .validated()
    }
}

// --- SNOWFLAKE CONNECTION ---

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestOutcome {
    Success,
    Failure,
}

/// State of the Snowflake connection dialog.
///
/// "Create" only unlocks after a successful connection test.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConnectionForm {
    pub name: String,
    pub account: String,
    pub warehouse: String,
    pub username: String,
    pub password: String,
    pub test_result: Option<TestOutcome>,
    pub api_error: Option<String>,
    pub is_loading: bool,
}

impl ConnectionForm {
    pub fn can_test(&self) -> bool {
        !self.is_loading
            && !self.account.is_empty()
            && !self.username.is_empty()
            && !self.password.is_empty()
    }

    pub fn can_create(&self) -> bool {
        !self.is_loading && self.test_result == Some(TestOutcome::Success)
    }

    pub fn begin_test(&mut self) -> Result<(), DomainError> {
        if !self.can_test() {
            return Err(DomainError::InvalidTransition(
                "account, username and password are required to test the connection".into(),
            ));
        }
        self.is_loading = true;
        self.test_result = None;
        self.api_error = None;
        Ok(())
    }

    pub fn finish_test(&mut self, outcome: TestOutcome) {
        self.is_loading = false;
        self.test_result = Some(outcome);
    }

    /// Locks the form and produces the creation payload.
    pub fn begin_create(
        &mut self,
        schema_name: &str,
        database_name: &str,
    ) -> Result<IntegrationRequest, DomainError> {
        if !self.can_create() {
            return Err(DomainError::InvalidTransition(
                "the connection must be tested successfully before creating".into(),
            ));
        }
        let request = IntegrationRequest {
            name: self.name.clone(),
            account: self.account.clone(),
            warehouse: self.warehouse.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
            schema_name: schema_name.to_string(),
            database_name: database_name.to_string(),
        };
        request.validate()?;

        self.is_loading = true;
        self.api_error = None;
        Ok(request)
    }

    /// Success clears every field, failure keeps them and shows `detail` verbatim.
    pub fn finish_create(&mut self, result: Result<(), String>) {
        match result {
            Ok(()) => *self = ConnectionForm::default(),
            Err(detail) => {
                self.is_loading = false;
                self.api_error = Some(detail);
            }
        }
    }
}
