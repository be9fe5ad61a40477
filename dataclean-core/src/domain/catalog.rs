// dataclean-core/src/domain/catalog.rs
//
// Static choices offered by the dialogs (check types, integration types,
// databases and run schedules of the create-monitor form).

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    Null,
    Uniqueness,
    Format,
    Range,
    Referential,
    Completeness,
    Freshness,
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckType {
    pub kind: CheckKind,
    pub name: &'static str,
    pub description: &'static str,
}

pub const CHECK_TYPES: &[CheckType] = &[
    CheckType {
        kind: CheckKind::Null,
        name: "Null Check",
        description: "Ensures selected columns have no null or empty values",
    },
    CheckType {
        kind: CheckKind::Uniqueness,
        name: "Uniqueness",
        description: "Validates that column values are unique across rows",
    },
    CheckType {
        kind: CheckKind::Format,
        name: "Format Validation",
        description: "Checks if data matches expected format patterns",
    },
    CheckType {
        kind: CheckKind::Range,
        name: "Range Check",
        description: "Validates that values fall within acceptable ranges",
    },
    CheckType {
        kind: CheckKind::Referential,
        name: "Referential Integrity",
        description: "Ensures foreign key relationships are maintained",
    },
    CheckType {
        kind: CheckKind::Completeness,
        name: "Completeness",
        description: "Checks for required fields being filled",
    },
    CheckType {
        kind: CheckKind::Freshness,
        name: "Data Freshness",
        description: "Monitors how recently data was updated",
    },
    CheckType {
        kind: CheckKind::Custom,
        name: "Custom SQL",
        description: "Write custom SQL queries for validation",
    },
];

impl CheckKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Uniqueness => "uniqueness",
            Self::Format => "format",
            Self::Range => "range",
            Self::Referential => "referential",
            Self::Completeness => "completeness",
            Self::Freshness => "freshness",
            Self::Custom => "custom",
        }
    }

    pub fn check_type(&self) -> CheckType {
        // CHECK_TYPES lists every kind exactly once
        CHECK_TYPES
            .iter()
            .copied()
            .find(|t| t.kind == *self)
            .unwrap_or(CheckType {
                kind: *self,
                name: self.as_str(),
                description: "",
            })
    }
}

impl std::str::FromStr for CheckKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CHECK_TYPES
            .iter()
            .map(|t| t.kind)
            .find(|k| k.as_str() == s.trim().to_lowercase())
            .ok_or_else(|| DomainError::unknown_variant("check type", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegrationType {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const SNOWFLAKE: IntegrationType = IntegrationType {
    id: "snowflake",
    name: "Snowflake",
    description: "Connect to your Snowflake data warehouse",
    icon: "❄️",
};

pub const INTEGRATION_TYPES: &[IntegrationType] = &[SNOWFLAKE];

pub fn integration_type(id: &str) -> Option<&'static IntegrationType> {
    INTEGRATION_TYPES.iter().find(|t| t.id == id)
}

pub const DATABASES: &[&str] = &[
    "production_db",
    "catalog_db",
    "analytics_db",
    "staging_db",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Schedule {
    #[serde(rename = "5min")]
    Every5Minutes,
    #[serde(rename = "15min")]
    Every15Minutes,
    #[serde(rename = "30min")]
    Every30Minutes,
    #[serde(rename = "1hour")]
    Hourly,
    #[serde(rename = "6hours")]
    Every6Hours,
    #[serde(rename = "daily")]
    Daily,
}

impl Schedule {
    pub const ALL: &'static [Schedule] = &[
        Schedule::Every5Minutes,
        Schedule::Every15Minutes,
        Schedule::Every30Minutes,
        Schedule::Hourly,
        Schedule::Every6Hours,
        Schedule::Daily,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Every5Minutes => "5min",
            Self::Every15Minutes => "15min",
            Self::Every30Minutes => "30min",
            Self::Hourly => "1hour",
            Self::Every6Hours => "6hours",
            Self::Daily => "daily",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Every5Minutes => "Every 5 minutes",
            Self::Every15Minutes => "Every 15 minutes",
            Self::Every30Minutes => "Every 30 minutes",
            Self::Hourly => "Every hour",
            Self::Every6Hours => "Every 6 hours",
            Self::Daily => "Daily",
        }
    }
}

impl std::str::FromStr for Schedule {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Schedule::ALL
            .iter()
            .copied()
            .find(|sch| sch.as_str() == s.trim())
            .ok_or_else(|| DomainError::unknown_variant("schedule", s))
    }
}
