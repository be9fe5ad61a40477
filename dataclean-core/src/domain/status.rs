// dataclean-core/src/domain/status.rs
//
// Closed status/severity vocabularies. Unknown labels are rejected at the
// boundary (FromStr / serde) instead of leaking into the views.

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

macro_rules! labelled_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_lowercase().as_str() {
                    $($label => Ok(Self::$variant),)+
                    _ => Err(DomainError::unknown_variant($field, s)),
                }
            }
        }
    };
}

labelled_enum! {
    /// Lifecycle of a monitor job.
    MonitorStatus, "monitor status" {
        Active => "active",
        Inactive => "inactive",
        Error => "error",
    }
}

labelled_enum! {
    CheckStatus, "check status" {
        Passing => "passing",
        Failing => "failing",
        Warning => "warning",
    }
}

labelled_enum! {
    IntegrationStatus, "integration status" {
        Connected => "connected",
        Error => "error",
        Syncing => "syncing",
    }
}

labelled_enum! {
    SyncStatus, "sync status" {
        Success => "success",
        Failed => "failed",
    }
}

labelled_enum! {
    // Declared low -> critical so the derived ordering ranks by urgency.
    #[derive(PartialOrd, Ord)]
    Severity, "severity" {
        Low => "low",
        Medium => "medium",
        High => "high",
        Critical => "critical",
    }
}

labelled_enum! {
    AlertStatus, "alert status" {
        Open => "open",
        Acknowledged => "acknowledged",
        Resolved => "resolved",
    }
}
