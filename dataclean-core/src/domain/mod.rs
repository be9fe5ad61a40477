pub mod alert;
pub mod catalog;
pub mod draft;
pub mod error;
pub mod integration;
pub mod monitor;
pub mod recency;
pub mod status;

// Re-exports to keep imports short elsewhere
pub use alert::{Alert, MonitorWithAlerts};
pub use error::DomainError;
pub use integration::{Integration, IntegrationRequest, SyncRecord};
pub use monitor::{CheckTally, HealthTier, Monitor, PassRate, QualityCheck};
pub use status::{AlertStatus, CheckStatus, IntegrationStatus, MonitorStatus, Severity, SyncStatus};
