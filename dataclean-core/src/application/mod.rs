// dataclean-core/src/application/mod.rs

pub mod aggregation;
pub mod dashboard;
pub mod integrations;
pub mod navigation;
pub mod search;

// --- RE-EXPORTS (FACADE PATTERN) ---
// Lets the CLI write `use dataclean_core::application::{Dashboard, group_alerts_by_monitor};`
// without knowing the file layout.

pub use aggregation::{
    AlertBuckets, alerts_for_monitor, compute_pass_rate, compute_success_rate,
    group_alerts_by_monitor, partition_by_status,
};
pub use dashboard::{Dashboard, MonitorAlertsDetail};
pub use integrations::{LoadState, load_integrations, submit_connection, test_connection};
pub use navigation::{DialogKind, Dialogs, Navigator, Screen, TopLevel};
pub use search::{FieldSelector, Searchable, filter_by_search, search};
