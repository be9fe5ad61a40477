// dataclean-core/src/infrastructure/config/mod.rs

pub mod dashboard;

pub use dashboard::{DashboardConfig, SourceKind, load_dashboard_config};
