// dataclean-core/src/infrastructure/adapters/mod.rs

pub mod fixtures;
pub mod http;

pub use fixtures::{FixtureIntegrationSource, FixtureSet};
pub use http::HttpIntegrationSource;
