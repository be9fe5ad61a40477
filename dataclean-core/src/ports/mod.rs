// dataclean-core/src/ports/mod.rs

pub mod integration_source;

pub use integration_source::IntegrationSource;
