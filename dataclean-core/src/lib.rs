// dataclean-core/src/lib.rs

// 1. Mandatory documentation for production code
#![allow(missing_docs)]

// 2. Memory safety
#![deny(unsafe_code)]
// 3. Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
// 4. Performance
#![warn(clippy::perf)]

// --- HEXAGONAL MODULES ---

// 1. Ports (Interfaces / Traits)
// Contract for whatever supplies integrations (HTTP backend, fixtures...)
pub mod ports;

// 2. Domain
// Monitors, checks, alerts, integrations and their invariants.
// Depends on nothing else in the crate.
pub mod domain;

// 3. Infrastructure (Adapters)
// HTTP client, compiled-in fixtures, YAML configuration.
pub mod infrastructure;

// 4. Application (Use Cases)
// Aggregation, search, navigation, integration loading, dashboard session.
pub mod application;

// --- GLOBAL ERROR HANDLING ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
pub use error::DatacleanError;
