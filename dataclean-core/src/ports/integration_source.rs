// dataclean-core/src/ports/integration_source.rs

// What the dashboard needs from an integration backend, without knowing
// whether it is an HTTP service or compiled-in fixtures.

use crate::domain::{Integration, IntegrationRequest};
use crate::error::DatacleanError;
use async_trait::async_trait;

#[async_trait]
pub trait IntegrationSource: Send + Sync {
    /// Full list, already normalized into domain records.
    async fn list_integrations(&self) -> Result<Vec<Integration>, DatacleanError>;

    async fn create_integration(&self, request: &IntegrationRequest) -> Result<(), DatacleanError>;

    /// Reachability probe backing the "Test Connection" button.
    async fn ping(&self) -> Result<(), DatacleanError>;
}
