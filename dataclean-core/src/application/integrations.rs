// dataclean-core/src/application/integrations.rs
//
// USE CASE: load the integration list and create new connections.

use tracing::{info, instrument, warn};

use crate::domain::draft::{ConnectionForm, TestOutcome};
use crate::domain::Integration;
use crate::error::DatacleanError;
use crate::ports::IntegrationSource;

/// Lifecycle of the integration list as seen by the view.
///
/// `Failed` is distinct from an empty `Loaded`: "no integrations" and
/// "load failed" must never look the same.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<Integration>),
    Failed { message: String },
}

impl LoadState {
    /// Items to render. Empty unless loaded.
    pub fn items(&self) -> &[Integration] {
        match self {
            LoadState::Loaded(items) => items,
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// Converts the outcome of a load. Errors become an inline message.
    pub fn settle(result: Result<Vec<Integration>, DatacleanError>) -> Self {
        match result {
            Ok(items) => LoadState::Loaded(items),
            Err(e) => {
                warn!(error = %e, "Integration list failed to load");
                LoadState::Failed {
                    message: e.to_string(),
                }
            }
        }
    }
}

#[instrument(skip(source))]
pub async fn load_integrations(
    source: &dyn IntegrationSource,
) -> Result<Vec<Integration>, DatacleanError> {
    let integrations = source.list_integrations().await?;
    info!(count = integrations.len(), "Integrations loaded");
    Ok(integrations)
}

/// "Test Connection" button: probes the source and records the outcome on the form.
pub async fn test_connection(
    source: &dyn IntegrationSource,
    form: &mut ConnectionForm,
) -> Result<TestOutcome, DatacleanError> {
    form.begin_test()?;
    let outcome = match source.ping().await {
        Ok(()) => TestOutcome::Success,
        Err(e) => {
            warn!(error = %e, "Connection test failed");
            TestOutcome::Failure
        }
    };
    form.finish_test(outcome);
    Ok(outcome)
}

/// "Create Integration" button.
///
/// Returns `Ok(true)` when the backend accepted the connection (form reset),
/// `Ok(false)` when it refused it (detail kept on the form). Misuse of the
/// form (untested connection, missing fields) is an error.
#[instrument(skip(source, form), fields(name = %form.name))]
pub async fn submit_connection(
    source: &dyn IntegrationSource,
    form: &mut ConnectionForm,
    schema_name: &str,
    database_name: &str,
) -> Result<bool, DatacleanError> {
    let request = form.begin_create(schema_name, database_name)?;

    match source.create_integration(&request).await {
        Ok(()) => {
            info!("Integration created");
            form.finish_create(Ok(()));
            Ok(true)
        }
        Err(e) => {
            warn!(error = %e, "Integration creation refused");
            form.finish_create(Err(e.to_string()));
            Ok(false)
        }
    }
}
