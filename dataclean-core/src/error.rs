// dataclean-core/src/error.rs

use crate::domain::error::DomainError;
use crate::infrastructure::error::InfrastructureError;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DatacleanError {
    // --- DOMAIN ERRORS (validation, navigation) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Domain(#[from] DomainError),

    // --- INFRASTRUCTURE ERRORS (network, config) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Infrastructure(#[from] InfrastructureError),

    #[error("Internal Error: {0}")]
    InternalError(String),
}

impl From<std::io::Error> for DatacleanError {
    fn from(err: std::io::Error) -> Self {
        DatacleanError::Infrastructure(InfrastructureError::Io(err))
    }
}

impl From<reqwest::Error> for DatacleanError {
    fn from(err: reqwest::Error) -> Self {
        DatacleanError::Infrastructure(InfrastructureError::Network(err))
    }
}
