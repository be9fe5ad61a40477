// dataclean-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

pub const CREATE_FAILED_FALLBACK: &str = "Failed to create integration";

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- NETWORK ---
    #[error("Network Error: {0}")]
    #[diagnostic(
        code(dataclean::infra::network),
        help("Is the integration API running and reachable at the configured URL?")
    )]
    Network(#[from] reqwest::Error),

    #[error("Malformed response: {0}")]
    #[diagnostic(
        code(dataclean::infra::malformed_response),
        help("The API answered, but not with the expected JSON shape.")
    )]
    MalformedResponse(String),

    /// Non-2xx answer. `detail` is the server's message, shown verbatim.
    #[error("{detail}")]
    #[diagnostic(code(dataclean::infra::api))]
    Api { status: u16, detail: String },

    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(dataclean::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(dataclean::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    YamlError(#[from] serde_yaml::Error),

    #[error("Configuration Error: {0}")]
    #[diagnostic(code(dataclean::infra::config))]
    ConfigError(String),

    #[error("Configuration not found at '{0}'")]
    #[diagnostic(code(dataclean::infra::config_missing))]
    ConfigNotFound(String),
}

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        InfrastructureError::MalformedResponse(err.to_string())
    }
}
