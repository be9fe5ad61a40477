// dataclean-core/src/infrastructure/adapters/http.rs
//
// Integration API client (`GET /integration`, `POST /integration`).

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use crate::domain::catalog::SNOWFLAKE;
use crate::domain::error::non_negative;
use crate::domain::recency::parse_timestamp;
use crate::domain::{Integration, IntegrationRequest, IntegrationStatus};
use crate::error::DatacleanError;
use crate::infrastructure::config::DashboardConfig;
use crate::infrastructure::error::{CREATE_FAILED_FALLBACK, InfrastructureError};
use crate::ports::IntegrationSource;

const INTEGRATION_PATH: &str = "/integration";

/// Record as returned by the backend. Only `name` and `created_at` are relied upon.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteIntegration {
    pub name: String,
    pub created_at: String,
    #[serde(default)]
    pub records_synced: Option<i64>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

pub struct HttpIntegrationSource {
    client: Client,
    base_url: String,
}

impl HttpIntegrationSource {
    pub fn new(config: &DashboardConfig) -> Result<Self, InfrastructureError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self {
            client: builder.build()?,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self) -> String {
        format!("{}{}", self.base_url, INTEGRATION_PATH)
    }
}

#[async_trait]
impl IntegrationSource for HttpIntegrationSource {
    #[instrument(skip(self), fields(url = %self.url()))]
    async fn list_integrations(&self) -> Result<Vec<Integration>, DatacleanError> {
        let response = self
            .client
            .get(self.url())
            .send()
            .await
            .map_err(InfrastructureError::Network)?;

        let response = ensure_success(response, None).await?;
        let body = response.text().await.map_err(InfrastructureError::Network)?;
        let records: Vec<RemoteIntegration> =
            serde_json::from_str(&body).map_err(InfrastructureError::from)?;

        debug!(count = records.len(), "Fetched integrations");
        normalize(records)
    }

    #[instrument(skip(self, request), fields(name = %request.name))]
    async fn create_integration(&self, request: &IntegrationRequest) -> Result<(), DatacleanError> {
        let response = self
            .client
            .post(self.url())
            .json(request)
            .send()
            .await
            .map_err(InfrastructureError::Network)?;

        ensure_success(response, Some(CREATE_FAILED_FALLBACK)).await?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), DatacleanError> {
        let response = self
            .client
            .get(self.url())
            .send()
            .await
            .map_err(InfrastructureError::Network)?;
        ensure_success(response, None).await?;
        Ok(())
    }
}

/// Turns a non-2xx answer into `Api`, keeping the server's `detail` verbatim.
async fn ensure_success(
    response: Response,
    fallback: Option<&str>,
) -> Result<Response, InfrastructureError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let default_detail = fallback
        .map(str::to_string)
        .unwrap_or_else(|| format!("Request failed with status {}", status));
    let detail = extract_detail(&body).unwrap_or(default_detail);

    warn!(status = status.as_u16(), %detail, "Integration API returned an error");
    Err(InfrastructureError::Api {
        status: status.as_u16(),
        detail,
    })
}

/// Reads `{"detail": ...}`. Non-string details (validation lists) are kept as JSON text.
pub fn extract_detail(body: &str) -> Option<String> {
    #[derive(Deserialize)]
    struct ErrorBody {
        detail: Option<serde_json::Value>,
    }

    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail? {
        serde_json::Value::String(s) if !s.is_empty() => Some(s),
        serde_json::Value::String(_) | serde_json::Value::Null => None,
        other => Some(other.to_string()),
    }
}

/// Maps backend records onto the domain shape.
///
/// Ids are synthetic and sequential ("1", "2", ...). The backend only hosts
/// Snowflake connections and reports no health, so type and status are fixed.
pub fn normalize(records: Vec<RemoteIntegration>) -> Result<Vec<Integration>, DatacleanError> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| -> Result<Integration, DatacleanError> {
            let last_sync = parse_timestamp(&record.created_at).ok_or_else(|| {
                InfrastructureError::MalformedResponse(format!(
                    "integration '{}' has an unparseable created_at '{}'",
                    record.name, record.created_at
                ))
            })?;
            let records_synced =
                non_negative("records_synced", record.records_synced.unwrap_or(0))?;

            let integration = Integration {
                id: (index + 1).to_string(),
                name: record.name,
                source_type: SNOWFLAKE.id.to_string(),
                status: IntegrationStatus::Connected,
                last_sync,
                records_synced,
                icon: SNOWFLAKE.icon.to_string(),
            }
            .validated()?;
            Ok(integration)
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use chrono::{Duration as ChronoDuration, Utc};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn remote(name: &str, created_at: &str) -> RemoteIntegration {
        RemoteIntegration {
            name: name.into(),
            created_at: created_at.into(),
            records_synced: None,
            extra: Default::default(),
        }
    }

    /// Serves exactly one canned HTTP response and returns the request it saw.
    async fn one_shot_server(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 16 * 1024];
            let mut seen = Vec::new();
            loop {
                let n = socket.read(&mut buf).await.unwrap();
                seen.extend_from_slice(&buf[..n]);
                if n == 0 || request_complete(&seen) {
                    break;
                }
            }
            let response = format!(
                "HTTP/1.1 {}\r\ncontent-type: application/json\r\n\
                 content-length: {}\r\nconnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            String::from_utf8_lossy(&seen).to_string()
        });

        (format!("http://{}", addr), handle)
    }

    fn request_complete(raw: &[u8]) -> bool {
        let text = String::from_utf8_lossy(raw);
        let Some(split) = text.find("\r\n\r\n") else {
            return false;
        };
        let content_length = text[..split]
            .lines()
            .find_map(|l| {
                let (k, v) = l.split_once(':')?;
                k.eq_ignore_ascii_case("content-length")
                    .then(|| v.trim().parse::<usize>().ok())
                    .flatten()
            })
            .unwrap_or(0);
        raw.len() >= split + 4 + content_length
    }

    fn source_for(base_url: String) -> HttpIntegrationSource {
        HttpIntegrationSource::new(&DashboardConfig {
            api_base_url: base_url,
            timeout_secs: Some(5),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_normalize_assigns_sequential_ids_and_fixed_kind() {
        let out = normalize(vec![
            remote("Prod", "2025-12-05T14:30:00Z"),
            remote("Staging", "2025-12-04T09:00:00"),
        ])
        .unwrap();

        assert_eq!(out.len(), 2);
        assert_eq!(out[0].id, "1");
        assert_eq!(out[1].id, "2");
        assert!(out.iter().all(|i| i.source_type == "snowflake"));
        assert!(out.iter().all(|i| i.status == IntegrationStatus::Connected));
        assert!(out.iter().all(|i| i.records_synced == 0));
    }

    #[test]
    fn test_normalize_ninety_minutes_old_reads_one_hour() {
        let now = Utc::now();
        let created = (now - ChronoDuration::minutes(90)).to_rfc3339();
        let out = normalize(vec![RemoteIntegration {
            name: "Prod".into(),
            created_at: created,
            records_synced: None,
            extra: Default::default(),
        }])
        .unwrap();
        assert_eq!(out[0].last_sync_display(now), "1 hour ago");
    }

    #[test]
    fn test_normalize_rejects_bad_timestamp() {
        let err = normalize(vec![remote("Prod", "yesterday")]).unwrap_err();
        assert!(matches!(
            err,
            DatacleanError::Infrastructure(InfrastructureError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_normalize_rejects_negative_records() {
        let mut record = remote("Prod", "2025-12-05T14:30:00Z");
        record.records_synced = Some(-3);
        let err = normalize(vec![record]).unwrap_err();
        assert!(matches!(
            err,
            DatacleanError::Domain(DomainError::Validation { .. })
        ));
    }

    #[test]
    fn test_normalize_rejects_blank_name() {
        assert!(normalize(vec![remote("", "2025-12-05T14:30:00Z")]).is_err());
    }

    #[test]
    fn test_extract_detail() {
        assert_eq!(
            extract_detail(r#"{"detail":"Integration already exists"}"#).as_deref(),
            Some("Integration already exists")
        );
        assert_eq!(extract_detail(r#"{"error":"x"}"#), None);
        assert_eq!(extract_detail("<html>502</html>"), None);
        assert!(extract_detail(r#"{"detail":[{"loc":["body","name"]}]}"#).unwrap().contains("loc"));
    }

    #[tokio::test]
    async fn test_list_integrations_over_http() {
        let (base, server) = one_shot_server(
            "200 OK",
            r#"[{"name":"Prod","created_at":"2025-12-05T14:30:00Z","id":42,"account":"xy"}]"#,
        )
        .await;

        let integrations = source_for(base).list_integrations().await.unwrap();
        let request = server.await.unwrap();

        assert!(request.starts_with("GET /integration "));
        assert_eq!(integrations.len(), 1);
        assert_eq!(integrations[0].name, "Prod");
        assert_eq!(integrations[0].id, "1");
    }

    #[tokio::test]
    async fn test_list_integrations_non_2xx_is_an_error() {
        let (base, _server) =
            one_shot_server("503 Service Unavailable", r#"{"detail":"down"}"#).await;

        let err = source_for(base).list_integrations().await.unwrap_err();
        assert!(matches!(
            err,
            DatacleanError::Infrastructure(InfrastructureError::Api { status: 503, ref detail })
                if detail == "down"
        ));
    }

    #[tokio::test]
    async fn test_list_integrations_schema_mismatch_is_malformed() {
        let (base, _server) = one_shot_server("200 OK", r#"{"items":[]}"#).await;

        let err = source_for(base).list_integrations().await.unwrap_err();
        assert!(matches!(
            err,
            DatacleanError::Infrastructure(InfrastructureError::MalformedResponse(_))
        ));
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = source_for(format!("http://{}", addr))
            .list_integrations()
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DatacleanError::Infrastructure(InfrastructureError::Network(_))
        ));
    }

    #[tokio::test]
    async fn test_create_integration_posts_payload() {
        let (base, server) = one_shot_server("201 Created", r#"{"id":7}"#).await;

        let request = IntegrationRequest {
            name: "Prod".into(),
            account: "xy12345".into(),
            warehouse: "COMPUTE_WH".into(),
            username: "svc".into(),
            password: "secret".into(),
            schema_name: "hackathon".into(),
            database_name: "hackathon".into(),
        };
        source_for(base).create_integration(&request).await.unwrap();

        let seen = server.await.unwrap();
        assert!(seen.starts_with("POST /integration "));
        assert!(seen.contains(r#""schema_name":"hackathon""#));
        assert!(seen.contains(r#""warehouse":"COMPUTE_WH""#));
    }

    #[tokio::test]
    async fn test_create_integration_failure_surfaces_detail() {
        let (base, _server) =
            one_shot_server("400 Bad Request", r#"{"detail":"Invalid Snowflake account"}"#).await;

        let request = IntegrationRequest {
            name: "Prod".into(),
            account: "bad".into(),
            warehouse: String::new(),
            username: "svc".into(),
            password: "secret".into(),
            schema_name: "hackathon".into(),
            database_name: "hackathon".into(),
        };
        let err = source_for(base).create_integration(&request).await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid Snowflake account");
    }

    #[tokio::test]
    async fn test_create_integration_failure_without_detail_uses_fallback() {
        let (base, _server) = one_shot_server("500 Internal Server Error", "oops").await;

        let request = IntegrationRequest {
            name: "Prod".into(),
            account: "acc".into(),
            warehouse: String::new(),
            username: "svc".into(),
            password: "secret".into(),
            schema_name: "hackathon".into(),
            database_name: "hackathon".into(),
        };
        let err = source_for(base).create_integration(&request).await.unwrap_err();
        assert_eq!(err.to_string(), CREATE_FAILED_FALLBACK);
    }
}
