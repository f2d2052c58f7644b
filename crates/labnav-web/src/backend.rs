//! Client for the retrieval backend the dashboards sit in front of.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use labnav_common::error::Result;
use labnav_common::DocType;
use labnav_config::BackendConfig;

const HEALTH_PATH: &str = "/api/health/";
const QUERY_PATH: &str = "/api/query/";

/// Body forwarded to the backend's query endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_type: Option<DocType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_cache: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct BackendClient {
    http: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn health(&self) -> Result<Value> {
        let url = self.endpoint(HEALTH_PATH);
        tracing::debug!(%url, "Checking backend health");
        let body = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;
        Ok(body)
    }

    pub async fn query(&self, request: &QueryRequest) -> Result<Value> {
        let url = self.endpoint(QUERY_PATH);
        tracing::info!(
            doc_type = request.doc_type.as_ref().map(DocType::as_str).unwrap_or(DocType::ALL),
            "Forwarding query to backend"
        );
        let body = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;
        Ok(body)
    }
}
