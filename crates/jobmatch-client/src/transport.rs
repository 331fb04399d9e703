//! HTTP seam to the analysis service. All remote calls go through
//! [`AnalysisTransport`] so the orchestrator can run against a mock.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::assembler::FormPayload;
use crate::config::Config;
use crate::errors::AppError;

const ANALYSE_PATH: &str = "/analyse";
const REQUEST_TIMEOUT_SECS: u64 = 120;

/// Raw outcome of a completed HTTP exchange. Status interpretation is the
/// orchestrator's job; the transport only distinguishes "got a response"
/// from "could not complete the exchange".
#[derive(Debug, Clone)]
pub struct ServiceResponse {
    pub status: u16,
    pub body: String,
}

impl ServiceResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait AnalysisTransport: Send + Sync {
    async fn submit(&self, payload: FormPayload) -> Result<ServiceResponse, AppError>;
}

/// Production transport: `POST {base_url}/analyse` with a multi-part body.
#[derive(Debug, Clone)]
pub struct HttpAnalysisClient {
    client: Client,
    base_url: String,
}

impl HttpAnalysisClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.base_url.clone())
    }
}

#[async_trait]
impl AnalysisTransport for HttpAnalysisClient {
    async fn submit(&self, payload: FormPayload) -> Result<ServiceResponse, AppError> {
        let url = format!("{}{}", self.base_url.trim_end_matches('/'), ANALYSE_PATH);
        let started = std::time::Instant::now();

        let response = self
            .client
            .post(&url)
            .multipart(payload.into_form())
            .send()
            .await
            .map_err(|e| AppError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::Transport(e.to_string()))?;

        debug!(
            "analysis call returned {} in {}ms",
            status,
            started.elapsed().as_millis()
        );

        Ok(ServiceResponse { status, body })
    }
}
