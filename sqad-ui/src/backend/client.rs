//! Evaluation backend API client
//!
//! Typed wrapper over the backend's REST endpoints. All dashboard data
//! flows through this client; nothing is cached or persisted locally.

use std::time::Duration;

use sqad_common::api::types::{
    AverageMetricsRequest, AverageMetricsResponse, CommonMetricsRequest, CommonMetricsResponse,
    CreateProjectRequest, CreateVersionRequest, ErrorBody, EvalResult, Project, ProjectDetail,
    ResultKind, Version,
};
use sqad_common::config::DashboardConfig;
use sqad_common::{Error, Result};
use uuid::Uuid;

const USER_AGENT: &str = concat!("SQAD/", env!("CARGO_PKG_VERSION"));

/// Client for the external SQA evaluation backend
#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Build a client from resolved configuration
    pub fn new(config: &DashboardConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| Error::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.backend_url.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET /api/projects
    pub async fn list_projects(&self) -> Result<Vec<Project>> {
        let response = self
            .http
            .get(self.url("/api/projects"))
            .send()
            .await
            .map_err(network_error)?;
        decode_json(expect_success(response).await?).await
    }

    /// GET /api/projects/:id
    pub async fn project_detail(&self, project_id: Uuid) -> Result<ProjectDetail> {
        let response = self
            .http
            .get(self.url(&format!("/api/projects/{}", project_id)))
            .send()
            .await
            .map_err(network_error)?;
        decode_json(expect_success(response).await?).await
    }

    /// GET /api/subjective/:versionId or /api/objective/:versionId
    pub async fn version_results(
        &self,
        version_id: Uuid,
        kind: ResultKind,
    ) -> Result<Vec<EvalResult>> {
        let response = self
            .http
            .get(self.url(&format!("/api/{}/{}", kind.as_path(), version_id)))
            .send()
            .await
            .map_err(network_error)?;
        decode_json(expect_success(response).await?).await
    }

    /// POST /api/sqa-results/common-metrics
    ///
    /// Metric names present in both results. A result paired with itself
    /// yields its own metric names.
    pub async fn common_metrics(&self, result_a: Uuid, result_b: Uuid) -> Result<Vec<String>> {
        let request = CommonMetricsRequest {
            result_id_a: result_a,
            result_id_b: result_b,
        };
        let response = self
            .http
            .post(self.url("/api/sqa-results/common-metrics"))
            .json(&request)
            .send()
            .await
            .map_err(network_error)?;
        let body: CommonMetricsResponse = decode_json(expect_success(response).await?).await?;
        Ok(body.metrics)
    }

    /// POST /api/sqa-results/average-metrics
    ///
    /// Pairwise averages of one metric: side A belongs to `result_a`,
    /// side B to `result_b`.
    pub async fn average_metrics(
        &self,
        result_a: Uuid,
        result_b: Uuid,
        metric_name: &str,
    ) -> Result<AverageMetricsResponse> {
        let request = AverageMetricsRequest {
            result_id_a: result_a,
            result_id_b: result_b,
            metric_name: metric_name.to_string(),
        };
        let response = self
            .http
            .post(self.url("/api/sqa-results/average-metrics"))
            .json(&request)
            .send()
            .await
            .map_err(network_error)?;
        decode_json(expect_success(response).await?).await
    }

    /// POST /api/projects
    pub async fn create_project(&self, request: &CreateProjectRequest) -> Result<Project> {
        let response = self
            .http
            .post(self.url("/api/projects"))
            .json(request)
            .send()
            .await
            .map_err(network_error)?;
        decode_json(expect_success(response).await?).await
    }

    /// POST /api/versions
    pub async fn create_version(&self, request: &CreateVersionRequest) -> Result<Version> {
        let response = self
            .http
            .post(self.url("/api/versions"))
            .json(request)
            .send()
            .await
            .map_err(network_error)?;
        decode_json(expect_success(response).await?).await
    }

    /// DELETE /api/projects/:id with bearer token
    pub async fn delete_project(&self, project_id: Uuid, admin_token: &str) -> Result<()> {
        let response = self
            .http
            .delete(self.url(&format!("/api/projects/{}", project_id)))
            .bearer_auth(admin_token)
            .send()
            .await
            .map_err(network_error)?;
        expect_success(response).await?;
        Ok(())
    }
}

fn network_error(err: reqwest::Error) -> Error {
    Error::Network(err.to_string())
}

/// Turn a non-success response into a typed error
///
/// Best-effort message extraction: the backend varies between
/// `{"message": ...}` and `{"error": ...}` bodies; fall back to the
/// status line when neither parses.
async fn expect_success(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body: ErrorBody = response.json().await.unwrap_or_default();
    let message = body
        .message()
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed"))
        .to_string();

    Err(Error::BackendStatus {
        status: status.as_u16(),
        message,
    })
}

async fn decode_json<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    response
        .json()
        .await
        .map_err(|e| Error::Decode(e.to_string()))
}
