//! Shared API request/response types
//!
//! Wire model shared between the dashboard service and the evaluation
//! backend. Field names serialize in camelCase to match the backend's
//! JSON conventions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ========================================
// Domain Entities
// ========================================

/// A top-level audio-model grouping containing versions
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Project detail including its versions (`GET /api/projects/:id`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetail {
    pub id: Uuid,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub versions: Vec<Version>,
}

/// A named iteration of a project containing evaluation results
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Version {
    pub id: Uuid,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub project_id: Uuid,
}

/// Which backend collection a version's results come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    Subjective,
    Objective,
}

impl ResultKind {
    /// Backend URL path segment for this kind
    pub fn as_path(&self) -> &'static str {
        match self {
            ResultKind::Subjective => "subjective",
            ResultKind::Objective => "objective",
        }
    }
}

impl std::fmt::Display for ResultKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_path())
    }
}

/// A single evaluation run's metric set
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvalResult {
    pub id: Uuid,
    pub name: String,
    pub version_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ResultKind>,
    /// Originating spreadsheet, when the result was imported from one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_sheet: Option<String>,
}

// ========================================
// Metric Computation Requests
// ========================================

/// `POST /api/sqa-results/common-metrics` request body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommonMetricsRequest {
    pub result_id_a: Uuid,
    pub result_id_b: Uuid,
}

/// `POST /api/sqa-results/common-metrics` response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommonMetricsResponse {
    #[serde(default)]
    pub metrics: Vec<String>,
}

/// `POST /api/sqa-results/average-metrics` request body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AverageMetricsRequest {
    pub result_id_a: Uuid,
    pub result_id_b: Uuid,
    pub metric_name: String,
}

/// One pairwise average: side A is `result_id_a`, side B is `result_id_b`
///
/// Either side may be absent when the backend has no value for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricAverages {
    #[serde(default)]
    pub avg_a: Option<f64>,
    #[serde(default)]
    pub avg_b: Option<f64>,
}

/// `POST /api/sqa-results/average-metrics` response body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AverageMetricsResponse {
    #[serde(default)]
    pub metrics: Vec<MetricAverages>,
}

// ========================================
// Create Requests
// ========================================

/// `POST /api/projects` request body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// `POST /api/versions` request body
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVersionRequest {
    pub project_id: Uuid,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// ========================================
// Error Response Types
// ========================================

/// Best-effort error body shape returned by the backend
///
/// Backends vary between `{"message": ...}` and `{"error": ...}`;
/// both are accepted and either may carry the human-readable text.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// The most descriptive message available
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref().or(self.error.as_deref())
    }
}

// ========================================
// Tests
// ========================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_metrics_request_wire_names() {
        let request = CommonMetricsRequest {
            result_id_a: Uuid::nil(),
            result_id_b: Uuid::nil(),
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("resultIdA"));
        assert!(json.contains("resultIdB"));
    }

    #[test]
    fn test_average_metrics_response_partial_sides() {
        let json = r#"{"metrics": [{"avgA": 4.2}, {"avgB": 3.0}, {}]}"#;
        let response: AverageMetricsResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.metrics.len(), 3);
        assert_eq!(response.metrics[0].avg_a, Some(4.2));
        assert_eq!(response.metrics[0].avg_b, None);
        assert_eq!(response.metrics[1].avg_b, Some(3.0));
        assert!(response.metrics[2].avg_a.is_none());
    }

    #[test]
    fn test_result_kind_paths() {
        assert_eq!(ResultKind::Subjective.as_path(), "subjective");
        assert_eq!(ResultKind::Objective.as_path(), "objective");

        let kind: ResultKind = serde_json::from_str("\"objective\"").unwrap();
        assert_eq!(kind, ResultKind::Objective);
    }

    #[test]
    fn test_eval_result_deserialization() {
        let json = r#"{
            "id": "8f14e45f-ceea-467f-a0e6-8a39e1f5a1c2",
            "name": "MOS listening test",
            "versionId": "6ba7b810-9dad-11d1-80b4-00c04fd430c8",
            "sourceSheet": "batch-7.xlsx"
        }"#;
        let result: EvalResult = serde_json::from_str(json).unwrap();

        assert_eq!(result.name, "MOS listening test");
        assert_eq!(result.source_sheet.as_deref(), Some("batch-7.xlsx"));
        assert!(result.kind.is_none());
    }

    #[test]
    fn test_error_body_message_preference() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"error": "NOT_FOUND", "message": "No such project"}"#).unwrap();
        assert_eq!(body.message(), Some("No such project"));

        let body: ErrorBody = serde_json::from_str(r#"{"error": "boom"}"#).unwrap();
        assert_eq!(body.message(), Some("boom"));
    }
}
