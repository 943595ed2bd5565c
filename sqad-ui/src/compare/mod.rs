//! Comparison engine
//!
//! Expands dashboard selections into concrete result lists, aggregates
//! each project's metrics against the evaluation backend, and ranks
//! the projects into a presentation-ready report.

pub mod aggregate;
pub mod matching;
pub mod ranking;

use futures::future;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use sqad_common::api::types::{ProjectDetail, ResultKind};
use sqad_common::Result;

use crate::backend::BackendClient;

/// One project entry in a comparison request
///
/// `version_id`/`result_id` of `None` mean "all versions" / "all
/// results"; expansion happens server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    pub project_id: Uuid,
    #[serde(default)]
    pub version_id: Option<Uuid>,
    #[serde(default)]
    pub result_id: Option<Uuid>,
    pub kind: ResultKind,
}

/// A named metric value on the 0-5 dashboard scale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricValue {
    pub name: String,
    pub value: f64,
}

/// One project's aggregated metrics, before cross-project ranking
#[derive(Debug, Clone)]
pub struct ProjectAggregate {
    pub name: String,
    pub result_count: usize,
    /// Aggregated values in common-metric order
    pub metrics: Vec<MetricValue>,
}

/// One project column in the report header
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub name: String,
    pub result_count: usize,
    /// Mean over the surviving metric rows; absent when no row survived
    pub overall_score: Option<f64>,
}

/// One project's entry in a metric row
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricCell {
    pub value: f64,
    /// Signed difference against the baseline project's value
    pub baseline_diff: f64,
    pub winner: bool,
    pub loser: bool,
}

/// One common metric across all compared projects
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricRow {
    pub name: String,
    pub cells: Vec<MetricCell>,
    pub max: f64,
    pub min: f64,
    pub mean: f64,
}

/// Full comparison result for the dashboard table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonReport {
    pub projects: Vec<ProjectSummary>,
    pub rows: Vec<MetricRow>,
    /// Index into `projects` of the highest overall score
    pub overall_winner: Option<usize>,
}

/// Round to two decimal places, the dashboard's display precision
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Run a full comparison over the given selections
///
/// A project-detail fetch failure aborts the whole comparison; a
/// selection that expands to zero results is dropped with a warning
/// and the remaining projects are still compared.
pub async fn run_comparison(
    client: &BackendClient,
    selections: &[Selection],
) -> Result<ComparisonReport> {
    let mut aggregates = Vec::with_capacity(selections.len());

    for selection in selections {
        let detail = client.project_detail(selection.project_id).await?;
        let result_ids = expand_selection(client, &detail, selection).await;

        if result_ids.is_empty() {
            warn!(
                "Project '{}' expanded to no {} results, dropping from comparison",
                detail.name, selection.kind
            );
            continue;
        }

        debug!(
            "Aggregating {} result(s) for project '{}'",
            result_ids.len(),
            detail.name
        );

        let metric_names = aggregate::common_metric_names(client, &result_ids).await;
        let metrics = aggregate::aggregate_metric_values(client, &result_ids, &metric_names).await;

        aggregates.push(ProjectAggregate {
            name: detail.name,
            result_count: result_ids.len(),
            metrics,
        });
    }

    Ok(ranking::build_report(&aggregates))
}

/// Expand a selection into its concrete result-id list
///
/// An explicit result id short-circuits; otherwise every selected
/// version's result list is fetched (concurrently across versions) and
/// flattened in version order. A failed result-list fetch logs a
/// warning and contributes nothing.
async fn expand_selection(
    client: &BackendClient,
    detail: &ProjectDetail,
    selection: &Selection,
) -> Vec<Uuid> {
    if let Some(result_id) = selection.result_id {
        return vec![result_id];
    }

    let version_ids: Vec<Uuid> = match selection.version_id {
        Some(version_id) => vec![version_id],
        None => detail.versions.iter().map(|v| v.id).collect(),
    };

    let kind = selection.kind;
    let fetches = version_ids.into_iter().map(|version_id| async move {
        match client.version_results(version_id, kind).await {
            Ok(results) => results,
            Err(e) => {
                warn!(
                    "Failed to fetch {} results for version {}: {}",
                    kind, version_id, e
                );
                Vec::new()
            }
        }
    });

    future::join_all(fetches)
        .await
        .into_iter()
        .flatten()
        .map(|result| result.id)
        .collect()
}
