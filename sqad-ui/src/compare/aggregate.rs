//! Metric aggregation across a project's result sets
//!
//! Two steps, both against the evaluation backend:
//! 1. [`common_metric_names`] — the metric names shared by every result
//!    in the list, computed as pairwise intersections against the
//!    baseline (first) result.
//! 2. [`aggregate_metric_values`] — one averaged value per common
//!    metric, pooling the per-result pairwise averages.
//!
//! A failed backend sub-request drops that data point with a warning;
//! there is no retry.

use futures::future;
use tracing::warn;
use uuid::Uuid;

use crate::backend::BackendClient;
use crate::compare::matching::metric_names_match;
use crate::compare::{round2, MetricValue};

/// Metric names present in all listed results
///
/// The first result is the baseline: all pairwise queries run baseline
/// vs other, and the surviving names keep the baseline's spelling. A
/// single-result list pairs the result with itself, yielding its own
/// metric names.
pub async fn common_metric_names(client: &BackendClient, results: &[Uuid]) -> Vec<String> {
    let Some(&baseline) = results.first() else {
        return Vec::new();
    };

    if results.len() == 1 {
        return fetch_pair(client, baseline, baseline).await;
    }

    let working = fetch_pair(client, baseline, results[1]).await;
    if results.len() == 2 || working.is_empty() {
        return working;
    }

    // Remaining pairwise fetches are independent of each other; issue
    // them concurrently, then narrow in list order.
    let fetches = results[2..]
        .iter()
        .map(|&other| fetch_pair(client, baseline, other));
    let pairwise_sets = future::join_all(fetches).await;

    narrow_by_pairwise(working, &pairwise_sets)
}

/// Narrow a working metric set by successive pairwise sets
///
/// A name survives a round only if it fuzzy-matches some name in that
/// round's pairwise set.
fn narrow_by_pairwise(mut working: Vec<String>, pairwise_sets: &[Vec<String>]) -> Vec<String> {
    for names in pairwise_sets {
        working.retain(|kept| names.iter().any(|name| metric_names_match(kept, name)));
        if working.is_empty() {
            break;
        }
    }
    working
}

async fn fetch_pair(client: &BackendClient, result_a: Uuid, result_b: Uuid) -> Vec<String> {
    match client.common_metrics(result_a, result_b).await {
        Ok(names) => names,
        Err(e) => {
            warn!(
                "Common-metrics query failed for {} vs {}: {}",
                result_a, result_b, e
            );
            Vec::new()
        }
    }
}

/// One averaged value per common metric across all listed results
///
/// Per metric: request the pairwise average of (baseline, other) for
/// each non-baseline result, taking side B; side A of the first
/// response supplies the baseline's own value. Missing, NaN, and
/// infinite values are discarded; a metric with no valid values left
/// is omitted entirely.
pub async fn aggregate_metric_values(
    client: &BackendClient,
    results: &[Uuid],
    metric_names: &[String],
) -> Vec<MetricValue> {
    let Some(&baseline) = results.first() else {
        return Vec::new();
    };

    // Per-metric batches are independent; run them concurrently and
    // keep the common-metric order in the output.
    let batches = metric_names.iter().map(|name| async move {
        let samples = collect_samples(client, baseline, results, name).await;
        mean_of_valid(&samples).map(|value| MetricValue {
            name: name.clone(),
            value,
        })
    });

    future::join_all(batches)
        .await
        .into_iter()
        .flatten()
        .collect()
}

/// Raw per-result values for one metric, in result-list order
///
/// A failed request contributes `None` for its slot(s).
async fn collect_samples(
    client: &BackendClient,
    baseline: Uuid,
    results: &[Uuid],
    metric_name: &str,
) -> Vec<Option<f64>> {
    if results.len() == 1 {
        // Self-pair: side A is the result's own average
        return match client.average_metrics(baseline, baseline, metric_name).await {
            Ok(response) => vec![response.metrics.first().and_then(|m| m.avg_a)],
            Err(e) => {
                warn!("Average query failed for {} ({}): {}", baseline, metric_name, e);
                vec![None]
            }
        };
    }

    let fetches = results[1..]
        .iter()
        .map(|&other| client.average_metrics(baseline, other, metric_name));
    let responses = future::join_all(fetches).await;

    let mut samples = Vec::with_capacity(results.len());
    for (index, response) in responses.into_iter().enumerate() {
        match response {
            Ok(body) => {
                let pair = body.metrics.first();
                if index == 0 {
                    // Baseline side comes from the first response only
                    samples.push(pair.and_then(|m| m.avg_a));
                }
                samples.push(pair.and_then(|m| m.avg_b));
            }
            Err(e) => {
                warn!(
                    "Average query failed for {} vs {} ({}): {}",
                    baseline, results[index + 1], metric_name, e
                );
                if index == 0 {
                    samples.push(None);
                }
                samples.push(None);
            }
        }
    }
    samples
}

/// Arithmetic mean of the valid samples, rounded to two decimals
///
/// Returns `None` when no valid sample remains.
fn mean_of_valid(samples: &[Option<f64>]) -> Option<f64> {
    let valid: Vec<f64> = samples
        .iter()
        .filter_map(|s| *s)
        .filter(|v| v.is_finite())
        .collect();

    if valid.is_empty() {
        return None;
    }
    Some(round2(valid.iter().sum::<f64>() / valid.len() as f64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_discards_invalid_samples() {
        let samples = vec![
            Some(4.0),
            None,
            Some(f64::NAN),
            Some(f64::INFINITY),
            Some(3.0),
        ];
        assert_eq!(mean_of_valid(&samples), Some(3.5));
    }

    #[test]
    fn test_mean_rounds_to_two_decimals() {
        let samples = vec![Some(1.0), Some(2.0), Some(2.0)];
        // 5/3 = 1.666... -> 1.67
        assert_eq!(mean_of_valid(&samples), Some(1.67));
    }

    #[test]
    fn test_mean_of_no_valid_samples_is_none() {
        assert_eq!(mean_of_valid(&[None, Some(f64::NAN)]), None);
        assert_eq!(mean_of_valid(&[]), None);
    }

    #[test]
    fn test_narrowing_keeps_only_shared_names() {
        // Results 0-1 share {Quality, Noise Suppression}; results 0-2
        // share only {Quality}.
        let working = vec!["Quality".to_string(), "Noise Suppression".to_string()];
        let pairwise = vec![vec!["quality".to_string()]];

        let narrowed = narrow_by_pairwise(working, &pairwise);
        assert_eq!(narrowed, vec!["Quality".to_string()]);
    }

    #[test]
    fn test_narrowing_uses_fuzzy_matching() {
        let working = vec!["Mean Opinion Score".to_string()];
        let pairwise = vec![vec!["MOS".to_string()]];

        let narrowed = narrow_by_pairwise(working, &pairwise);
        assert_eq!(narrowed.len(), 1);
    }

    #[test]
    fn test_narrowing_to_empty_short_circuits() {
        let working = vec!["Quality".to_string()];
        let pairwise = vec![vec![], vec!["Quality".to_string()]];

        assert!(narrow_by_pairwise(working, &pairwise).is_empty());
    }
}
