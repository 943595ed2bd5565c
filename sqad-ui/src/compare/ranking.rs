//! Cross-project ranking of aggregated metrics
//!
//! Pure computation: given per-project metric aggregates, restrict to
//! the mutual metric intersection, mark winners and losers per metric,
//! and pick the overall winner.

use crate::compare::matching::metric_names_match;
use crate::compare::{
    round2, ComparisonReport, MetricCell, MetricRow, MetricValue, ProjectAggregate, ProjectSummary,
};

/// Build the full comparison report
///
/// The first project is the baseline: surviving metric rows use its
/// spelling and order, and per-cell differences are signed against its
/// value. With zero surviving metrics the report carries the project
/// summaries (null scores) and no winner.
pub fn build_report(aggregates: &[ProjectAggregate]) -> ComparisonReport {
    let Some(baseline) = aggregates.first() else {
        return ComparisonReport::default();
    };

    let mut rows = Vec::new();
    for metric in &baseline.metrics {
        let Some(values) = intersect_metric(metric, aggregates) else {
            continue;
        };
        rows.push(build_row(&metric.name, &values));
    }

    let projects: Vec<ProjectSummary> = aggregates
        .iter()
        .enumerate()
        .map(|(index, aggregate)| ProjectSummary {
            name: aggregate.name.clone(),
            result_count: aggregate.result_count,
            overall_score: overall_score(index, &rows),
        })
        .collect();

    let overall_winner = pick_overall_winner(&projects);

    ComparisonReport {
        projects,
        rows,
        overall_winner,
    }
}

/// Per-project values for one baseline metric, or `None` when some
/// project has no fuzzy-matching name
fn intersect_metric(metric: &MetricValue, aggregates: &[ProjectAggregate]) -> Option<Vec<f64>> {
    let mut values = Vec::with_capacity(aggregates.len());
    values.push(metric.value);

    for aggregate in &aggregates[1..] {
        values.push(find_value(&aggregate.metrics, &metric.name)?);
    }
    Some(values)
}

/// Look up a metric value by fuzzy name match
fn find_value(metrics: &[MetricValue], name: &str) -> Option<f64> {
    metrics
        .iter()
        .find(|m| metric_names_match(&m.name, name))
        .map(|m| m.value)
}

fn build_row(name: &str, values: &[f64]) -> MetricRow {
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let mean = round2(values.iter().sum::<f64>() / values.len() as f64);
    let contested = max > min;
    let baseline_value = values[0];

    let cells = values
        .iter()
        .map(|&value| MetricCell {
            value,
            baseline_diff: round2(value - baseline_value),
            winner: contested && value == max,
            loser: contested && value == min,
        })
        .collect();

    MetricRow {
        name: name.to_string(),
        cells,
        max,
        min,
        mean,
    }
}

/// Mean of one project's values over all surviving rows
fn overall_score(project_index: usize, rows: &[MetricRow]) -> Option<f64> {
    if rows.is_empty() {
        return None;
    }
    let sum: f64 = rows.iter().map(|row| row.cells[project_index].value).sum();
    Some(round2(sum / rows.len() as f64))
}

/// Index of the project with the highest overall score
///
/// Strict greater-than reduction: ties resolve to the earliest project
/// in encounter order.
fn pick_overall_winner(projects: &[ProjectSummary]) -> Option<usize> {
    let mut winner: Option<(usize, f64)> = None;
    for (index, project) in projects.iter().enumerate() {
        let Some(score) = project.overall_score else {
            continue;
        };
        match winner {
            Some((_, best)) if score > best => winner = Some((index, score)),
            None => winner = Some((index, score)),
            _ => {}
        }
    }
    winner.map(|(index, _)| index)
}
