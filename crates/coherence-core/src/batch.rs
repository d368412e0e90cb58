//! Batch evaluation: run many independent entity pairs through one evaluator
//! and summarize the outcome.
//!
//! Every pair is evaluated on its own. Nothing is shared between requests
//! except the evaluator's configuration, so results are identical to calling
//! [`Evaluator::evaluate`] in a loop; the batch adds ordering guarantees and
//! an aggregate summary.

use serde::Serialize;

use crate::error::{EvaluationError, Result};
use crate::evaluator::{Classification, EvaluationResult, Evaluator};
use crate::params::{CouplingParameters, EntityParameters};

/// A single pair in a batch.
#[derive(Debug, Clone, PartialEq)]
pub struct PairRequest {
    /// Caller-provided label, carried through to the result.
    pub label: String,
    pub entity_a: EntityParameters,
    pub entity_b: EntityParameters,
    pub coupling: CouplingParameters,
}

impl PairRequest {
    pub fn new(
        label: impl Into<String>,
        entity_a: EntityParameters,
        entity_b: EntityParameters,
        coupling: CouplingParameters,
    ) -> Self {
        Self {
            label: label.into(),
            entity_a,
            entity_b,
            coupling,
        }
    }
}

/// Result for a single pair within a batch.
#[derive(Debug)]
pub struct PairOutcome {
    pub label: String,
    pub result: Result<EvaluationResult>,
}

/// Aggregate over the accepted pairs of a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct BatchSummary {
    pub evaluated: usize,
    pub rejected: usize,
    pub high_coherence: usize,
    pub high_friction: usize,
    /// Mean composite score over evaluated pairs; 0 when none were evaluated.
    pub mean_composite: f64,
    /// Highest composite score over evaluated pairs; 0 when none were evaluated.
    pub max_composite: f64,
}

#[derive(Debug)]
pub struct BatchReport {
    /// One outcome per request, in request order.
    pub outcomes: Vec<PairOutcome>,
    pub summary: BatchSummary,
}

impl BatchReport {
    /// Accepted results, in request order.
    pub fn results(&self) -> impl Iterator<Item = (&str, &EvaluationResult)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok().map(|r| (o.label.as_str(), r)))
    }

    /// Rejected requests with their errors, in request order.
    pub fn errors(&self) -> impl Iterator<Item = (&str, &EvaluationError)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o.label.as_str(), e)))
    }
}

/// Evaluate every request with `evaluator`. Rejections (strict mode only) are
/// reported per request and do not stop the batch.
pub fn evaluate_batch(evaluator: &Evaluator, requests: &[PairRequest]) -> BatchReport {
    if requests.is_empty() {
        return BatchReport {
            outcomes: Vec::new(),
            summary: BatchSummary::default(),
        };
    }

    let outcomes: Vec<PairOutcome> = requests
        .iter()
        .map(|req| PairOutcome {
            label: req.label.clone(),
            result: evaluator.evaluate(req.entity_a, req.entity_b, req.coupling),
        })
        .collect();

    let summary = summarize(&outcomes);
    BatchReport { outcomes, summary }
}

fn summarize(outcomes: &[PairOutcome]) -> BatchSummary {
    let mut summary = BatchSummary::default();
    let mut composite_total = 0.0;
    let mut max_composite: Option<f64> = None;

    for outcome in outcomes {
        let Ok(result) = &outcome.result else {
            summary.rejected += 1;
            continue;
        };
        summary.evaluated += 1;
        match result.classification {
            Classification::HighCoherence => summary.high_coherence += 1,
            Classification::HighFriction => summary.high_friction += 1,
        }
        composite_total += result.composite_score;
        max_composite = Some(match max_composite {
            Some(m) => m.max(result.composite_score),
            None => result.composite_score,
        });
    }

    if summary.evaluated > 0 {
        summary.mean_composite = composite_total / summary.evaluated as f64;
    }
    summary.max_composite = max_composite.unwrap_or(0.0);
    summary
}
