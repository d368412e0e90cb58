//! Pairwise formula evaluator.
//!
//! Maps two entities (magnitude + angle) and a friction term onto a
//! synchronization coefficient, a total output, a composite score and a
//! two-valued classification:
//!
//! ```text
//! phaseAlignment = |vA + vB| / (mA + mB + ε)
//! syncFactor     = phaseAlignment · exp(-α · friction)
//! totalOutput    = (mA·cos θA + mB·cos θB) · syncFactor
//! symmetry       = 1 - |mA - mB| / (mA + mB + ε)
//! alignment      = (1 + cos(θA - θB)) / 2
//! compositeScore = syncFactor · symmetry · alignment
//! ```
//!
//! The evaluation is a pure function of its inputs. No ratio is clamped:
//! for non-negative magnitudes the triangle inequality keeps
//! `phaseAlignment` in [0, 1] on its own.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{ALPHA, EPSILON, MAX_DISPLAY_PRECISION, THRESHOLD};
use crate::error::{EvaluationError, Result};
use crate::params::{CouplingParameters, DomainIssue, EntityParameters};

/// How the evaluator treats inputs outside the nominal domain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Validation {
    /// Every real input is evaluated through the same formulas.
    #[default]
    Permissive,
    /// Reject negative magnitudes, friction outside [0, 1] and non-finite values.
    Strict,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluatorConfig {
    /// Friction sensitivity in the exponential decay.
    pub alpha: f64,
    /// Inclusive lower bound of the high-coherence label.
    pub threshold: f64,
    pub validation: Validation,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            alpha: ALPHA,
            threshold: THRESHOLD,
            validation: Validation::Permissive,
        }
    }
}

/// Categorical label derived from thresholding the composite score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Classification {
    HighCoherence,
    HighFriction,
}

impl Classification {
    /// `score >= threshold` is high coherence; the bound is inclusive.
    pub fn from_score(score: f64, threshold: f64) -> Self {
        if score >= threshold {
            Classification::HighCoherence
        } else {
            Classification::HighFriction
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Classification::HighCoherence => "high-coherence",
            Classification::HighFriction => "high-friction",
        }
    }

    /// Narrative name used by the source material.
    pub fn source_label(self) -> &'static str {
        match self {
            Classification::HighCoherence => "Soul-Love / Flow",
            Classification::HighFriction => "Ego-Love / Friction",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Intermediate terms of one evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Components {
    pub phase_alignment: f64,
    /// exp(-alpha * friction)
    pub decay: f64,
    pub symmetry: f64,
    pub alignment: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    pub sync_factor: f64,
    pub total_output: f64,
    pub composite_score: f64,
    pub classification: Classification,
    pub components: Components,
}

impl EvaluationResult {
    /// Presentation copy with every numeric field rounded to `places` decimals.
    /// The classification is carried over from the full-precision score.
    pub fn rounded(&self, places: u32) -> Self {
        let r = |x: f64| round_to(x, places);
        Self {
            sync_factor: r(self.sync_factor),
            total_output: r(self.total_output),
            composite_score: r(self.composite_score),
            classification: self.classification,
            components: Components {
                phase_alignment: r(self.components.phase_alignment),
                decay: r(self.components.decay),
                symmetry: r(self.components.symmetry),
                alignment: r(self.components.alignment),
            },
        }
    }
}

/// Round half away from zero to `places` decimals. Negative zero comes back
/// as zero. Beyond [`MAX_DISPLAY_PRECISION`] the value is returned unrounded.
pub fn round_to(x: f64, places: u32) -> f64 {
    let exponent = match i32::try_from(places) {
        Ok(p) if places <= MAX_DISPLAY_PRECISION => p,
        _ => return x + 0.0,
    };
    let scale = 10f64.powi(exponent);
    (x * scale).round() / scale + 0.0
}

/// Evaluator bound to a configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct Evaluator {
    config: EvaluatorConfig,
}

impl Evaluator {
    pub fn new(config: EvaluatorConfig) -> Result<Self> {
        if !config.alpha.is_finite() {
            return Err(EvaluationError::InvalidConfig(format!(
                "alpha must be finite, got {}",
                config.alpha
            )));
        }
        if !config.threshold.is_finite() {
            return Err(EvaluationError::InvalidConfig(format!(
                "threshold must be finite, got {}",
                config.threshold
            )));
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Evaluate one entity pair. Only fails under [`Validation::Strict`].
    pub fn evaluate(
        &self,
        entity_a: EntityParameters,
        entity_b: EntityParameters,
        coupling: CouplingParameters,
    ) -> Result<EvaluationResult> {
        if self.config.validation == Validation::Strict {
            validate_strict(&entity_a, &entity_b, &coupling)?;
        }
        Ok(compute(&self.config, entity_a, entity_b, coupling))
    }
}

/// Evaluate with the default constants (alpha 0.5, threshold 0.67).
/// Accepts any real input and always returns a result.
pub fn evaluate(
    entity_a: EntityParameters,
    entity_b: EntityParameters,
    coupling: CouplingParameters,
) -> EvaluationResult {
    compute(&EvaluatorConfig::default(), entity_a, entity_b, coupling)
}

fn validate_strict(
    entity_a: &EntityParameters,
    entity_b: &EntityParameters,
    coupling: &CouplingParameters,
) -> Result<()> {
    let rejected = entity_a
        .domain_issues()
        .into_iter()
        .chain(entity_b.domain_issues())
        .chain(coupling.domain_issues())
        // Magnitudes above 10 are still well defined.
        .find(|issue| !matches!(issue, DomainIssue::MagnitudeAboveRange(_)));
    match rejected {
        Some(issue) => Err(issue.into()),
        None => Ok(()),
    }
}

fn compute(
    config: &EvaluatorConfig,
    entity_a: EntityParameters,
    entity_b: EntityParameters,
    coupling: CouplingParameters,
) -> EvaluationResult {
    let pa = entity_a.phasor();
    let pb = entity_b.phasor();
    let magnitude_sum = entity_a.magnitude + entity_b.magnitude + EPSILON;

    let phase_alignment = pa.resultant_norm(pb) / magnitude_sum;
    let decay = (-config.alpha * coupling.friction).exp();
    let sync_factor = phase_alignment * decay;

    let total_output = (pa.re() + pb.re()) * sync_factor;

    let symmetry = 1.0 - (entity_a.magnitude - entity_b.magnitude).abs() / magnitude_sum;
    let alignment = (1.0 + pa.interference(pb)) / 2.0;
    let composite_score = sync_factor * symmetry * alignment;

    EvaluationResult {
        sync_factor,
        total_output,
        composite_score,
        classification: Classification::from_score(composite_score, config.threshold),
        components: Components {
            phase_alignment,
            decay,
            symmetry,
            alignment,
        },
    }
}
