//! Relationship force between two entities, modelled on the dipole law
//!
//! ```text
//! F = k · P1 · P2 · R^-n · alignment · gate
//! ```
//!
//! where `alignment` is the cosine similarity of the two value vectors and
//! `gate` is a sigmoid selection filter over an instinctive compatibility
//! score. Positive forces attract, negative forces repel.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{
    FORCE_K, FORCE_N, FORCE_R_MIN, SELECTION_STEEPNESS, STRONG_FORCE, WEAK_FORCE,
};

/// A person, product or organization with a capability potential and a
/// values vector (e.g. `[creativity, logic, empathy]`).
#[derive(Clone, Debug, PartialEq)]
pub struct ForceEntity {
    potential: f64,
    pub values: Vec<f64>,
}

impl ForceEntity {
    /// Potential is clipped into [0, 1].
    pub fn new(potential: f64, values: Vec<f64>) -> Self {
        Self {
            potential: potential.clamp(0.0, 1.0),
            values,
        }
    }

    pub fn potential(&self) -> f64 {
        self.potential
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForceConfig {
    /// Scaling constant.
    pub k: f64,
    /// Distance decay exponent.
    pub n: f64,
    /// Lower bound on the effective resistance.
    pub r_min: f64,
}

impl Default for ForceConfig {
    fn default() -> Self {
        Self {
            k: FORCE_K,
            n: FORCE_N,
            r_min: FORCE_R_MIN,
        }
    }
}

/// Qualitative reading of a force value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ForceBand {
    StrongAttraction,
    Attraction,
    Neutral,
    Repulsion,
    StrongRepulsion,
}

impl ForceBand {
    /// Band edges are exclusive: a force of exactly 50 is plain attraction.
    pub fn from_force(force: f64) -> Self {
        if force > STRONG_FORCE {
            ForceBand::StrongAttraction
        } else if force > WEAK_FORCE {
            ForceBand::Attraction
        } else if force < -STRONG_FORCE {
            ForceBand::StrongRepulsion
        } else if force < -WEAK_FORCE {
            ForceBand::Repulsion
        } else {
            ForceBand::Neutral
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ForceBand::StrongAttraction => "Strong Attraction (Resonance)",
            ForceBand::Attraction => "Attraction",
            ForceBand::Neutral => "Neutral",
            ForceBand::Repulsion => "Repulsion",
            ForceBand::StrongRepulsion => "Strong Repulsion (Conflict)",
        }
    }
}

impl fmt::Display for ForceBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ForceComponents {
    /// k · P1 · P2 · R^-n
    pub magnitude: f64,
    pub alignment: f64,
    pub selection_gate: f64,
    pub r_effective: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ForceResult {
    pub force: f64,
    pub components: ForceComponents,
    pub band: ForceBand,
}

/// Cosine similarity of two value vectors.
///
/// Missing or mismatched vectors are treated as neutral agreement (1.0); a
/// zero vector has no direction and yields 0.0.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    if a.is_empty() || b.is_empty() || a.len() != b.len() {
        return 1.0;
    }
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

/// Sigmoid filter centred on 0.5: amplifies high compatibility, dampens low.
pub fn selection_gate(compatibility: f64) -> f64 {
    let s = 1.0 / (1.0 + (-SELECTION_STEEPNESS * (compatibility - 0.5)).exp());
    s.clamp(0.0, 1.0)
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ForceEngine {
    config: ForceConfig,
}

impl ForceEngine {
    pub fn new(config: ForceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ForceConfig {
        &self.config
    }

    /// `r_score` is the information distance (lower is closer; 0.1 = trust
    /// established, 1.0 = strangers). `compatibility` is in [0, 1].
    pub fn compute(
        &self,
        entity_a: &ForceEntity,
        entity_b: &ForceEntity,
        r_score: f64,
        compatibility: f64,
    ) -> ForceResult {
        let r_effective = self.config.r_min.max(r_score);
        let alignment = cosine_similarity(&entity_a.values, &entity_b.values);
        let gate = selection_gate(compatibility);

        let magnitude = self.config.k
            * (entity_a.potential * entity_b.potential)
            * r_effective.powf(-self.config.n);
        let force = magnitude * alignment * gate;

        ForceResult {
            force,
            components: ForceComponents {
                magnitude,
                alignment,
                selection_gate: gate,
                r_effective,
            },
            band: ForceBand::from_force(force),
        }
    }
}
