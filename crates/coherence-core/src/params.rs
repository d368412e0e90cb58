use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::constants::{FRICTION_DOMAIN, MAGNITUDE_DOMAIN};
use crate::phasor::Phasor;

/// One participant in an evaluation: a strength and a directional intent.
///
/// `angle` is in degrees and is conceptually periodic mod 360°; any real value
/// is accepted.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EntityParameters {
    pub magnitude: f64,
    pub angle: f64,
}

impl EntityParameters {
    pub fn new(magnitude: f64, angle: f64) -> Self {
        Self { magnitude, angle }
    }

    /// Draw an entity uniformly from the nominal domain:
    /// magnitude in [0, 10], angle in [-180, 180).
    pub fn random(rng: &mut impl Rng) -> Self {
        Self {
            magnitude: rng.random_range(MAGNITUDE_DOMAIN),
            angle: rng.random_range(-180.0..180.0),
        }
    }

    pub fn angle_radians(&self) -> f64 {
        self.angle.to_radians()
    }

    pub fn phasor(&self) -> Phasor {
        Phasor::from_degrees(self.magnitude, self.angle)
    }

    /// Departures from the nominal domain. Informational only.
    pub fn domain_issues(&self) -> Vec<DomainIssue> {
        let mut issues = Vec::new();
        if !self.magnitude.is_finite() {
            issues.push(DomainIssue::NonFinite {
                field: "magnitude",
                value: self.magnitude,
            });
        } else if self.magnitude < 0.0 {
            issues.push(DomainIssue::NegativeMagnitude(self.magnitude));
        } else if !MAGNITUDE_DOMAIN.contains(&self.magnitude) {
            issues.push(DomainIssue::MagnitudeAboveRange(self.magnitude));
        }
        if !self.angle.is_finite() {
            issues.push(DomainIssue::NonFinite {
                field: "angle",
                value: self.angle,
            });
        }
        issues
    }
}

/// Coupling between the two entities. `friction` is an exponential decay rate.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CouplingParameters {
    pub friction: f64,
}

impl CouplingParameters {
    pub fn new(friction: f64) -> Self {
        Self { friction }
    }

    /// Draw a friction uniformly from [0, 1].
    pub fn random(rng: &mut impl Rng) -> Self {
        Self {
            friction: rng.random_range(FRICTION_DOMAIN),
        }
    }

    pub fn domain_issues(&self) -> Vec<DomainIssue> {
        if !self.friction.is_finite() {
            vec![DomainIssue::NonFinite {
                field: "friction",
                value: self.friction,
            }]
        } else if !FRICTION_DOMAIN.contains(&self.friction) {
            vec![DomainIssue::FrictionOutOfRange(self.friction)]
        } else {
            Vec::new()
        }
    }
}

/// A value outside the range the model was designed for.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DomainIssue {
    NegativeMagnitude(f64),
    MagnitudeAboveRange(f64),
    FrictionOutOfRange(f64),
    NonFinite { field: &'static str, value: f64 },
}

impl fmt::Display for DomainIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainIssue::NegativeMagnitude(m) => write!(f, "negative magnitude {m}"),
            DomainIssue::MagnitudeAboveRange(m) => {
                write!(f, "magnitude {m} above nominal range [0, 10]")
            }
            DomainIssue::FrictionOutOfRange(v) => {
                write!(f, "friction {v} outside nominal range [0, 1]")
            }
            DomainIssue::NonFinite { field, value } => write!(f, "{field} is not finite ({value})"),
        }
    }
}
