//! Built-in demonstration pairs.

use crate::batch::PairRequest;
use crate::params::{CouplingParameters, EntityParameters};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scenario {
    pub name: &'static str,
    pub entity_a: EntityParameters,
    pub entity_b: EntityParameters,
    pub coupling: CouplingParameters,
}

impl Scenario {
    pub fn to_request(&self) -> PairRequest {
        PairRequest::new(self.name, self.entity_a, self.entity_b, self.coupling)
    }
}

/// Equal strength, intents 60° apart, heavy friction.
pub const MISALIGNED_UNDER_FRICTION: Scenario = Scenario {
    name: "misaligned intent under friction",
    entity_a: EntityParameters {
        magnitude: 8.0,
        angle: 30.0,
    },
    entity_b: EntityParameters {
        magnitude: 8.0,
        angle: -30.0,
    },
    coupling: CouplingParameters { friction: 0.8 },
};

/// Equal strength, identical intent, almost no friction.
pub const ALIGNED_LOW_FRICTION: Scenario = Scenario {
    name: "aligned intent, low friction",
    entity_a: EntityParameters {
        magnitude: 5.0,
        angle: 0.0,
    },
    entity_b: EntityParameters {
        magnitude: 5.0,
        angle: 0.0,
    },
    coupling: CouplingParameters { friction: 0.05 },
};

pub fn demo_scenarios() -> [Scenario; 2] {
    [MISALIGNED_UNDER_FRICTION, ALIGNED_LOW_FRICTION]
}
