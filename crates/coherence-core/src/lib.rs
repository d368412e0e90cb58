//! Pairwise coherence evaluator.
//!
//! Two entities, each a magnitude and a directional angle, are coupled through
//! a friction term and mapped onto a synchronization factor, a total output,
//! a composite score and a coherence classification. A companion force model
//! scores attraction between entities described by value vectors.
//!
//! Zero I/O: pure, stateless math with no opinions about presentation.

pub mod batch;
pub mod constants;
pub mod error;
pub mod evaluator;
pub mod force;
pub mod params;
pub mod phasor;
pub mod scenario;

pub use batch::{BatchReport, BatchSummary, PairOutcome, PairRequest, evaluate_batch};
pub use constants::{ALPHA, DISPLAY_PRECISION, EPSILON, MAX_DISPLAY_PRECISION, THRESHOLD};
pub use error::EvaluationError;
pub use evaluator::{
    Classification, Components, EvaluationResult, Evaluator, EvaluatorConfig, Validation,
    evaluate, round_to,
};
pub use force::{ForceBand, ForceConfig, ForceEngine, ForceEntity, ForceResult};
pub use params::{CouplingParameters, DomainIssue, EntityParameters};
pub use phasor::Phasor;
pub use scenario::{Scenario, demo_scenarios};
