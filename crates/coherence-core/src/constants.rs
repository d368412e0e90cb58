use std::ops::RangeInclusive;

/// Friction sensitivity: syncFactor = phaseAlignment * exp(-ALPHA * friction)
pub const ALPHA: f64 = 0.5;

/// Inclusive lower bound of the high-coherence classification
pub const THRESHOLD: f64 = 0.67;

/// Guard added to the magnitude sum so two zero magnitudes never divide by zero
pub const EPSILON: f64 = 1e-9;

/// Decimal places used when results are rounded for display
pub const DISPLAY_PRECISION: u32 = 3;

/// Most decimal places rounding will honour; f64 carries about 15-17
pub const MAX_DISPLAY_PRECISION: u32 = 15;

/// Nominal magnitude domain. Not enforced by the permissive evaluator.
pub const MAGNITUDE_DOMAIN: RangeInclusive<f64> = 0.0..=10.0;

/// Nominal friction domain. Not enforced by the permissive evaluator.
pub const FRICTION_DOMAIN: RangeInclusive<f64> = 0.0..=1.0;

/// Force: scaling constant k in F = k * P1 * P2 * R^-n
pub const FORCE_K: f64 = 100.0;

/// Force: distance decay exponent (3.0 mimics magnetic dipoles)
pub const FORCE_N: f64 = 3.0;

/// Force: minimum effective resistance
pub const FORCE_R_MIN: f64 = 0.001;

/// Force: steepness of the sigmoid selection gate
pub const SELECTION_STEEPNESS: f64 = 12.0;

/// Force: magnitude above which a force counts as strong
pub const STRONG_FORCE: f64 = 50.0;

/// Force: magnitude above which a force leaves the neutral band
pub const WEAK_FORCE: f64 = 10.0;
