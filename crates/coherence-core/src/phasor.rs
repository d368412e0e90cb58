use serde::{Deserialize, Serialize};

use crate::constants::EPSILON;

/// A planar vector in polar form: a magnitude pointing along `theta` radians.
///
/// Equivalent to the complex number `magnitude * e^(i*theta)`. The angle is
/// kept as given (not wrapped) so that trigonometric results match the raw
/// input exactly.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Phasor {
    pub magnitude: f64,
    pub theta: f64,
}

impl Phasor {
    pub fn new(magnitude: f64, theta: f64) -> Self {
        Self { magnitude, theta }
    }

    /// Build a phasor from an angle in degrees.
    pub fn from_degrees(magnitude: f64, degrees: f64) -> Self {
        Self::new(magnitude, degrees.to_radians())
    }

    /// Real component: projection onto the 0° reference direction.
    pub fn re(self) -> f64 {
        self.magnitude * self.theta.cos()
    }

    /// Imaginary component.
    pub fn im(self) -> f64 {
        self.magnitude * self.theta.sin()
    }

    /// Length of the resultant of `self + other`.
    pub fn resultant_norm(self, other: Self) -> f64 {
        (self.re() + other.re()).hypot(self.im() + other.im())
    }

    /// Phasor interference: cos(self.theta - other.theta).
    /// Range: [-1, +1]. +1 = in phase, -1 = out of phase.
    pub fn interference(self, other: Self) -> f64 {
        (self.theta - other.theta).cos()
    }
}

impl PartialEq for Phasor {
    fn eq(&self, other: &Self) -> bool {
        (self.re() - other.re()).abs() < EPSILON && (self.im() - other.im()).abs() < EPSILON
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_degrees_to_radians() {
        let p = Phasor::from_degrees(1.0, 180.0);
        assert_relative_eq!(p.theta, PI);
        let q = Phasor::from_degrees(1.0, -90.0);
        assert_relative_eq!(q.theta, -FRAC_PI_2);
    }

    #[test]
    fn test_projection_sign() {
        assert!(Phasor::from_degrees(2.0, 45.0).re() > 0.0);
        assert!(Phasor::from_degrees(2.0, 135.0).re() < 0.0);
        assert_relative_eq!(Phasor::from_degrees(2.0, 0.0).re(), 2.0);
    }

    #[test]
    fn test_resultant_aligned() {
        let a = Phasor::from_degrees(3.0, 20.0);
        let b = Phasor::from_degrees(4.0, 20.0);
        assert_relative_eq!(a.resultant_norm(b), 7.0, epsilon = 1e-12);
    }

    #[test]
    fn test_resultant_opposed_cancels() {
        let a = Phasor::from_degrees(5.0, 0.0);
        let b = Phasor::from_degrees(5.0, 180.0);
        assert!(a.resultant_norm(b) < 1e-12);
    }

    #[test]
    fn test_resultant_orthogonal() {
        let a = Phasor::from_degrees(3.0, 0.0);
        let b = Phasor::from_degrees(4.0, 90.0);
        assert_relative_eq!(a.resultant_norm(b), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_interference_in_phase() {
        let a = Phasor::new(1.0, 1.0);
        let b = Phasor::new(2.0, 1.0);
        assert_relative_eq!(a.interference(b), 1.0);
    }

    #[test]
    fn test_interference_out_of_phase() {
        let a = Phasor::new(1.0, 0.0);
        let b = Phasor::new(1.0, PI);
        assert_relative_eq!(a.interference(b), -1.0);
    }

    #[test]
    fn test_equality_is_geometric() {
        // Same point reached through a full turn
        assert_eq!(Phasor::from_degrees(1.0, 10.0), Phasor::from_degrees(1.0, 370.0));
        // Negative magnitude flips direction
        assert_eq!(Phasor::from_degrees(-1.0, 0.0), Phasor::from_degrees(1.0, 180.0));
    }
}
