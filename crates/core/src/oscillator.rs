//! The simple harmonic oscillator, `x'' = -ω²x`, as a first-order system.

use uom::{
    si::{ISQ, Quantity, SI, f64::Mass},
    typenum::{N2, P1, Z0},
};

use crate::VectorField;

/// Stiffness: force per unit length (N/m or kg/s²).
pub type Stiffness = Quantity<ISQ<Z0, P1, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// The harmonic oscillator field over the state `[x, v]`.
///
/// Evaluates `f(t, [x, v]) = [v, -ω²x]`. The default has `ω = 1`, which gives
/// the unit oscillator `f(t, [x, v]) = [v, -x]` whose exact solution from
/// `(x0, v0) = (0, 1)` is `(sin t, cos t)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HarmonicOscillator {
    omega_squared: f64,
}

impl HarmonicOscillator {
    /// Creates an oscillator with angular frequency `omega` (rad/s).
    #[must_use]
    pub fn new(omega: f64) -> Self {
        Self {
            omega_squared: omega * omega,
        }
    }

    /// Creates an oscillator for a mass on a linear spring, with `ω² = k/m`.
    #[must_use]
    pub fn from_stiffness_and_mass(stiffness: Stiffness, mass: Mass) -> Self {
        Self {
            omega_squared: (stiffness / mass).value,
        }
    }

    /// Returns `ω²`.
    #[must_use]
    pub fn omega_squared(&self) -> f64 {
        self.omega_squared
    }

    /// Returns the specific energy `(v² + ω²x²) / 2`, conserved by the exact flow.
    #[must_use]
    pub fn energy(&self, x: f64, v: f64) -> f64 {
        0.5 * (v * v + self.omega_squared * x * x)
    }
}

impl Default for HarmonicOscillator {
    fn default() -> Self {
        Self { omega_squared: 1.0 }
    }
}

impl VectorField for HarmonicOscillator {
    fn dimension(&self) -> usize {
        2
    }

    /// Returns an empty derivative if `state` is not `[x, v]`, which callers
    /// report as a dimension mismatch.
    fn derivative(&self, _t: f64, state: &[f64]) -> Vec<f64> {
        match *state {
            [x, v] => vec![v, -self.omega_squared * x],
            _ => Vec::new(),
        }
    }
}
