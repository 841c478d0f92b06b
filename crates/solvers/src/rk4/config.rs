/// How the driver treats the final step before the time horizon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Horizon {
    /// Always take full steps and stop at the first time at or past the
    /// horizon, so the final time may overshoot it by up to one step.
    #[default]
    Overshoot,

    /// Shorten the last step so the final time lands exactly on the horizon.
    ///
    /// A full step that ends within rounding error of the horizon also lands
    /// on it, so no sliver step is taken.
    Clamp,
}

/// Whether non-finite states are allowed to propagate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FiniteCheck {
    /// NaN and infinity flow through the arithmetic and into the result.
    #[default]
    Permissive,

    /// Fail as soon as any state component is NaN or infinite.
    Strict,
}

/// Configuration for the RK4 driver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    horizon: Horizon,
    finite_check: FiniteCheck,
}

impl Config {
    /// Creates a new config.
    #[must_use]
    pub fn new(horizon: Horizon, finite_check: FiniteCheck) -> Self {
        Self {
            horizon,
            finite_check,
        }
    }

    /// Returns a copy of this config with the given horizon policy.
    #[must_use]
    pub fn with_horizon(self, horizon: Horizon) -> Self {
        Self { horizon, ..self }
    }

    /// Returns a copy of this config with the given finite check.
    #[must_use]
    pub fn with_finite_check(self, finite_check: FiniteCheck) -> Self {
        Self {
            finite_check,
            ..self
        }
    }

    /// Returns the horizon policy.
    #[must_use]
    pub fn horizon(&self) -> Horizon {
        self.horizon
    }

    /// Returns the finite check.
    #[must_use]
    pub fn finite_check(&self) -> FiniteCheck {
        self.finite_check
    }
}
