use std::fmt;

/// A derivative function `du/dt = f(t, u)` over states of fixed dimension.
///
/// Implementations must be pure: the same `(t, state)` always produces the
/// same derivative, and evaluation has no side effects. Solvers rely on this
/// to evaluate the field only at the points their method prescribes and to
/// run many problems concurrently without coordination.
pub trait VectorField {
    /// The number of state components this field expects and returns.
    fn dimension(&self) -> usize;

    /// Evaluates the derivative at time `t` and the given state.
    ///
    /// Callers pass a state of length [`dimension`](Self::dimension). The
    /// returned vector should have the same length; solvers treat any other
    /// length as an error.
    fn derivative(&self, t: f64, state: &[f64]) -> Vec<f64>;
}

impl<T: VectorField + ?Sized> VectorField for &T {
    fn dimension(&self) -> usize {
        (**self).dimension()
    }

    fn derivative(&self, t: f64, state: &[f64]) -> Vec<f64> {
        (**self).derivative(t, state)
    }
}

/// A [`VectorField`] backed by a closure.
///
/// Closures cannot report the dimension they expect, so it is declared up
/// front and checked by the solver on every evaluation.
///
/// ```
/// use stepwise_core::{FnField, VectorField};
///
/// // Exponential decay: du/dt = -u
/// let decay = FnField::new(1, |_t, u: &[f64]| vec![-u[0]]);
/// assert_eq!(decay.dimension(), 1);
/// assert_eq!(decay.derivative(0.0, &[2.0]), vec![-2.0]);
/// ```
#[derive(Clone, Copy)]
pub struct FnField<F> {
    dimension: usize,
    f: F,
}

impl<F> FnField<F>
where
    F: Fn(f64, &[f64]) -> Vec<f64>,
{
    /// Wraps `f` as a field over states with `dimension` components.
    pub fn new(dimension: usize, f: F) -> Self {
        Self { dimension, f }
    }
}

impl<F> VectorField for FnField<F>
where
    F: Fn(f64, &[f64]) -> Vec<f64>,
{
    fn dimension(&self) -> usize {
        self.dimension
    }

    fn derivative(&self, t: f64, state: &[f64]) -> Vec<f64> {
        (self.f)(t, state)
    }
}

impl<F> fmt::Debug for FnField<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnField")
            .field("dimension", &self.dimension)
            .finish_non_exhaustive()
    }
}
