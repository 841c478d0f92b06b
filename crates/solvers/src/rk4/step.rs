use stepwise_core::VectorField;

use super::Error;

/// Takes one classical Runge-Kutta step for a scalar ODE `du/dt = f(t, u)`.
///
/// Returns the fourth-order estimate of `u(t0 + dt)`:
///
/// ```text
/// f1 = f(t0,          u0)
/// f2 = f(t0 + dt/2,   u0 + dt*f1/2)
/// f3 = f(t0 + dt/2,   u0 + dt*f2/2)
/// f4 = f(t0 + dt,     u0 + dt*f3)
/// u1 = u0 + dt/6 * (f1 + 2*f2 + 2*f3 + f4)
/// ```
///
/// No checks are made; `f` is assumed total. The result is bit-identical to
/// [`step`] on a one-component state.
///
/// ```
/// use stepwise_solvers::rk4::step_scalar;
///
/// // du/dt = -u (exponential decay)
/// let u1 = step_scalar(0.0, 1.0, 0.01, |_t, u| -u);
/// assert!((u1 - (-0.01_f64).exp()).abs() < 1e-10);
/// ```
pub fn step_scalar<F>(t0: f64, u0: f64, dt: f64, f: F) -> f64
where
    F: Fn(f64, f64) -> f64,
{
    let t_mid = t0 + dt / 2.0;

    let f1 = f(t0, u0);
    let f2 = f(t_mid, u0 + dt * f1 / 2.0);
    let f3 = f(t_mid, u0 + dt * f2 / 2.0);
    let f4 = f(t0 + dt, u0 + dt * f3);

    u0 + (dt / 6.0) * (f1 + 2.0 * f2 + 2.0 * f3 + f4)
}

/// Takes one classical Runge-Kutta step for a vector ODE `du/dt = f(t, u)`.
///
/// Applies the same four stages as [`step_scalar`] component-wise. Each stage
/// evaluates the field once on a whole state vector. Stage states and the
/// returned state are freshly allocated; `state` is never modified.
///
/// NaN and infinity are not trapped and propagate into the result.
///
/// # Errors
///
/// Returns [`Error::StateDimension`] if `state` does not have the field's
/// dimension, or [`Error::DerivativeDimension`] if the field returns a
/// derivative of the wrong length at any stage.
pub fn step<F>(field: &F, t0: f64, state: &[f64], dt: f64) -> Result<Vec<f64>, Error>
where
    F: VectorField + ?Sized,
{
    let expected = field.dimension();
    if state.len() != expected {
        return Err(Error::StateDimension {
            expected,
            found: state.len(),
        });
    }

    let t_mid = t0 + dt / 2.0;
    let t_end = t0 + dt;

    let f1 = evaluate(field, t0, state)?;

    let u1 = offset(state, &f1, |d| dt * d / 2.0);
    let f2 = evaluate(field, t_mid, &u1)?;

    let u2 = offset(state, &f2, |d| dt * d / 2.0);
    let f3 = evaluate(field, t_mid, &u2)?;

    let u3 = offset(state, &f3, |d| dt * d);
    let f4 = evaluate(field, t_end, &u3)?;

    Ok(state
        .iter()
        .enumerate()
        .map(|(i, u)| u + (dt / 6.0) * (f1[i] + 2.0 * f2[i] + 2.0 * f3[i] + f4[i]))
        .collect())
}

/// Evaluates the field and checks the derivative's length.
fn evaluate<F>(field: &F, t: f64, state: &[f64]) -> Result<Vec<f64>, Error>
where
    F: VectorField + ?Sized,
{
    let derivative = field.derivative(t, state);
    if derivative.len() != state.len() {
        return Err(Error::DerivativeDimension {
            t,
            expected: state.len(),
            found: derivative.len(),
        });
    }
    Ok(derivative)
}

/// Returns `state + increment(derivative)` component-wise.
fn offset(state: &[f64], derivative: &[f64], increment: impl Fn(f64) -> f64) -> Vec<f64> {
    state
        .iter()
        .zip(derivative)
        .map(|(u, d)| u + increment(*d))
        .collect()
}
