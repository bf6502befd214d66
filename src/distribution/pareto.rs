//! Pareto and bounded (truncated) Pareto by inverse transform.
//!
//! Both formulas raise the draw to a negative power, so an exact zero draw is
//! rejected and redrawn.

use crate::entropy::EntropySource;

fn nonzero_unit<S: EntropySource + ?Sized>(source: &mut S) -> f64 {
    loop {
        let u = source.next_unit();
        if u != 0.0 {
            return u;
        }
    }
}

/// Pareto with shape `alpha` and scale (minimum) `x_m`: `x_m / u^(1/alpha)`.
pub fn sample<S: EntropySource + ?Sized>(source: &mut S, alpha: f64, x_m: f64) -> f64 {
    let u = nonzero_unit(source);
    x_m / u.powf(1.0 / alpha)
}

/// Pareto with shape `alpha` truncated to `[low, high]`.
///
/// Inverts `F(x) = (1 - (low/x)^alpha) / (1 - (low/high)^alpha)`. Draws near
/// zero land on `low`, draws near one on `high`.
pub fn sample_bounded<S: EntropySource + ?Sized>(
    source: &mut S,
    alpha: f64,
    low: f64,
    high: f64,
) -> f64 {
    let u = nonzero_unit(source);
    let high_a = high.powf(alpha);
    let low_a = low.powf(alpha);
    let x = -(u * high_a - u * low_a - high_a) / (high * low).powf(alpha);
    x.powf(-1.0 / alpha)
}
