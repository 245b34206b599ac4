//! Statistical comparison utilities.
//!
//! Compares a point estimate against a reference normal distribution: the
//! two-tailed probability of seeing a value at least as extreme, and the
//! standardized distance in units of standard deviations. Also carries the
//! small descriptive helpers the trace summaries use.

use statrs::distribution::{ContinuousCDF, Normal};

use crate::error::{RemojoError, Result};

/// Two-tailed probability, as a percentage, of observing a value at least
/// as extreme as `value` under `Normal(mean, std)`.
///
/// The one-sided tail beyond `value` is doubled and capped at 100, so the
/// result is a conventional percentage. Exactly at `value == mean` the
/// whole distribution is "at least as extreme" and the result is `100.0`.
///
/// # Errors
///
/// Returns [`RemojoError::InvalidParameter`] if `std <= 0` or any argument
/// is not finite.
///
/// # Example
///
/// ```
/// use remojo::stats::probability_in_distribution;
///
/// let pct = probability_in_distribution(0.0, 1.0, 0.0).unwrap();
/// assert!((pct - 100.0).abs() < 1e-12);
///
/// let extreme = probability_in_distribution(0.0, 1.0, 3.0).unwrap();
/// assert!(extreme < 1.0);
/// ```
pub fn probability_in_distribution(mean: f64, std: f64, value: f64) -> Result<f64> {
    let dist = reference_normal(mean, std)?;
    if !value.is_finite() {
        return Err(RemojoError::invalid_parameter("value", value, "finite"));
    }

    let tail = if value > mean {
        1.0 - dist.cdf(value)
    } else {
        dist.cdf(value)
    };

    // Doubled one-sided tail; the tie at the mean falls out as 100
    Ok((200.0 * tail).min(100.0))
}

/// Number of standard deviations `value` lies from `mean`.
///
/// # Errors
///
/// Returns [`RemojoError::InvalidParameter`] if `std <= 0` or any argument
/// is not finite.
///
/// # Example
///
/// ```
/// use remojo::stats::num_stds;
///
/// let n = num_stds(7.1e-7, 5.0e-8, 8.1e-7).unwrap();
/// assert!((n - 2.0).abs() < 1e-9);
/// ```
pub fn num_stds(mean: f64, std: f64, value: f64) -> Result<f64> {
    reference_normal(mean, std)?;
    if !value.is_finite() {
        return Err(RemojoError::invalid_parameter("value", value, "finite"));
    }
    Ok((value - mean).abs() / std)
}

fn reference_normal(mean: f64, std: f64) -> Result<Normal> {
    if !mean.is_finite() {
        return Err(RemojoError::invalid_parameter("mean", mean, "finite"));
    }
    if !(std > 0.0) || !std.is_finite() {
        return Err(RemojoError::invalid_parameter("std", std, "> 0"));
    }
    Normal::new(mean, std).map_err(|_| RemojoError::invalid_parameter("std", std, "> 0"))
}

/// Arithmetic mean of a sample.
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    #[allow(clippy::cast_precision_loss)]
    let n = values.len() as f64;
    values.iter().sum::<f64>() / n
}

/// Sample standard deviation (n - 1 denominator).
#[must_use]
pub fn std_dev(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return f64::NAN;
    }
    let m = mean(values);
    #[allow(clippy::cast_precision_loss)]
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (n - 1) as f64;
    variance.sqrt()
}
