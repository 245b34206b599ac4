//! Prior distributions and the unit-hypercube transform.
//!
//! A [`Prior`] assigns belief to one free model parameter. The
//! [`prior_transform`] maps a vector of standard-uniform draws to
//! parameter-space draws via the priors' quantile functions, which is the
//! bridge a nested or likelihood-based sampler expects; the in-crate MCMC
//! engine uses the same priors through [`Prior::log_density`].

use statrs::distribution::{Continuous, ContinuousCDF, Normal};

use crate::error::{RemojoError, Result};

/// A prior distribution over a single parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Prior {
    /// Uniform over `[low, high]`.
    Uniform {
        /// Lower bound
        low: f64,
        /// Upper bound
        high: f64,
    },
    /// Normal with the given mean and standard deviation.
    Normal {
        /// Mean
        mean: f64,
        /// Standard deviation
        std: f64,
    },
}

impl Prior {
    /// Creates a validated uniform prior.
    ///
    /// # Errors
    ///
    /// Returns [`RemojoError::InvalidParameter`] if the bounds are not
    /// finite or `low >= high`.
    pub fn uniform(low: f64, high: f64) -> Result<Self> {
        if !low.is_finite() || !high.is_finite() || low >= high {
            return Err(RemojoError::invalid_parameter("low", low, "< high"));
        }
        Ok(Prior::Uniform { low, high })
    }

    /// Creates a validated normal prior.
    ///
    /// # Errors
    ///
    /// Returns [`RemojoError::InvalidParameter`] if `mean` is not finite or
    /// `std <= 0`.
    pub fn normal(mean: f64, std: f64) -> Result<Self> {
        if !mean.is_finite() {
            return Err(RemojoError::invalid_parameter("mean", mean, "finite"));
        }
        if !(std > 0.0) || !std.is_finite() {
            return Err(RemojoError::invalid_parameter("std", std, "> 0"));
        }
        Ok(Prior::Normal { mean, std })
    }

    /// Quantile (inverse CDF) at `u`.
    ///
    /// Maps a standard-uniform draw into this prior's parameter space.
    ///
    /// # Errors
    ///
    /// Returns [`RemojoError::InvalidParameter`] if `u` is outside `[0, 1)`.
    pub fn quantile(&self, u: f64) -> Result<f64> {
        if !(0.0..1.0).contains(&u) {
            return Err(RemojoError::invalid_parameter("u", u, "in [0, 1)"));
        }
        match *self {
            Prior::Uniform { low, high } => Ok(low + u * (high - low)),
            Prior::Normal { mean, std } => {
                let dist = Normal::new(mean, std)
                    .map_err(|_| RemojoError::invalid_parameter("std", std, "> 0"))?;
                Ok(dist.inverse_cdf(u))
            }
        }
    }

    /// Log prior density at `x`.
    ///
    /// Negative infinity outside a uniform prior's support, which is how
    /// the Metropolis sampler rejects out-of-bounds proposals.
    #[must_use]
    pub fn log_density(&self, x: f64) -> f64 {
        match *self {
            Prior::Uniform { low, high } => {
                if (low..=high).contains(&x) {
                    -(high - low).ln()
                } else {
                    f64::NEG_INFINITY
                }
            }
            Prior::Normal { mean, std } => match Normal::new(mean, std) {
                Ok(dist) => dist.ln_pdf(x),
                Err(_) => f64::NEG_INFINITY,
            },
        }
    }

    /// Characteristic width, used to scale random-walk proposals.
    #[must_use]
    pub fn width(&self) -> f64 {
        match *self {
            Prior::Uniform { low, high } => high - low,
            Prior::Normal { std, .. } => std,
        }
    }
}

/// Maps standard-uniform draws to parameter draws, elementwise through the
/// priors' quantile functions.
///
/// # Errors
///
/// Returns [`RemojoError::ShapeMismatch`] if `priors` and `u` differ in
/// length, and propagates [`Prior::quantile`] errors.
///
/// # Example
///
/// ```
/// use remojo::prior::{prior_transform, Prior};
///
/// let priors = [
///     Prior::uniform(1.5e-7, 1.2e-6).unwrap(),
///     Prior::normal(1.0, 0.1).unwrap(),
/// ];
/// let params = prior_transform(&priors, &[0.5, 0.5]).unwrap();
/// assert!((params[0] - 6.75e-7).abs() < 1e-15);
/// assert!((params[1] - 1.0).abs() < 1e-12);
/// ```
pub fn prior_transform(priors: &[Prior], u: &[f64]) -> Result<Vec<f64>> {
    if priors.len() != u.len() {
        return Err(RemojoError::shape_mismatch("priors", priors.len(), u.len()));
    }
    priors
        .iter()
        .zip(u)
        .map(|(prior, &ui)| prior.quantile(ui))
        .collect()
}
