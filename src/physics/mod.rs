//! The Washburn capillary-rise model.
//!
//! Penetration depth of a liquid rising into a porous solid:
//!
//! ```text
//! L(t) = sqrt( gamma * r * t * cos(phi) / (2 * eta) )
//! ```
//!
//! where `gamma` is the liquid surface tension (N/m), `phi` the contact
//! angle between solid and liquid surface (rad), `eta` the dynamic
//! viscosity (Pa s), `r` the pore radius (m), and `t` the elapsed time (s).
//!
//! All evaluations are checked: a negative radicand (possible when
//! `cos(phi) < 0`) is a [`Domain`](crate::RemojoError::Domain) error rather
//! than a silent NaN.

use crate::error::{RemojoError, Result};

/// Physical properties of the wetting liquid and its contact with the solid.
///
/// Bundles the three quantities of the Washburn equation that are fixed for
/// a given liquid/solid pairing, leaving pore radius and time free.
///
/// # Example
///
/// ```
/// use remojo::physics::TeaParams;
///
/// let tea = TeaParams::new(6.78e-2, 1.45, 9.93e-4).unwrap();
/// assert!((tea.gamma() - 6.78e-2).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TeaParams {
    /// Surface tension, N/m
    gamma: f64,
    /// Contact angle, rad
    phi: f64,
    /// Dynamic viscosity, Pa s
    eta: f64,
}

impl TeaParams {
    /// Creates a validated parameter set.
    ///
    /// # Errors
    ///
    /// Returns [`RemojoError::InvalidParameter`] if `gamma <= 0`,
    /// `eta <= 0`, or `phi` is outside `[0, pi)`.
    pub fn new(gamma: f64, phi: f64, eta: f64) -> Result<Self> {
        if !(gamma > 0.0) || !gamma.is_finite() {
            return Err(RemojoError::invalid_parameter("gamma", gamma, "> 0"));
        }
        if !(eta > 0.0) || !eta.is_finite() {
            return Err(RemojoError::invalid_parameter("eta", eta, "> 0"));
        }
        if !(0.0..std::f64::consts::PI).contains(&phi) {
            return Err(RemojoError::invalid_parameter("phi", phi, "in [0, pi)"));
        }
        Ok(Self { gamma, phi, eta })
    }

    /// Properties of hot black tea against a wheat biscuit, as measured
    /// for the dunking experiments.
    #[must_use]
    pub fn tea() -> Self {
        Self {
            gamma: 6.78e-2,
            phi: 1.45,
            eta: 9.93e-4,
        }
    }

    /// Surface tension in N/m.
    #[must_use]
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Contact angle in rad.
    #[must_use]
    pub fn phi(&self) -> f64 {
        self.phi
    }

    /// Dynamic viscosity in Pa s.
    #[must_use]
    pub fn eta(&self) -> f64 {
        self.eta
    }
}

/// Computes the Washburn penetration depth at a single time point.
///
/// # Arguments
///
/// * `gamma` - Liquid surface tension, N/m
/// * `phi` - Contact angle between solid and liquid surface, rad
/// * `eta` - Liquid dynamic viscosity, Pa s
/// * `r` - Pore radius, m
/// * `t` - Elapsed time since first contact, s
///
/// # Errors
///
/// Returns [`RemojoError::InvalidParameter`] for non-positive `gamma`,
/// `eta`, or `r`, or negative `t`; [`RemojoError::Domain`] if the radicand
/// is negative (`cos(phi) < 0`), where the real-valued model is undefined.
///
/// # Example
///
/// ```
/// use remojo::physics::washburn;
///
/// let depth = washburn(6.78e-2, 1.45, 9.93e-4, 1e-6, 10.0).unwrap();
/// assert!(depth > 0.0);
/// ```
pub fn washburn(gamma: f64, phi: f64, eta: f64, r: f64, t: f64) -> Result<f64> {
    if !(gamma > 0.0) || !gamma.is_finite() {
        return Err(RemojoError::invalid_parameter("gamma", gamma, "> 0"));
    }
    if !(eta > 0.0) || !eta.is_finite() {
        return Err(RemojoError::invalid_parameter("eta", eta, "> 0"));
    }
    if !(r > 0.0) || !r.is_finite() {
        return Err(RemojoError::invalid_parameter("r", r, "> 0"));
    }
    if !(t >= 0.0) || !t.is_finite() {
        return Err(RemojoError::invalid_parameter("t", t, ">= 0"));
    }

    let numerator = gamma * r * t * phi.cos();
    let denominator = 2.0 * eta;
    let radicand = numerator / denominator;

    if radicand < 0.0 {
        return Err(RemojoError::Domain {
            message: format!(
                "negative radicand {radicand} in Washburn equation (cos(phi) = {})",
                phi.cos()
            ),
        });
    }

    Ok(radicand.sqrt())
}

/// Computes the Washburn penetration depth elementwise over a time series.
///
/// # Errors
///
/// Propagates the same errors as [`washburn`] for any element.
pub fn washburn_curve(tea: &TeaParams, r: f64, t: &[f64]) -> Result<Vec<f64>> {
    t.iter()
        .map(|&ti| washburn(tea.gamma, tea.phi, tea.eta, r, ti))
        .collect()
}
