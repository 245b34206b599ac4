//! Variant absorption models behind a single predict capability.
//!
//! Two closed variants share the [`AbsorptionModel`] contract:
//!
//! - [`FixedRadiusModel`]: no free parameters; the pore radius is fixed at
//!   construction, normally from a per-sample posterior summary.
//! - [`CorrectedModel`]: one free parameter `[a]`, a scalar correction
//!   factor applied to the base prediction.
//!
//! Model context (liquid properties, radius) is held by value in each
//! model; nothing is read from ambient state, so models are freely
//! shareable across sampling runs.

use crate::data::SummaryTable;
use crate::error::{RemojoError, Result};
use crate::physics::{washburn_curve, TeaParams};

/// A model that predicts penetration depth over a time series given a
/// parameter vector.
pub trait AbsorptionModel {
    /// Short model name for diagnostics.
    fn name(&self) -> &'static str;

    /// Number of free parameters expected in `params`.
    fn n_params(&self) -> usize;

    /// Predicts penetration depth at each time point.
    ///
    /// # Errors
    ///
    /// Returns [`RemojoError::InputType`] for an empty or non-finite time
    /// series, [`RemojoError::ShapeMismatch`] if `params` has the wrong
    /// length, and propagates the physics errors of the Washburn model.
    fn predict(&self, t: &[f64], params: &[f64]) -> Result<Vec<f64>>;
}

fn validate_inputs(t: &[f64], params: &[f64], n_params: usize) -> Result<()> {
    if t.is_empty() {
        return Err(RemojoError::InputType {
            expected: "non-empty 1-D time series".to_string(),
            actual: "empty slice".to_string(),
        });
    }
    if let Some(bad) = t.iter().find(|v| !v.is_finite()) {
        return Err(RemojoError::InputType {
            expected: "finite time values".to_string(),
            actual: format!("{bad}"),
        });
    }
    if params.len() != n_params {
        return Err(RemojoError::shape_mismatch("params", n_params, params.len()));
    }
    Ok(())
}

/// Washburn prediction with the pore radius fixed from a prior inference
/// pass. No free parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedRadiusModel {
    tea: TeaParams,
    radius: f64,
}

impl FixedRadiusModel {
    /// Creates a model with an explicitly chosen radius.
    ///
    /// # Errors
    ///
    /// Returns [`RemojoError::InvalidParameter`] if `radius` is not a
    /// positive finite value.
    pub fn new(tea: TeaParams, radius: f64) -> Result<Self> {
        if !(radius > 0.0) || !radius.is_finite() {
            return Err(RemojoError::invalid_parameter("radius", radius, "> 0"));
        }
        Ok(Self { tea, radius })
    }

    /// Creates a model for one sample, radius taken from the posterior
    /// mean in `summaries`.
    ///
    /// # Errors
    ///
    /// Returns an error if `label` has no summary, plus the validation of
    /// [`FixedRadiusModel::new`].
    pub fn for_sample(tea: TeaParams, summaries: &SummaryTable, label: &str) -> Result<Self> {
        let summary = summaries
            .get(label)
            .ok_or_else(|| RemojoError::Other(format!("no posterior summary for sample {label:?}")))?;
        Self::new(tea, summary.mean)
    }

    /// The fixed pore radius, m.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// The liquid properties this model evaluates with.
    #[must_use]
    pub fn tea(&self) -> &TeaParams {
        &self.tea
    }
}

impl AbsorptionModel for FixedRadiusModel {
    fn name(&self) -> &'static str {
        "washburn-fixed-radius"
    }

    fn n_params(&self) -> usize {
        0
    }

    fn predict(&self, t: &[f64], params: &[f64]) -> Result<Vec<f64>> {
        validate_inputs(t, params, 0)?;
        washburn_curve(&self.tea, self.radius, t)
    }
}

/// The base Washburn prediction scaled by a single correction factor `a`.
///
/// Captures systematic deviations from the ideal capillary model (swelling,
/// tortuosity) without refitting the radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrectedModel {
    base: FixedRadiusModel,
}

impl CorrectedModel {
    /// Wraps a base model.
    #[must_use]
    pub fn new(base: FixedRadiusModel) -> Self {
        Self { base }
    }

    /// Creates a corrected model for one sample via the summary lookup of
    /// [`FixedRadiusModel::for_sample`].
    ///
    /// # Errors
    ///
    /// Same as [`FixedRadiusModel::for_sample`].
    pub fn for_sample(tea: TeaParams, summaries: &SummaryTable, label: &str) -> Result<Self> {
        Ok(Self::new(FixedRadiusModel::for_sample(tea, summaries, label)?))
    }

    /// The wrapped base model.
    #[must_use]
    pub fn base(&self) -> &FixedRadiusModel {
        &self.base
    }
}

impl AbsorptionModel for CorrectedModel {
    fn name(&self) -> &'static str {
        "washburn-corrected"
    }

    fn n_params(&self) -> usize {
        1
    }

    fn predict(&self, t: &[f64], params: &[f64]) -> Result<Vec<f64>> {
        validate_inputs(t, params, 1)?;
        let a = params[0];
        if !a.is_finite() {
            return Err(RemojoError::invalid_parameter("a", a, "finite"));
        }
        let mut depths = self.base.predict(t, &[])?;
        for depth in &mut depths {
            *depth *= a;
        }
        Ok(depths)
    }
}
