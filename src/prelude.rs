//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use remojo::prelude::*;
//! ```

pub use crate::data::{Column, DataFrame, Observations, SampleSummary, SummaryTable};
pub use crate::error::{RemojoError, Result};
pub use crate::inference::{
    estimate_radii_by_sample, estimate_radius, estimate_radius_with, log_likelihood,
    RadiusEstimate,
};
pub use crate::model::{AbsorptionModel, CorrectedModel, FixedRadiusModel};
pub use crate::physics::{washburn, washburn_curve, TeaParams};
pub use crate::prior::{prior_transform, Prior};
pub use crate::sampler::{PosteriorSampler, SamplerRng, Trace};
pub use crate::stats::{num_stds, probability_in_distribution};
