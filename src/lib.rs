//! Remojo: Bayesian fitting of the Washburn capillary-rise model.
//!
//! Remojo estimates the pore radius of a porous solid from time-resolved
//! measurements of a liquid soaking into it (the classic biscuit-dunking
//! experiment), with reproducible multi-chain posterior sampling and
//! checked physics throughout.
//!
//! # Quick Start
//!
//! ```
//! use remojo::prelude::*;
//!
//! // Synthetic measurements from a known pore radius
//! let tea = TeaParams::tea();
//! let t: Vec<f64> = (1..=8).map(f64::from).collect();
//! let depth = washburn_curve(&tea, 7.0e-7, &t).unwrap();
//! let obs = Observations::new(t, depth, vec![1e-4; 8]).unwrap();
//!
//! // Recover the radius from the data
//! let estimate = estimate_radius(&obs, &tea, 1.5e-7, 1.2e-6).unwrap();
//! assert!((estimate.mean - 7.0e-7).abs() < 5e-8);
//!
//! // How unusual would a literature value be under this posterior?
//! let pct = probability_in_distribution(estimate.mean, estimate.std, 7.2e-7).unwrap();
//! assert!((0.0..=100.0).contains(&pct));
//! ```
//!
//! # Modules
//!
//! - [`data`]: Observation tables, the categorical label encoder, and
//!   per-sample posterior summaries
//! - [`physics`]: The Washburn equation with checked domain
//! - [`model`]: Base and corrected absorption model variants
//! - [`prior`]: Prior distributions and the unit-hypercube transform
//! - [`inference`]: Gaussian likelihood and the radius estimation driver
//! - [`sampler`]: Seeded multi-chain Metropolis engine with convergence
//!   diagnostics
//! - [`stats`]: Two-tailed probability and standardized-distance
//!   comparison utilities

pub mod data;
pub mod error;
pub mod inference;
pub mod model;
pub mod physics;
pub mod prelude;
pub mod prior;
pub mod sampler;
pub mod stats;

pub use error::{RemojoError, Result};
