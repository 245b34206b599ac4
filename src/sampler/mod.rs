//! Posterior sampling engine.
//!
//! A seeded multi-chain Metropolis random-walk sampler. Each chain starts
//! from an overdispersed draw of the prior, adapts its proposal scale
//! toward a healthy acceptance rate during a tuning phase, then records
//! draws at a fixed scale. Chains are independent: they share no mutable
//! state and run in parallel, and the whole run is reproducible from the
//! engine seed.
//!
//! The engine is generic over the target: it takes the prior for each free
//! parameter and a log-likelihood callback, so the same machinery serves
//! the radius fit and any variant-model fit.

mod convergence;
mod rng;

pub use convergence::{autocorrelation, ess_autocorr, split_rhat};
pub use rng::SamplerRng;

use rayon::prelude::*;

use crate::error::{RemojoError, Result};
use crate::prior::Prior;
use crate::stats;

/// Default number of recorded draws per chain.
pub const DEFAULT_DRAWS: usize = 1000;
/// Default number of discarded tuning steps per chain.
pub const DEFAULT_TUNE: usize = 1000;
/// Default number of independent chains.
pub const DEFAULT_CHAINS: usize = 10;

// Proposal-scale adaptation happens once per this many tuning steps.
const ADAPT_INTERVAL: usize = 50;

/// Configurable multi-chain Metropolis sampler.
///
/// # Example
///
/// ```
/// use remojo::prior::Prior;
/// use remojo::sampler::PosteriorSampler;
///
/// let prior = Prior::uniform(0.0, 10.0).unwrap();
/// let trace = PosteriorSampler::new(42)
///     .with_draws(200)
///     .with_tune(200)
///     .with_chains(4)
///     .sample(&[prior], |params| Ok(-(params[0] - 5.0).powi(2)))
///     .unwrap();
/// assert!((trace.posterior_mean(0) - 5.0).abs() < 0.5);
/// ```
#[derive(Debug, Clone)]
pub struct PosteriorSampler {
    seed: u64,
    draws: usize,
    tune: usize,
    chains: usize,
}

impl PosteriorSampler {
    /// Creates a sampler with the default draw/tune/chain counts.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            draws: DEFAULT_DRAWS,
            tune: DEFAULT_TUNE,
            chains: DEFAULT_CHAINS,
        }
    }

    /// Sets the number of recorded draws per chain.
    #[must_use]
    pub fn with_draws(mut self, draws: usize) -> Self {
        self.draws = draws;
        self
    }

    /// Sets the number of discarded tuning steps per chain.
    #[must_use]
    pub fn with_tune(mut self, tune: usize) -> Self {
        self.tune = tune;
        self
    }

    /// Sets the number of independent chains.
    #[must_use]
    pub fn with_chains(mut self, chains: usize) -> Self {
        self.chains = chains;
        self
    }

    /// The engine seed.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draws from the posterior defined by `priors` and `log_likelihood`.
    ///
    /// `log_likelihood` receives a full parameter vector (one entry per
    /// prior) and returns the data log-likelihood at that point. Proposals
    /// outside a uniform prior's support are rejected without calling it.
    ///
    /// # Errors
    ///
    /// Returns [`RemojoError::InputType`] if `priors` is empty,
    /// [`RemojoError::InvalidParameter`] for zero draws or chains, and
    /// propagates any error from `log_likelihood`.
    pub fn sample<F>(&self, priors: &[Prior], log_likelihood: F) -> Result<Trace>
    where
        F: Fn(&[f64]) -> Result<f64> + Sync,
    {
        if priors.is_empty() {
            return Err(RemojoError::InputType {
                expected: "at least one prior".to_string(),
                actual: "0 priors".to_string(),
            });
        }
        if self.draws == 0 {
            return Err(RemojoError::invalid_parameter("draws", 0.0, ">= 1"));
        }
        if self.chains == 0 {
            return Err(RemojoError::invalid_parameter("chains", 0.0, ">= 1"));
        }

        let chains: Result<Vec<Vec<Vec<f64>>>> = (0..self.chains)
            .into_par_iter()
            .map(|chain_idx| self.run_chain(chain_idx as u64, priors, &log_likelihood))
            .collect();

        Ok(Trace {
            chains: chains?,
            n_params: priors.len(),
        })
    }

    fn run_chain<F>(&self, chain_idx: u64, priors: &[Prior], log_likelihood: &F) -> Result<Vec<Vec<f64>>>
    where
        F: Fn(&[f64]) -> Result<f64> + Sync,
    {
        let mut rng = SamplerRng::new(self.seed.wrapping_add(chain_idx));

        // Overdispersed start: a draw from the central 80% of each prior
        let mut current: Vec<f64> = priors
            .iter()
            .map(|prior| prior.quantile(0.1 + 0.8 * rng.uniform()))
            .collect::<Result<_>>()?;
        let mut current_lp = log_posterior(priors, &current, log_likelihood)?
            .ok_or_else(|| RemojoError::Other("prior start point outside support".to_string()))?;

        let mut scales: Vec<f64> = priors.iter().map(|prior| 0.1 * prior.width()).collect();
        let mut accepted = 0usize;
        let mut proposal = vec![0.0; priors.len()];
        let mut draws = Vec::with_capacity(self.draws);

        for step in 0..(self.tune + self.draws) {
            for (slot, (xi, scale)) in proposal.iter_mut().zip(current.iter().zip(&scales)) {
                *slot = rng.normal(*xi, *scale);
            }

            if let Some(proposal_lp) = log_posterior(priors, &proposal, log_likelihood)? {
                let log_ratio = proposal_lp - current_lp;
                if log_ratio >= 0.0 || rng.uniform() < log_ratio.exp() {
                    current.copy_from_slice(&proposal);
                    current_lp = proposal_lp;
                    accepted += 1;
                }
            }

            let tuning = step < self.tune;
            if tuning && (step + 1) % ADAPT_INTERVAL == 0 {
                #[allow(clippy::cast_precision_loss)]
                let rate = accepted as f64 / ADAPT_INTERVAL as f64;
                // Nudge the proposal toward the 20-35% acceptance window
                if rate > 0.35 {
                    for scale in &mut scales {
                        *scale *= 1.2;
                    }
                } else if rate < 0.2 {
                    for scale in &mut scales {
                        *scale *= 0.8;
                    }
                }
                accepted = 0;
            }

            if !tuning {
                draws.push(current.clone());
            }
        }

        Ok(draws)
    }
}

/// Log posterior density up to a constant, or `None` outside the prior
/// support (so the likelihood is never evaluated at invalid points).
fn log_posterior<F>(priors: &[Prior], params: &[f64], log_likelihood: &F) -> Result<Option<f64>>
where
    F: Fn(&[f64]) -> Result<f64> + Sync,
{
    let mut log_prior = 0.0;
    for (prior, &x) in priors.iter().zip(params) {
        let lp = prior.log_density(x);
        if lp == f64::NEG_INFINITY {
            return Ok(None);
        }
        log_prior += lp;
    }
    let loglik = log_likelihood(params)?;
    if loglik == f64::NEG_INFINITY {
        return Ok(None);
    }
    Ok(Some(log_prior + loglik))
}

/// Recorded posterior draws, per chain and per parameter.
#[derive(Debug, Clone)]
pub struct Trace {
    // chains[c][d] is the parameter vector of draw d in chain c
    chains: Vec<Vec<Vec<f64>>>,
    n_params: usize,
}

impl Trace {
    /// Number of chains.
    #[must_use]
    pub fn n_chains(&self) -> usize {
        self.chains.len()
    }

    /// Number of recorded draws per chain.
    #[must_use]
    pub fn n_draws(&self) -> usize {
        self.chains.first().map_or(0, Vec::len)
    }

    /// Number of free parameters.
    #[must_use]
    pub fn n_params(&self) -> usize {
        self.n_params
    }

    /// One parameter's series within one chain.
    ///
    /// # Panics
    ///
    /// Panics if `chain` or `param` is out of bounds.
    #[must_use]
    pub fn chain_param(&self, chain: usize, param: usize) -> Vec<f64> {
        assert!(chain < self.n_chains(), "chain index out of bounds");
        assert!(param < self.n_params, "param index out of bounds");
        self.chains[chain].iter().map(|draw| draw[param]).collect()
    }

    /// One parameter's draws pooled across all chains.
    ///
    /// # Panics
    ///
    /// Panics if `param` is out of bounds.
    #[must_use]
    pub fn merged(&self, param: usize) -> Vec<f64> {
        assert!(param < self.n_params, "param index out of bounds");
        self.chains
            .iter()
            .flat_map(|chain| chain.iter().map(|draw| draw[param]))
            .collect()
    }

    /// Posterior mean of one parameter.
    #[must_use]
    pub fn posterior_mean(&self, param: usize) -> f64 {
        stats::mean(&self.merged(param))
    }

    /// Posterior standard deviation of one parameter.
    #[must_use]
    pub fn posterior_std(&self, param: usize) -> f64 {
        stats::std_dev(&self.merged(param))
    }

    /// Split R-hat of one parameter across chains.
    #[must_use]
    pub fn rhat(&self, param: usize) -> f64 {
        let series: Vec<Vec<f64>> = (0..self.n_chains())
            .map(|chain| self.chain_param(chain, param))
            .collect();
        split_rhat(&series)
    }

    /// Total effective sample size of one parameter, summed over chains.
    #[must_use]
    pub fn ess(&self, param: usize) -> f64 {
        (0..self.n_chains())
            .map(|chain| ess_autocorr(&self.chain_param(chain, param)))
            .sum()
    }
}

#[cfg(test)]
#[path = "sampler_tests.rs"]
mod tests;
