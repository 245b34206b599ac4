//! Convergence diagnostics for posterior sampling runs.
//!
//! Implements the split potential scale reduction factor (split R-hat) and
//! autocorrelation-based effective sample size.
//!
//! Reference: Gelman et al. (2013), "Bayesian Data Analysis", Ch. 11

/// Split potential scale reduction factor across chains.
///
/// Each chain is split in half and the halves are compared as separate
/// chains, so non-stationarity within a chain inflates the statistic the
/// same way disagreement between chains does. Values near 1 indicate the
/// chains sample the same distribution; above ~1.05 the run has not
/// converged.
///
/// Returns 1.0 when every draw is identical, infinity when chains are
/// frozen at different values, and NaN when there is too little data to
/// split (fewer than 4 draws per chain).
#[must_use]
pub fn split_rhat(chains: &[Vec<f64>]) -> f64 {
    let halves: Vec<&[f64]> = chains
        .iter()
        .flat_map(|chain| {
            let n = chain.len() / 2;
            // Drop the middle draw of an odd-length chain
            [&chain[..n], &chain[chain.len() - n..]]
        })
        .collect();

    let m = halves.len();
    let n = halves.first().map_or(0, |h| h.len());
    if m < 2 || n < 2 {
        return f64::NAN;
    }

    #[allow(clippy::cast_precision_loss)]
    let (m_f, n_f) = (m as f64, n as f64);

    let chain_means: Vec<f64> = halves
        .iter()
        .map(|h| h.iter().sum::<f64>() / n_f)
        .collect();
    let grand_mean = chain_means.iter().sum::<f64>() / m_f;

    // Between-chain variance B and mean within-chain variance W
    let b = chain_means
        .iter()
        .map(|mu| (mu - grand_mean).powi(2))
        .sum::<f64>()
        * n_f
        / (m_f - 1.0);
    let w = halves
        .iter()
        .zip(&chain_means)
        .map(|(h, mu)| h.iter().map(|x| (x - mu).powi(2)).sum::<f64>() / (n_f - 1.0))
        .sum::<f64>()
        / m_f;

    if w == 0.0 {
        // Frozen chains: identical everywhere is converged, disagreeing is not
        return if b == 0.0 { 1.0 } else { f64::INFINITY };
    }

    let var_plus = (n_f - 1.0) / n_f * w + b / n_f;
    (var_plus / w).sqrt()
}

/// Autocorrelation of a series at a given lag.
#[must_use]
pub fn autocorrelation(values: &[f64], lag: usize) -> f64 {
    let n = values.len();
    if lag >= n {
        return 0.0;
    }

    #[allow(clippy::cast_precision_loss)]
    let n_f = n as f64;
    let mean = values.iter().sum::<f64>() / n_f;
    let variance = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n_f;

    if variance < 1e-300 {
        return 0.0;
    }

    let covariance = values[..n - lag]
        .iter()
        .zip(&values[lag..])
        .map(|(x, y)| (x - mean) * (y - mean))
        .sum::<f64>()
        / n_f;

    covariance / variance
}

/// Effective sample size of a correlated series.
///
/// Sums autocorrelations until they become negligible, then computes
/// `n / (1 + 2 * sum(rho_k))`.
#[must_use]
pub fn ess_autocorr(values: &[f64]) -> f64 {
    let n = values.len();
    #[allow(clippy::cast_precision_loss)]
    let n_f = n as f64;
    if n < 4 {
        return n_f;
    }

    let max_lag = (n / 2).min(100);
    let mut sum_rho = 0.0;

    for lag in 1..max_lag {
        let rho = autocorrelation(values, lag);
        if rho.abs() < 0.05 {
            break;
        }
        sum_rho += rho;
    }

    let tau = 1.0 + 2.0 * sum_rho;
    if tau > 0.0 {
        (n_f / tau).min(n_f)
    } else {
        n_f
    }
}
