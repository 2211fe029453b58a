//! High-level, ergonomic library API: compute harmonic means with the default
//! or an explicit strategy, or wrap the outcome in a `MeanReport` for
//! machine-readable output. Prefer these entrypoints over the low-level
//! kernels in `core` when integrating HARMONY.
use serde::{Deserialize, Serialize};

use crate::core::mean::{harmonic_mean_scalar, harmonic_mean_vectorized};
use crate::core::params::MeanParams;
use crate::error::Result;
use crate::types::Strategy;

/// Result of a reduction, suitable for machine-readable reporting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeanReport {
    pub count: usize,
    pub strategy: Strategy,
    pub mean: f64,
}

/// Compute the harmonic mean with the default strategy.
pub fn harmonic_mean(nums: &[f64]) -> Result<f64> {
    harmonic_mean_with(nums, MeanParams::default().strategy)
}

/// Compute the harmonic mean with an explicit strategy.
pub fn harmonic_mean_with(nums: &[f64], strategy: Strategy) -> Result<f64> {
    match strategy {
        Strategy::Scalar => harmonic_mean_scalar(nums),
        Strategy::Vectorized => harmonic_mean_vectorized(nums),
    }
}

/// Compute the harmonic mean and wrap the outcome in a [`MeanReport`].
pub fn harmonic_mean_report(nums: &[f64], params: &MeanParams) -> Result<MeanReport> {
    let mean = harmonic_mean_with(nums, params.strategy)?;
    Ok(MeanReport {
        count: nums.len(),
        strategy: params.strategy,
        mean,
    })
}
