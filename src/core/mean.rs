//! The two harmonic mean kernels: `n / Σ(1/x_i)` over a nonempty slice of
//! nonzero values. Zero elements are rejected up front rather than left to
//! produce an infinite reciprocal.
use ndarray::ArrayView1;

use crate::error::{Error, Result};

/// Scalar kernel: single pass over the slice, accumulating reciprocals.
pub fn harmonic_mean_scalar(nums: &[f64]) -> Result<f64> {
    if nums.is_empty() {
        return Err(Error::EmptyInput);
    }

    let mut recip_sum = 0.0;
    for (index, &value) in nums.iter().enumerate() {
        if value == 0.0 {
            return Err(Error::DivisionByZero { index });
        }
        recip_sum += 1.0 / value;
    }

    Ok(nums.len() as f64 / recip_sum)
}

/// Vectorized kernel: bulk reciprocal over an `ndarray` view, then one sum.
///
/// Agrees with [`harmonic_mean_scalar`] up to floating-point rounding; the
/// summation order is not guaranteed to match bit-for-bit.
pub fn harmonic_mean_vectorized(nums: &[f64]) -> Result<f64> {
    if nums.is_empty() {
        return Err(Error::EmptyInput);
    }
    if let Some(index) = nums.iter().position(|&value| value == 0.0) {
        return Err(Error::DivisionByZero { index });
    }

    let values = ArrayView1::from(nums);
    let recip_sum = values.mapv(f64::recip).sum();

    Ok(values.len() as f64 / recip_sum)
}
