//! Core reduction building blocks: the scalar and vectorized harmonic mean
//! kernels and the parameter set consumed by the high-level `api` module.
pub mod mean;
pub mod params;
