//! Shared types and enums used across HARMONY.
//! Includes the reduction `Strategy` selectable from the CLI and config files.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How the reciprocal sum is computed. Both strategies implement the same
/// contract; results may differ in the last bits depending on summation order.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum Strategy {
    /// One pass over the input slice, accumulating reciprocals.
    Scalar,
    /// Bulk reciprocal map over an `ndarray` view, then a single sum.
    Vectorized,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::Scalar => write!(f, "Scalar"),
            Strategy::Vectorized => write!(f, "Vectorized"),
        }
    }
}
