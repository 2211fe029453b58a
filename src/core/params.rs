use serde::{Deserialize, Serialize};

use crate::types::Strategy;

/// Reduction parameters suitable for config files and embedding callers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeanParams {
    pub strategy: Strategy,
}

impl Default for MeanParams {
    fn default() -> Self {
        Self {
            strategy: Strategy::Vectorized,
        }
    }
}
