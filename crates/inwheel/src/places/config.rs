use serde::{Deserialize, Serialize};

use crate::ingest::TagThresholds;

pub const DEFAULT_MAX_BATCH_SIZE: usize = 500;

/// Knobs for place evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluatorConfig {
    pub max_batch_size: usize,
    pub thresholds: TagThresholds,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            max_batch_size: DEFAULT_MAX_BATCH_SIZE,
            thresholds: TagThresholds::default(),
        }
    }
}
