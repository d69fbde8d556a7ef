//! Builder configuration.
//!
//! Every field has a serde default so a partial (or empty) document
//! deserializes into a usable configuration.

use serde::{Deserialize, Serialize};

/// How face occurrences are counted.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassifyStrategy {
    /// Group faces by their sorted vertex tuple and count each group.
    #[default]
    Hashed,
    /// Compare every face against every other face. Quadratic; kept as the
    /// reference baseline.
    Pairwise,
}

/// Options for [`BrepBuilder`](crate::BrepBuilder).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BrepConfig {
    /// Occurrence counting method.
    #[serde(default)]
    pub strategy: ClassifyStrategy,

    /// Face count from which hashed counting is sharded across threads.
    /// Only read when the `parallel` feature is enabled.
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

fn default_parallel_threshold() -> usize {
    1 << 16
}

impl Default for BrepConfig {
    fn default() -> Self {
        Self {
            strategy: ClassifyStrategy::default(),
            parallel_threshold: default_parallel_threshold(),
        }
    }
}

impl BrepConfig {
    pub fn with_strategy(mut self, strategy: ClassifyStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }
}
