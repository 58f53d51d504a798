//! Serializable engine configuration.

use crate::meiosis::RecombinationRatio;
use serde::{Deserialize, Serialize};

/// Engine settings that can be stored alongside a scenario.
///
/// Genetic maps are supplied separately because they usually come from the
/// chromosome layout rather than from user configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CrossingConfig {
    /// Female:male recombination ratio
    #[serde(default)]
    pub recombination_ratio: RecombinationRatio,
    /// Worker threads; `None` uses rayon's global pool
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threads: Option<usize>,
}

impl CrossingConfig {
    pub fn new(recombination_ratio: RecombinationRatio, threads: Option<usize>) -> Self {
        Self {
            recombination_ratio,
            threads,
        }
    }
}
