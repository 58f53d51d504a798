//! Sex-specific scaling of genetic maps (heterochiasmy).

use crate::base::Sex;
pub use crate::errors::MeiosisError;
use serde::{Deserialize, Serialize};

/// Relative female:male recombination rate.
///
/// The shared genetic map describes the sex-averaged rate. For a ratio `r`
/// the female map is scaled by `2 / (1/r + 1)` and the male map by
/// `2 / (r + 1)`, which keeps the sex average unchanged. A ratio of 1.0
/// leaves both maps as they are.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct RecombinationRatio(f64);

impl RecombinationRatio {
    /// Equal recombination rates in both sexes.
    pub const EQUAL: Self = Self(1.0);

    /// Create a ratio, rejecting non-finite and non-positive values.
    pub fn new(ratio: f64) -> Result<Self, MeiosisError> {
        if !ratio.is_finite() || ratio <= 0.0 {
            return Err(MeiosisError::InvalidRatio(ratio));
        }
        Ok(Self(ratio))
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Multiplier applied to the shared map for female meioses.
    #[inline]
    pub fn female_scale(self) -> f64 {
        2.0 / (1.0 / self.0 + 1.0)
    }

    /// Multiplier applied to the shared map for male meioses.
    #[inline]
    pub fn male_scale(self) -> f64 {
        2.0 / (self.0 + 1.0)
    }

    /// Multiplier for a meiosis in the given sex.
    #[inline]
    pub fn scale(self, sex: Sex) -> f64 {
        match sex {
            Sex::Female => self.female_scale(),
            Sex::Male => self.male_scale(),
        }
    }
}

impl Default for RecombinationRatio {
    fn default() -> Self {
        Self::EQUAL
    }
}

impl TryFrom<f64> for RecombinationRatio {
    type Error = MeiosisError;

    fn try_from(ratio: f64) -> Result<Self, Self::Error> {
        Self::new(ratio)
    }
}

impl From<RecombinationRatio> for f64 {
    fn from(ratio: RecombinationRatio) -> Self {
        ratio.0
    }
}
