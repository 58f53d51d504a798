//! Per-chromosome genetic maps.

pub use crate::errors::MapError;
use crate::meiosis::MAX_CHROMOSOME_LENGTH;
use serde::{Deserialize, Serialize};

/// Cumulative genetic positions (Morgans) of the loci on one chromosome.
///
/// Positions are finite, non-decreasing and start at 0. The last position is
/// the total genetic length of the chromosome and equals the expected number
/// of crossovers per meiosis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct GeneticMap {
    positions: Vec<f64>,
}

impl GeneticMap {
    /// Create a map from locus positions in Morgans.
    ///
    /// # Errors
    /// Returns an error if the positions are empty, non-finite, decreasing,
    /// do not start at 0, or span more than [`MAX_CHROMOSOME_LENGTH`].
    pub fn new(positions: Vec<f64>) -> Result<Self, MapError> {
        let first = *positions.first().ok_or(MapError::Empty)?;
        for (index, window) in positions.windows(2).enumerate() {
            if window[1] < window[0] {
                return Err(MapError::Decreasing {
                    index: index + 1,
                    previous: window[0],
                    value: window[1],
                });
            }
        }
        if let Some((index, &value)) = positions.iter().enumerate().find(|(_, p)| !p.is_finite())
        {
            return Err(MapError::NotFinite { index, value });
        }
        if first != 0.0 {
            return Err(MapError::NonZeroStart(first));
        }
        let length = positions[positions.len() - 1];
        if length > MAX_CHROMOSOME_LENGTH {
            return Err(MapError::TooLong {
                length,
                max: MAX_CHROMOSOME_LENGTH,
            });
        }
        Ok(Self { positions })
    }

    /// Create a map with `n_loci` evenly spaced loci spanning `length` Morgans.
    ///
    /// A single-locus map is `[0.0]` regardless of `length`.
    pub fn uniform(n_loci: usize, length: f64) -> Result<Self, MapError> {
        if !length.is_finite() || length < 0.0 {
            return Err(MapError::NotFinite {
                index: n_loci.saturating_sub(1),
                value: length,
            });
        }
        let positions = match n_loci {
            0 => Vec::new(),
            1 => vec![0.0],
            n => {
                let step = length / (n - 1) as f64;
                let mut positions: Vec<f64> = (0..n).map(|i| i as f64 * step).collect();
                // Pin the last locus to the exact length.
                positions[n - 1] = length;
                positions
            }
        };
        Self::new(positions)
    }

    /// Number of loci on the map.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Always `false` for a validated map; provided for API symmetry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Total genetic length of the chromosome in Morgans.
    #[inline]
    pub fn length(&self) -> f64 {
        self.positions[self.positions.len() - 1]
    }

    /// Borrow the positions as a slice.
    #[inline]
    pub fn positions(&self) -> &[f64] {
        &self.positions
    }

    /// Return a copy of this map with every position multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Result<Self, MapError> {
        if !factor.is_finite() || factor <= 0.0 {
            return Err(MapError::InvalidScale(factor));
        }
        Self::new(self.positions.iter().map(|p| p * factor).collect())
    }
}

impl TryFrom<Vec<f64>> for GeneticMap {
    type Error = MapError;

    fn try_from(positions: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(positions)
    }
}

impl From<GeneticMap> for Vec<f64> {
    fn from(map: GeneticMap) -> Self {
        map.positions
    }
}
