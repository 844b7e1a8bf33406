//! Run parameters for one generation run.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Parameters for a Poisson-disk generation run. Immutable for the duration
/// of one run.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SamplerConfig {
    /// Minimum distance between any two samples in world units.
    pub min_dist: f32,
    /// Darts attempted per active point. Higher `k` fills the domain more
    /// completely at higher cost.
    pub k: u32,
    /// Side length of the requested square domain, from 0 to `sample_range`
    /// inclusive.
    pub sample_range: f32,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            min_dist: 5.0,
            k: 30,
            sample_range: 256.0,
        }
    }
}

impl SamplerConfig {
    /// Creates a new [`SamplerConfig`] from the three run parameters.
    pub fn new(min_dist: f32, k: u32, sample_range: f32) -> Self {
        Self {
            min_dist,
            k,
            sample_range,
        }
    }

    /// Sets the minimum sample distance.
    pub fn with_min_dist(mut self, min_dist: f32) -> Self {
        self.min_dist = min_dist;
        self
    }

    /// Sets the darts attempted per active point.
    pub fn with_k(mut self, k: u32) -> Self {
        self.k = k;
        self
    }

    /// Sets the side length of the requested square domain.
    pub fn with_sample_range(mut self, sample_range: f32) -> Self {
        self.sample_range = sample_range;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if !self.min_dist.is_finite() || self.min_dist <= 0.0 {
            return Err(Error::InvalidConfig("min_dist must be > 0".into()));
        }
        if self.k == 0 {
            return Err(Error::InvalidConfig("k must be > 0".into()));
        }
        if !self.sample_range.is_finite() || self.sample_range <= self.min_dist {
            return Err(Error::InvalidConfig(
                "sample_range must be > min_dist".into(),
            ));
        }

        Ok(())
    }
}
