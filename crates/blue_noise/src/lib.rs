#![forbid(unsafe_code)]
//! blue_noise: Poisson-disk (blue-noise) point set generation on a toroidal domain.
//!
//! Implements the fast dart-throwing method of Bridson (SIGGRAPH 2007) over a
//! square domain whose working copy wraps toroidally, which keeps neighbor
//! queries near the edges trivial. The result is cropped back to the requested
//! square, so edge spacing is approximate while interior spacing is exact.
//!
//! Modules:
//! - config: run parameters and validation
//! - grid: toroidal occupancy grid and cell index math
//! - sampler: the dart-throwing loop and result extraction
pub mod config;
pub mod error;
pub mod grid;
pub mod sampler;

/// Convenient re-exports for common types. Import with `use blue_noise::prelude::*;`.
pub mod prelude {
    pub use crate::config::SamplerConfig;
    pub use crate::error::{Error, Result};
    pub use crate::sampler::{PoissonDiskSampling, SampleSet};
}
