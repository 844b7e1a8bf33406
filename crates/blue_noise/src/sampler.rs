//! Poisson-disk dart throwing over the toroidal working domain.
//!
//! One [`PoissonDiskSampling::generate`] call owns all of its state: the
//! occupancy grid, the accepted-point list, and the worklist of points still
//! eligible to spawn darts. Nothing persists across runs, so independent runs
//! can proceed concurrently as long as each owns its own rng.
use std::collections::VecDeque;
use std::f32::consts::PI;

use glam::Vec2;
use rand::rand_core::RngCore;
use tracing::debug;

use crate::config::SamplerConfig;
use crate::error::Result;
use crate::grid::TorusGrid;

/// Poisson disk sampling strategy after Bridson (2007), toroidal variant.
#[derive(Debug, Clone, Default)]
pub struct PoissonDiskSampling {
    /// Run parameters.
    pub config: SamplerConfig,
}

impl PoissonDiskSampling {
    /// Create a new PoissonDiskSampling with the given configuration.
    pub fn new(config: SamplerConfig) -> Self {
        Self { config }
    }

    /// Runs one full generation and returns the cropped sample set.
    ///
    /// Validates the configuration before any allocation; an invalid
    /// configuration yields [`crate::error::Error::InvalidConfig`] rather
    /// than a partial result. For a fixed configuration and a seeded rng the
    /// output is identical across calls.
    pub fn generate(&self, rng: &mut dyn RngCore) -> Result<SampleSet> {
        self.config.validate()?;

        let mut run = SamplerRun::new(&self.config);
        Ok(run.generate(rng))
    }
}

/// Result of one generation run.
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
pub struct SampleSet {
    /// Accepted samples inside the requested square, in acceptance order.
    /// Each coordinate lies in `[0, sample_range]`.
    pub points: Vec<Vec2>,
    /// Samples accepted over the whole working domain, before cropping.
    pub accepted: usize,
    /// Total darts attempted.
    pub darts_thrown: usize,
    /// Darts rejected by the neighborhood conflict test.
    pub darts_rejected: usize,
}

impl SampleSet {
    /// Number of samples inside the requested square.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the cropped set is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates over the cropped samples in acceptance order.
    pub fn iter(&self) -> impl Iterator<Item = &Vec2> {
        self.points.iter()
    }
}

/// State owned by a single generation run.
struct SamplerRun<'a> {
    config: &'a SamplerConfig,
    grid: TorusGrid,
    /// Every accepted sample, wrapped into the working domain. Append-only.
    accepted: Vec<Vec2>,
    /// Accepted samples not yet used as dart origins.
    worklist: VecDeque<Vec2>,
    darts_thrown: usize,
    darts_rejected: usize,
}

impl<'a> SamplerRun<'a> {
    fn new(config: &'a SamplerConfig) -> Self {
        let grid = TorusGrid::new(config.min_dist, config.sample_range);
        let capacity = grid.capacity();

        Self {
            config,
            grid,
            accepted: Vec::with_capacity(capacity),
            worklist: VecDeque::new(),
            darts_thrown: 0,
            darts_rejected: 0,
        }
    }

    fn generate(&mut self, rng: &mut dyn RngCore) -> SampleSet {
        let extent = self.grid.extent();
        let seed = Vec2::new(rand01(rng) * extent, rand01(rng) * extent);
        self.accept(seed);

        // Breadth-first expansion: accepted darts join the back of the
        // worklist and spawn their own darts later in the same run.
        while let Some(active) = self.worklist.pop_front() {
            for _ in 0..self.config.k {
                self.darts_thrown += 1;

                let angle = rand01(rng) * 2.0 * PI;
                let dist = self.config.min_dist + rand01(rng) * self.config.min_dist;
                let candidate = active + Vec2::new(angle.cos() * dist, angle.sin() * dist);

                let cx = self.grid.cell_of(candidate.x);
                let cy = self.grid.cell_of(candidate.y);

                if self.grid.has_neighbor(cx, cy) {
                    self.darts_rejected += 1;
                    continue;
                }

                self.accept(candidate);
            }
        }

        let points = self.crop();

        debug!(
            "Poisson run: {} accepted, {} in range, {} of {} darts rejected.",
            self.accepted.len(),
            points.len(),
            self.darts_rejected,
            self.darts_thrown,
        );

        SampleSet {
            points,
            accepted: self.accepted.len(),
            darts_thrown: self.darts_thrown,
            darts_rejected: self.darts_rejected,
        }
    }

    /// Marks the sample's cell occupied and queues it for dart throwing.
    /// Callers must have cleared the conflict test first.
    fn accept(&mut self, point: Vec2) {
        let wrapped = Vec2::new(
            self.grid.wrap_position(point.x),
            self.grid.wrap_position(point.y),
        );
        let cx = self.grid.cell_of(wrapped.x);
        let cy = self.grid.cell_of(wrapped.y);

        self.grid.occupy(cx, cy);
        self.accepted.push(wrapped);
        self.worklist.push_back(wrapped);
    }

    /// Crops the working domain back to the requested square. Wrapping
    /// guarantees coordinates are non-negative, so only the upper bound is
    /// checked, inclusively.
    fn crop(&self) -> Vec<Vec2> {
        self.accepted
            .iter()
            .copied()
            .filter(|p| p.x <= self.config.sample_range && p.y <= self.config.sample_range)
            .collect()
    }
}

/// Generate a random float in the range [0, 1].
#[inline]
pub(crate) fn rand01(rng: &mut dyn RngCore) -> f32 {
    (rng.next_u32() as f32) / ((u32::MAX as f32) + 1.0)
}
