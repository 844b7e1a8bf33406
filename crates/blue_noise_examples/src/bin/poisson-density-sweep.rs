use blue_noise::prelude::*;
use blue_noise_examples::{init_tracing, render_points_to_png, RenderConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

const SAMPLE_RANGE: f32 = 256.0;
const MIN_DISTS: [f32; 4] = [32.0, 16.0, 8.0, 4.0];

fn main() -> anyhow::Result<()> {
    init_tracing();

    // Sample count should scale roughly with (sample_range / min_dist)^2.
    for min_dist in MIN_DISTS {
        let config = SamplerConfig::new(min_dist, 30, SAMPLE_RANGE);
        let sampling = PoissonDiskSampling::new(config);

        let mut rng = StdRng::seed_from_u64(7);
        let set = sampling.generate(&mut rng)?;
        info!("min_dist {:>4}: {} samples.", min_dist, set.len());

        let render = RenderConfig::new(512).with_point_radius(1);
        let out = format!("poisson-density-{min_dist}.png");
        render_points_to_png(&set.points, SAMPLE_RANGE, &render, &out)?;
        info!("Wrote {out}.");
    }

    Ok(())
}
