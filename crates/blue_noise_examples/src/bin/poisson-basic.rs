use blue_noise::prelude::*;
use blue_noise_examples::{init_tracing, render_points_to_png, RenderConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = SamplerConfig::new(5.0, 30, 256.0);
    let sampling = PoissonDiskSampling::new(config);

    let mut rng = StdRng::seed_from_u64(42);
    let set = sampling.generate(&mut rng)?;
    info!(
        "Generated {} samples ({} accepted before cropping).",
        set.len(),
        set.accepted
    );

    // One black pixel per sample on a white background, image side equal to
    // the sample range.
    let render = RenderConfig::new(config.sample_range as u32);
    let out = "poisson-basic.png";
    render_points_to_png(&set.points, config.sample_range, &render, out)?;
    info!("Wrote {out}.");

    Ok(())
}
