mod common;

use std::hint::black_box;

use blue_noise::config::SamplerConfig;
use blue_noise::sampler::PoissonDiskSampling;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

const MIN_DISTS: [f32; 5] = [32.0, 16.0, 8.0, 4.0, 2.0];
const SAMPLE_RANGE: f32 = 1024.0;

fn poisson_disk_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampling/poisson_disk");

    for &min_dist in &MIN_DISTS {
        let strategy = PoissonDiskSampling::new(SamplerConfig::new(min_dist, 30, SAMPLE_RANGE));

        let mut rng_est = StdRng::seed_from_u64(0xBEEFu64 ^ (min_dist as u64));
        let expected = strategy.generate(&mut rng_est).unwrap().len();
        group.throughput(common::elements_throughput(expected));

        let mut rng = StdRng::seed_from_u64(0xC0FFEEu64 ^ (min_dist as u64));
        group.bench_with_input(BenchmarkId::from_parameter(min_dist), &min_dist, |b, _| {
            b.iter(|| {
                let set = strategy.generate(&mut rng).unwrap();
                black_box(set.len());
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = poisson_disk_benches
}
criterion_main!(benches);
