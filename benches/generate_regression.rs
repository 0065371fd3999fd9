//! iai-callgrind regression benchmarks for the generator.
//!
//! Counts CPU instructions (via Valgrind) rather than wall-clock time, so a
//! seeded run is fully deterministic on CI.
//!
//! Run locally (requires valgrind):
//!   cargo bench --bench generate_regression

use iai_callgrind::{library_benchmark, library_benchmark_group, main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::hint::black_box;

use globstress::{GenConfig, GlobalList, generate};

fn render(globals: usize, prints: usize) -> Vec<u8> {
    let config = GenConfig {
        globals,
        prints,
        ..GenConfig::default()
    };
    let mut rng = StdRng::seed_from_u64(42);
    let mut buf = Vec::with_capacity(globals * 24 + prints * 16);
    generate(&config, &mut rng, &mut buf).unwrap();
    buf
}

#[library_benchmark]
fn build_global_list() -> GlobalList {
    let mut rng = StdRng::seed_from_u64(42);
    black_box(GlobalList::generate(&mut rng, black_box(1000), 5))
}

#[library_benchmark]
fn generate_default() -> Vec<u8> {
    black_box(render(black_box(1000), black_box(200)))
}

#[library_benchmark]
fn generate_large() -> Vec<u8> {
    black_box(render(black_box(100_000), black_box(20_000)))
}

library_benchmark_group!(
    name = generate_group;
    benchmarks = build_global_list, generate_default, generate_large
);

main!(library_benchmark_groups = generate_group);
