//! Kruskal spanning tree benchmarks over precomputed distance matrices.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use waypath_benches::{
    error::BenchSetupError,
    params::MstBenchParams,
    source::{SyntheticConfig, SyntheticSource},
};
use waypath_core::{DistanceMatrix, build_spanning_tree};

const SEED: u64 = 42;
const EXTENT: u32 = 10_000;
const POINT_COUNTS: &[usize] = &[100, 250, 500];

fn mst_kruskal_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("kruskal");
    group.sample_size(20);

    for &point_count in POINT_COUNTS {
        let source = SyntheticSource::generate(&SyntheticConfig {
            point_count,
            extent: EXTENT,
            seed: SEED,
        })?;
        let matrix = DistanceMatrix::from_points(source.points());
        let _warmup = build_spanning_tree(&matrix)?;

        group.bench_with_input(
            BenchmarkId::from_parameter(MstBenchParams { point_count }),
            &matrix,
            |b, input| {
                b.iter(|| build_spanning_tree(input));
            },
        );
    }

    group.finish();
    Ok(())
}

fn mst_kruskal(c: &mut Criterion) {
    if let Err(err) = mst_kruskal_impl(c) {
        panic!("kruskal benchmark setup failed: {err}");
    }
}

criterion_group!(benches, mst_kruskal);
criterion_main!(benches);
