use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ndarray::Array1;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use simd_relu::kernel::{DEFAULT_LANE_COUNT, DEFAULT_UKERNEL, DEFAULT_UKERNEL_NAME};
use simd_relu::scalar::relu_scalar;
use simd_relu::{relu_inplace, ReluParams, SimdRelu};

// ====================================================================================
// --- Configuration: sizes span the cache hierarchy ---
// ====================================================================================

/// Vector sizes chosen to test performance across different CPU cache levels.
///
/// *   4 KiB: fits in L1, tests raw compute.
/// *   64 KiB: pushes the limits of L1.
/// *   1 MiB: fits in L2.
/// *   16 MiB: fits in most L3 caches.
/// *   64 MiB: memory-bound.
const VECTOR_SIZES: &[usize] = &[
    1024,             // 4 KiB
    16 * 1024,        // 64 KiB
    256 * 1024,       // 1 MiB
    4 * 1024 * 1024,  // 16 MiB
    16 * 1024 * 1024, // 64 MiB
];

/// Fixed seed so every run sees the same half-negative data.
fn generate_random_data(len: usize) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..len).map(|_| rng.random_range(-1.0..1.0)).collect()
}

fn all_benchmarks(c: &mut Criterion) {
    let params = ReluParams::default();

    for &size in VECTOR_SIZES {
        let mut group = c.benchmark_group("ReLU".to_string());
        group.throughput(Throughput::Bytes(
            size as u64 * std::mem::size_of::<f32>() as u64,
        ));

        let data = generate_random_data(size);
        let arr = Array1::from_vec(data.clone());

        group.bench_with_input(BenchmarkId::new("scalar", size), &data, |b, v| {
            b.iter(|| black_box(v.as_slice().scalar_relu()))
        });

        group.bench_with_input(
            BenchmarkId::new(format!("simd {DEFAULT_UKERNEL_NAME}"), size),
            &data,
            |b, v| b.iter(|| black_box(v.as_slice().simd_relu())),
        );

        // Raw kernel without allocation; sizes are multiples of the lane count.
        let mut out = vec![0.0f32; size];
        group.bench_with_input(
            BenchmarkId::new(format!("ukernel {DEFAULT_UKERNEL_NAME}"), size),
            &data,
            |b, v| {
                assert_eq!(v.len() % DEFAULT_LANE_COUNT, 0);
                b.iter(|| unsafe {
                    DEFAULT_UKERNEL(
                        black_box(v.len() * 4),
                        v.as_ptr(),
                        out.as_mut_ptr(),
                        &params,
                    )
                })
            },
        );

        let mut buf = data.clone();
        group.bench_function(BenchmarkId::new("in place", size), |b| {
            b.iter(|| black_box(relu_inplace(black_box(&mut buf), &params)))
        });

        group.bench_with_input(BenchmarkId::new("ndarray", size), &arr, |b, a| {
            b.iter(|| black_box(a.mapv(relu_scalar)))
        });

        group.finish();
    }
}

criterion_group!(benches, all_benchmarks);
criterion_main!(benches);
