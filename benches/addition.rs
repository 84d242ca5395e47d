//! Addition benchmarks across vector sizes.
//!
//! Compares the scalar baseline, the vectorized adder, the rayon-parallel
//! adder and `ndarray`'s element-wise `+` at sizes that fall in successive
//! levels of the cache hierarchy.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ndarray::Array1;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use lanesum::simd::{add_into_with, Backend, PARALLEL_THRESHOLD};
use lanesum::SimdAdd;

/// f32 = 4 bytes, so 1M elements = 4 MiB
const VECTOR_SIZES: &[usize] = &[
    8,          // 32 B - one AVX2 register
    1_024,      // 4 KiB - L1 cache
    16_384,     // 64 KiB - L1→L2 transition
    262_144,    // 1 MiB - L2 cache
    4_194_304,  // 16 MiB - L3 cache
    16_777_216, // 64 MiB - main memory
];

/// Fixed seed so runs are comparable.
fn generate_test_data(len: usize) -> (Vec<f32>, Vec<f32>) {
    let mut rng = StdRng::seed_from_u64(42);

    let a: Vec<f32> = (0..len).map(|_| rng.random::<f32>()).collect();
    let b: Vec<f32> = (0..len).map(|_| rng.random::<f32>()).collect();

    (a, b)
}

fn format_size(elements: usize) -> String {
    let bytes = elements * std::mem::size_of::<f32>();

    if bytes >= 1_048_576 {
        format!("{:.1}_MiB", bytes as f64 / 1_048_576.0)
    } else if bytes >= 1024 {
        format!("{:.1}_KiB", bytes as f64 / 1024.0)
    } else {
        format!("{}_B", bytes)
    }
}

fn benchmark_addition_implementations(c: &mut Criterion) {
    for &size in VECTOR_SIZES {
        let mut group = c.benchmark_group(format!("Addition_{}", format_size(size)));

        // *2 for reading both input vectors
        group.throughput(Throughput::Bytes(
            (size * std::mem::size_of::<f32>() * 2) as u64,
        ));

        let (a_vec, b_vec) = generate_test_data(size);
        let a_slice = a_vec.as_slice();
        let b_slice = b_vec.as_slice();

        group.bench_with_input(
            BenchmarkId::new("simd", size),
            &(a_slice, b_slice),
            |b, (a, b_data)| b.iter(|| black_box(a.simd_add(black_box(*b_data)))),
        );

        group.bench_with_input(
            BenchmarkId::new("scalar", size),
            &(a_slice, b_slice),
            |b, (a, b_data)| b.iter(|| black_box(a.scalar_add(black_box(*b_data)))),
        );

        if size >= PARALLEL_THRESHOLD {
            group.bench_with_input(
                BenchmarkId::new("parallel_simd", size),
                &(a_slice, b_slice),
                |b, (a, b_data)| b.iter(|| black_box(a.par_simd_add(black_box(*b_data)))),
            );
        }

        let a_ndarray = Array1::from_vec(a_vec.clone());
        let b_ndarray = Array1::from_vec(b_vec.clone());
        group.bench_with_input(
            BenchmarkId::new("ndarray", size),
            &(&a_ndarray, &b_ndarray),
            |b, (a, b_data)| b.iter(|| black_box(*a + *b_data)),
        );

        group.finish();
    }
}

/// Each available backend on the same 64 KiB input.
fn benchmark_backends(c: &mut Criterion) {
    let size = 16_384;
    let (a, b) = generate_test_data(size);
    let mut out = vec![0.0f32; size];

    let mut group = c.benchmark_group("Backends");
    group.throughput(Throughput::Elements(size as u64));

    for backend in Backend::available() {
        group.bench_function(BenchmarkId::new(backend.to_string(), size), |bencher| {
            bencher.iter(|| add_into_with(backend, black_box(&a), black_box(&b), &mut out))
        });
    }

    group.finish();
}

fn benchmark_float_vector(c: &mut Criterion) {
    let (lhs, rhs) = lanesum::inputs::operands();

    c.bench_function("FloatVector_add", |b| {
        b.iter(|| black_box(black_box(lhs) + black_box(rhs)))
    });
}

criterion_group!(
    benches,
    benchmark_addition_implementations,
    benchmark_backends,
    benchmark_float_vector
);
criterion_main!(benches);
