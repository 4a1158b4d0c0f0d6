use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use wave_transform::{transform_wave_in_place, transform_wave_with_settings, WaveTransformSettings};

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
use pprof::criterion::{Output, PProfProfiler};

/// Generates `len` pseudo random values with a fixed seed.
fn generate_input(len: usize) -> Vec<i64> {
    let mut state = 0x9E37_79B9_7F4A_7C15_u64;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state as i64
        })
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Wave Transform (i64)");

    // Roughly 8MB of input, trimmed to a whole number of blocks per half width.
    let target_len = 8388608 / size_of::<i64>();

    for half_width in [1usize, 2, 4, 16, 64] {
        let settings = WaveTransformSettings::new(half_width);
        let block_size = half_width * 2 + 1;
        let len = target_len - (target_len % block_size);

        let input = generate_input(len);
        let mut output = vec![0i64; len];
        group.throughput(criterion::Throughput::Bytes((len * size_of::<i64>()) as u64));

        group.bench_with_input(
            BenchmarkId::new("with_settings", half_width),
            &input,
            |b, input| {
                b.iter(|| {
                    transform_wave_with_settings(black_box(input), black_box(&mut output), settings)
                        .unwrap()
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("in_place", half_width),
            &input,
            |b, input| {
                let mut data = input.clone();
                b.iter(|| transform_wave_in_place(black_box(&mut data), settings).unwrap())
            },
        );

        #[cfg(feature = "multithreaded")]
        group.bench_with_input(
            BenchmarkId::new("parallel", half_width),
            &input,
            |b, input| {
                b.iter(|| {
                    wave_transform::transform_wave_parallel(
                        black_box(input),
                        black_box(&mut output),
                        settings,
                    )
                    .unwrap()
                })
            },
        );
    }

    group.finish();
}

#[cfg(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
))]
criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = criterion_benchmark
}

#[cfg(not(all(
    any(target_os = "linux", target_os = "macos"),
    any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")
)))]
criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = criterion_benchmark
}

criterion_main!(benches);
