use criterion::{criterion_group, criterion_main, Criterion};
use flexid::{hash_to_partition, FlexId, FlexIdConfig, SharedFlexId};
use std::hint::black_box;

pub fn bit_width_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("Bit Width Comparison");

    // Wider fields trade timestamp range for more sequences per ms and more partitions
    for &(sequence_bits, partition_bits) in &[(0, 0), (8, 8), (10, 8), (12, 4), (15, 15)] {
        let config = FlexIdConfig::new(0, sequence_bits, partition_bits).unwrap();

        group.bench_function(
            format!("seq_{}_part_{}", sequence_bits, partition_bits),
            |b| {
                let mut generator = FlexId::with_config(config);
                b.iter(|| {
                    black_box(generator.generate());
                });
            },
        );
    }

    group.finish();
}

pub fn call_pattern_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Call Patterns");
    let mut generator = FlexId::default();

    group.bench_function("generate_at", |b| {
        b.iter(|| black_box(generator.generate_at(black_box(1_000))));
    });
    group.bench_function("generate_exact", |b| {
        b.iter(|| black_box(generator.generate_exact(black_box(1_000), 7, 3)));
    });
    group.bench_function("generate_for_key", |b| {
        b.iter(|| black_box(generator.generate_for_key(black_box("user-1234"))));
    });
    group.bench_function("hash_to_partition", |b| {
        b.iter(|| black_box(hash_to_partition(black_box("user-1234"))));
    });

    group.finish();
}

pub fn component_extraction_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Component Extraction");
    let mut generator = FlexId::default();
    let id = generator.generate();

    group.bench_function("extract_components", |b| {
        b.iter(|| {
            black_box(generator.extract.decompose(black_box(id)));
        });
    });
    group.bench_function("extract_narrow_partition", |b| {
        b.iter(|| {
            black_box(generator.extract.partition(black_box(id), 4));
        });
    });

    group.finish();
}

pub fn concurrent_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Concurrent");

    for &thread_count in &[2, 4, 8] {
        group.bench_function(format!("threads/{}", thread_count), |b| {
            b.iter(|| {
                let generator = std::sync::Arc::new(SharedFlexId::new(FlexId::default()));
                let mut handles = Vec::with_capacity(thread_count);

                for _ in 0..thread_count {
                    let gen = std::sync::Arc::clone(&generator);
                    handles.push(std::thread::spawn(move || {
                        black_box(gen.generate());
                    }));
                }

                for handle in handles {
                    handle.join().unwrap();
                }
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bit_width_comparison,
    call_pattern_benchmarks,
    concurrent_benchmarks,
    component_extraction_benchmarks
);
criterion_main!(benches);
