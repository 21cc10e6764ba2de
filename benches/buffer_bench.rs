//! Benchmarks for the data buffer
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use dataviewer::*;

fn create_chunks(count: usize, samples: usize) -> TimeSeriesList {
    // Alternate chunk order so coalesce has to sort
    let mut chunks: Vec<TimeSeries> = (0..count)
        .map(|i| {
            let t0 = (i * samples) as f64;
            TimeSeries::new(t0, 1.0, (0..samples).map(|k| (t0 + k as f64).sin()).collect())
        })
        .collect();
    chunks.reverse();
    TimeSeriesList::from(chunks)
}

fn bench_coalesce(c: &mut Criterion) {
    let mut group = c.benchmark_group("coalesce");

    for count in [10, 100, 1000] {
        let list = create_chunks(count, 64);

        group.throughput(Throughput::Elements(count as u64));
        group.bench_function(format!("chunks_{}", count), |b| {
            b.iter(|| black_box(list.clone()).coalesce())
        });
    }

    group.finish();
}

fn bench_segments(c: &mut Criterion) {
    let mut group = c.benchmark_group("segments");

    let a: SegmentList = (0..1000)
        .map(|i| Segment::new(i as f64 * 10.0, i as f64 * 10.0 + 6.0))
        .collect();
    let b: SegmentList = (0..1000)
        .map(|i| Segment::new(i as f64 * 10.0 + 3.0, i as f64 * 10.0 + 9.0))
        .collect();

    group.bench_function("difference_1000", |bench| {
        bench.iter(|| black_box(&a) - black_box(&b))
    });
    group.bench_function("intersection_1000", |bench| {
        bench.iter(|| black_box(&a) & black_box(&b))
    });

    group.finish();
}

fn bench_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("buffer_get");
    let registry = SourceRegistry::default();
    let options = FetchOptions::new();

    group.bench_function("cached_slice", |b| {
        let mut buffer =
            DataBuffer::from_registry(vec!["H1:A-B", "L1:A-B"], &registry, "simulated").unwrap();
        buffer.get((0.0, 64.0), true, &options).unwrap();

        b.iter(|| buffer.get(black_box((16.0, 48.0)), true, &options).unwrap())
    });

    group.bench_function("sliding_window", |b| {
        let mut buffer = DataBuffer::from_registry("H1:A-B", &registry, "simulated").unwrap();
        let mut t = 0.0;

        b.iter(|| {
            t += 1.0;
            buffer.get(black_box((t, t + 4.0)), true, &options).unwrap()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_coalesce, bench_segments, bench_get);
criterion_main!(benches);
