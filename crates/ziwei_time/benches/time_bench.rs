use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ziwei_time::{ClockTime, TimeBucket, bucket_from_hhmm};

fn bench_bucket_conversion(c: &mut Criterion) {
    c.bench_function("bucket_from_hhmm", |b| {
        b.iter(|| bucket_from_hhmm(black_box("13:30")).unwrap())
    });

    c.bench_function("bucket_from_clock", |b| {
        let clock = ClockTime::new(13, 30).unwrap();
        b.iter(|| TimeBucket::from_clock(black_box(clock)))
    });
}

criterion_group!(benches, bench_bucket_conversion);
criterion_main!(benches);
