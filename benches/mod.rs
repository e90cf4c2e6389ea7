use criterion::{criterion_group, criterion_main};

mod guard;

criterion_group!(
    benches,
    guard::bench_publish_accepted,
    guard::bench_publish_oversize,
    guard::bench_publish_stats
);
criterion_main!(benches);
