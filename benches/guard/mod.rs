use criterion::{BatchSize, Criterion, Throughput};
use safepublish::network::application::mqtt::{Options, PublishGuard};
use safepublish::network::{ClientState, MqttClient};
use std::hint::black_box;

/// In-memory client that accepts everything and keeps only a byte count.
struct CountingClient {
    buffer: usize,
    bytes: usize,
}

impl ClientState for CountingClient {
    fn connected(&self) -> bool {
        true
    }

    fn buffer_size(&self) -> usize {
        self.buffer
    }

    fn set_buffer_size(&mut self, size: usize) {
        self.buffer = size;
    }
}

impl MqttClient for CountingClient {
    fn publish(&mut self, topic: &str, payload: &[u8]) -> bool {
        self.bytes += topic.len() + payload.len();
        true
    }
}

fn discard(_text: &str) {}

fn quiet() -> Options {
    Options {
        log_success: false,
        ..Options::default()
    }
}

pub fn bench_publish_accepted(c: &mut Criterion) {
    let mut group = c.benchmark_group("publish_accepted");
    let payload = r#"{"temp":23.5,"humidity":65,"timestamp":1234567890}"#;
    group.throughput(Throughput::Bytes(payload.len() as u64));
    group.bench_function("publish_accepted", |b| {
        let mut client = CountingClient {
            buffer: 256,
            bytes: 0,
        };
        let mut guard = PublishGuard::with_options(&mut client, quiet());
        guard.set_output_function(discard);
        b.iter(|| guard.publish(black_box("devices/sensor01/data"), black_box(payload)));
    });
    group.finish();
}

pub fn bench_publish_oversize(c: &mut Criterion) {
    let mut group = c.benchmark_group("publish_oversize");
    let payload = "x".repeat(1024);
    group.throughput(Throughput::Bytes(payload.len() as u64));
    group.bench_function("publish_oversize", |b| {
        let mut client = CountingClient {
            buffer: 256,
            bytes: 0,
        };
        let mut guard = PublishGuard::new(&mut client);
        guard.set_output_function(discard);
        b.iter(|| guard.publish(black_box("devices/sensor01/data"), black_box(&payload)));
    });
    group.finish();
}

pub fn bench_publish_stats(c: &mut Criterion) {
    let mut group = c.benchmark_group("publish_stats");
    group.bench_function("publish_stats", |b| {
        b.iter_batched_ref(
            || CountingClient {
                buffer: 256,
                bytes: 0,
            },
            |client| {
                let mut guard = PublishGuard::with_options(client, quiet());
                for _ in 0..50 {
                    guard.publish("devices/sensor01/data", "23.5");
                }
                guard.publish_stats("devices/sensor01/stats")
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}
