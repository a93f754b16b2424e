use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use pdw_core::{encode_markers, encode_relative_power, PdwRecord, PulseDescriptor};

fn descriptor() -> PulseDescriptor {
    PulseDescriptor {
        marked_operation: 1,
        frequency_hz: 9.4e9,
        phase_deg: 45.0,
        pulse_start_time: 100_000_000,
        pulse_width: 500_000,
        relative_power_db: -3.0,
        markers: "15a".to_string(),
        pulse_mode: 2,
        chirp_control: 1,
        ..PulseDescriptor::default()
    }
}

fn bench_encode(c: &mut Criterion) {
    let desc = descriptor();
    let record = PdwRecord::new(&desc).unwrap();

    c.bench_function("record_new", |b| {
        b.iter(|| PdwRecord::new(black_box(&desc)).unwrap())
    });

    c.bench_function("record_encode", |b| {
        b.iter(|| black_box(&record).encode().unwrap())
    });

    c.bench_function("relative_power", |b| {
        b.iter(|| encode_relative_power(black_box(-3.0)).unwrap())
    });

    c.bench_function("markers", |b| b.iter(|| encode_markers(black_box("15a"))));
}

criterion_group!(benches, bench_encode);
criterion_main!(benches);
