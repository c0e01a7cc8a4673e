//! Пропускная способность декодера на синтетическом логе.

use std::io::Cursor;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use tlm_core::{read_all_records, TlmReader};

/// Синтетический лог: один flight start + поток Rxdata блоков.
fn synthetic_log(blocks: u32) -> Vec<u8> {
    let mut raw = Vec::with_capacity(36 + blocks as usize * 20);

    raw.extend_from_slice(&[0xff, 0xff, 0xff, 0xff, 0x05, 0x01]);
    let mut payload = [0u8; 30];
    payload[6..13].copy_from_slice(b"BenchRC");
    raw.extend_from_slice(&payload);

    for i in 0..blocks {
        raw.extend_from_slice(&(100 + i).to_le_bytes());
        raw.push(0x7f);
        raw.push(0x00);
        for w in [1u16, 2, 3, 4, 5, 6, 700] {
            raw.extend_from_slice(&w.to_be_bytes());
        }
    }

    raw
}

fn bench_decode(c: &mut Criterion) {
    let raw = synthetic_log(10_000);
    let bytes = raw.len() as u64;

    let mut group = c.benchmark_group("decode");
    group.throughput(Throughput::Bytes(bytes));

    group.bench_function("rx_stream_10k", |b| {
        b.iter_batched(
            || raw.clone(),
            |data| {
                let mut reader = TlmReader::new(Cursor::new(data));
                read_all_records(&mut reader).unwrap()
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
