use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use dds_pixel_format::*;
use std::hint::black_box;

#[cfg(not(target_os = "windows"))]
use pprof::criterion::{Output, PProfProfiler};

/// Header-only DDS file holding the given flags and FourCC.
fn generate_dds_header(flags: u32, four_cc: FourCC) -> Vec<u8> {
    let mut data = vec![0u8; DDS_HEADER_SIZE];
    data[..4].copy_from_slice(&DDS_MAGIC.to_le_bytes());

    let block = &mut data[DDS_PIXELFORMAT_OFFSET..DDS_PIXELFORMAT_OFFSET + PIXEL_FORMAT_SIZE];
    block[0..4].copy_from_slice(&(PIXEL_FORMAT_SIZE as u32).to_le_bytes());
    block[4..8].copy_from_slice(&flags.to_le_bytes());
    block[8..12].copy_from_slice(&four_cc.to_bytes());
    data
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Pixel Format Decode");
    group.throughput(Throughput::Bytes(PIXEL_FORMAT_SIZE as u64));

    let cases = [
        ("dxt1", generate_dds_header(DDPF_FOURCC, FourCC::DXT1)),
        ("rgba8888", generate_dds_header(DDPF_RGB | DDPF_ALPHAPIXELS, FourCC::default())),
        ("luminance", generate_dds_header(DDPF_LUMINANCE, FourCC::default())),
    ];

    for (name, data) in cases.iter() {
        group.bench_function(format!("decode_pixel_format {name}"), |b| {
            b.iter(|| decode_pixel_format(black_box(data), black_box(DDS_PIXELFORMAT_OFFSET)))
        });
        group.bench_function(format!("decode_dds_pixel_format {name}"), |b| {
            b.iter(|| decode_dds_pixel_format(black_box(data)))
        });
    }

    group.finish();
}

#[cfg(not(target_os = "windows"))]
criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = criterion_benchmark
}

#[cfg(target_os = "windows")]
criterion_group!(benches, criterion_benchmark);

criterion_main!(benches);
