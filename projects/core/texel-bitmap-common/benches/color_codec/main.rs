use criterion::{criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use std::hint::black_box;
use texel_bitmap_common::color::{Color8, ColorF32, ColorFormat};

const NUM_ITEMS: usize = 1_000_000; // 1 million pixels, a 1024x1024 mip

fn sequential_raw_values(format: ColorFormat) -> Vec<u32> {
    let width_mask = format.descriptor().width_mask();
    (0..NUM_ITEMS)
        .map(|x| (x as u32).wrapping_mul(2_654_435_761) & width_mask)
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Colour Codec");
    group.throughput(Throughput::Elements(NUM_ITEMS as u64));

    for format in [
        ColorFormat::Rgba8888,
        ColorFormat::Rgb565,
        ColorFormat::Argb4444,
        ColorFormat::Argb1555,
    ] {
        let raw = sequential_raw_values(format);

        group.bench_function(format!("from_raw {format:?}"), |b| {
            b.iter(|| {
                for &value in &raw {
                    black_box(Color8::from_raw(value, format));
                }
            })
        });

        let colors: Vec<Color8> = raw.iter().map(|&v| Color8::from_raw(v, format)).collect();
        group.bench_function(format!("to_raw {format:?}"), |b| {
            b.iter(|| {
                for color in &colors {
                    black_box(color.to_raw(format));
                }
            })
        });
    }

    let colors: Vec<ColorF32> = sequential_raw_values(ColorFormat::Rgba8888)
        .into_iter()
        .map(|v| ColorF32::from_raw(v, ColorFormat::Rgba8888))
        .collect();

    group.bench_function("hsv round trip", |b| {
        b.iter_batched(
            || colors.clone(),
            |mut buffer| {
                for color in buffer.iter_mut() {
                    let [h, s, v] = color.hsv();
                    color.setup_from_hsv(h, s, v);
                }
                buffer
            },
            BatchSize::LargeInput,
        )
    });

    group.bench_function("premultiply", |b| {
        b.iter(|| {
            for color in &colors {
                black_box(color.premultiply_alpha());
            }
        })
    });

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
