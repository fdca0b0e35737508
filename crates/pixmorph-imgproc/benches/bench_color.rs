use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

use pixmorph_image::Image;
use pixmorph_imgproc::{color, enhance};

fn bench_color(c: &mut Criterion) {
    let mut group = c.benchmark_group("Color");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        let data = (0..width * height * 4).map(|i| (i % 256) as u8).collect();
        let image = Image::<u8, 4>::new([*width, *height].into(), data).unwrap();

        group.bench_with_input(
            BenchmarkId::new("grayscale", &parameter_string),
            &image,
            |b, i| b.iter(|| color::grayscale(black_box(i))),
        );

        group.bench_with_input(
            BenchmarkId::new("invert_color", &parameter_string),
            &image,
            |b, i| b.iter(|| enhance::invert_color(black_box(i))),
        );

        group.bench_with_input(
            BenchmarkId::new("adjust_brightness", &parameter_string),
            &image,
            |b, i| b.iter(|| enhance::adjust_brightness(black_box(i), black_box(-40))),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_color);
criterion_main!(benches);
