/*
 * // Copyright 2026 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use clut3d::{ImageMut, ImageRef, Lut3D, PixelType, TransformOptions, transform};
use criterion::{Criterion, criterion_group, criterion_main};
use rand::Rng;

const WIDTH: usize = 1920;
const HEIGHT: usize = 1080;

fn random_image(bands: usize) -> Vec<u8> {
    let mut rng = rand::rng();
    (0..WIDTH * HEIGHT * bands).map(|_| rng.random()).collect()
}

fn random_lut(channels: usize, size: usize) -> Lut3D<'static> {
    let mut rng = rand::rng();
    let table = (0..channels * size * size * size)
        .map(|_| rng.random_range(0.0f32..1.0f32))
        .collect::<Vec<f32>>();
    Lut3D::from_normalized(&table, channels, size, size, size).unwrap()
}

fn bench_transform(
    c: &mut Criterion,
    name: &str,
    channels: usize,
    bands: usize,
    options: TransformOptions,
) {
    let src = random_image(bands);
    let mut dst = vec![0u8; src.len()];
    for size in [17usize, 33, 65] {
        let lut = random_lut(channels, size);
        c.bench_function(&format!("clut3d: {name} LUT {size}"), |b| {
            let src_image = ImageRef::new(&src, WIDTH, HEIGHT, bands, PixelType::U8).unwrap();
            let mut dst_image =
                ImageMut::new(&mut dst, WIDTH, HEIGHT, bands, PixelType::U8).unwrap();
            b.iter(|| {
                transform(&src_image, &mut dst_image, &lut, options).unwrap();
            })
        });
    }
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let scalar = TransformOptions {
        allow_simd: false,
        parallel: false,
    };
    let simd = TransformOptions {
        allow_simd: true,
        parallel: false,
    };
    let parallel = TransformOptions::default();

    bench_transform(c, "Scalar RGB -> RGB", 3, 3, scalar);
    bench_transform(c, "SIMD RGB -> RGB", 3, 3, simd);
    bench_transform(c, "Parallel SIMD RGB -> RGB", 3, 3, parallel);
    bench_transform(c, "Scalar RGBA -> RGBA", 4, 4, scalar);
    bench_transform(c, "SIMD RGBA -> RGBA", 4, 4, simd);
    bench_transform(c, "Scalar RGBX -> RGB_", 3, 4, scalar);
    bench_transform(c, "SIMD RGBX -> RGB_", 3, 4, simd);

    c.bench_function("clut3d: SIMD RGB in place LUT 33", |b| {
        let lut = random_lut(3, 33);
        let mut image = random_image(3);
        let mut image = ImageMut::new(&mut image, WIDTH, HEIGHT, 3, PixelType::U8).unwrap();
        b.iter(|| {
            clut3d::transform_in_place(&mut image, &lut, TransformOptions::default()).unwrap();
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
