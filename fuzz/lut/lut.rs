#![no_main]

use clut3d::{ImageMut, ImageRef, Lut3D, PixelType, TransformOptions, transform, transform_in_place};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (u8, u8, u8, u8, u8, u8, u8, i16, i16, bool)| {
    let width = data.0 as usize;
    let height = data.1 as usize;
    let size = [
        2 + data.2 as usize % 64,
        2 + data.3 as usize % 64,
        2 + data.4 as usize % 64,
    ];
    let channels = if data.9 { 4 } else { 3 };
    let bands = (channels + data.5 as usize % 2).min(4);
    let table = make_table(channels * size[0] * size[1] * size[2], data.7, data.8);
    let lut = Lut3D::new(&table, channels, size[0], size[1], size[2]).unwrap();
    fuzz_lut(width, height, bands, data.6, &lut);
});

fn make_table(len: usize, seed: i16, step: i16) -> Vec<i16> {
    let mut acc = seed;
    (0..len)
        .map(|_| {
            acc = acc.wrapping_mul(31).wrapping_add(step);
            acc
        })
        .collect()
}

fn fuzz_lut(width: usize, height: usize, bands: usize, px: u8, lut: &Lut3D) {
    if width == 0 || height == 0 {
        return;
    }

    let src = (0..width * height * bands)
        .map(|x| (x as u8).wrapping_mul(px))
        .collect::<Vec<u8>>();
    let src_image = ImageRef::new(&src, width, height, bands, PixelType::U8).unwrap();

    let mut scalar = vec![0u8; src.len()];
    let mut scalar_image = ImageMut::new(&mut scalar, width, height, bands, PixelType::U8).unwrap();
    transform(
        &src_image,
        &mut scalar_image,
        lut,
        TransformOptions {
            allow_simd: false,
            parallel: false,
        },
    )
    .unwrap();

    let mut simd = vec![0u8; src.len()];
    let mut simd_image = ImageMut::new(&mut simd, width, height, bands, PixelType::U8).unwrap();
    transform(&src_image, &mut simd_image, lut, TransformOptions::default()).unwrap();
    assert_eq!(scalar, simd);

    let mut in_place = src.clone();
    let mut in_place_image =
        ImageMut::new(&mut in_place, width, height, bands, PixelType::U8).unwrap();
    transform_in_place(&mut in_place_image, lut, TransformOptions::default()).unwrap();
    let channels = lut.channels();
    for (px, src) in in_place.chunks_exact(bands).zip(src.chunks_exact(bands)) {
        assert_eq!(&px[channels..], &src[channels..]);
    }
    for (px, simd) in in_place.chunks_exact(bands).zip(simd.chunks_exact(bands)) {
        assert_eq!(&px[..channels], &simd[..channels]);
    }
}
