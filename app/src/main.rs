/*
 * // Copyright (c) Radzivon Bartoshyk 10/2026. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use clut3d::{ImageMut, ImageRef, Lut3D, PixelType, TransformOptions, transform};
use image::{ImageBuffer, Rgb, Rgba};
use rand::Rng;
use std::time::Instant;

#[inline]
/// Gamma transfer function for sRGB
fn srgb_from_linear(linear: f32) -> f32 {
    if linear < 0.0f32 {
        0.0f32
    } else if linear < 0.0030412825f32 {
        linear * 12.92f32
    } else if linear < 1.0f32 {
        1.0550107f32 * linear.powf(1.0f32 / 2.4f32) - 0.0550107f32
    } else {
        1.0f32
    }
}

#[inline]
fn srgb_to_linear(gamma: f32) -> f32 {
    if gamma < 0.0f32 {
        0.0f32
    } else if gamma < 12.92f32 * 0.0030412825f32 {
        gamma * (1.0f32 / 12.92f32)
    } else if gamma < 1.0f32 {
        ((gamma + 0.0550107f32) / 1.0550107f32).powf(2.4f32)
    } else {
        1.0f32
    }
}

fn gradient(width: u32, height: u32) -> ImageBuffer<Rgb<u8>, Vec<u8>> {
    ImageBuffer::from_fn(width, height, |x, y| {
        let r = (x * 255 / (width - 1)) as u8;
        let g = (y * 255 / (height - 1)) as u8;
        let b = 255 - ((x + y) * 255 / (width + height - 2)) as u8;
        Rgb([r, g, b])
    })
}

fn main() {
    let (width, height) = (1024u32, 768u32);
    let rgb = gradient(width, height);

    // Desaturate by half in linear light, then a sepia tint
    let sepia = Lut3D::generate(3, 33, 33, 33, |r, g, b| {
        let (lr, lg, lb) = (srgb_to_linear(r), srgb_to_linear(g), srgb_to_linear(b));
        let luma = 0.2126 * lr + 0.7152 * lg + 0.0722 * lb;
        let mix = |c: f32, tint: f32| srgb_from_linear((c + luma) * 0.5 * tint);
        [mix(lr, 1.07), mix(lg, 0.98), mix(lb, 0.82), 1.]
    })
    .unwrap();

    let mut dst = vec![0u8; rgb.len()];
    let src_image = ImageRef::new(
        rgb.as_raw(),
        width as usize,
        height as usize,
        3,
        PixelType::U8,
    )
    .unwrap();
    let mut dst_image =
        ImageMut::new(&mut dst, width as usize, height as usize, 3, PixelType::U8).unwrap();

    let instant = Instant::now();
    transform(&src_image, &mut dst_image, &sepia, TransformOptions::default()).unwrap();
    println!("RGB LUT 33 exec time {:?}", instant.elapsed());

    let instant = Instant::now();
    transform(
        &src_image,
        &mut dst_image,
        &sepia,
        TransformOptions {
            allow_simd: false,
            parallel: false,
        },
    )
    .unwrap();
    println!("RGB LUT 33 scalar exec time {:?}", instant.elapsed());

    image::save_buffer(
        "./sepia.png",
        &dst,
        width,
        height,
        image::ExtendedColorType::Rgb8,
    )
    .unwrap();

    // Four channel table writing coverage into alpha
    let mut rng = rand::rng();
    let noise = (0..4 * 9 * 9 * 9)
        .map(|_| rng.random_range(0.0f32..1.0f32))
        .collect::<Vec<f32>>();
    let noise_lut = Lut3D::from_normalized(&noise, 4, 9, 9, 9).unwrap();
    let mut rgba: ImageBuffer<Rgba<u8>, Vec<u8>> =
        ImageBuffer::from_fn(width, height, |x, y| {
            let Rgb([r, g, b]) = *rgb.get_pixel(x, y);
            Rgba([r, g, b, 255])
        });
    let mut rgba_image = ImageMut::new(
        &mut rgba,
        width as usize,
        height as usize,
        4,
        PixelType::U8,
    )
    .unwrap();
    let instant = Instant::now();
    noise_lut.transform_in_place(&mut rgba_image).unwrap();
    println!("RGBA LUT 9 in place exec time {:?}", instant.elapsed());

    rgba.save("./noise.png").unwrap();
}
