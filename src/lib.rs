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
#![allow(clippy::manual_clamp)]
#![deny(unreachable_pub)]
#![cfg_attr(not(any(feature = "sse", feature = "neon")), forbid(unsafe_code))]
//! Trilinear 3D LUT color transforms for 8-bit interleaved images.
//!
//! The table is kept in 16-bit fixed point, interpolation runs entirely in integer
//! arithmetic with SSE 4.1 and NEON paths bit exact with the portable one.
//!
//! # Example
//!
//! ```
//! use clut3d::{ImageMut, ImageRef, Lut3D, PixelType};
//!
//! let lut = Lut3D::generate(3, 17, 17, 17, |r, g, b| [b, g, r, 1.]).unwrap();
//! let src = vec![10u8, 20, 30, 40, 50, 60];
//! let mut dst = vec![0u8; 6];
//! let src_image = ImageRef::new(&src, 2, 1, 3, PixelType::U8).unwrap();
//! let mut dst_image = ImageMut::new(&mut dst, 2, 1, 3, PixelType::U8).unwrap();
//! lut.transform(&src_image, &mut dst_image).unwrap();
//! assert_eq!(dst, [30, 20, 10, 60, 50, 40]);
//! ```
mod conversions;
mod err;
mod fixed;
mod image;
mod lut;
mod transform;

pub use err::{LutError, MalformedSize};
pub use fixed::{
    MAX_GRID_SIZE, MAX_TABLE_VALUE, MIN_GRID_SIZE, PRECISION_BITS, PRECISION_ROUNDING, SCALE_BITS,
    SCALE_MASK, SHIFT_BITS, clip8,
};
pub use image::{ImageMut, ImageRef, PixelType};
pub use lut::Lut3D;
pub use transform::{TransformOptions, transform, transform_in_place};
