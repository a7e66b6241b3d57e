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
use crate::conversions::{ExecutionPath, LutExecutor};
use crate::err::LutError;
use crate::{ImageMut, ImageRef, Lut3D, PixelType};

/// Declares additional transformation options
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct TransformOptions {
    /// Allows vectorized interpolation where available.
    ///
    /// Vectorized paths are bit exact with the portable one,
    /// disabling it is useful mostly for benchmarking and testing.
    pub allow_simd: bool,
    /// Spreads rows across the rayon pool. Has effect only with `rayon` feature.
    pub parallel: bool,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            allow_simd: true,
            parallel: true,
        }
    }
}

fn check_modes(
    table_channels: usize,
    src_type: PixelType,
    src_bands: usize,
    dst_type: PixelType,
    dst_bands: usize,
) -> Result<(), LutError> {
    if !(3..=4).contains(&table_channels) {
        log::debug!("LUT with {table_channels} channels is not supported");
        return Err(LutError::InvalidArgument);
    }
    if src_type != PixelType::U8
        || dst_type != PixelType::U8
        || src_bands < 3
        || dst_bands < table_channels
    {
        log::debug!(
            "LUT mode mismatch: {src_bands} bands of {src_type:?} -> {dst_bands} bands of {dst_type:?}"
        );
        return Err(LutError::ModeMismatch);
    }
    // In case we have one extra band in destination and don't have it in source.
    if dst_bands > table_channels && dst_bands > src_bands {
        log::debug!("LUT mode mismatch: destination band {dst_bands} has no source");
        return Err(LutError::ModeMismatch);
    }
    Ok(())
}

/// Transforms colors of `src` using provided 3D lookup table and puts the result in `dst`.
///
/// First three bands of the source address the table, the first `lut.channels()`
/// bands of the destination receive interpolated values, any further destination bands
/// are left untouched.
///
/// Both images must be 8-bit of the same size. Nothing is written when an error is returned.
pub fn transform(
    src: &ImageRef<'_>,
    dst: &mut ImageMut<'_>,
    lut: &Lut3D<'_>,
    options: TransformOptions,
) -> Result<(), LutError> {
    check_modes(
        lut.channels(),
        src.pixel_type(),
        src.bands(),
        dst.pixel_type(),
        dst.bands(),
    )?;
    if src.width() != dst.width() || src.height() != dst.height() {
        return Err(LutError::SizeMismatch);
    }
    let path = ExecutionPath::select(options.allow_simd);
    log::trace!(
        "Applying {:?} LUT with {} channels to {}x{} image, path {path:?}",
        lut.size(),
        lut.channels(),
        dst.width(),
        dst.height()
    );
    match lut.channels() {
        3 => LutExecutor::<3>::new(lut, src.bands(), dst.bands(), path).execute(
            src,
            dst,
            options.parallel,
        ),
        _ => LutExecutor::<4>::new(lut, src.bands(), dst.bands(), path).execute(
            src,
            dst,
            options.parallel,
        ),
    }
    Ok(())
}

/// Same as [transform] when source and destination are the same image.
pub fn transform_in_place(
    image: &mut ImageMut<'_>,
    lut: &Lut3D<'_>,
    options: TransformOptions,
) -> Result<(), LutError> {
    check_modes(
        lut.channels(),
        image.pixel_type(),
        image.bands(),
        image.pixel_type(),
        image.bands(),
    )?;
    let path = ExecutionPath::select(options.allow_simd);
    log::trace!(
        "Applying {:?} LUT with {} channels in place to {}x{} image, path {path:?}",
        lut.size(),
        lut.channels(),
        image.width(),
        image.height()
    );
    match lut.channels() {
        3 => LutExecutor::<3>::new(lut, image.bands(), image.bands(), path)
            .execute_in_place(image, options.parallel),
        _ => LutExecutor::<4>::new(lut, image.bands(), image.bands(), path)
            .execute_in_place(image, options.parallel),
    }
    Ok(())
}

impl Lut3D<'_> {
    /// Transforms `src` into `dst` with default options, see [transform].
    pub fn transform(&self, src: &ImageRef<'_>, dst: &mut ImageMut<'_>) -> Result<(), LutError> {
        transform(src, dst, self, TransformOptions::default())
    }

    /// Transforms `image` in place with default options, see [transform_in_place].
    pub fn transform_in_place(&self, image: &mut ImageMut<'_>) -> Result<(), LutError> {
        transform_in_place(image, self, TransformOptions::default())
    }
}
