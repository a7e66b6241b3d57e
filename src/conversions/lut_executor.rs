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
use crate::conversions::sampler::GridScale;
#[cfg(all(target_arch = "aarch64", target_feature = "neon", feature = "neon"))]
use crate::conversions::neon::TrilinearNeon;
#[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "sse"))]
use crate::conversions::sse::TrilinearSse;
use crate::conversions::trilinear::{Trilinear, TrilinearInterpolation};
use crate::{ImageMut, ImageRef, Lut3D};
#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Implementation picked once per transform.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum ExecutionPath {
    Scalar,
    #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "sse"))]
    Sse41,
    #[cfg(all(target_arch = "aarch64", target_feature = "neon", feature = "neon"))]
    Neon,
}

impl ExecutionPath {
    #[allow(unreachable_code)]
    pub(crate) fn select(allow_simd: bool) -> ExecutionPath {
        if !allow_simd {
            return ExecutionPath::Scalar;
        }
        #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "sse"))]
        {
            if std::arch::is_x86_feature_detected!("sse4.1") {
                return ExecutionPath::Sse41;
            }
        }
        #[cfg(all(target_arch = "aarch64", target_feature = "neon", feature = "neon"))]
        {
            return ExecutionPath::Neon;
        }
        ExecutionPath::Scalar
    }
}

/// Applies the table to rows of `CN` table channels.
///
/// Only the first `CN` bands of every destination pixel are written.
pub(crate) struct LutExecutor<'a, const CN: usize> {
    grid: GridScale<'a>,
    src_bands: usize,
    dst_bands: usize,
    path: ExecutionPath,
}

impl<'a, const CN: usize> LutExecutor<'a, CN> {
    pub(crate) fn new(
        lut: &'a Lut3D<'a>,
        src_bands: usize,
        dst_bands: usize,
        path: ExecutionPath,
    ) -> LutExecutor<'a, CN> {
        LutExecutor {
            grid: GridScale::new(lut),
            src_bands,
            dst_bands,
            path,
        }
    }

    #[inline(always)]
    fn transform_row_impl<Interpolator: TrilinearInterpolation<'a>>(
        &self,
        src: &[u8],
        dst: &mut [u8],
    ) {
        let interpolator = Interpolator::new(self.grid);
        for (src, dst) in src
            .chunks_exact(self.src_bands)
            .zip(dst.chunks_exact_mut(self.dst_bands))
        {
            let v = interpolator.inter::<CN>(src[0], src[1], src[2]);
            dst[..CN].copy_from_slice(&v);
        }
    }

    #[inline(always)]
    fn transform_row_in_place_impl<Interpolator: TrilinearInterpolation<'a>>(
        &self,
        row: &mut [u8],
    ) {
        let interpolator = Interpolator::new(self.grid);
        for px in row.chunks_exact_mut(self.dst_bands) {
            let v = interpolator.inter::<CN>(px[0], px[1], px[2]);
            px[..CN].copy_from_slice(&v);
        }
    }

    #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "sse"))]
    #[target_feature(enable = "sse4.1")]
    unsafe fn transform_row_sse41(&self, src: &[u8], dst: &mut [u8]) {
        self.transform_row_impl::<TrilinearSse<'a>>(src, dst);
    }

    #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "sse"))]
    #[target_feature(enable = "sse4.1")]
    unsafe fn transform_row_in_place_sse41(&self, row: &mut [u8]) {
        self.transform_row_in_place_impl::<TrilinearSse<'a>>(row);
    }

    fn transform_row(&self, src: &[u8], dst: &mut [u8]) {
        match self.path {
            ExecutionPath::Scalar => self.transform_row_impl::<Trilinear<'a>>(src, dst),
            #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "sse"))]
            ExecutionPath::Sse41 => unsafe { self.transform_row_sse41(src, dst) },
            #[cfg(all(target_arch = "aarch64", target_feature = "neon", feature = "neon"))]
            ExecutionPath::Neon => self.transform_row_impl::<TrilinearNeon<'a>>(src, dst),
        }
    }

    fn transform_row_in_place(&self, row: &mut [u8]) {
        match self.path {
            ExecutionPath::Scalar => self.transform_row_in_place_impl::<Trilinear<'a>>(row),
            #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "sse"))]
            ExecutionPath::Sse41 => unsafe { self.transform_row_in_place_sse41(row) },
            #[cfg(all(target_arch = "aarch64", target_feature = "neon", feature = "neon"))]
            ExecutionPath::Neon => self.transform_row_in_place_impl::<TrilinearNeon<'a>>(row),
        }
    }

    /// Rows are independent, with `parallel` they're spread over the rayon pool.
    pub(crate) fn execute(&self, src: &ImageRef<'_>, dst: &mut ImageMut<'_>, parallel: bool) {
        let height = dst.height();
        if height == 0 || dst.width() == 0 {
            return;
        }
        let src_stride = src.stride();
        let dst_stride = dst.stride();
        let src_length = src.row_length();
        let dst_length = dst.row_length();
        let src_data = src.data();
        let dst_data = dst.data_mut();

        #[cfg(feature = "rayon")]
        {
            if parallel {
                dst_data
                    .par_chunks_mut(dst_stride)
                    .zip(src_data.par_chunks(src_stride))
                    .take(height)
                    .for_each(|(dst, src)| {
                        self.transform_row(&src[..src_length], &mut dst[..dst_length]);
                    });
                return;
            }
        }
        #[cfg(not(feature = "rayon"))]
        let _ = parallel;

        for (dst, src) in dst_data
            .chunks_mut(dst_stride)
            .zip(src_data.chunks(src_stride))
            .take(height)
        {
            self.transform_row(&src[..src_length], &mut dst[..dst_length]);
        }
    }

    pub(crate) fn execute_in_place(&self, image: &mut ImageMut<'_>, parallel: bool) {
        let height = image.height();
        if height == 0 || image.width() == 0 {
            return;
        }
        let stride = image.stride();
        let length = image.row_length();
        let data = image.data_mut();

        #[cfg(feature = "rayon")]
        {
            if parallel {
                data.par_chunks_mut(stride)
                    .take(height)
                    .for_each(|row| self.transform_row_in_place(&mut row[..length]));
                return;
            }
        }
        #[cfg(not(feature = "rayon"))]
        let _ = parallel;

        for row in data.chunks_mut(stride).take(height) {
            self.transform_row_in_place(&mut row[..length]);
        }
    }
}
