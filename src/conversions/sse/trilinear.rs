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
use crate::conversions::sampler::{CellLocation, GridScale};
use crate::conversions::trilinear::TrilinearInterpolation;
use crate::fixed::{PRECISION_BITS, PRECISION_ROUNDING, SHIFT_BITS};
#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

/// SSE 4.1 interpolator, expects to be inlined into `sse4.1` enabled code.
///
/// Every 32-bit lane holds one channel as a pair of 16-bit values,
/// so a single `madd` blends the pair with `lo | hi << 16` weights.
pub(crate) struct TrilinearSse<'a> {
    grid: GridScale<'a>,
    table: &'a [i16],
    strides: [usize; 3],
}

impl TrilinearSse<'_> {
    /// Loads a node together with its first axis neighbour as `(node, neighbour)` lane pairs.
    ///
    /// Reads exactly `2 * CN` values, the neighbour immediately follows the node.
    #[inline(always)]
    fn load_pair<const CN: usize>(&self, offset: usize) -> __m128i {
        let pair = &self.table[offset..offset + CN * 2];
        unsafe {
            if CN == 4 {
                let v = _mm_loadu_si128(pair.as_ptr() as *const __m128i);
                _mm_unpacklo_epi16(v, _mm_unpackhi_epi64(v, v))
            } else {
                let lo = _mm_loadl_epi64(pair.as_ptr() as *const __m128i);
                let hi = _mm_cvtsi32_si128((pair.as_ptr().add(4) as *const i32).read_unaligned());
                let v = _mm_unpacklo_epi64(lo, hi);
                _mm_shuffle_epi8(
                    v,
                    _mm_setr_epi8(0, 1, 6, 7, 2, 3, 8, 9, 4, 5, 10, 11, -1, -1, -1, -1),
                )
            }
        }
    }

    #[inline(always)]
    fn interpolate<const CN: usize>(&self, location: CellLocation) -> [u8; CN] {
        unsafe {
            let [w0, w1, w2] = location.weights;
            let shift1d = _mm_set1_epi32(w0.packed());
            let shift2d = _mm_set1_epi32(w1.packed());
            let shift3d = _mm_set1_epi32(w2.packed());
            let left_mask = _mm_set1_epi32(0x0000ffff);
            let right_mask = _mm_set1_epi32(0xffff0000u32 as i32);

            let base = location.offset;
            let step1 = self.strides[1];
            let step2 = self.strides[2];

            let leftleft = _mm_and_si128(
                _mm_srai_epi32::<{ SHIFT_BITS as i32 }>(_mm_madd_epi16(
                    self.load_pair::<CN>(base),
                    shift1d,
                )),
                left_mask,
            );
            let leftright = _mm_and_si128(
                _mm_slli_epi32::<{ 16 - SHIFT_BITS as i32 }>(_mm_madd_epi16(
                    self.load_pair::<CN>(base + step1),
                    shift1d,
                )),
                right_mask,
            );
            let rightleft = _mm_and_si128(
                _mm_srai_epi32::<{ SHIFT_BITS as i32 }>(_mm_madd_epi16(
                    self.load_pair::<CN>(base + step2),
                    shift1d,
                )),
                left_mask,
            );
            let rightright = _mm_and_si128(
                _mm_slli_epi32::<{ 16 - SHIFT_BITS as i32 }>(_mm_madd_epi16(
                    self.load_pair::<CN>(base + step2 + step1),
                    shift1d,
                )),
                right_mask,
            );

            let left = _mm_and_si128(
                _mm_srai_epi32::<{ SHIFT_BITS as i32 }>(_mm_madd_epi16(
                    _mm_or_si128(leftleft, leftright),
                    shift2d,
                )),
                left_mask,
            );
            let right = _mm_and_si128(
                _mm_slli_epi32::<{ 16 - SHIFT_BITS as i32 }>(_mm_madd_epi16(
                    _mm_or_si128(rightleft, rightright),
                    shift2d,
                )),
                right_mask,
            );

            let mut result = _mm_madd_epi16(_mm_or_si128(left, right), shift3d);
            result = _mm_srai_epi32::<{ (PRECISION_BITS + SHIFT_BITS) as i32 }>(_mm_add_epi32(
                _mm_set1_epi32(PRECISION_ROUNDING << SHIFT_BITS),
                result,
            ));

            result = _mm_packs_epi32(result, result);
            let packed = _mm_cvtsi128_si32(_mm_packus_epi16(result, result)).to_ne_bytes();
            let mut dst = [0u8; CN];
            dst.copy_from_slice(&packed[..CN]);
            dst
        }
    }
}

impl<'a> TrilinearInterpolation<'a> for TrilinearSse<'a> {
    fn new(grid: GridScale<'a>) -> Self {
        let lut = grid.lut();
        Self {
            grid,
            table: lut.table(),
            strides: lut.strides(),
        }
    }

    #[inline(always)]
    fn inter<const CN: usize>(&self, r: u8, g: u8, b: u8) -> [u8; CN] {
        self.interpolate::<CN>(self.grid.locate(r, g, b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Lut3D;
    use crate::conversions::trilinear::Trilinear;
    use rand::Rng;

    #[target_feature(enable = "sse4.1")]
    unsafe fn inter_sse41<const CN: usize>(lut: &Lut3D, r: u8, g: u8, b: u8) -> [u8; CN] {
        TrilinearSse::new(GridScale::new(lut)).inter::<CN>(r, g, b)
    }

    fn check_matches_scalar<const CN: usize>() {
        let mut rng = rand::rng();
        for _ in 0..40 {
            let size = [
                rng.random_range(2..=65usize),
                rng.random_range(2..=65usize),
                rng.random_range(2..=65usize),
            ];
            let table = (0..CN * size[0] * size[1] * size[2])
                .map(|_| rng.random_range(-1200i16..=17500))
                .collect::<Vec<i16>>();
            let lut = Lut3D::new(&table, CN, size[0], size[1], size[2]).unwrap();
            let scalar = Trilinear::new(GridScale::new(&lut));
            for _ in 0..2000 {
                let (r, g, b) = (rng.random(), rng.random(), rng.random());
                let expected = scalar.inter::<CN>(r, g, b);
                let vectorized = unsafe { inter_sse41::<CN>(&lut, r, g, b) };
                assert_eq!(expected, vectorized, "size {size:?}, color ({r}, {g}, {b})");
            }
            for corner in [0u8, 255] {
                let expected = scalar.inter::<CN>(corner, corner, corner);
                let vectorized = unsafe { inter_sse41::<CN>(&lut, corner, corner, corner) };
                assert_eq!(expected, vectorized, "size {size:?}");
            }
        }
    }

    #[test]
    fn sse_matches_scalar_3_channels() {
        if std::arch::is_x86_feature_detected!("sse4.1") {
            check_matches_scalar::<3>();
        }
    }

    #[test]
    fn sse_matches_scalar_4_channels() {
        if std::arch::is_x86_feature_detected!("sse4.1") {
            check_matches_scalar::<4>();
        }
    }

    #[test]
    fn sse_reads_last_cell_of_exact_table() {
        if !std::arch::is_x86_feature_detected!("sse4.1") {
            return;
        }
        for channels in [3usize, 4] {
            // table allocation is exact, the top cell pair ends at the very last value
            let table = vec![16320i16; channels * 65 * 65 * 65].into_boxed_slice();
            let lut = Lut3D::new(&table, channels, 65, 65, 65).unwrap();
            let v = if channels == 3 {
                unsafe { inter_sse41::<3>(&lut, 255, 255, 255).to_vec() }
            } else {
                unsafe { inter_sse41::<4>(&lut, 255, 255, 255).to_vec() }
            };
            assert!(v.iter().all(|&x| x == 255));
        }
    }
}
