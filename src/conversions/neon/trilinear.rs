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
use crate::fixed::{AxisWeight, PRECISION_BITS, PRECISION_ROUNDING, SHIFT_BITS};
use std::arch::aarch64::*;

/// NEON interpolator, one channel per lane.
pub(crate) struct TrilinearNeon<'a> {
    grid: GridScale<'a>,
    table: &'a [i16],
    strides: [usize; 3],
}

#[inline(always)]
unsafe fn vweighted_s16(a: int16x4_t, b: int16x4_t, weight: AxisWeight) -> int32x4_t {
    unsafe { vmlal_n_s16(vmull_n_s16(a, weight.lo), b, weight.hi) }
}

/// Blend with truncation back into 16 bits, same as the scalar path does.
#[inline(always)]
unsafe fn vlerp_s16(a: int16x4_t, b: int16x4_t, weight: AxisWeight) -> int16x4_t {
    unsafe { vmovn_s32(vshrq_n_s32::<{ SHIFT_BITS as i32 }>(vweighted_s16(a, b, weight))) }
}

impl TrilinearNeon<'_> {
    #[inline(always)]
    fn fetch<const CN: usize>(&self, offset: usize) -> int16x4_t {
        let node = &self.table[offset..offset + CN];
        unsafe {
            if CN == 4 {
                vld1_s16(node.as_ptr())
            } else {
                let mut lanes = [0i16; 4];
                lanes[..CN].copy_from_slice(node);
                vld1_s16(lanes.as_ptr())
            }
        }
    }

    #[inline(always)]
    fn blend_pair<const CN: usize>(&self, offset: usize, weight: AxisWeight) -> int16x4_t {
        let a = self.fetch::<CN>(offset);
        let b = self.fetch::<CN>(offset + self.strides[0]);
        unsafe { vlerp_s16(a, b, weight) }
    }

    #[inline(always)]
    fn interpolate<const CN: usize>(&self, location: CellLocation) -> [u8; CN] {
        let [w0, w1, w2] = location.weights;
        let base = location.offset;
        let step1 = self.strides[1];
        let step2 = self.strides[2];

        let leftleft = self.blend_pair::<CN>(base, w0);
        let leftright = self.blend_pair::<CN>(base + step1, w0);
        let rightleft = self.blend_pair::<CN>(base + step2, w0);
        let rightright = self.blend_pair::<CN>(base + step2 + step1, w0);

        unsafe {
            let left = vlerp_s16(leftleft, leftright, w1);
            let right = vlerp_s16(rightleft, rightright, w1);

            let result = vshrq_n_s32::<{ (PRECISION_BITS + SHIFT_BITS) as i32 }>(vaddq_s32(
                vweighted_s16(left, right, w2),
                vdupq_n_s32(PRECISION_ROUNDING << SHIFT_BITS),
            ));
            let narrowed = vqmovn_s32(result);
            let packed = vqmovun_s16(vcombine_s16(narrowed, narrowed));
            let mut bytes = [0u8; 8];
            vst1_u8(bytes.as_mut_ptr(), packed);
            let mut dst = [0u8; CN];
            dst.copy_from_slice(&bytes[..CN]);
            dst
        }
    }
}

impl<'a> TrilinearInterpolation<'a> for TrilinearNeon<'a> {
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
            let neon = TrilinearNeon::new(GridScale::new(&lut));
            for _ in 0..2000 {
                let (r, g, b) = (rng.random(), rng.random(), rng.random());
                assert_eq!(
                    scalar.inter::<CN>(r, g, b),
                    neon.inter::<CN>(r, g, b),
                    "size {size:?}, color ({r}, {g}, {b})"
                );
            }
            assert_eq!(
                scalar.inter::<CN>(255, 255, 255),
                neon.inter::<CN>(255, 255, 255)
            );
        }
    }

    #[test]
    fn neon_matches_scalar_3_channels() {
        check_matches_scalar::<3>();
    }

    #[test]
    fn neon_matches_scalar_4_channels() {
        check_matches_scalar::<4>();
    }
}
