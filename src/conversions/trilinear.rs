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
use crate::fixed::{AxisWeight, lerp_q15, lerp_round_q15, saturate_u8};

/// Trilinear interpolation over a fixed point table.
///
/// Every implementation must be bit exact with [Trilinear], which serves as the reference.
pub(crate) trait TrilinearInterpolation<'a> {
    fn new(grid: GridScale<'a>) -> Self;

    /// Interpolates `CN` table channels at the color `r, g, b`.
    fn inter<const CN: usize>(&self, r: u8, g: u8, b: u8) -> [u8; CN];
}

/// Portable interpolator.
pub(crate) struct Trilinear<'a> {
    grid: GridScale<'a>,
    table: &'a [i16],
    strides: [usize; 3],
}

impl Trilinear<'_> {
    #[inline(always)]
    fn fetch<const CN: usize>(&self, offset: usize) -> [i16; CN] {
        let mut node = [0i16; CN];
        node.copy_from_slice(&self.table[offset..offset + CN]);
        node
    }

    /// Blends a node with its neighbour along the first axis.
    #[inline(always)]
    fn blend_pair<const CN: usize>(&self, offset: usize, weight: AxisWeight) -> [i16; CN] {
        let a = self.fetch::<CN>(offset);
        let b = self.fetch::<CN>(offset + self.strides[0]);
        blend(a, b, weight)
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

        let left = blend(leftleft, leftright, w1);
        let right = blend(rightleft, rightright, w1);

        let mut dst = [0u8; CN];
        for ((dst, &left), &right) in dst.iter_mut().zip(left.iter()).zip(right.iter()) {
            *dst = saturate_u8(lerp_round_q15(left, right, w2));
        }
        dst
    }
}

#[inline(always)]
fn blend<const CN: usize>(a: [i16; CN], b: [i16; CN], weight: AxisWeight) -> [i16; CN] {
    let mut dst = [0i16; CN];
    for ((dst, &a), &b) in dst.iter_mut().zip(a.iter()).zip(b.iter()) {
        *dst = lerp_q15(a, b, weight);
    }
    dst
}

impl<'a> TrilinearInterpolation<'a> for Trilinear<'a> {
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

    fn interpolate3(lut: &Lut3D, r: u8, g: u8, b: u8) -> [u8; 3] {
        Trilinear::new(GridScale::new(lut)).inter::<3>(r, g, b)
    }

    #[test]
    fn mid_grey_on_smallest_cube() {
        let lut = Lut3D::identity(3, 2, 2, 2).unwrap();
        assert_eq!(interpolate3(&lut, 128, 128, 128), [128, 128, 128]);
    }

    #[test]
    fn identity_table_reproduces_colors() {
        for size in [2, 3, 5, 17, 33, 64, 65] {
            let lut = Lut3D::identity(3, size, size, size).unwrap();
            let interpolator = Trilinear::new(GridScale::new(&lut));
            for v in 0..=255u8 {
                let [r, g, b] = interpolator.inter::<3>(v, 255 - v, v / 2);
                assert!((r as i32 - v as i32).abs() <= 1, "size {size}, {v} -> {r}");
                assert!((g as i32 - (255 - v) as i32).abs() <= 1, "size {size}");
                assert!((b as i32 - (v / 2) as i32).abs() <= 1, "size {size}");
            }
        }
    }

    #[test]
    fn four_channels_carry_payload() {
        let lut = Lut3D::generate(4, 9, 9, 9, |r, g, b| [b, g, r, (r + g + b) / 3.]).unwrap();
        let interpolator = Trilinear::new(GridScale::new(&lut));
        let [r, g, b, a] = interpolator.inter::<4>(30, 90, 210);
        assert!((r as i32 - 210).abs() <= 1);
        assert!((g as i32 - 90).abs() <= 1);
        assert!((b as i32 - 30).abs() <= 1);
        assert!((a as i32 - 110).abs() <= 1);
    }

    #[test]
    fn out_of_range_table_saturates() {
        let lut = Lut3D::generate(3, 2, 2, 2, |r, _, _| [r * 4. - 2., -1., 2.5, 0.]).unwrap();
        assert_eq!(interpolate3(&lut, 0, 0, 0), [0, 0, 255]);
        assert_eq!(interpolate3(&lut, 255, 255, 255), [255, 0, 255]);
        assert_eq!(interpolate3(&lut, 64, 0, 0)[0], 0);
    }
}
