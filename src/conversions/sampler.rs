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
use crate::Lut3D;
use crate::fixed::{AxisWeight, SCALE_BITS};

/// Base table offset of the cell containing a color plus per axis weights.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) struct CellLocation {
    pub(crate) offset: usize,
    pub(crate) weights: [AxisWeight; 3],
}

/// Per transform constants mapping 8-bit samples into grid space.
#[derive(Debug, Copy, Clone)]
pub(crate) struct GridScale<'a> {
    lut: &'a Lut3D<'a>,
    scale: [u32; 3],
}

impl<'a> GridScale<'a> {
    /// This float to int conversion doesn't have rounding error compensation (+0.5).
    /// Truncation keeps `255 * scale` strictly below `(size - 1) << SCALE_BITS`,
    /// so the base cell is never the last node and the `+1` neighbours
    /// always stay inside the table.
    pub(crate) fn new(lut: &'a Lut3D<'a>) -> GridScale<'a> {
        let size = lut.size();
        let scale = size.map(|s| ((s - 1) as f64 / 255.0 * (1u32 << SCALE_BITS) as f64) as u32);
        GridScale { lut, scale }
    }

    #[inline(always)]
    pub(crate) fn lut(&self) -> &'a Lut3D<'a> {
        self.lut
    }

    #[inline(always)]
    pub(crate) fn locate(&self, r: u8, g: u8, b: u8) -> CellLocation {
        let idx_r = r as u32 * self.scale[0];
        let idx_g = g as u32 * self.scale[1];
        let idx_b = b as u32 * self.scale[2];
        CellLocation {
            offset: self.lut.cell_offset(
                idx_r >> SCALE_BITS,
                idx_g >> SCALE_BITS,
                idx_b >> SCALE_BITS,
            ),
            weights: [
                AxisWeight::from_fixed(idx_r),
                AxisWeight::from_fixed(idx_g),
                AxisWeight::from_fixed(idx_b),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixed::{MAX_GRID_SIZE, MIN_GRID_SIZE};

    #[test]
    fn base_index_never_reaches_last_node() {
        for size in MIN_GRID_SIZE..=MAX_GRID_SIZE {
            let lut = Lut3D::identity(3, size, size, size).unwrap();
            let scale = GridScale::new(&lut);
            for v in 0..=255u8 {
                let index = (v as u32 * scale.scale[0]) >> SCALE_BITS;
                assert!(index as usize <= size - 2, "size {size}, sample {v}");
            }
            let index = (255 * scale.scale[0]) >> SCALE_BITS;
            assert_eq!(index as usize, size - 2, "size {size}");
            let top = scale.locate(255, 255, 255);
            assert_eq!(
                top.offset,
                lut.cell_offset(size as u32 - 2, size as u32 - 2, size as u32 - 2)
            );
        }
    }

    #[test]
    fn black_is_node_zero() {
        let lut = Lut3D::identity(4, 17, 33, 65).unwrap();
        let location = GridScale::new(&lut).locate(0, 0, 0);
        assert_eq!(location.offset, 0);
        for weight in location.weights {
            assert_eq!(weight.hi, 0);
        }
    }

    #[test]
    fn axes_are_independent() {
        let lut = Lut3D::identity(3, 5, 9, 17).unwrap();
        let grid = GridScale::new(&lut);
        // 64 * 4 / 255 ~ 1.0039
        let loc = grid.locate(64, 0, 0);
        assert_eq!(loc.offset, 3);
        let loc = grid.locate(0, 64, 0);
        assert_eq!(loc.offset, 2 * 3 * 5);
        let loc = grid.locate(0, 0, 64);
        assert_eq!(loc.offset, 4 * 3 * 5 * 9);
    }
}
