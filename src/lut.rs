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
use crate::err::{LutError, MalformedSize};
use crate::fixed::{MAX_GRID_SIZE, MAX_TABLE_VALUE, MIN_GRID_SIZE};
use num_traits::AsPrimitive;
use std::borrow::Cow;

/// Dense 3D lookup table in fixed point.
///
/// Holds `channels` values per node, channels are changed first, then 1D, then 2D, then 3D:
/// value of channel `c` at node `(i, j, k)` lives at
/// `c + channels * (i + j * size1d + k * size1d * size2d)`.
///
/// Each value is signed 16-bit where 0 is the lowest output value
/// and `255 << PRECISION_BITS` (16320) is the highest one.
/// Values out of this range are accepted and saturated on output.
#[derive(Debug, Clone, PartialEq)]
pub struct Lut3D<'a> {
    table: Cow<'a, [i16]>,
    channels: usize,
    size: [usize; 3],
}

impl<'a> Lut3D<'a> {
    /// Wraps prepared fixed point table.
    pub fn new(
        table: &'a [i16],
        channels: usize,
        size1d: usize,
        size2d: usize,
        size3d: usize,
    ) -> Result<Lut3D<'a>, LutError> {
        let size = Self::validate(table.len(), channels, [size1d, size2d, size3d])?;
        Ok(Lut3D {
            table: Cow::Borrowed(table),
            channels,
            size,
        })
    }

    fn validate(len: usize, channels: usize, size: [usize; 3]) -> Result<[usize; 3], LutError> {
        let size = Self::validate_shape(channels, size)?;
        let expected = channels * size[0] * size[1] * size[2];
        if len != expected {
            return Err(LutError::MalformedTable(MalformedSize {
                size: len,
                expected,
            }));
        }
        Ok(size)
    }

    /// Channels and grid sizes alone, the table length is bounded once these pass.
    fn validate_shape(channels: usize, size: [usize; 3]) -> Result<[usize; 3], LutError> {
        if !(3..=4).contains(&channels) {
            log::debug!("Rejecting table with {channels} channels");
            return Err(LutError::InvalidArgument);
        }
        for &dimension in size.iter() {
            if !(MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&dimension) {
                log::debug!("Rejecting table with grid size {dimension}");
                return Err(LutError::GridSizeOutOfRange(dimension));
            }
        }
        Ok(size)
    }

    #[inline]
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Grid nodes count along each axis, first axis is addressed by the first sample
    #[inline]
    pub fn size(&self) -> [usize; 3] {
        self.size
    }

    #[inline]
    pub fn table(&self) -> &[i16] {
        &self.table
    }

    /// Distance in the table between neighbour nodes along each axis.
    #[inline]
    pub(crate) fn strides(&self) -> [usize; 3] {
        [
            self.channels,
            self.channels * self.size[0],
            self.channels * self.size[0] * self.size[1],
        ]
    }

    /// Offset of the node `(i, j, k)`.
    ///
    /// Base cells passed here never sit on the last node of any axis,
    /// so every `+1` neighbour of the returned node is inside the table.
    #[inline(always)]
    pub(crate) fn cell_offset(&self, i: u32, j: u32, k: u32) -> usize {
        debug_assert!((i as usize) + 1 < self.size[0]);
        debug_assert!((j as usize) + 1 < self.size[1]);
        debug_assert!((k as usize) + 1 < self.size[2]);
        self.linear_offset(i as usize, j as usize, k as usize)
    }

    #[inline(always)]
    fn linear_offset(&self, i: usize, j: usize, k: usize) -> usize {
        let [stride1d, stride2d, stride3d] = self.strides();
        i * stride1d + j * stride2d + k * stride3d
    }

    /// Node values, mostly for inspection.
    pub fn node(&self, i: usize, j: usize, k: usize) -> &[i16] {
        let start = self.linear_offset(i, j, k);
        &self.table[start..start + self.channels]
    }
}

impl Lut3D<'static> {
    /// Prepares a table from normalized values, where 1.0 is the highest output value.
    ///
    /// Values are scaled into fixed point with rounding half away from zero;
    /// anything that doesn't fit into `i16` saturates.
    pub fn from_normalized<T: AsPrimitive<f32>>(
        table: &[T],
        channels: usize,
        size1d: usize,
        size2d: usize,
        size3d: usize,
    ) -> Result<Lut3D<'static>, LutError> {
        let size = Self::validate(table.len(), channels, [size1d, size2d, size3d])?;
        let prepared = table
            .iter()
            .map(|&item| quantize_table_value(item.as_()))
            .collect::<Vec<i16>>();
        Ok(Lut3D {
            table: Cow::Owned(prepared),
            channels,
            size,
        })
    }

    /// Builds the table that maps every color onto itself.
    pub fn identity(
        channels: usize,
        size1d: usize,
        size2d: usize,
        size3d: usize,
    ) -> Result<Lut3D<'static>, LutError> {
        Self::generate(channels, size1d, size2d, size3d, |r, g, b| [r, g, b, 1.0])
    }

    /// Samples `callback` on every node, coordinates are normalized to [0, 1].
    /// For 3 channels tables the fourth returned value is ignored.
    pub fn generate(
        channels: usize,
        size1d: usize,
        size2d: usize,
        size3d: usize,
        callback: impl Fn(f32, f32, f32) -> [f32; 4],
    ) -> Result<Lut3D<'static>, LutError> {
        Self::validate_shape(channels, [size1d, size2d, size3d])?;
        let mut table = Vec::with_capacity(channels * size1d * size2d * size3d);
        for k in 0..size3d {
            let b = k as f32 / (size3d - 1) as f32;
            for j in 0..size2d {
                let g = j as f32 / (size2d - 1) as f32;
                for i in 0..size1d {
                    let r = i as f32 / (size1d - 1) as f32;
                    let node = callback(r, g, b);
                    table.extend_from_slice(&node[..channels]);
                }
            }
        }
        Self::from_normalized(&table, channels, size1d, size2d, size3d)
    }
}

#[inline]
fn quantize_table_value(item: f32) -> i16 {
    const SCALE: f32 = MAX_TABLE_VALUE as f32;
    if item >= (i16::MAX as f32 - 0.5) / SCALE {
        return i16::MAX;
    }
    if item <= (i16::MIN as f32 + 0.5) / SCALE {
        return i16::MIN;
    }
    if item < 0. {
        (item * SCALE - 0.5) as i16
    } else {
        (item * SCALE + 0.5) as i16
    }
}
