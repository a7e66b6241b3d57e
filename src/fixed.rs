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
//! Fixed point bit budget shared by every interpolation path.
//!
//! Table values are 8-bit intensities scaled up by [PRECISION_BITS],
//! source samples are scaled into grid space with [SCALE_BITS] of fraction,
//! and interpolation weights keep [SHIFT_BITS] of that fraction so that a
//! weight and a table value multiply into a signed 32-bit lane.

/// 8 bits for the result. Table can overflow the [0, 1.0] range,
/// so 2 extra bits are reserved for overflow and negative values.
pub const PRECISION_BITS: u32 = 16 - 8 - 2;
pub const PRECISION_ROUNDING: i32 = 1 << (PRECISION_BITS - 1);

/// 8 bits are taken by the source byte the scale is multiplied on,
/// 6 bits hold the max index in the table (65 nodes, index 64 is never a base cell).
pub const SCALE_BITS: u32 = 32 - 8 - 6;
pub const SCALE_MASK: u32 = (1 << SCALE_BITS) - 1;

/// Weights must fit into a signed 16-bit lane.
pub const SHIFT_BITS: u32 = 16 - 1;

pub const MIN_GRID_SIZE: usize = 2;
pub const MAX_GRID_SIZE: usize = 65;

/// Table value for the full output intensity.
pub const MAX_TABLE_VALUE: i32 = 255 << PRECISION_BITS;

const _: () = {
    assert!(SHIFT_BITS <= SCALE_BITS);
    assert!(SHIFT_BITS < 16);
    // 255 * scale must not leave u32 for the largest grid
    assert!((MAX_GRID_SIZE - 1) <= 1 << (32 - 8 - SCALE_BITS));
    assert!(MAX_TABLE_VALUE <= i16::MAX as i32);
    // Sum of two weighted i16 values plus rounding stays inside i32
    assert!(PRECISION_BITS + SHIFT_BITS < 31);
    assert!(
        i16::MAX as i64 * ((1i64 << SHIFT_BITS) - 1) + ((PRECISION_ROUNDING as i64) << SHIFT_BITS)
            <= i32::MAX as i64
    );
};

/// Pair of weights for a single axis, `lo` applied to the lower node
/// and `hi` to the upper one.
///
/// `lo + hi == (1 << SHIFT_BITS) - 1`, one short of the exact complement,
/// so a full weight never turns into `i16::MIN` in a 16-bit lane.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub(crate) struct AxisWeight {
    pub(crate) lo: i16,
    pub(crate) hi: i16,
}

impl AxisWeight {
    #[inline(always)]
    pub(crate) const fn from_fixed(idx_fixed: u32) -> AxisWeight {
        let frac = (idx_fixed & SCALE_MASK) >> (SCALE_BITS - SHIFT_BITS);
        AxisWeight {
            lo: (((1 << SHIFT_BITS) - 1) - frac) as i16,
            hi: frac as i16,
        }
    }

    /// Both weights packed as `lo | hi << 16`, the layout `madd` expects.
    #[inline(always)]
    #[allow(dead_code)]
    pub(crate) const fn packed(self) -> i32 {
        (self.lo as u16 as u32 | ((self.hi as u16 as u32) << 16)) as i32
    }
}

#[inline(always)]
pub(crate) const fn lerp_q15(a: i16, b: i16, weight: AxisWeight) -> i16 {
    ((a as i32 * weight.lo as i32 + b as i32 * weight.hi as i32) >> SHIFT_BITS) as i16
}

/// Last blend stage: keeps all fractional bits until the single final shift.
#[inline(always)]
pub(crate) const fn lerp_round_q15(a: i16, b: i16, weight: AxisWeight) -> i32 {
    (a as i32 * weight.lo as i32
        + b as i32 * weight.hi as i32
        + (PRECISION_ROUNDING << SHIFT_BITS))
        >> (PRECISION_BITS + SHIFT_BITS)
}

#[inline(always)]
pub(crate) const fn saturate_u8(v: i32) -> u8 {
    if v < 0 {
        0
    } else if v > 255 {
        255
    } else {
        v as u8
    }
}

/// Converts table precision value into 8-bit sample with saturation.
#[inline(always)]
pub const fn clip8(v: i32) -> u8 {
    saturate_u8((v + PRECISION_ROUNDING) >> PRECISION_BITS)
}
