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
use std::error::Error;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, PartialOrd, PartialEq)]
pub struct MalformedSize {
    pub size: usize,
    pub expected: usize,
}

#[derive(Debug, Clone, PartialOrd, PartialEq)]
pub enum LutError {
    /// Table channels count is not 3 or 4, or image has no bands at all.
    InvalidArgument,
    /// Pixel storage type or bands count is not suitable for the transform.
    ModeMismatch,
    /// Source and destination images have different dimensions.
    SizeMismatch,
    GridSizeOutOfRange(usize),
    MalformedTable(MalformedSize),
    MalformedImage(MalformedSize),
}

impl Display for LutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LutError::InvalidArgument => f.write_str("Table channels could be 3 or 4"),
            LutError::ModeMismatch => f.write_str("Image mode mismatch"),
            LutError::SizeMismatch => f.write_str("Images must have the same size"),
            LutError::GridSizeOutOfRange(size) => f.write_fmt(format_args!(
                "Table grid size must be in [2, 65], but it is {size}"
            )),
            LutError::MalformedTable(size) => {
                f.write_fmt(format_args!("Invalid table size: {size:?}"))
            }
            LutError::MalformedImage(size) => {
                f.write_fmt(format_args!("Image buffer is too small: {size:?}"))
            }
        }
    }
}

impl Error for LutError {}
