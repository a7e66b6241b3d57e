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

/// Storage type of a single sample.
#[derive(Debug, Copy, Clone, Ord, PartialOrd, Eq, PartialEq, Hash, Default)]
pub enum PixelType {
    #[default]
    U8,
    U16,
    I32,
    F32,
}

impl PixelType {
    /// Size of one sample in bytes
    #[inline]
    pub const fn sample_size(self) -> usize {
        match self {
            PixelType::U8 => 1,
            PixelType::U16 => 2,
            PixelType::I32 => 4,
            PixelType::F32 => 4,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
struct Geometry {
    width: usize,
    height: usize,
    bands: usize,
    pixel_type: PixelType,
    stride: usize,
}

impl Geometry {
    /// Tightly packed rows when `stride` is `None`.
    fn new(
        data_len: usize,
        width: usize,
        height: usize,
        bands: usize,
        pixel_type: PixelType,
        stride: Option<usize>,
    ) -> Result<Geometry, LutError> {
        if bands == 0 {
            return Err(LutError::InvalidArgument);
        }
        let overflow = || {
            LutError::MalformedImage(MalformedSize {
                size: data_len,
                expected: usize::MAX,
            })
        };
        let row_length = width
            .checked_mul(bands)
            .and_then(|x| x.checked_mul(pixel_type.sample_size()))
            .ok_or_else(overflow)?;
        let stride = stride.unwrap_or(row_length);
        if stride < row_length {
            return Err(LutError::MalformedImage(MalformedSize {
                size: stride,
                expected: row_length,
            }));
        }
        let required = if height == 0 {
            0
        } else {
            (height - 1)
                .checked_mul(stride)
                .and_then(|x| x.checked_add(row_length))
                .ok_or_else(overflow)?
        };
        if data_len < required {
            return Err(LutError::MalformedImage(MalformedSize {
                size: data_len,
                expected: required,
            }));
        }
        Ok(Geometry {
            width,
            height,
            bands,
            pixel_type,
            stride,
        })
    }

    #[inline]
    const fn row_length(&self) -> usize {
        self.width * self.bands * self.pixel_type.sample_size()
    }
}

/// Borrowed interleaved image.
///
/// Rows are `stride` bytes apart, every row holds `width * bands` samples.
#[derive(Debug, Copy, Clone)]
pub struct ImageRef<'a> {
    data: &'a [u8],
    geometry: Geometry,
}

/// Mutable borrowed interleaved image, see [ImageRef].
#[derive(Debug)]
pub struct ImageMut<'a> {
    data: &'a mut [u8],
    geometry: Geometry,
}

macro_rules! define_image_accessors {
    ($image: ident) => {
        impl $image<'_> {
            #[inline]
            pub fn width(&self) -> usize {
                self.geometry.width
            }

            #[inline]
            pub fn height(&self) -> usize {
                self.geometry.height
            }

            /// Channels count per pixel
            #[inline]
            pub fn bands(&self) -> usize {
                self.geometry.bands
            }

            #[inline]
            pub fn pixel_type(&self) -> PixelType {
                self.geometry.pixel_type
            }

            /// Distance between rows in bytes
            #[inline]
            pub fn stride(&self) -> usize {
                self.geometry.stride
            }

            /// Samples of the row `y` without stride padding.
            #[inline]
            pub fn row(&self, y: usize) -> &[u8] {
                let start = y * self.geometry.stride;
                &self.data[start..start + self.geometry.row_length()]
            }

            #[inline]
            pub(crate) fn row_length(&self) -> usize {
                self.geometry.row_length()
            }
        }
    };
}

define_image_accessors!(ImageRef);
define_image_accessors!(ImageMut);

impl<'a> ImageRef<'a> {
    /// Creates tightly packed image.
    pub fn new(
        data: &'a [u8],
        width: usize,
        height: usize,
        bands: usize,
        pixel_type: PixelType,
    ) -> Result<ImageRef<'a>, LutError> {
        let geometry = Geometry::new(data.len(), width, height, bands, pixel_type, None)?;
        Ok(ImageRef { data, geometry })
    }

    pub fn with_stride(
        data: &'a [u8],
        width: usize,
        height: usize,
        bands: usize,
        pixel_type: PixelType,
        stride: usize,
    ) -> Result<ImageRef<'a>, LutError> {
        let geometry = Geometry::new(data.len(), width, height, bands, pixel_type, Some(stride))?;
        Ok(ImageRef { data, geometry })
    }

    #[inline]
    pub(crate) fn data(&self) -> &'a [u8] {
        self.data
    }
}

impl<'a> ImageMut<'a> {
    /// Creates tightly packed image.
    pub fn new(
        data: &'a mut [u8],
        width: usize,
        height: usize,
        bands: usize,
        pixel_type: PixelType,
    ) -> Result<ImageMut<'a>, LutError> {
        let geometry = Geometry::new(data.len(), width, height, bands, pixel_type, None)?;
        Ok(ImageMut { data, geometry })
    }

    pub fn with_stride(
        data: &'a mut [u8],
        width: usize,
        height: usize,
        bands: usize,
        pixel_type: PixelType,
        stride: usize,
    ) -> Result<ImageMut<'a>, LutError> {
        let geometry = Geometry::new(data.len(), width, height, bands, pixel_type, Some(stride))?;
        Ok(ImageMut { data, geometry })
    }

    #[inline]
    pub fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.geometry.stride;
        let end = start + self.geometry.row_length();
        &mut self.data[start..end]
    }

    /// Reborrows the image as read only.
    #[inline]
    pub fn as_image_ref(&self) -> ImageRef<'_> {
        ImageRef {
            data: &*self.data,
            geometry: self.geometry,
        }
    }

    #[inline]
    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut *self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_short_buffers() {
        let data = vec![0u8; 11];
        assert_eq!(
            ImageRef::new(&data, 2, 2, 3, PixelType::U8).unwrap_err(),
            LutError::MalformedImage(MalformedSize {
                size: 11,
                expected: 12
            })
        );
        let mut data = vec![0u8; 23];
        assert!(ImageMut::new(&mut data, 3, 2, 4, PixelType::U8).is_err());
    }

    #[test]
    fn stride_rows() {
        let mut data = vec![0u8; 16 + 6];
        for (i, v) in data.iter_mut().enumerate() {
            *v = i as u8;
        }
        let image = ImageRef::with_stride(&data, 2, 2, 3, PixelType::U8, 16).unwrap();
        assert_eq!(image.row(0), &[0, 1, 2, 3, 4, 5]);
        assert_eq!(image.row(1), &[16, 17, 18, 19, 20, 21]);
        assert!(ImageRef::with_stride(&data, 2, 2, 3, PixelType::U8, 5).is_err());
    }

    #[test]
    fn wide_samples() {
        let data = vec![0u8; 2 * 2 * 3 * 2];
        let image = ImageRef::new(&data, 2, 2, 3, PixelType::U16).unwrap();
        assert_eq!(image.stride(), 12);
        assert_eq!(image.row(1).len(), 12);
    }

    #[test]
    fn zero_bands_is_invalid() {
        let data = vec![0u8; 4];
        assert_eq!(
            ImageRef::new(&data, 2, 2, 0, PixelType::U8).unwrap_err(),
            LutError::InvalidArgument
        );
    }

    #[test]
    fn empty_image() {
        let data: Vec<u8> = Vec::new();
        let image = ImageRef::new(&data, 0, 10, 3, PixelType::U8).unwrap();
        assert_eq!(image.row(9).len(), 0);
        let image = ImageRef::new(&data, 10, 0, 3, PixelType::U8).unwrap();
        assert_eq!(image.height(), 0);
    }

    #[test]
    fn oversized_geometry_is_rejected() {
        let data = [7u8; 2];
        let width = usize::MAX / 3 + 1;
        assert!(matches!(
            ImageRef::new(&data, width, 1, 3, PixelType::U8),
            Err(LutError::MalformedImage(_))
        ));
        let mut data = [7u8; 2];
        assert!(matches!(
            ImageMut::new(&mut data, usize::MAX / 2 + 1, 1, 1, PixelType::U16),
            Err(LutError::MalformedImage(_))
        ));
        let data = [7u8; 2];
        assert!(matches!(
            ImageRef::with_stride(&data, 1, usize::MAX, 1, PixelType::U8, 2),
            Err(LutError::MalformedImage(_))
        ));
        assert!(matches!(
            ImageRef::with_stride(&data, 1, 2, 1, PixelType::U8, usize::MAX),
            Err(LutError::MalformedImage(_))
        ));
    }
}
