//! Signature sample grids.
//!
//! A signature is a single-channel grid of `u8` intensities stored row-major
//! with no row padding. `SampleView` borrows such a grid and `SampleBuffer`
//! owns one. Both are validated on construction: zero-area grids and sample
//! counts other than `width * height` are rejected, so every view handed to
//! the metric is non-empty.

use crate::util::{SigMatchError, SigMatchResult};

#[cfg(feature = "image-io")]
pub mod io;

/// Borrowed, read-only view over a row-major grayscale grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SampleView<'a> {
    data: &'a [u8],
    width: u32,
    height: u32,
}

impl<'a> SampleView<'a> {
    /// Creates a view over `width * height` contiguous samples.
    pub fn from_slice(data: &'a [u8], width: u32, height: u32) -> SigMatchResult<Self> {
        let needed = required_len(width, height)?;
        if data.len() != needed {
            return Err(SigMatchError::LengthMismatch {
                needed,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Returns the grid width in samples.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the grid height in samples.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns `width * height`.
    pub fn area(&self) -> usize {
        self.data.len()
    }

    /// Returns the backing samples in row-major order.
    pub fn as_slice(&self) -> &'a [u8] {
        self.data
    }

    /// Returns the sample at `(x, y)` if it is within bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize)
            .checked_mul(self.width as usize)?
            .checked_add(x as usize)?;
        self.data.get(idx).copied()
    }

    /// Returns row `y` as a slice of length `width`.
    pub fn row(&self, y: u32) -> Option<&'a [u8]> {
        if y >= self.height {
            return None;
        }
        let width = self.width as usize;
        let start = (y as usize).checked_mul(width)?;
        self.data.get(start..start + width)
    }
}

/// Owned signature grid produced by the analysis pipeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SampleBuffer {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl SampleBuffer {
    /// Wraps `width * height` row-major samples.
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> SigMatchResult<Self> {
        SampleView::from_slice(&data, width, height)?;
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Creates a grid with every sample set to `value`.
    pub fn filled(value: u8, width: u32, height: u32) -> SigMatchResult<Self> {
        let needed = required_len(width, height)?;
        Self::new(vec![value; needed], width, height)
    }

    /// Copies a borrowed view into an owned buffer.
    pub fn from_view(view: SampleView<'_>) -> Self {
        Self {
            data: view.as_slice().to_vec(),
            width: view.width(),
            height: view.height(),
        }
    }

    /// Returns a borrowed view of the samples.
    pub fn view(&self) -> SampleView<'_> {
        SampleView {
            data: &self.data,
            width: self.width,
            height: self.height,
        }
    }

    /// Returns the grid width in samples.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the grid height in samples.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the samples in row-major order.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the buffer and returns its samples.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}

fn required_len(width: u32, height: u32) -> SigMatchResult<usize> {
    if width == 0 || height == 0 {
        return Err(SigMatchError::InvalidDimensions { width, height });
    }
    (width as usize)
        .checked_mul(height as usize)
        .ok_or(SigMatchError::InvalidDimensions { width, height })
}

#[cfg(test)]
mod tests {
    use super::{SampleBuffer, SampleView};
    use crate::util::SigMatchError;

    #[test]
    fn view_indexes_row_major() {
        let data: Vec<u8> = (0u8..6).collect();
        let view = SampleView::from_slice(&data, 3, 2).unwrap();
        assert_eq!(view.get(0, 0), Some(0));
        assert_eq!(view.get(2, 0), Some(2));
        assert_eq!(view.get(0, 1), Some(3));
        assert_eq!(view.get(3, 0), None);
        assert_eq!(view.row(1).unwrap(), &[3u8, 4, 5]);
        assert!(view.row(2).is_none());
    }

    #[test]
    fn filled_rejects_zero_area() {
        let err = SampleBuffer::filled(7, 0, 4).unwrap_err();
        assert_eq!(
            err,
            SigMatchError::InvalidDimensions {
                width: 0,
                height: 4,
            }
        );
    }
}
