// Copyright (C) 2023 Dheatly23
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use ndarray::prelude::*;

use crate::error::{Error, Result};

/// Owned image buffer.
///
/// Stored as a standard-layout `(height, width, channels)` array,
/// so the raw bytes are row-major with interleaved samples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    data: Array3<u8>,
}

impl PixelGrid {
    /// Zero-filled grid.
    pub fn new(width: usize, height: usize, channels: usize) -> Result<Self> {
        let len = width
            .checked_mul(height)
            .and_then(|v| v.checked_mul(channels))
            .ok_or_else(|| {
                Error::InvalidImage(format!("{width}x{height}x{channels} is too large"))
            })?;
        Self::from_raw(width, height, channels, vec![0; len])
    }

    pub fn from_raw(width: usize, height: usize, channels: usize, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 || channels == 0 {
            return Err(Error::InvalidImage(format!(
                "zero-sized image ({width}x{height}, {channels} channels)"
            )));
        }

        let data = Array3::from_shape_vec((height, width, channels), data).map_err(|_| {
            Error::InvalidImage(format!(
                "buffer length does not match {width}x{height}x{channels}"
            ))
        })?;
        Ok(Self { data })
    }

    /// Wrap an array of shape `(height, width, channels)`.
    pub fn from_array(data: Array3<u8>) -> Result<Self> {
        if data.is_empty() {
            let (h, w, c) = data.dim();
            return Err(Error::InvalidImage(format!(
                "zero-sized image ({w}x{h}, {c} channels)"
            )));
        }

        let data = if data.is_standard_layout() {
            data
        } else {
            data.as_standard_layout().into_owned()
        };
        Ok(Self { data })
    }

    pub fn width(&self) -> usize {
        self.data.dim().1
    }

    pub fn height(&self) -> usize {
        self.data.dim().0
    }

    pub fn channels(&self) -> usize {
        self.data.dim().2
    }

    /// Samples of pixel `(x, y)`.
    pub fn pixel(&self, x: usize, y: usize) -> Option<&[u8]> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let c = self.channels();
        let start = (y * self.width() + x) * c;
        Some(&self.as_bytes()[start..start + c])
    }

    pub fn pixel_mut(&mut self, x: usize, y: usize) -> Option<&mut [u8]> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let c = self.channels();
        let start = (y * self.width() + x) * c;
        self.data
            .as_slice_mut()
            .map(|s| &mut s[start..start + c])
    }

    pub fn view(&self) -> ArrayView3<'_, u8> {
        self.data.view()
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.data.as_slice().expect("Should be standard-layout")
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data.into_raw_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty() {
        assert!(matches!(
            PixelGrid::new(0, 4, 4),
            Err(Error::InvalidImage(_))
        ));
        assert!(matches!(
            PixelGrid::new(4, 0, 4),
            Err(Error::InvalidImage(_))
        ));
        assert!(PixelGrid::from_array(Array3::zeros((0, 3, 4))).is_err());
    }

    #[test]
    fn rejects_overflowing_size() {
        assert!(matches!(
            PixelGrid::new(usize::MAX, 2, 4),
            Err(Error::InvalidImage(_))
        ));
        assert!(matches!(
            PixelGrid::new(usize::MAX / 2, 3, 1),
            Err(Error::InvalidImage(_))
        ));
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(matches!(
            PixelGrid::from_raw(2, 2, 4, vec![0; 15]),
            Err(Error::InvalidImage(_))
        ));
    }

    #[test]
    fn row_major_access() {
        let data: Vec<u8> = (0..12).collect();
        let mut g = PixelGrid::from_raw(3, 2, 2, data).unwrap();
        assert_eq!((g.width(), g.height(), g.channels()), (3, 2, 2));
        assert_eq!(g.pixel(0, 0), Some(&[0, 1][..]));
        assert_eq!(g.pixel(2, 0), Some(&[4, 5][..]));
        assert_eq!(g.pixel(1, 1), Some(&[8, 9][..]));
        assert_eq!(g.pixel(3, 0), None);
        assert_eq!(g.pixel(0, 2), None);

        g.pixel_mut(1, 1).unwrap().copy_from_slice(&[100, 101]);
        assert_eq!(g.view()[[1, 1, 0]], 100);
        assert_eq!(g.as_bytes()[8..10], [100, 101]);
    }

    #[test]
    fn non_standard_layout_is_normalized() {
        let a = Array3::from_shape_fn((4, 2, 1), |(y, x, _)| (y * 2 + x) as u8);
        let t = a.permuted_axes([1, 0, 2]);
        assert!(!t.is_standard_layout());

        let g = PixelGrid::from_array(t).unwrap();
        assert_eq!((g.width(), g.height()), (4, 2));
        assert_eq!(g.as_bytes(), &[0, 2, 4, 6, 1, 3, 5, 7]);
    }
}
