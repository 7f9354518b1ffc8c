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

use thiserror::Error;

/// Errors produced by the scrambler.
///
/// A grid too small to hold a single pixel per tile is *not* an error,
/// the transform simply returns a copy of the input.
///
/// An unusable image is reported as [Error::InvalidImage] when its
/// dimensions or buffer are wrong, and as [Error::Decode] when the
/// file itself cannot be decoded.
#[derive(Debug, Error)]
pub enum Error {
    #[error("seed must not be empty")]
    InvalidSeed,

    #[error("invalid image: {0}")]
    InvalidImage(String),

    #[error("invalid grid size {pieces} for {width}x{height} image")]
    InvalidGrid {
        pieces: usize,
        width: usize,
        height: usize,
    },

    #[error("failed to decode image")]
    Decode(#[from] image::ImageError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("transform task was dropped before producing a result")]
    Cancelled,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
