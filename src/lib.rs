//! Library to reversibly scramble images by tiles.
//!
//! The image is cut into a fixed grid of tiles (8x8 by default),
//! and the tiles are rearranged by a permutation derived from a seed string:
//!
//! * The same seed always gives the same arrangement.
//! * [Direction::Restore] is the exact inverse of [Direction::Scramble].
//! * Pixels outside the tiled area (when the image size is not divisible
//!   by the grid) are left untouched.
//!
//! This is *not* encryption. The generator is tiny and the arrangement
//! can be recovered without the seed.

// Copyright (C) 2023 Dheatly23
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Lesser General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Lesser General Public License for more details.
//
// You should have received a copy of the GNU Lesser General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.
//

mod error;
pub mod grid;
pub mod io;
pub mod permutation;
pub mod pixel;
pub mod seed;
pub mod task;
mod transform;

#[doc(inline)]
pub use crate::error::{Error, Result};
#[doc(inline)]
pub use crate::grid::{GridSpec, TileCoord, TileRect, DEFAULT_PIECES};
#[doc(inline)]
pub use crate::permutation::{build_permutation, Permutation};
#[doc(inline)]
pub use crate::pixel::PixelGrid;
#[doc(inline)]
pub use crate::seed::{derive_seed, Lcg};
#[doc(inline)]
pub use crate::task::{spawn_transform, TransformHandle};
#[doc(inline)]
pub use crate::transform::{permute_tiles, transform, transform_with, Direction};
