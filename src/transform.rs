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

use std::fmt;

use ndarray::parallel::prelude::*;
use ndarray::prelude::*;
use ndarray::Slice;

use crate::error::{Error, Result};
use crate::grid::GridSpec;
use crate::permutation::{build_permutation, Permutation};
use crate::pixel::PixelGrid;
use crate::seed::derive_seed;

/// Which way tiles are moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Slot `i` receives the tile originally at `P[i]`.
    Scramble,
    /// Tile at slot `i` goes back to `P[i]`.
    Restore,
}

impl Direction {
    pub fn inverse(self) -> Self {
        match self {
            Self::Scramble => Self::Restore,
            Self::Restore => Self::Scramble,
        }
    }

    /// Past participle, used for output naming.
    pub fn label(self) -> &'static str {
        match self {
            Self::Scramble => "scrambled",
            Self::Restore => "restored",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Scramble => "scramble",
            Self::Restore => "restore",
        })
    }
}

/// Scramble or restore an image with the default 8x8 grid.
pub fn transform(grid: &PixelGrid, seed: &str, direction: Direction) -> Result<PixelGrid> {
    let spec = GridSpec::new(grid.width(), grid.height());
    transform_with(grid, seed, direction, &spec)
}

/// Scramble or restore an image with an explicit grid.
///
/// The grid must be built for the same dimensions as the image.
pub fn transform_with(
    grid: &PixelGrid,
    seed: &str,
    direction: Direction,
    spec: &GridSpec,
) -> Result<PixelGrid> {
    if seed.is_empty() {
        return Err(Error::InvalidSeed);
    }
    if (spec.width(), spec.height()) != (grid.width(), grid.height()) {
        return Err(Error::InvalidGrid {
            pieces: spec.cols(),
            width: grid.width(),
            height: grid.height(),
        });
    }

    let perm = build_permutation(spec.tile_count(), derive_seed(seed));
    log::debug!(
        "{direction} {}x{} image, {}x{} tiles of {}x{}",
        grid.width(),
        grid.height(),
        spec.cols(),
        spec.rows(),
        spec.tile_width(),
        spec.tile_height(),
    );

    PixelGrid::from_array(permute_tiles(grid.view(), spec, &perm, direction))
}

/// Tile copy kernel.
///
/// Parameters:
/// * `arr` : Input array view. Can be multidimensional,
///   but only the first 2 dimension (row, column) are tiled.
/// * `grid` : Grid partition. Must match the first 2 dimension, otherwise it panics.
/// * `perm` : Slot to source mapping. Must have `grid.tile_count()` entries.
/// * `direction` : Whether to apply `perm` or undo it.
///
/// Everything outside the tiled region is copied through unchanged.
pub fn permute_tiles<A, D>(
    arr: ArrayView<'_, A, D>,
    grid: &GridSpec,
    perm: &Permutation,
    direction: Direction,
) -> Array<A, D>
where
    A: Clone + Send + Sync,
    D: Dimension,
{
    let shape = arr.shape();
    if shape.len() < 2 || shape[..2] != [grid.height(), grid.width()] {
        panic!(
            "Array shape mismatch with grid ({:?} != [{} {}])",
            shape,
            grid.height(),
            grid.width(),
        );
    }
    assert_eq!(
        perm.len(),
        grid.tile_count(),
        "Permutation length mismatch with grid"
    );

    let mut out = arr.to_owned();

    if grid.is_degenerate() {
        log::debug!(
            "Grid {}x{} is degenerate for {}x{} image, passing through",
            grid.cols(),
            grid.rows(),
            grid.width(),
            grid.height(),
        );
        return out;
    }

    // Output tile `i` is filled from input tile `sources[i]`.
    let sources = match direction {
        Direction::Scramble => perm.clone(),
        Direction::Restore => perm.inverse(),
    };

    let mut tiled = out.view_mut();
    tiled.slice_axis_inplace(Axis(0), Slice::from(0..grid.tiled_height()));
    tiled.slice_axis_inplace(Axis(1), Slice::from(0..grid.tiled_width()));

    let mut chunk = tiled.raw_dim();
    chunk[0] = grid.tile_height();
    chunk[1] = grid.tile_width();

    // Chunks come out in raster order, one per tile.
    let tiles: Vec<_> = tiled.exact_chunks_mut(chunk).into_iter().collect();
    debug_assert_eq!(tiles.len(), sources.len());

    tiles
        .into_par_iter()
        .zip(sources.as_slice().par_iter())
        .for_each(|(mut dst, &src)| {
            let r = grid.rect(src);
            let mut arr = arr.view();
            arr.slice_axis_inplace(Axis(0), Slice::from(r.y..r.y + r.height));
            arr.slice_axis_inplace(Axis(1), Slice::from(r.x..r.x + r.width));

            dst.assign(&arr);
        });

    out
}
