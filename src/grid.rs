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

use crate::error::{Error, Result};

/// Default number of tiles along each axis.
pub const DEFAULT_PIECES: usize = 8;

/// Tile position in raster order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileCoord {
    pub col: usize,
    pub row: usize,
}

impl TileCoord {
    pub fn from_index(index: usize, cols: usize) -> Self {
        Self {
            col: index % cols,
            row: index / cols,
        }
    }

    pub fn index(&self, cols: usize) -> usize {
        self.row * cols + self.col
    }
}

/// Pixel rectangle covered by a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileRect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

/// Partition of an image into `cols * rows` equally sized tiles.
///
/// Tiles are `floor(width / cols)` by `floor(height / rows)` pixels.
/// Any remainder on the right or bottom edge belongs to no tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSpec {
    width: usize,
    height: usize,
    cols: usize,
    rows: usize,
}

impl GridSpec {
    /// Default 8x8 grid. Never fails, small images get a degenerate grid.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cols: DEFAULT_PIECES,
            rows: DEFAULT_PIECES,
        }
    }

    /// Square grid with `pieces` tiles per axis.
    ///
    /// `pieces` must be positive and no larger than either image dimension.
    pub fn with_pieces(width: usize, height: usize, pieces: usize) -> Result<Self> {
        if pieces == 0 || pieces > width.min(height) {
            return Err(Error::InvalidGrid {
                pieces,
                width,
                height,
            });
        }

        Ok(Self {
            width,
            height,
            cols: pieces,
            rows: pieces,
        })
    }

    /// Grid for an optional user-chosen size.
    ///
    /// `None` gives the default grid, any explicit value is validated
    /// with [GridSpec::with_pieces], including 8.
    pub fn from_pieces(width: usize, height: usize, pieces: Option<usize>) -> Result<Self> {
        match pieces {
            None => Ok(Self::new(width, height)),
            Some(pieces) => Self::with_pieces(width, height, pieces),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn tile_width(&self) -> usize {
        self.width / self.cols
    }

    pub fn tile_height(&self) -> usize {
        self.height / self.rows
    }

    pub fn tile_count(&self) -> usize {
        self.cols * self.rows
    }

    /// Width of the region covered by tiles.
    pub fn tiled_width(&self) -> usize {
        self.tile_width() * self.cols
    }

    /// Height of the region covered by tiles.
    pub fn tiled_height(&self) -> usize {
        self.tile_height() * self.rows
    }

    /// True if tiles have zero area.
    pub fn is_degenerate(&self) -> bool {
        self.tile_width() == 0 || self.tile_height() == 0
    }

    pub fn coord(&self, index: usize) -> TileCoord {
        TileCoord::from_index(index, self.cols)
    }

    pub fn rect(&self, index: usize) -> TileRect {
        let TileCoord { col, row } = self.coord(index);
        let (width, height) = (self.tile_width(), self.tile_height());
        TileRect {
            x: col * width,
            y: row * height,
            width,
            height,
        }
    }
}
