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

//! Conversion between image files and [PixelGrid].

use std::fs::File;
use std::io::{BufRead, BufReader, Seek};
use std::path::{Path, PathBuf};

use image::io::Reader as ImageReader;
use image::{save_buffer, ColorType, DynamicImage};

use crate::error::{Error, Result};
use crate::pixel::PixelGrid;
use crate::transform::Direction;

/// Decoded image together with the color type needed to write it back.
///
/// Each pixel of the grid holds all bytes of one source pixel,
/// so 16-bit and float images are moved without loss.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedImage {
    pub grid: PixelGrid,
    pub color: ColorType,
}

impl DecodedImage {
    pub fn from_dynamic(im: DynamicImage) -> Result<Self> {
        let (width, height) = (im.width() as usize, im.height() as usize);
        let color = im.color();
        let grid = PixelGrid::from_raw(
            width,
            height,
            color.bytes_per_pixel() as usize,
            im.into_bytes(),
        )?;
        Ok(Self { grid, color })
    }

    /// Same color type, different pixels.
    pub fn with_grid(&self, grid: PixelGrid) -> Self {
        Self {
            grid,
            color: self.color,
        }
    }

    /// Encode to `path`, format chosen from the extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        save_buffer(
            path,
            self.grid.as_bytes(),
            self.grid.width() as u32,
            self.grid.height() as u32,
            self.color,
        )?;
        Ok(())
    }
}

/// Decode from any seekable reader, guessing the format.
pub fn decode<R: BufRead + Seek>(reader: R) -> Result<DecodedImage> {
    let im = ImageReader::new(reader).with_guessed_format()?.decode()?;
    DecodedImage::from_dynamic(im)
}

pub fn open(path: impl AsRef<Path>) -> Result<DecodedImage> {
    decode(BufReader::new(File::open(path)?))
}

/// Output path next to `input`, named after the operation and seed.
///
/// `photo.jpg` scrambled with seed `abc` becomes `photo_scrambled_abc.png`.
pub fn output_file_name(input: &Path, direction: Direction, seed: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_else(|| "image".into());
    let seed: String = seed
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    input.with_file_name(format!("{stem}_{}_{seed}.png", direction.label()))
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use image::{ImageOutputFormat, Rgba, RgbaImage};

    use super::*;

    #[test]
    fn png_round_trip() {
        let img = RgbaImage::from_fn(5, 3, |x, y| Rgba([x as u8, y as u8, 7, 255]));
        let mut buf = Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(img)
            .write_to(&mut buf, ImageOutputFormat::Png)
            .unwrap();
        buf.set_position(0);

        let d = decode(buf).unwrap();
        assert_eq!(d.color, ColorType::Rgba8);
        assert_eq!((d.grid.width(), d.grid.height(), d.grid.channels()), (5, 3, 4));
        assert_eq!(d.grid.pixel(4, 2), Some(&[4, 2, 7, 255][..]));
    }

    #[test]
    fn wide_pixels_keep_all_bytes() {
        let im = DynamicImage::new_rgb16(3, 2);
        let d = DecodedImage::from_dynamic(im).unwrap();
        assert_eq!(d.grid.channels(), 6);
    }

    #[test]
    fn zero_sized_image_rejected() {
        let im = DynamicImage::new_rgba8(0, 4);
        assert!(matches!(
            DecodedImage::from_dynamic(im),
            Err(Error::InvalidImage(_))
        ));
    }

    #[test]
    fn garbage_fails_to_decode() {
        let res = decode(Cursor::new(b"definitely not an image".to_vec()));
        assert!(matches!(res, Err(Error::Decode(_))));
    }

    #[test]
    fn output_names() {
        assert_eq!(
            output_file_name(Path::new("dir/photo.jpg"), Direction::Scramble, "abc"),
            PathBuf::from("dir/photo_scrambled_abc.png")
        );
        assert_eq!(
            output_file_name(Path::new("photo.png"), Direction::Restore, "a b/c"),
            PathBuf::from("photo_restored_a_b_c.png")
        );
    }
}
