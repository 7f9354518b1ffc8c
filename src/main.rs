//! Main Program for Tilescramble
//! Run with `--help` for more instruction

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

use std::path::PathBuf;

use anyhow::{Context, Error};
use clap::{Args, Parser, Subcommand};
use log::{info, warn};

use tilescramble::{io, transform_with, Direction, GridSpec};

#[derive(Parser, Debug)]
#[command(author, version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Shuffle tiles of an image
    Scramble(Opts),

    /// Put tiles of a scrambled image back
    Restore(Opts),
}

#[derive(Args, Debug)]
struct Opts {
    /// Input file
    input: PathBuf,

    /// Seed (any non-empty text)
    #[arg(short = 's', long)]
    seed: String,

    /// Number of tiles along each side, must fit the image
    /// (8 if omitted, small images are then left unchanged)
    #[arg(short = 'p', long)]
    pieces: Option<usize>,

    /// Output file (defaults to <input>_<operation>_<seed>.png)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let (direction, opts) = match Cli::parse().command {
        Command::Scramble(opts) => (Direction::Scramble, opts),
        Command::Restore(opts) => (Direction::Restore, opts),
    };

    let im = io::open(&opts.input)
        .with_context(|| format!("Cannot read image {}", opts.input.display()))?;
    let (width, height) = (im.grid.width(), im.grid.height());

    let spec = GridSpec::from_pieces(width, height, opts.pieces)?;
    if spec.is_degenerate() {
        warn!(
            "Image {width}x{height} is smaller than {}x{} grid, output is unchanged",
            spec.cols(),
            spec.rows(),
        );
    } else if spec.tiled_width() != width || spec.tiled_height() != height {
        warn!(
            "Image {width}x{height} is not divisible by grid, {}x{} edge is left in place",
            width - spec.tiled_width(),
            height - spec.tiled_height(),
        );
    }

    let out = transform_with(&im.grid, &opts.seed, direction, &spec)?;

    let output = opts
        .output
        .unwrap_or_else(|| io::output_file_name(&opts.input, direction, &opts.seed));
    im.with_grid(out)
        .save(&output)
        .with_context(|| format!("Cannot write image {}", output.display()))?;

    info!("Wrote {} image to {}", direction.label(), output.display());

    Ok(())
}
