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

//! Run a transform off the calling thread.

use futures_intrusive::channel::shared::{oneshot_channel, OneshotReceiver};

use crate::error::{Error, Result};
use crate::grid::GridSpec;
use crate::pixel::PixelGrid;
use crate::transform::{transform_with, Direction};

/// Pending result of [spawn_transform].
pub struct TransformHandle {
    rx: OneshotReceiver<Result<PixelGrid>>,
}

impl TransformHandle {
    /// Await the result.
    pub async fn receive(self) -> Result<PixelGrid> {
        self.rx.receive().await.unwrap_or(Err(Error::Cancelled))
    }

    /// Block the current thread until the result is ready.
    pub fn wait(self) -> Result<PixelGrid> {
        pollster::block_on(self.receive())
    }
}

/// Start a transform on the rayon thread pool.
///
/// Each call owns its input and output, nothing is shared between calls.
/// Uses the default grid if `spec` is `None`.
pub fn spawn_transform(
    grid: PixelGrid,
    seed: String,
    direction: Direction,
    spec: Option<GridSpec>,
) -> TransformHandle {
    let (tx, rx) = oneshot_channel();

    rayon::spawn(move || {
        let spec = spec.unwrap_or_else(|| GridSpec::new(grid.width(), grid.height()));
        let res = transform_with(&grid, &seed, direction, &spec);
        if tx.send(res).is_err() {
            log::debug!("Transform result dropped, receiver is gone");
        }
    });

    TransformHandle { rx }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::transform;

    fn image() -> PixelGrid {
        let data = (0..32 * 16 * 3).map(|i| (i * 7 % 251) as u8).collect();
        PixelGrid::from_raw(32, 16, 3, data).unwrap()
    }

    #[test]
    fn matches_synchronous_result() {
        let g = image();
        let expected = transform(&g, "async", Direction::Scramble).unwrap();
        let got = spawn_transform(g, "async".into(), Direction::Scramble, None)
            .wait()
            .unwrap();
        assert_eq!(got, expected);
    }

    #[test]
    fn concurrent_calls_are_independent() {
        let g = image();
        let handles: Vec<_> = ["a", "b", "c", "d"]
            .iter()
            .map(|s| spawn_transform(g.clone(), s.to_string(), Direction::Scramble, None))
            .collect();

        for (h, s) in handles.into_iter().zip(["a", "b", "c", "d"]) {
            let scrambled = h.wait().unwrap();
            let back = pollster::block_on(
                spawn_transform(scrambled, s.to_string(), Direction::Restore, None).receive(),
            )
            .unwrap();
            assert_eq!(back, g);
        }
    }

    #[test]
    fn errors_are_delivered() {
        let res = spawn_transform(image(), String::new(), Direction::Scramble, None).wait();
        assert!(matches!(res, Err(Error::InvalidSeed)));
    }

    #[test]
    fn dropped_sender_is_cancelled() {
        let (tx, rx) = oneshot_channel::<Result<PixelGrid>>();
        drop(tx);
        assert!(matches!(
            TransformHandle { rx }.wait(),
            Err(Error::Cancelled)
        ));
    }
}
