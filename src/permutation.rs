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

use crate::seed::Lcg;

/// In-place Fisher-Yates shuffle, walking from the back.
pub fn fisher_yates<T>(items: &mut [T], random: &mut Lcg) {
    for i in (1..items.len()).rev() {
        let j = random.below(i + 1);
        items.swap(i, j);
    }
}

/// Shuffle of `n` raster positions.
pub fn build_permutation(n: usize, seed: u32) -> Permutation {
    let mut slots: Vec<_> = (0..n).collect();
    fisher_yates(&mut slots, &mut Lcg::new(seed));

    log::debug!("Permutation for seed {seed}: {slots:?}");
    Permutation { slots }
}

/// Map from slot (raster index in the scrambled layout)
/// to the raster index of the tile it holds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Permutation {
    slots: Vec<usize>,
}

impl Permutation {
    pub fn identity(n: usize) -> Self {
        Self {
            slots: (0..n).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Original raster index of the tile placed at `slot`.
    pub fn source(&self, slot: usize) -> usize {
        self.slots[slot]
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.slots
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = usize> + '_ {
        self.slots.iter().copied()
    }

    /// Permutation undoing this one.
    pub fn inverse(&self) -> Self {
        let mut slots = vec![0; self.slots.len()];
        for (i, &s) in self.slots.iter().enumerate() {
            slots[s] = i;
        }
        Self { slots }
    }

    /// Every index in `0..len` appears exactly once.
    pub fn is_bijection(&self) -> bool {
        let mut seen = vec![false; self.slots.len()];
        for &s in &self.slots {
            match seen.get_mut(s) {
                Some(v) if !*v => *v = true,
                _ => return false,
            }
        }
        true
    }
}
