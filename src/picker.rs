// This file is part of vocabulator.
//
// vocabulator is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// vocabulator is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Chooses which word pair a round asks about.
pub trait Picker {
    /// Returns an index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

#[derive(Clone, Debug)]
pub struct PickerRandom {
    rng: StdRng,
}

impl Default for PickerRandom {
    fn default() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl PickerRandom {
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self {
                rng: StdRng::seed_from_u64(seed),
            },
            None => Self::default(),
        }
    }
}

impl Picker for PickerRandom {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// Replays a preset list of indexes, starting over when it runs out.
#[derive(Clone, Debug, Default)]
pub struct PickerFixed {
    indexes: Vec<usize>,
    next: usize,
}

impl PickerFixed {
    #[must_use]
    pub fn new(indexes: Vec<usize>) -> Self {
        Self { indexes, next: 0 }
    }
}

impl Picker for PickerFixed {
    fn pick(&mut self, len: usize) -> usize {
        if self.indexes.is_empty() {
            return 0;
        }

        let index = self.indexes[self.next % self.indexes.len()];
        self.next += 1;
        index % len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_stays_in_range() {
        let mut picker = PickerRandom::new(None);
        for len in 1..=20 {
            for _ in 0..200 {
                assert!(picker.pick(len) < len);
            }
        }
    }

    #[test]
    fn seeded_is_reproducible() {
        let mut picker_1 = PickerRandom::new(Some(7));
        let mut picker_2 = PickerRandom::new(Some(7));

        let picks_1: Vec<_> = (0..50).map(|_| picker_1.pick(10)).collect();
        let picks_2: Vec<_> = (0..50).map(|_| picker_2.pick(10)).collect();
        assert_eq!(picks_1, picks_2);
    }

    #[test]
    fn fixed_cycles_and_wraps() {
        let mut picker = PickerFixed::new(vec![3, 12]);
        assert_eq!(picker.pick(10), 3);
        assert_eq!(picker.pick(10), 2);
        assert_eq!(picker.pick(10), 3);

        let mut picker = PickerFixed::default();
        assert_eq!(picker.pick(10), 0);
    }
}
