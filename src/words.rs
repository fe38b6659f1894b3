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

use std::fmt;

use thiserror::Error;

pub const GERMAN: [&str; 10] = [
    "Apfel",
    "Obst",
    "Straße",
    "Katze",
    "Brücke",
    "Erfahrung",
    "Anschluss",
    "Erlebnis",
    "Gebiet",
    "knüpfen",
];

pub const ENGLISH: [&str; 10] = [
    "Apple",
    "Fruit",
    "Street",
    "Cat",
    "Bridge",
    "Experience",
    "Connection",
    "Adventure",
    "Area",
    "To knot",
];

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct WordPair<'a> {
    pub german: &'a str,
    pub english: &'a str,
}

impl fmt::Display for WordPair<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.german, self.english)
    }
}

/// Two index aligned word lists: element `i` of each list is the same concept.
#[derive(Clone, Copy, Debug)]
pub struct WordStore<'a> {
    german: &'a [&'a str],
    english: &'a [&'a str],
}

impl Default for WordStore<'static> {
    fn default() -> Self {
        Self {
            german: &GERMAN,
            english: &ENGLISH,
        }
    }
}

impl<'a> WordStore<'a> {
    /// # Errors
    ///
    /// If the lists differ in length or are empty.
    pub fn new(german: &'a [&'a str], english: &'a [&'a str]) -> Result<Self, WordStoreError> {
        if german.len() != english.len() {
            return Err(WordStoreError::LengthMismatch {
                german: german.len(),
                english: english.len(),
            });
        }

        if german.is_empty() {
            return Err(WordStoreError::Empty);
        }

        Ok(Self { german, english })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.german.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.german.is_empty()
    }

    #[must_use]
    pub fn pair(&self, index: usize) -> Option<WordPair<'a>> {
        Some(WordPair {
            german: *self.german.get(index)?,
            english: *self.english.get(index)?,
        })
    }

    /// Like [`WordStore::pair`], but any index wraps around into range.
    #[must_use]
    pub fn pair_wrapping(&self, index: usize) -> WordPair<'a> {
        let index = index % self.len();

        WordPair {
            german: self.german[index],
            english: self.english[index],
        }
    }

    pub fn pairs(&self) -> impl Iterator<Item = WordPair<'a>> + '_ {
        self.german
            .iter()
            .copied()
            .zip(self.english.iter().copied())
            .map(|(german, english)| WordPair { german, english })
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum WordStoreError {
    #[error("the word lists differ in length: {german} German and {english} English words")]
    LengthMismatch { german: usize, english: usize },
    #[error("the word lists are empty")]
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_lists_line_up() {
        let store = WordStore::default();
        assert_eq!(store.len(), 10);
        assert_eq!(
            store.pair(3),
            Some(WordPair {
                german: "Katze",
                english: "Cat"
            })
        );
        assert_eq!(store.pair(9).map(|pair| pair.english), Some("To knot"));
        assert_eq!(store.pair(10), None);
        assert_eq!(store.pairs().count(), 10);
    }

    #[test]
    fn pair_wrapping_stays_in_range() {
        let store = WordStore::default();
        assert_eq!(store.pair_wrapping(0).german, "Apfel");
        assert_eq!(store.pair_wrapping(13).german, "Katze");
        assert_eq!(store.pair_wrapping(usize::MAX), store.pair(5).unwrap());
    }

    #[test]
    fn mismatched_lists_are_rejected() {
        let result = WordStore::new(&["Katze", "Hund"], &["Cat"]);
        assert_eq!(
            result.unwrap_err(),
            WordStoreError::LengthMismatch {
                german: 2,
                english: 1
            }
        );
    }

    #[test]
    fn empty_lists_are_rejected() {
        assert_eq!(WordStore::new(&[], &[]).unwrap_err(), WordStoreError::Empty);
    }

    #[test]
    fn pair_display() {
        let store = WordStore::new(&["Katze"], &["Cat"]).unwrap();
        assert_eq!(store.pair(0).unwrap().to_string(), "Katze = Cat");
    }
}
