//! A vocabulary quiz for the terminal.
//!
//! Each round asks which way to translate, shows a random word from the
//! German and English word lists and checks the typed answer.
//!
//! ## Menu Tokens
//!
//! * d - German to English
//! * e - English to German
//! * q - quit

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

#![deny(clippy::panic)]

pub mod direction;
pub mod picker;
pub mod quiz;
pub mod style;
pub mod utils;
pub mod words;

pub const ROUNDS: usize = 5;

pub const COPYRIGHT: &str = r".SH COPYRIGHT
Copyright (C) 2025-2026 Developers of the vocabulator project

This program is free software: you can redistribute it and/or modify
it under the terms of the GNU Affero General Public License as published by
the Free Software Foundation, either version 3 of the License, or
(at your option) any later version.

This program is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
GNU Affero General Public License for more details.

You should have received a copy of the GNU Affero General Public License
along with this program.  If not, see <https://www.gnu.org/licenses/>.
";

pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "
Copyright (c) 2025 Developers of the vocabulator project
Licensed under the AGPLv3"
);

/// Compares a typed answer with the expected word.
///
/// Both sides are trimmed and lower-cased, then must be equal.
#[must_use]
pub fn answer_matches(answer: &str, expected: &str) -> bool {
    answer.trim().to_lowercase() == expected.trim().to_lowercase()
}
