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

use std::{fmt, str::FromStr};

use crate::{quiz::QuizError, words::WordPair};

/// Which word is shown and which one has to be typed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    GermanToEnglish,
    EnglishToGerman,
}

impl Direction {
    #[must_use]
    pub fn ask<'a>(self, pair: &WordPair<'a>) -> &'a str {
        match self {
            Self::GermanToEnglish => pair.german,
            Self::EnglishToGerman => pair.english,
        }
    }

    #[must_use]
    pub fn answer<'a>(self, pair: &WordPair<'a>) -> &'a str {
        match self {
            Self::GermanToEnglish => pair.english,
            Self::EnglishToGerman => pair.german,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GermanToEnglish => write!(f, "German to English"),
            Self::EnglishToGerman => write!(f, "English to German"),
        }
    }
}

/// A menu entry typed by the user.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Choice {
    Translate(Direction),
    Quit,
}

impl FromStr for Choice {
    type Err = QuizError;

    fn from_str(string: &str) -> Result<Self, QuizError> {
        let string = string.trim().to_lowercase();

        match string.as_str() {
            "d" => Ok(Self::Translate(Direction::GermanToEnglish)),
            "e" => Ok(Self::Translate(Direction::EnglishToGerman)),
            "q" => Ok(Self::Quit),
            _ => Err(QuizError::InvalidDirection(string)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KATZE: WordPair<'static> = WordPair {
        german: "Katze",
        english: "Cat",
    };

    #[test]
    fn valid_tokens() {
        assert_eq!(
            "d".parse::<Choice>().unwrap(),
            Choice::Translate(Direction::GermanToEnglish)
        );
        assert_eq!(
            "e".parse::<Choice>().unwrap(),
            Choice::Translate(Direction::EnglishToGerman)
        );
        assert_eq!(
            " E \n".parse::<Choice>().unwrap(),
            Choice::Translate(Direction::EnglishToGerman)
        );
        assert_eq!("q".parse::<Choice>().unwrap(), Choice::Quit);
        assert_eq!("Q".parse::<Choice>().unwrap(), Choice::Quit);
    }

    #[test]
    fn invalid_tokens() {
        for token in ["x", "", "   ", "ed", "quit", "german"] {
            let error = token.parse::<Choice>().unwrap_err();
            assert!(matches!(error, QuizError::InvalidDirection(_)), "{token}");
        }
    }

    #[test]
    fn ask_and_answer() {
        assert_eq!(Direction::GermanToEnglish.ask(&KATZE), "Katze");
        assert_eq!(Direction::GermanToEnglish.answer(&KATZE), "Cat");
        assert_eq!(Direction::EnglishToGerman.ask(&KATZE), "Cat");
        assert_eq!(Direction::EnglishToGerman.answer(&KATZE), "Katze");
    }
}
