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

use std::{
    fmt,
    io::{self, BufRead, Write},
};

use log::{debug, info};
use thiserror::Error;

use crate::{
    ROUNDS, answer_matches,
    direction::{Choice, Direction},
    picker::Picker,
    style::Style,
    words::WordStore,
};

pub const MENU: &str = "Translate from English to German (e), German to English (d), or quit (q): ";
pub const FAREWELL: &str = "Exiting the program.";

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("Invalid input. Please choose 'e', 'd', or 'q'.")]
    InvalidDirection(String),
    #[error("the input ended")]
    InputExhausted,
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// How a session ended.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    Completed(Summary),
    Quit,
    InputExhausted,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Summary {
    pub correct: usize,
    pub rounds: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} out of {}", self.correct, self.rounds)
    }
}

#[derive(Clone, Copy, Debug, Default)]
struct Session {
    round: usize,
    correct: usize,
}

impl Session {
    fn record(&mut self, correct: bool) {
        self.round += 1;
        if correct {
            self.correct += 1;
        }
    }

    fn summary(self) -> Summary {
        Summary {
            correct: self.correct,
            rounds: self.round,
        }
    }
}

/// A quiz session reading answers from `R` and printing to `W`.
#[derive(Debug)]
pub struct Quiz<'a, R, W, P> {
    pub words: WordStore<'a>,
    pub rounds: usize,
    pub style: Style,
    reader: R,
    writer: W,
    picker: P,
}

impl<'a, R: BufRead, W: Write, P: Picker> Quiz<'a, R, W, P> {
    #[must_use]
    pub fn new(words: WordStore<'a>, reader: R, writer: W, picker: P) -> Self {
        Self {
            words,
            rounds: ROUNDS,
            style: Style::default(),
            reader,
            writer,
            picker,
        }
    }

    #[must_use]
    pub fn into_writer(self) -> W {
        self.writer
    }

    /// Reads one line. Bytes that are not UTF-8 become U+FFFD, so they only
    /// fail to match.
    fn read_line(&mut self) -> Result<String, QuizError> {
        let mut buffer = Vec::new();
        if self.reader.read_until(b'\n', &mut buffer)? == 0 {
            return Err(QuizError::InputExhausted);
        }

        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    fn prompt(&mut self, prompt: &str) -> Result<String, QuizError> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;
        self.read_line()
    }

    /// Asks for a direction until one of `d`, `e` or `q` is typed.
    ///
    /// # Errors
    ///
    /// If the input ends or reading or writing fails.
    pub fn select_direction(&mut self) -> Result<Choice, QuizError> {
        loop {
            let line = self.prompt(MENU)?;

            match line.parse::<Choice>() {
                Ok(Choice::Quit) => {
                    writeln!(self.writer, "{FAREWELL}")?;
                    return Ok(Choice::Quit);
                }
                Ok(choice) => return Ok(choice),
                Err(error @ QuizError::InvalidDirection(_)) => {
                    debug!("{error:?}");
                    writeln!(self.writer, "{}", self.style.failure(&error.to_string()))?;
                }
                Err(error) => return Err(error),
            }
        }
    }

    /// Asks for the translation of one random word and reports whether it
    /// was right.
    ///
    /// # Errors
    ///
    /// If the input ends or reading or writing fails.
    pub fn play_round(&mut self, direction: Direction) -> Result<bool, QuizError> {
        let index = self.picker.pick(self.words.len());
        let pair = self.words.pair_wrapping(index);
        let question = direction.ask(&pair);
        let expected = direction.answer(&pair);
        debug!("picked {index}: {pair} ({direction})");

        writeln!(self.writer, "Translate this word: {question}")?;
        let answer = self.prompt("Your answer: ")?;

        let correct = answer_matches(&answer, expected);
        if correct {
            writeln!(self.writer, "{}", self.style.success("Correct!"))?;
        } else {
            let message = format!("Incorrect! The correct translation is: {expected}");
            writeln!(self.writer, "{}", self.style.failure(&message))?;
        }

        debug!("answer {:?} correct: {correct}", answer.trim());
        Ok(correct)
    }

    /// Plays up to `rounds` rounds, stopping early on quit or the end of
    /// the input.
    ///
    /// # Errors
    ///
    /// If reading or writing fails.
    pub fn run(&mut self) -> Result<Outcome, QuizError> {
        writeln!(self.writer, "Welcome to the Translator!")?;
        let mut session = Session::default();

        while session.round < self.rounds {
            let direction = match self.select_direction() {
                Ok(Choice::Translate(direction)) => direction,
                Ok(Choice::Quit) => {
                    info!("quit after {} rounds", session.round);
                    return Ok(Outcome::Quit);
                }
                Err(QuizError::InputExhausted) => return self.input_exhausted(session),
                Err(error) => return Err(error),
            };

            match self.play_round(direction) {
                Ok(correct) => session.record(correct),
                Err(QuizError::InputExhausted) => return self.input_exhausted(session),
                Err(error) => return Err(error),
            }
        }

        let summary = session.summary();
        writeln!(self.writer, "\nYou answered {summary} correctly.")?;
        writeln!(self.writer, "Thank you!")?;
        info!("finished: {summary}");

        Ok(Outcome::Completed(summary))
    }

    fn input_exhausted(&mut self, session: Session) -> Result<Outcome, QuizError> {
        writeln!(self.writer, "\n{FAREWELL}")?;
        info!("the input ended after {} rounds", session.round);

        Ok(Outcome::InputExhausted)
    }
}
