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

pub const GREEN: &str = "\x1b[32m";
pub const RED: &str = "\x1b[31m";
pub const RESET: &str = "\x1b[0m";

/// Markers wrapped around success and failure messages.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Style {
    pub success_start: String,
    pub failure_start: String,
    pub end: String,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            success_start: GREEN.to_string(),
            failure_start: RED.to_string(),
            end: RESET.to_string(),
        }
    }
}

impl Style {
    /// Plain text tags for terminals without color.
    pub fn ascii(&mut self) {
        self.success_start = "[ok] ".to_string();
        self.failure_start = "[x] ".to_string();
        self.end = String::new();
    }

    #[must_use]
    pub fn success(&self, message: &str) -> String {
        format!("{}{message}{}", self.success_start, self.end)
    }

    #[must_use]
    pub fn failure(&self, message: &str) -> String {
        format!("{}{message}{}", self.failure_start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colored() {
        let style = Style::default();
        assert_eq!(style.success("Correct!"), "\x1b[32mCorrect!\x1b[0m");
        assert_eq!(style.failure("Incorrect!"), "\x1b[31mIncorrect!\x1b[0m");
    }

    #[test]
    fn ascii() {
        let mut style = Style::default();
        style.ascii();
        assert_eq!(style.success("Correct!"), "[ok] Correct!");
        assert_eq!(style.failure("Incorrect!"), "[x] Incorrect!");
        assert_ne!(style.success("a"), style.failure("a"));
    }
}
