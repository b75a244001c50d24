//! Module with the position type and the tracker trait.
//! A position is a struct that contains a line and column number.

use std::fmt;

use crate::Token;

/// A position in the input.
/// The position is represented by a line and column number.
/// The line and column numbers are 1-based and the column denotes the next unread unit.
/// It is an in-memory diagnostic aid and has no serialized form.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Position {
    /// The line number of the position.
    pub line: usize,
    /// The column number of the position.
    pub column: usize,
}

impl Position {
    /// The column a new line starts with.
    pub const START_COLUMN: usize = 1;

    /// Create a new position.
    pub fn new(line: usize, column: usize) -> Self {
        debug_assert!(line > 0, "line number must be greater than 0");
        Self { line, column }
    }

    /// The position of the first unit of an input.
    pub const fn start() -> Self {
        Self {
            line: 1,
            column: Self::START_COLUMN,
        }
    }

    /// Get the line number of the position.
    #[inline]
    pub fn line(&self) -> usize {
        self.line
    }

    /// Get the column number of the position.
    #[inline]
    pub fn column(&self) -> usize {
        self.column
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line: {}, column: {}", self.line, self.column)
    }
}

/// A cursor that is advanced by every consumed unit.
pub trait Tracker<T: Token> {
    /// Advance the cursor over the consumed token.
    fn advance(&mut self, token: T);
}

impl<T: Token> Tracker<T> for Position {
    /// A line feed starts a new line, every other unit moves one column to the right.
    /// A carriage return is an ordinary unit.
    #[inline]
    fn advance(&mut self, token: T) {
        if token.is_line_feed() {
            self.line += 1;
            self.column = Self::START_COLUMN;
        } else {
            self.column += 1;
        }
    }
}
