//! Position and range primitives.
//!
//! Positions are zero-based `(line, character)` pairs where `character` is the
//! UTF-8 byte offset within the line's content. Ranges are half-open: `end`
//! denotes the position just past the last included character.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Position in a text document (line and character)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Position {
    /// Zero-based line number
    pub line: usize,
    /// Zero-based byte offset in the line
    pub character: usize,
}

impl Position {
    /// Creates a new position
    pub fn new(line: usize, character: usize) -> Self {
        Self { line, character }
    }

    /// Translates a position inside a sub-document that starts at `origin`
    /// into the coordinates of the containing document.
    ///
    /// Only the first line of the sub-document is shifted horizontally; every
    /// later line starts at column zero in both coordinate systems.
    pub fn to_outer(&self, origin: Position) -> Position {
        if self.line == 0 {
            Position::new(origin.line, origin.character + self.character)
        } else {
            Position::new(origin.line + self.line, self.character)
        }
    }

    /// Inverse of [`Position::to_outer`].
    ///
    /// Returns `None` when the position lies before `origin`.
    pub fn to_inner(&self, origin: Position) -> Option<Position> {
        if self < &origin {
            return None;
        }

        if self.line == origin.line {
            Some(Position::new(0, self.character - origin.character))
        } else {
            Some(Position::new(self.line - origin.line, self.character))
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.character)
    }
}

/// Range in a text document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Range {
    /// Start position (inclusive)
    pub start: Position,
    /// End position (exclusive)
    pub end: Position,
}

impl Range {
    /// Creates a new range. `start` must not be after `end`.
    pub fn new(start: Position, end: Position) -> Self {
        debug_assert!(start <= end, "range start {} is after end {}", start, end);
        Self { start, end }
    }

    /// Creates a range for a specific part of a line
    pub fn at_line(line: usize, start_char: usize, end_char: usize) -> Self {
        Self::new(Position::new(line, start_char), Position::new(line, end_char))
    }

    /// Creates an empty range at the given position
    pub fn empty_at(position: Position) -> Self {
        Self {
            start: position,
            end: position,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn is_single_line(&self) -> bool {
        self.start.line == self.end.line
    }

    /// Half-open containment: `start <= position < end`.
    pub fn contains(&self, position: Position) -> bool {
        self.start <= position && position < self.end
    }

    /// Containment including the end position.
    ///
    /// Used for cursor queries, where a cursor placed directly after the last
    /// character still belongs to the range.
    pub fn contains_inclusive(&self, position: Position) -> bool {
        self.start <= position && position <= self.end
    }

    pub fn contains_range(&self, other: &Range) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    /// Whether the two ranges share at least one character.
    pub fn overlaps(&self, other: &Range) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Translates a range inside a sub-document that starts at `origin` into
    /// the coordinates of the containing document.
    pub fn to_outer(&self, origin: Position) -> Range {
        Range::new(self.start.to_outer(origin), self.end.to_outer(origin))
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
