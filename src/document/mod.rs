//! Line-indexed document model.
//!
//! A [`Document`] owns a text snapshot and splits it into lines in a single
//! pass, remembering which line break followed each line. Joining the lines
//! with their breaks reproduces the original text exactly, so positions and
//! byte offsets can be converted in both directions without loss, even for
//! files that mix `\n` and `\r\n`.
//!
//! Documents are immutable. An edit produces a new document.

pub mod error;

use crate::models::{Position, Range};
pub use error::DocumentError;
use serde::{Deserialize, Serialize};

/// Line break sequence that terminates a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineBreak {
    /// `\n`
    Lf,
    /// `\r\n`
    CrLf,
}

impl LineBreak {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineBreak::Lf => "\n",
            LineBreak::CrLf => "\r\n",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LineSpan {
    /// Byte offset of the first content byte
    start: usize,
    /// Byte offset just past the content (the break is not included)
    end: usize,
    line_break: Option<LineBreak>,
}

impl LineSpan {
    fn len(&self) -> usize {
        self.end - self.start
    }
}

/// Immutable, line-indexed view over a text snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    text: String,
    lines: Vec<LineSpan>,
}

impl Document {
    /// Builds the line index for `text`.
    ///
    /// An empty text has a single empty line, and a text ending with a line
    /// break has a trailing empty line.
    ///
    /// # Examples
    ///
    /// ```
    /// use bru_syntax::document::{Document, LineBreak};
    ///
    /// let document = Document::new("meta {\r\n}\n");
    /// assert_eq!(document.line_count(), 3);
    /// assert_eq!(document.line(1).unwrap(), "}");
    /// assert_eq!(document.line_break(0).unwrap(), Some(LineBreak::CrLf));
    /// ```
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let bytes = text.as_bytes();
        let mut lines = Vec::new();
        let mut start = 0;

        while let Some(relative) = text[start..].find('\n') {
            let newline = start + relative;
            let (end, line_break) = if newline > start && bytes[newline - 1] == b'\r' {
                (newline - 1, LineBreak::CrLf)
            } else {
                (newline, LineBreak::Lf)
            };

            lines.push(LineSpan {
                start,
                end,
                line_break: Some(line_break),
            });
            start = newline + 1;
        }

        lines.push(LineSpan {
            start,
            end: text.len(),
            line_break: None,
        });

        Self { text, lines }
    }

    /// The full original text.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Content of line `index`, without its line break.
    pub fn line(&self, index: usize) -> Result<&str, DocumentError> {
        let span = self.span(index)?;
        Ok(&self.text[span.start..span.end])
    }

    /// The line break that follows line `index` (`None` for the last line).
    pub fn line_break(&self, index: usize) -> Result<Option<LineBreak>, DocumentError> {
        Ok(self.span(index)?.line_break)
    }

    /// Length of line `index` in bytes, without its line break.
    pub fn line_length(&self, index: usize) -> Result<usize, DocumentError> {
        Ok(self.span(index)?.len())
    }

    /// Range covering the content of line `index`.
    pub fn line_range(&self, index: usize) -> Result<Range, DocumentError> {
        Ok(Range::at_line(index, 0, self.span(index)?.len()))
    }

    /// Iterates over `(content, line_break)` pairs in order.
    pub fn lines(&self) -> impl Iterator<Item = (&str, Option<LineBreak>)> + '_ {
        self.lines
            .iter()
            .map(move |span| (&self.text[span.start..span.end], span.line_break))
    }

    /// Position just past the last character of the document.
    pub fn end_position(&self) -> Position {
        let last = self.lines.len() - 1;
        Position::new(last, self.lines[last].len())
    }

    pub fn full_range(&self) -> Range {
        Range::new(Position::default(), self.end_position())
    }

    /// Returns the text covered by `range`.
    ///
    /// Out-of-bounds positions are clamped: line indices to the last line,
    /// characters to the line's length. An inverted range yields an empty
    /// string.
    pub fn text_in_range(&self, range: &Range) -> &str {
        let start = self.clamped_offset(range.start);
        let end = self.clamped_offset(range.end);

        if start >= end {
            return "";
        }

        &self.text[start..end]
    }

    /// Resolves the position `offset` bytes after `from`.
    ///
    /// An offset equal to a line's content length resolves to the end of that
    /// line rather than the start of the next one. An offset that lands inside
    /// a `\r\n` pair resolves to the end of the line. The end of the document
    /// resolves to [`Document::end_position`]; anything beyond it yields
    /// `None`.
    pub fn position_for_offset(&self, from: Position, offset: usize) -> Option<Position> {
        let target = self.clamped_offset(from).checked_add(offset)?;
        if target > self.text.len() {
            return None;
        }

        let index = self
            .lines
            .partition_point(|span| span.start <= target)
            .saturating_sub(1);
        let span = &self.lines[index];
        let character = (target - span.start).min(span.len());

        Some(Position::new(index, character))
    }

    /// Resolves an absolute byte offset from the start of the document.
    pub fn position_at(&self, offset: usize) -> Option<Position> {
        self.position_for_offset(Position::default(), offset)
    }

    /// Byte offset of `position` from the start of the document.
    ///
    /// Equal to the length of the text between the document start and the
    /// (clamped) position.
    pub fn offset_for_position(&self, position: Position) -> usize {
        self.clamped_offset(position)
    }

    /// The line break used by most lines, or `None` when the document has
    /// fewer than two lines. Ties resolve to [`LineBreak::Lf`].
    pub fn most_used_line_break(&self) -> Option<LineBreak> {
        if self.lines.len() < 2 {
            return None;
        }

        let (mut lf, mut crlf) = (0usize, 0usize);
        for span in &self.lines {
            match span.line_break {
                Some(LineBreak::Lf) => lf += 1,
                Some(LineBreak::CrLf) => crlf += 1,
                None => {}
            }
        }

        if crlf > lf {
            Some(LineBreak::CrLf)
        } else {
            Some(LineBreak::Lf)
        }
    }

    fn span(&self, index: usize) -> Result<&LineSpan, DocumentError> {
        self.lines.get(index).ok_or(DocumentError::LineOutOfRange {
            index,
            line_count: self.lines.len(),
        })
    }

    fn clamped_offset(&self, position: Position) -> usize {
        let Some(span) = self.lines.get(position.line) else {
            return self.text.len();
        };

        let line = &self.text[span.start..span.end];
        span.start + floor_char_boundary(line, position.character)
    }

    #[cfg(test)]
    fn break_lengths(&self) -> Vec<usize> {
        self.lines
            .iter()
            .map(|span| span.line_break.map_or(0, |b| b.as_str().len()))
            .collect()
    }
}

/// Largest char boundary of `text` that is not greater than `index`.
fn floor_char_boundary(text: &str, index: usize) -> usize {
    if index >= text.len() {
        return text.len();
    }

    let mut index = index;
    while !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}
