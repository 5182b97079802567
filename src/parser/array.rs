//! Array block parser.
//!
//! Array blocks hold one entry per line, each followed by a comma except the
//! last one:
//!
//! ```text
//! vars:secret [
//!   token,
//!   ~password
//! ]
//! ```

use super::patterns::{ARRAY_ENTRY_REGEX, LAST_ARRAY_ENTRY_REGEX};
use super::{is_lone_bracket, ParsedContent};
use crate::document::Document;
use crate::models::{ArrayBlockField, ArrayItem, BlockBracket, PlainTextWithinBlock, Range};

/// Parses the array block whose first content line is `first_content_line`.
///
/// Lines that do not match the entry grammar are kept as plain text and
/// parsing continues. Blank lines are always plain text, including a blank
/// last line that the last-entry grammar would accept as an empty entry.
/// Returns `None` when no `]` line follows.
pub fn parse_array_block(
    document: &Document,
    first_content_line: usize,
) -> Option<ParsedContent<Vec<ArrayItem>>> {
    let Some(closing_line) = (first_content_line..document.line_count()).find(|&index| {
        document
            .line(index)
            .is_ok_and(|line| is_lone_bracket(line, BlockBracket::Square.closing()))
    }) else {
        log::debug!(
            "array block starting at line {} has no closing bracket",
            first_content_line
        );
        return None;
    };

    let mut items = Vec::with_capacity(closing_line - first_content_line);
    for index in first_content_line..closing_line {
        let line = document.line(index).ok()?;
        let is_last = index + 1 == closing_line;
        items.push(parse_array_line(line, index, is_last));
    }

    Some(ParsedContent {
        content: items,
        closing_line,
    })
}

fn parse_array_line(line: &str, line_index: usize, is_last: bool) -> ArrayItem {
    let pattern = if is_last {
        &*LAST_ARRAY_ENTRY_REGEX
    } else {
        &*ARRAY_ENTRY_REGEX
    };

    let entry = if line.trim().is_empty() {
        None
    } else {
        pattern.captures(line).and_then(|captures| {
            let disabled = captures.get(1).is_some_and(|m| !m.as_str().is_empty());
            let token = captures.get(2)?;
            Some(ArrayBlockField {
                disabled,
                entry: token.as_str().to_string(),
                entry_range: Range::at_line(line_index, token.start(), token.end()),
            })
        })
    };

    match entry {
        Some(field) => ArrayItem::Entry(field),
        None => ArrayItem::PlainText(PlainTextWithinBlock {
            text: line.to_string(),
            range: Range::at_line(line_index, 0, line.len()),
        }),
    }
}
