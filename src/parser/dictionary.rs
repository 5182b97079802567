//! Dictionary block parser.
//!
//! Dictionary blocks hold one `key: value` field per line. The only irregular
//! construct is the array-valued field:
//!
//! ```text
//! headers {
//!   x-custom: [
//!     a,
//!     b
//!   ]
//! }
//! ```
//!
//! A `key: [` line is only tentatively a simple field. If the next line is not
//! another `key: value` line, the tentative field is reinterpreted as the key
//! of an array-valued field whose elements run up to the first `]` line.

use super::patterns::DICTIONARY_FIELD_REGEX;
use super::{brace_delta, is_lone_bracket, ParsedContent};
use crate::document::Document;
use crate::models::{
    ArrayFieldValue, BlockBracket, DictionaryBlockArrayField, DictionaryBlockSimpleField,
    DictionaryItem, PlainTextWithinBlock, Range,
};

/// Lookahead state of the line classifier.
#[derive(Debug)]
enum FieldState {
    Idle,
    /// The previous line was `key: [`; its meaning depends on this line.
    TentativeArrayStart(DictionaryBlockSimpleField),
}

/// Parses the dictionary block whose first content line is
/// `first_content_line`.
///
/// Brackets inside recognized keys and values are ignored; every other line
/// adjusts the nesting depth by its `{`/`}` count, and the line on which the
/// depth returns to zero is the closing line. Returns `None` when the document
/// ends first, or when an array-valued field is never closed.
pub fn parse_dictionary_block(
    document: &Document,
    first_content_line: usize,
) -> Option<ParsedContent<Vec<DictionaryItem>>> {
    let mut items = Vec::new();
    let mut state = FieldState::Idle;
    let mut depth: i64 = 1;
    let mut index = first_content_line;

    while index < document.line_count() {
        let line = document.line(index).ok()?;
        let field = parse_field_line(line, index);

        if let FieldState::TentativeArrayStart(candidate) =
            std::mem::replace(&mut state, FieldState::Idle)
        {
            if field.is_none() {
                let (array_field, closing_line) = collect_array_field(document, candidate, index)?;
                items.push(DictionaryItem::ArrayField(array_field));
                index = closing_line + 1;
                continue;
            }
            items.push(DictionaryItem::Field(candidate));
        }

        match field {
            Some(field) if is_lone_bracket(&field.value, BlockBracket::Square.opening()) => {
                state = FieldState::TentativeArrayStart(field);
            }
            Some(field) => items.push(DictionaryItem::Field(field)),
            None => {
                depth += brace_delta(line);
                if depth <= 0 {
                    return Some(ParsedContent {
                        content: items,
                        closing_line: index,
                    });
                }
                items.push(DictionaryItem::PlainText(PlainTextWithinBlock {
                    text: line.to_string(),
                    range: Range::at_line(index, 0, line.len()),
                }));
            }
        }

        index += 1;
    }

    log::debug!(
        "dictionary block starting at line {} is never closed",
        first_content_line
    );
    None
}

/// Parses a single `key: value` line.
///
/// The key range excludes the disabled marker; the value is trimmed and its
/// range points at the trimmed text.
pub fn parse_field_line(line: &str, line_index: usize) -> Option<DictionaryBlockSimpleField> {
    let captures = DICTIONARY_FIELD_REGEX.captures(line)?;
    let disabled = captures.get(1).is_some_and(|marker| !marker.as_str().is_empty());
    let key = captures.get(2)?;
    let raw_value = captures.get(3)?;

    let leading_whitespace = raw_value.as_str().len() - raw_value.as_str().trim_start().len();
    let value = raw_value.as_str().trim();
    let value_start = raw_value.start() + leading_whitespace;

    Some(DictionaryBlockSimpleField {
        disabled,
        key: key.as_str().to_string(),
        key_range: Range::at_line(line_index, key.start(), key.end()),
        value: value.to_string(),
        value_range: Range::at_line(line_index, value_start, value_start + value.len()),
    })
}

/// Collects the elements of an array-valued field starting at `first_line`.
///
/// Returns the field and the index of its `]` line.
fn collect_array_field(
    document: &Document,
    key_field: DictionaryBlockSimpleField,
    first_line: usize,
) -> Option<(DictionaryBlockArrayField, usize)> {
    let mut values = Vec::new();
    let mut plain_text_within_values = Vec::new();

    for index in first_line..document.line_count() {
        let line = document.line(index).ok()?;
        let trimmed = line.trim();

        if is_lone_bracket(trimmed, BlockBracket::Square.closing()) {
            let field = DictionaryBlockArrayField {
                disabled: key_field.disabled,
                key: key_field.key,
                key_range: key_field.key_range,
                values,
                plain_text_within_values,
            };
            return Some((field, index));
        }

        if trimmed.is_empty() {
            plain_text_within_values.push(PlainTextWithinBlock {
                text: line.to_string(),
                range: Range::at_line(index, 0, line.len()),
            });
            continue;
        }

        let content = trimmed.strip_suffix(',').unwrap_or(trimmed).trim_end();
        let start = line.len() - line.trim_start().len();
        values.push(ArrayFieldValue {
            content: content.to_string(),
            range: Range::at_line(index, start, start + content.len()),
        });
    }

    log::trace!(
        "array field '{}' opened at line {} is never closed",
        key_field.key,
        key_field.key_range.start.line
    );
    None
}
