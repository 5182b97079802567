//! Plain text and code block extraction.
//!
//! Text blocks (JSON bodies, scripts, docs) are returned verbatim. Their end is
//! found by counting every `{` and `}` on each line.

use super::{brace_delta, content_range, ParsedContent};
use crate::document::Document;

/// Extracts the text block whose first content line is `first_content_line`.
///
/// Returns `None` when the braces never balance before the end of the
/// document.
pub fn parse_text_block(
    document: &Document,
    first_content_line: usize,
) -> Option<ParsedContent<String>> {
    let mut depth: i64 = 1;

    for index in first_content_line..document.line_count() {
        depth += brace_delta(document.line(index).ok()?);

        if depth <= 0 {
            let range = content_range(document, first_content_line, index);
            return Some(ParsedContent {
                content: document.text_in_range(&range).to_string(),
                closing_line: index,
            });
        }
    }

    log::debug!(
        "text block starting at line {} is never closed",
        first_content_line
    );
    None
}
