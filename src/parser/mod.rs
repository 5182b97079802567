//! `.bru` file parser.
//!
//! This module turns the text of a `.bru` file into a [`ParsedBruFile`]: the
//! named blocks it contains, their parsed content, the variable references
//! found inside them, and every piece of text that belongs to no block.
//!
//! Parsing never fails. Malformed lines inside a block are kept as plain text
//! and unterminated blocks are reported as text outside of blocks, so callers
//! can diagnose problems while still working with the parts that did parse.

pub mod array;
pub mod block_names;
pub mod dictionary;
pub mod patterns;
pub mod scanner;
pub mod text;

pub use array::parse_array_block;
pub use block_names::BlockContentKind;
pub use dictionary::{parse_dictionary_block, parse_field_line};
pub use scanner::{match_block_header, parse_block, scan_blocks, BlockHeader};
pub use text::parse_text_block;

use crate::config::ParserConfig;
use crate::document::Document;
use crate::models::{BlockBracket, ParsedBruFile, Position, Range};
use crate::variables::script::{ScriptParser, TreeSitterScriptParser};

/// Result of parsing the content lines of one block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedContent<T> {
    pub content: T,
    /// Line holding the bracket that closes the block
    pub closing_line: usize,
}

/// Parses the text of a `.bru` file with the default configuration.
///
/// # Arguments
///
/// * `text` - The full content of the file
///
/// # Returns
///
/// The blocks of the file in document order, and the text outside of them.
///
/// # Examples
///
/// ```
/// use bru_syntax::parser::parse_bru_file;
///
/// let content = "meta {\n  name: Get users\n  seq: 1\n}\n\nget {\n  url: {{baseUrl}}/users\n}\n";
///
/// let parsed = parse_bru_file(content);
/// assert_eq!(parsed.blocks.len(), 2);
/// assert_eq!(parsed.blocks[1].variable_references[0].variable_name, "baseUrl");
/// ```
pub fn parse_bru_file(text: &str) -> ParsedBruFile {
    parse_document(&Document::new(text), &ParserConfig::default())
}

/// Parses a document with the given configuration.
pub fn parse_document(document: &Document, config: &ParserConfig) -> ParsedBruFile {
    parse_document_with(document, config, &TreeSitterScriptParser)
}

/// Parses a document, using `script_parser` to inspect code blocks.
pub fn parse_document_with(
    document: &Document,
    config: &ParserConfig,
    script_parser: &dyn ScriptParser,
) -> ParsedBruFile {
    let parsed = scan_blocks(document, config, script_parser);
    log::debug!(
        "parsed {} blocks and {} spans of text outside of blocks",
        parsed.blocks.len(),
        parsed.text_outside_of_blocks.len()
    );
    parsed
}

/// Net number of opening curly braces on a line.
pub(crate) fn brace_delta(line: &str) -> i64 {
    let curly = BlockBracket::Curly;
    line.chars().fold(0, |delta, c| {
        if c == curly.opening() {
            delta + 1
        } else if c == curly.closing() {
            delta - 1
        } else {
            delta
        }
    })
}

/// Whether `text` is `bracket`, ignoring surrounding whitespace.
pub(crate) fn is_lone_bracket(text: &str, bracket: char) -> bool {
    let mut chars = text.trim().chars();
    chars.next() == Some(bracket) && chars.next().is_none()
}

/// Range covering the content lines of a block that closes on `closing_line`.
pub(crate) fn content_range(
    document: &Document,
    first_content_line: usize,
    closing_line: usize,
) -> Range {
    if first_content_line >= closing_line {
        return Range::empty_at(Position::new(closing_line, 0));
    }

    let last_content_line = closing_line - 1;
    let end_character = document.line_length(last_content_line).unwrap_or(0);
    Range::new(
        Position::new(first_content_line, 0),
        Position::new(last_content_line, end_character),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BlockContent;

    #[test]
    fn test_brace_delta() {
        assert_eq!(brace_delta("{"), 1);
        assert_eq!(brace_delta("  }"), -1);
        assert_eq!(brace_delta("{ \"a\": {} }"), 0);
        assert_eq!(brace_delta("{{"), 2);
        assert_eq!(brace_delta("plain"), 0);
    }

    #[test]
    fn test_is_lone_bracket() {
        assert!(is_lone_bracket("]", ']'));
        assert!(is_lone_bracket("  ]\t", ']'));
        assert!(is_lone_bracket("[", '['));
        assert!(!is_lone_bracket("],", ']'));
        assert!(!is_lone_bracket("]]", ']'));
        assert!(!is_lone_bracket("", ']'));
        assert!(!is_lone_bracket("}", ']'));
    }

    #[test]
    fn test_content_range() {
        let document = Document::new("docs {\n  one\n  three\n}");

        assert_eq!(
            content_range(&document, 1, 3),
            Range::new(Position::new(1, 0), Position::new(2, 7))
        );
        assert_eq!(
            content_range(&document, 3, 3),
            Range::empty_at(Position::new(3, 0))
        );
    }

    #[test]
    fn test_parse_request_file() {
        let content = r#"meta {
  name: Create user
  type: http
  seq: 2
}

post {
  url: {{baseUrl}}/users
  body: json
}

headers {
  content-type: application/json
  ~x-debug: true
}

body:json {
  {
    "name": "{{userName}}"
  }
}

script:pre-request {
  bru.setVar("startedAt", Date.now());
}
"#;

        let parsed = parse_bru_file(content);
        let names: Vec<_> = parsed.blocks.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["meta", "post", "headers", "body:json", "script:pre-request"]
        );
        assert!(!parsed.has_stray_text());

        let headers = parsed.block("headers").unwrap();
        assert!(headers.field("x-debug").unwrap().is_disabled());

        let body = parsed.block("body:json").unwrap();
        assert!(matches!(body.content, BlockContent::Text(_)));
        assert_eq!(body.variable_references[0].variable_name, "userName");

        let script = parsed.block("script:pre-request").unwrap();
        assert_eq!(script.variable_references.len(), 1);
        assert_eq!(script.variable_references[0].variable_name, "startedAt");
        assert!(script.variable_references[0].is_write());
    }

    #[test]
    fn test_custom_text_block_names() {
        let config = ParserConfig {
            text_block_names: vec!["notes".to_string()],
            code_block_names: Vec::new(),
        };
        let document = Document::new("notes {\n  a: b\n}\n");

        let parsed = parse_document(&document, &config);
        assert_eq!(parsed.blocks[0].text(), Some("  a: b"));
    }

    #[test]
    fn test_empty_document() {
        let parsed = parse_bru_file("");
        assert!(parsed.blocks.is_empty());
        assert!(parsed.text_outside_of_blocks.is_empty());
    }
}
