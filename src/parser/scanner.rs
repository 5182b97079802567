//! Top-level block scanner.
//!
//! Walks the document line by line looking for block headers, hands each block
//! to the parser for its content kind, and records every span of text between
//! blocks. When a block is never closed, the rest of the document from its
//! header on is reported as text outside of blocks and scanning stops, so one
//! unterminated block cannot produce misleading blocks further down.

use super::array::parse_array_block;
use super::block_names::BlockContentKind;
use super::content_range;
use super::dictionary::parse_dictionary_block;
use super::patterns::BLOCK_START_REGEX;
use super::text::parse_text_block;
use crate::config::ParserConfig;
use crate::document::Document;
use crate::models::{
    Block, BlockBracket, BlockContent, ParsedBruFile, Position, Range, TextOutsideOfBlocks,
};
use crate::variables::script::ScriptParser;
use crate::variables::{get_variable_references_from_code_with, scan_interpolated_variables};

/// A line that opens a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockHeader {
    pub name: String,
    pub name_range: Range,
    pub bracket: BlockBracket,
}

impl BlockHeader {
    pub fn line(&self) -> usize {
        self.name_range.start.line
    }
}

/// Matches a block header line.
pub fn match_block_header(line: &str, line_index: usize) -> Option<BlockHeader> {
    let captures = BLOCK_START_REGEX.captures(line)?;
    let name = captures.get(1)?;
    let bracket = match captures.get(2)?.as_str() {
        "{" => BlockBracket::Curly,
        "[" => BlockBracket::Square,
        other => unreachable!("block start pattern admitted bracket {:?}", other),
    };

    Some(BlockHeader {
        name: name.as_str().to_string(),
        name_range: Range::at_line(line_index, name.start(), name.end()),
        bracket,
    })
}

/// Scans the whole document into blocks and text outside of blocks.
pub fn scan_blocks(
    document: &Document,
    config: &ParserConfig,
    script_parser: &dyn ScriptParser,
) -> ParsedBruFile {
    let mut parsed = ParsedBruFile::default();
    let mut outside_start = Position::default();
    let mut index = 0;

    while index < document.line_count() {
        let Some(header) = document
            .line(index)
            .ok()
            .and_then(|line| match_block_header(line, index))
        else {
            index += 1;
            continue;
        };

        let header_start = Position::new(index, 0);
        push_text_outside(document, &mut parsed, outside_start, header_start);

        match parse_block(document, &header, config, script_parser) {
            Some(block) => {
                index = block.closing_line() + 1;
                outside_start = start_of_line_or_end(document, index);
                parsed.blocks.push(block);
            }
            None => {
                log::debug!(
                    "block '{}' at line {} is not terminated, treating the rest of the document as text outside of blocks",
                    header.name,
                    index
                );
                push_text_outside(document, &mut parsed, header_start, document.end_position());
                return parsed;
            }
        }
    }

    push_text_outside(document, &mut parsed, outside_start, document.end_position());
    parsed
}

/// Parses the block opened by `header`, or `None` if it is never closed.
pub fn parse_block(
    document: &Document,
    header: &BlockHeader,
    config: &ParserConfig,
    script_parser: &dyn ScriptParser,
) -> Option<Block> {
    let first_content_line = header.line() + 1;
    let kind = BlockContentKind::classify(&header.name, header.bracket, config);

    let (content, closing_line) = match kind {
        BlockContentKind::Array => {
            let parsed = parse_array_block(document, first_content_line)?;
            (BlockContent::Array(parsed.content), parsed.closing_line)
        }
        BlockContentKind::Dictionary => {
            let parsed = parse_dictionary_block(document, first_content_line)?;
            (BlockContent::Dictionary(parsed.content), parsed.closing_line)
        }
        BlockContentKind::Text | BlockContentKind::Code => {
            let parsed = parse_text_block(document, first_content_line)?;
            (BlockContent::Text(parsed.content), parsed.closing_line)
        }
    };

    let content_range = content_range(document, first_content_line, closing_line);
    let range = Range::new(
        Position::new(header.line(), 0),
        Position::new(closing_line, document.line_length(closing_line).ok()?),
    );

    let variable_references = match (kind, &content) {
        (BlockContentKind::Code, BlockContent::Text(code)) => {
            get_variable_references_from_code_with(code, content_range.start, script_parser)
        }
        _ => scan_interpolated_variables(document, &content_range),
    };

    Some(Block {
        name: header.name.clone(),
        name_range: header.name_range,
        content,
        content_range,
        range,
        variable_references,
    })
}

fn start_of_line_or_end(document: &Document, line: usize) -> Position {
    if line < document.line_count() {
        Position::new(line, 0)
    } else {
        document.end_position()
    }
}

fn push_text_outside(
    document: &Document,
    parsed: &mut ParsedBruFile,
    start: Position,
    end: Position,
) {
    if start >= end {
        return;
    }

    let range = Range::new(start, end);
    let text = document.text_in_range(&range);
    if !text.is_empty() {
        parsed.text_outside_of_blocks.push(TextOutsideOfBlocks {
            text: text.to_string(),
            range,
        });
    }
}
