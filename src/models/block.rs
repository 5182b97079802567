//! Block data models.
//!
//! These structures describe the result of parsing a `.bru` file: the blocks
//! with their fields, and the text that falls outside of every block.

use super::position::{Position, Range};
use super::variable::VariableReference;
use serde::{Deserialize, Serialize};

/// Opening bracket of a block header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BlockBracket {
    /// `{`, used by dictionary and text blocks
    Curly,
    /// `[`, used by array blocks
    Square,
}

impl BlockBracket {
    pub fn opening(&self) -> char {
        match self {
            BlockBracket::Curly => '{',
            BlockBracket::Square => '[',
        }
    }

    pub fn closing(&self) -> char {
        match self {
            BlockBracket::Curly => '}',
            BlockBracket::Square => ']',
        }
    }
}

/// A named, bracket-delimited section of a `.bru` file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub name: String,
    pub name_range: Range,
    pub content: BlockContent,
    /// Lines between the header and the closing bracket line.
    ///
    /// Empty (located at the start of the closing line) when the block has no
    /// content lines.
    pub content_range: Range,
    /// From the start of the header line to the end of the closing line.
    pub range: Range,
    pub variable_references: Vec<VariableReference>,
}

impl Block {
    pub fn header_line(&self) -> usize {
        self.range.start.line
    }

    pub fn closing_line(&self) -> usize {
        self.range.end.line
    }

    pub fn bracket(&self) -> BlockBracket {
        match self.content {
            BlockContent::Array(_) => BlockBracket::Square,
            _ => BlockBracket::Curly,
        }
    }

    /// Returns the raw content for text and code blocks.
    pub fn text(&self) -> Option<&str> {
        match &self.content {
            BlockContent::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Iterates over the simple and array-valued fields of a dictionary block.
    pub fn dictionary_fields(&self) -> impl Iterator<Item = &DictionaryItem> {
        let items: &[DictionaryItem] = match &self.content {
            BlockContent::Dictionary(items) => items,
            _ => &[],
        };
        items.iter().filter(|item| !item.is_plain_text())
    }

    /// Looks up a dictionary field by key (disabled fields included).
    pub fn field(&self, key: &str) -> Option<&DictionaryItem> {
        self.dictionary_fields().find(|item| item.key() == Some(key))
    }

    /// Iterates over the entries of an array block.
    pub fn array_entries(&self) -> impl Iterator<Item = &ArrayBlockField> {
        let items: &[ArrayItem] = match &self.content {
            BlockContent::Array(items) => items,
            _ => &[],
        };
        items.iter().filter_map(|item| match item {
            ArrayItem::Entry(entry) => Some(entry),
            ArrayItem::PlainText(_) => None,
        })
    }

    /// Lines inside the block that match none of the expected productions.
    pub fn plain_text_within_block(&self) -> Vec<&PlainTextWithinBlock> {
        match &self.content {
            BlockContent::Text(_) => Vec::new(),
            BlockContent::Dictionary(items) => items
                .iter()
                .filter_map(|item| match item {
                    DictionaryItem::PlainText(text) => Some(text),
                    _ => None,
                })
                .collect(),
            BlockContent::Array(items) => items
                .iter()
                .filter_map(|item| match item {
                    ArrayItem::PlainText(text) => Some(text),
                    ArrayItem::Entry(_) => None,
                })
                .collect(),
        }
    }
}

/// Parsed content of a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "value")]
pub enum BlockContent {
    /// Opaque text, for JSON bodies, scripts, docs and similar blocks
    Text(String),
    /// Key/value fields in line order
    Dictionary(Vec<DictionaryItem>),
    /// Array entries in line order
    Array(Vec<ArrayItem>),
}

/// One line-level item of a dictionary block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum DictionaryItem {
    Field(DictionaryBlockSimpleField),
    ArrayField(DictionaryBlockArrayField),
    PlainText(PlainTextWithinBlock),
}

impl DictionaryItem {
    pub fn key(&self) -> Option<&str> {
        match self {
            DictionaryItem::Field(field) => Some(&field.key),
            DictionaryItem::ArrayField(field) => Some(&field.key),
            DictionaryItem::PlainText(_) => None,
        }
    }

    pub fn key_range(&self) -> Option<Range> {
        match self {
            DictionaryItem::Field(field) => Some(field.key_range),
            DictionaryItem::ArrayField(field) => Some(field.key_range),
            DictionaryItem::PlainText(_) => None,
        }
    }

    pub fn is_disabled(&self) -> bool {
        match self {
            DictionaryItem::Field(field) => field.disabled,
            DictionaryItem::ArrayField(field) => field.disabled,
            DictionaryItem::PlainText(_) => false,
        }
    }

    pub fn is_plain_text(&self) -> bool {
        matches!(self, DictionaryItem::PlainText(_))
    }

    pub fn as_simple(&self) -> Option<&DictionaryBlockSimpleField> {
        match self {
            DictionaryItem::Field(field) => Some(field),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&DictionaryBlockArrayField> {
        match self {
            DictionaryItem::ArrayField(field) => Some(field),
            _ => None,
        }
    }
}

/// A `key: value` line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryBlockSimpleField {
    /// `true` when the key carries a leading `~`
    pub disabled: bool,
    pub key: String,
    pub key_range: Range,
    pub value: String,
    pub value_range: Range,
}

/// A `key: [` line followed by one element per line up to a `]` line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryBlockArrayField {
    pub disabled: bool,
    pub key: String,
    pub key_range: Range,
    pub values: Vec<ArrayFieldValue>,
    /// Blank lines between the opening and closing bracket lines
    pub plain_text_within_values: Vec<PlainTextWithinBlock>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrayFieldValue {
    pub content: String,
    pub range: Range,
}

/// One line-level item of an array block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum ArrayItem {
    Entry(ArrayBlockField),
    PlainText(PlainTextWithinBlock),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrayBlockField {
    /// `true` when the entry carries a leading `~`
    pub disabled: bool,
    pub entry: String,
    pub entry_range: Range,
}

/// A line inside a block that matches none of the block's productions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlainTextWithinBlock {
    pub text: String,
    pub range: Range,
}

/// Text that is not claimed by any block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextOutsideOfBlocks {
    pub text: String,
    pub range: Range,
}

/// Result of parsing a whole `.bru` document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedBruFile {
    pub blocks: Vec<Block>,
    pub text_outside_of_blocks: Vec<TextOutsideOfBlocks>,
}

impl ParsedBruFile {
    /// Returns the first block with the given name.
    pub fn block(&self, name: &str) -> Option<&Block> {
        self.blocks.iter().find(|block| block.name == name)
    }

    /// Returns every block with the given name, in document order.
    pub fn blocks_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Block> + 'a {
        self.blocks.iter().filter(move |block| block.name == name)
    }

    /// Returns the block whose full range contains the position.
    pub fn block_at(&self, position: Position) -> Option<&Block> {
        self.blocks
            .iter()
            .find(|block| block.range.contains_inclusive(position))
    }

    /// Whether any text outside of blocks contains something other than
    /// whitespace.
    pub fn has_stray_text(&self) -> bool {
        self.text_outside_of_blocks
            .iter()
            .any(|outside| !outside.text.trim().is_empty())
    }
}
