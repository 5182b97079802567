//! Data models for parsed `.bru` documents.
//!
//! This module contains the position primitives and the block, field and
//! variable reference structures produced by the parser.

pub mod block;
pub mod position;
pub mod variable;

pub use block::{
    ArrayBlockField, ArrayFieldValue, ArrayItem, Block, BlockBracket, BlockContent,
    DictionaryBlockArrayField, DictionaryBlockSimpleField, DictionaryItem, ParsedBruFile,
    PlainTextWithinBlock, TextOutsideOfBlocks,
};
pub use position::{Position, Range};
pub use variable::{VariableReference, VariableReferenceType, VariableType};
