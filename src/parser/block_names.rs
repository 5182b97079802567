//! Known block names and block content classification.
//!
//! The opening bracket decides between array blocks (`[`) and the rest (`{`).
//! Among `{` blocks, the configured text block names hold opaque text (and,
//! for script blocks, code); every other name is parsed as a dictionary.

use crate::config::ParserConfig;
use crate::models::BlockBracket;

pub const META: &str = "meta";
pub const HEADERS: &str = "headers";
pub const QUERY_PARAMS: &str = "params:query";
pub const PATH_PARAMS: &str = "params:path";
pub const JSON_BODY: &str = "body:json";
pub const TEXT_BODY: &str = "body:text";
pub const XML_BODY: &str = "body:xml";
pub const SPARQL_BODY: &str = "body:sparql";
pub const GRAPHQL_BODY: &str = "body:graphql";
pub const GRAPHQL_BODY_VARS: &str = "body:graphql:vars";
pub const FORM_URL_ENCODED_BODY: &str = "body:form-urlencoded";
pub const MULTIPART_FORM_BODY: &str = "body:multipart-form";
pub const PRE_REQUEST_VARS: &str = "vars:pre-request";
pub const POST_RESPONSE_VARS: &str = "vars:post-response";
pub const ASSERTIONS: &str = "assert";
pub const PRE_REQUEST_SCRIPT: &str = "script:pre-request";
pub const POST_RESPONSE_SCRIPT: &str = "script:post-response";
pub const TESTS: &str = "tests";
pub const DOCS: &str = "docs";
pub const SETTINGS: &str = "settings";
/// Variables of an environment file
pub const ENVIRONMENT_VARS: &str = "vars";
/// Secret variable names of an environment file (an array block)
pub const ENVIRONMENT_SECRET_VARS: &str = "vars:secret";

/// Blocks that hold opaque text unless configured otherwise.
pub const DEFAULT_TEXT_BLOCK_NAMES: &[&str] = &[
    JSON_BODY,
    TEXT_BODY,
    XML_BODY,
    SPARQL_BODY,
    GRAPHQL_BODY,
    GRAPHQL_BODY_VARS,
    PRE_REQUEST_SCRIPT,
    POST_RESPONSE_SCRIPT,
    TESTS,
    DOCS,
];

/// Text blocks that contain script code unless configured otherwise.
pub const DEFAULT_CODE_BLOCK_NAMES: &[&str] = &[PRE_REQUEST_SCRIPT, POST_RESPONSE_SCRIPT, TESTS];

/// How the content of a block is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockContentKind {
    Dictionary,
    Array,
    Text,
    /// Text that is scanned as script code for variable references
    Code,
}

impl BlockContentKind {
    /// Classifies a block from its name and opening bracket.
    pub fn classify(name: &str, bracket: BlockBracket, config: &ParserConfig) -> Self {
        match bracket {
            BlockBracket::Square => BlockContentKind::Array,
            BlockBracket::Curly if config.is_code_block(name) => BlockContentKind::Code,
            BlockBracket::Curly if config.is_text_block(name) => BlockContentKind::Text,
            BlockBracket::Curly => BlockContentKind::Dictionary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_with_defaults() {
        let config = ParserConfig::default();

        assert_eq!(
            BlockContentKind::classify(META, BlockBracket::Curly, &config),
            BlockContentKind::Dictionary
        );
        assert_eq!(
            BlockContentKind::classify(JSON_BODY, BlockBracket::Curly, &config),
            BlockContentKind::Text
        );
        assert_eq!(
            BlockContentKind::classify(TESTS, BlockBracket::Curly, &config),
            BlockContentKind::Code
        );
        assert_eq!(
            BlockContentKind::classify(ENVIRONMENT_SECRET_VARS, BlockBracket::Square, &config),
            BlockContentKind::Array
        );
        assert_eq!(
            BlockContentKind::classify("unknown-block", BlockBracket::Curly, &config),
            BlockContentKind::Dictionary
        );
    }

    #[test]
    fn test_bracket_wins_over_name() {
        let config = ParserConfig::default();
        assert_eq!(
            BlockContentKind::classify(DOCS, BlockBracket::Square, &config),
            BlockContentKind::Array
        );
    }
}
