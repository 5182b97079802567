//! Block parser and position mapping for `.bru` request files
//!
//! This crate turns the text of a `.bru` file into a structured,
//! range-annotated model that editor features (diagnostics, completion,
//! hover, go-to-definition) can work with.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - **models**: Positions, ranges, blocks, fields and variable references
//! - **document**: Line-indexed view over a text buffer with offset/position conversion
//! - **parser**: Block scanner plus the dictionary, array and text block parsers
//! - **variables**: `{{name}}` interpolation and inbuilt accessor calls in scripts
//! - **config**: Parser settings, loaded from a settings JSON value
//!
//! # File Format
//!
//! A `.bru` file is a sequence of named blocks:
//!
//! ```text
//! meta {
//!   name: Get user
//!   seq: 1
//! }
//!
//! get {
//!   url: {{baseUrl}}/users/{{userId}}
//! }
//!
//! script:post-response {
//!   bru.setVar("userName", res.body.name);
//! }
//! ```
//!
//! Dictionary blocks hold `key: value` fields, array blocks (opened with `[`)
//! hold one entry per line, and text blocks such as bodies, scripts and docs
//! hold opaque text.
//!
//! # Usage
//!
//! ```
//! use bru_syntax::parse_bru_file;
//! use bru_syntax::models::VariableType;
//!
//! let parsed = parse_bru_file("script:pre-request {\n  bru.getEnvVar(\"token\");\n}\n");
//!
//! let script = parsed.block("script:pre-request").unwrap();
//! assert_eq!(script.variable_references[0].variable_name, "token");
//! assert_eq!(script.variable_references[0].variable_type, VariableType::Environment);
//! ```
//!
//! Parsing never fails: malformed lines become plain text inside their block,
//! and a block that is never closed is reported, together with everything
//! after it, as text outside of blocks.

pub mod config;
pub mod document;
pub mod models;
pub mod parser;
pub mod variables;

pub use config::{load_config, load_config_file, ConfigError, ParserConfig};
pub use document::{Document, DocumentError, LineBreak};
pub use parser::{parse_bru_file, parse_document, parse_document_with};
