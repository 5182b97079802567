//! Line-level productions of the block grammar.
//!
//! Every pattern is compiled once and reused across parses.

use once_cell::sync::Lazy;
use regex::Regex;

/// Block header: `name {` or `name [`, nothing else on the line.
///
/// Group 1 is the block name, group 2 the opening bracket.
pub static BLOCK_START_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([\w\-:]+)\s*([\{\[])\s*$").expect("Failed to compile block start regex")
});

/// A whole string that is a valid block name.
pub static BLOCK_NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[\w\-:]+$").expect("Failed to compile block name regex"));

/// Dictionary field: `key: value`, optionally disabled with a leading `~`.
///
/// Group 1 is the disabled marker, group 2 the key, group 3 the raw
/// (untrimmed) value.
pub static DICTIONARY_FIELD_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(~?)([^\s:]+)\s*:(.*)$").expect("Failed to compile dictionary field regex")
});

/// Array block entry that is followed by another entry.
///
/// Group 1 is the disabled marker, group 2 the entry.
pub static ARRAY_ENTRY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(~?)([\w\-.]*)\s*,$").expect("Failed to compile array entry regex")
});

/// Last entry of an array block, which has no trailing comma.
pub static LAST_ARRAY_ENTRY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(~?)([\w\-.]*)\s*$").expect("Failed to compile last array entry regex")
});

/// Variable interpolation `{{name}}`. Group 1 is the name.
pub static VARIABLE_INTERPOLATION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\{([^\s{}]+)\}\}").expect("Failed to compile variable interpolation regex")
});
