//! Script syntax inspection for code blocks.
//!
//! Code blocks are scanned for member calls such as `bru.getVar("name")`.
//! The [`ScriptParser`] trait hides the syntax tree library; the default
//! implementation parses the code with tree-sitter's JavaScript grammar.

use std::ops::Range as ByteRange;
use tree_sitter::{Node, Parser};

/// Produces the member calls found in a piece of script code.
pub trait ScriptParser {
    /// Returns every `object.property(...)` call in `source`, in document
    /// order of the call start, or `None` when the source cannot be parsed.
    fn member_calls(&self, source: &str) -> Option<Vec<MemberCall>>;
}

/// A call of the form `object.property(arguments)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberCall {
    pub object: String,
    pub property: String,
    /// Byte span of the whole call expression
    pub span: ByteRange<usize>,
    pub first_argument: Option<CallArgument>,
}

/// The first argument of a call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallArgument {
    /// A quoted string, or a template literal without substitutions, whose
    /// content has no escape sequences. Other literals are [`CallArgument::Other`].
    StringLiteral {
        span: ByteRange<usize>,
        /// Span of the literal's content, quotes excluded
        value_span: ByteRange<usize>,
    },
    Other {
        span: ByteRange<usize>,
    },
}

impl CallArgument {
    pub fn span(&self) -> ByteRange<usize> {
        match self {
            CallArgument::StringLiteral { span, .. } | CallArgument::Other { span } => {
                span.clone()
            }
        }
    }
}

/// [`ScriptParser`] backed by tree-sitter and its JavaScript grammar.
///
/// A new parser is created for every call, so the type holds no state.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeSitterScriptParser;

impl ScriptParser for TreeSitterScriptParser {
    fn member_calls(&self, source: &str) -> Option<Vec<MemberCall>> {
        let mut parser = Parser::new();
        let language = tree_sitter_javascript::LANGUAGE.into();

        if let Err(e) = parser.set_language(&language) {
            log::warn!("tree-sitter JavaScript language could not be loaded: {}", e);
            return None;
        }

        let tree = parser.parse(source, None)?;
        if tree.root_node().has_error() {
            log::trace!("script contains syntax errors, scanning the partial tree");
        }

        let mut calls = Vec::new();
        let mut cursor = tree.walk();

        // Pre-order walk, so outer calls come before the calls nested in them.
        loop {
            let node = cursor.node();
            if node.kind() == "call_expression" {
                if let Some(call) = member_call(node, source) {
                    calls.push(call);
                }
            }

            if cursor.goto_first_child() {
                continue;
            }

            loop {
                if cursor.goto_next_sibling() {
                    break;
                }
                if !cursor.goto_parent() {
                    return Some(calls);
                }
            }
        }
    }
}

fn member_call(node: Node, source: &str) -> Option<MemberCall> {
    let function = node.child_by_field_name("function")?;
    if function.kind() != "member_expression" {
        return None;
    }

    let object = function.child_by_field_name("object")?;
    let property = function.child_by_field_name("property")?;
    if object.kind() != "identifier" || property.kind() != "property_identifier" {
        return None;
    }

    let first_argument = node
        .child_by_field_name("arguments")
        .filter(|arguments| arguments.kind() == "arguments")
        .and_then(|arguments| {
            let mut cursor = arguments.walk();
            let first = arguments
                .named_children(&mut cursor)
                .find(|child| child.kind() != "comment");
            first
        })
        .map(call_argument);

    Some(MemberCall {
        object: source.get(object.byte_range())?.to_string(),
        property: source.get(property.byte_range())?.to_string(),
        span: node.byte_range(),
        first_argument,
    })
}

/// Only literals whose source text equals their value are string literals.
fn call_argument(node: Node) -> CallArgument {
    let span = node.byte_range();
    let is_literal = match node.kind() {
        "string" | "template_string" => {
            let mut cursor = node.walk();
            let is_verbatim = !node.named_children(&mut cursor).any(|child| {
                matches!(child.kind(), "template_substitution" | "escape_sequence")
            });
            is_verbatim
        }
        _ => false,
    };

    if is_literal && span.len() >= 2 {
        let value_span = span.start + 1..span.end - 1;
        CallArgument::StringLiteral { span, value_span }
    } else {
        CallArgument::Other { span }
    }
}
