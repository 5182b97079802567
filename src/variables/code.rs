//! Variable references inside code blocks.
//!
//! A code block's content is treated as a sub-document that starts at the
//! block's content start. Byte offsets reported by the script parser are
//! converted into sub-document positions and then translated into positions
//! of the containing `.bru` document.

use super::inbuilt::{InbuiltFunction, INBUILT_FUNCTION_BASE_IDENTIFIER};
use super::script::{CallArgument, MemberCall, ScriptParser, TreeSitterScriptParser};
use crate::document::Document;
use crate::models::{Position, Range, VariableReference};
use std::ops::Range as ByteRange;

/// An inbuilt accessor call whose first argument is a string literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InbuiltFunctionCall {
    pub function: InbuiltFunction,
    /// Range of the whole call expression
    pub call_range: Range,
    /// Range of the string literal, quotes included
    pub argument_range: Range,
    /// The referenced variable; its range excludes the quotes
    pub reference: VariableReference,
}

/// The inbuilt call found at a queried position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceAtPosition {
    pub call: InbuiltFunctionCall,
    /// Whether the position lies within the string literal argument
    pub position_in_argument: bool,
}

/// Collects the inbuilt function calls in `code`, located relative to
/// `origin`, the position of the code's first character in the containing
/// document.
pub fn find_inbuilt_function_calls(
    code: &str,
    origin: Position,
    script_parser: &dyn ScriptParser,
) -> Vec<InbuiltFunctionCall> {
    let Some(calls) = script_parser.member_calls(code) else {
        log::debug!("no syntax tree for code starting at {}", origin);
        return Vec::new();
    };

    let sub_document = Document::new(code);
    calls
        .iter()
        .filter_map(|call| inbuilt_function_call(&sub_document, origin, call))
        .collect()
}

/// Returns the variable references made through inbuilt function calls in
/// `code`.
///
/// # Arguments
///
/// * `code` - Content of a code block
/// * `origin` - Position of the first character of `code` in the document
///
/// # Examples
///
/// ```
/// use bru_syntax::models::{Position, Range, VariableType};
/// use bru_syntax::variables::get_variable_references_from_code;
///
/// let code = "  const token = bru.getEnvVar(\"token\");";
/// let references = get_variable_references_from_code(code, Position::new(4, 0));
///
/// assert_eq!(references.len(), 1);
/// assert_eq!(references[0].variable_name, "token");
/// assert_eq!(references[0].variable_type, VariableType::Environment);
/// assert_eq!(references[0].variable_name_range, Range::at_line(4, 31, 36));
/// ```
pub fn get_variable_references_from_code(code: &str, origin: Position) -> Vec<VariableReference> {
    get_variable_references_from_code_with(code, origin, &TreeSitterScriptParser)
}

/// Like [`get_variable_references_from_code`], with a custom script parser.
pub fn get_variable_references_from_code_with(
    code: &str,
    origin: Position,
    script_parser: &dyn ScriptParser,
) -> Vec<VariableReference> {
    find_inbuilt_function_calls(code, origin, script_parser)
        .into_iter()
        .map(|call| call.reference)
        .collect()
}

/// Finds the inbuilt function call whose range contains `position`.
///
/// `position` is given in document coordinates. When calls are nested, the
/// innermost one is returned.
pub fn find_inbuilt_call_at(
    code: &str,
    origin: Position,
    position: Position,
) -> Option<ReferenceAtPosition> {
    find_inbuilt_call_at_with(code, origin, position, &TreeSitterScriptParser)
}

/// Like [`find_inbuilt_call_at`], with a custom script parser.
pub fn find_inbuilt_call_at_with(
    code: &str,
    origin: Position,
    position: Position,
    script_parser: &dyn ScriptParser,
) -> Option<ReferenceAtPosition> {
    find_inbuilt_function_calls(code, origin, script_parser)
        .into_iter()
        .filter(|call| call.call_range.contains_inclusive(position))
        .max_by_key(|call| call.call_range.start)
        .map(|call| ReferenceAtPosition {
            position_in_argument: call.argument_range.contains_inclusive(position),
            call,
        })
}

fn inbuilt_function_call(
    sub_document: &Document,
    origin: Position,
    call: &MemberCall,
) -> Option<InbuiltFunctionCall> {
    if call.object != INBUILT_FUNCTION_BASE_IDENTIFIER {
        return None;
    }
    let function = InbuiltFunction::from_name(&call.property)?;

    let argument = call.first_argument.as_ref()?;
    let CallArgument::StringLiteral { value_span, .. } = argument else {
        return None;
    };

    let variable_name = sub_document.text().get(value_span.clone())?;
    let reference = VariableReference::new(
        variable_name,
        outer_range(sub_document, origin, value_span)?,
        function.reference_type(),
        function.variable_type(),
    );

    Some(InbuiltFunctionCall {
        function,
        call_range: outer_range(sub_document, origin, &call.span)?,
        argument_range: outer_range(sub_document, origin, &argument.span())?,
        reference,
    })
}

fn outer_range(sub_document: &Document, origin: Position, span: &ByteRange<usize>) -> Option<Range> {
    let start = sub_document.position_at(span.start)?;
    let end = sub_document.position_at(span.end)?;
    Some(Range::new(start, end).to_outer(origin))
}
