//! `{{name}}` interpolation scanning for non-code block content.

use crate::document::Document;
use crate::models::{Position, Range, VariableReference, VariableReferenceType, VariableType};
use crate::parser::patterns::VARIABLE_INTERPOLATION_REGEX;

/// Finds every `{{name}}` interpolation inside `range`.
///
/// Each match yields a read reference of unknown type whose range covers the
/// variable name only, without the braces.
///
/// # Examples
///
/// ```
/// use bru_syntax::document::Document;
/// use bru_syntax::models::Range;
/// use bru_syntax::variables::scan_interpolated_variables;
///
/// let document = Document::new("get {\n  url: {{host}}/users/{{id}}\n}");
/// let references = scan_interpolated_variables(&document, &Range::at_line(1, 0, 31));
///
/// let names: Vec<_> = references.iter().map(|r| r.variable_name.as_str()).collect();
/// assert_eq!(names, vec!["host", "id"]);
/// assert_eq!(references[0].variable_name_range, Range::at_line(1, 9, 13));
/// ```
pub fn scan_interpolated_variables(document: &Document, range: &Range) -> Vec<VariableReference> {
    let text = document.text_in_range(range);

    VARIABLE_INTERPOLATION_REGEX
        .captures_iter(text)
        .filter_map(|captures| {
            let name = captures.get(1)?;
            let start = document.position_for_offset(range.start, name.start())?;
            let end = document.position_for_offset(range.start, name.end())?;

            Some(VariableReference::new(
                name.as_str(),
                Range::new(start, end),
                VariableReferenceType::Read,
                VariableType::Unknown,
            ))
        })
        .collect()
}

/// Returns the reference whose name range contains `position`.
///
/// A position directly after the name still matches.
pub fn find_reference_at(
    references: &[VariableReference],
    position: Position,
) -> Option<&VariableReference> {
    references
        .iter()
        .find(|reference| reference.variable_name_range.contains_inclusive(position))
}
