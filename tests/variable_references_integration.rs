//! Integration tests for variable references
//!
//! These tests validate that references are found in both interpolated
//! content and script code, and that their ranges point at the variable
//! names in the original document.

use bru_syntax::models::{Position, Range, VariableReferenceType, VariableType};
use bru_syntax::parse_bru_file;
use bru_syntax::variables::{find_inbuilt_call_at, find_reference_at, InbuiltFunction};
use bru_syntax::Document;

const SCRIPTED_REQUEST: &str = r#"get {
  url: {{host}}/items?page={{page}}
}

script:pre-request {
  const token = bru.getEnvVar("token");
  bru.setVar('requestId', Date.now());
  bru.setGlobalEnvVar(`lastRun`, new Date());
  const key = "apiKey";
  bru.getVar(key);
}

tests {
  test("status", () => {
    expect(bru.getCollectionVar("expectedStatus")).to.equal(res.status);
    bru.getFolderVar("folder");
    bru.getRequestVar("request");
    bru.getProcessEnv("HOME");
  });
}

body:json {
  {
    "token": "{{token}}"
  }
}
"#;

#[test]
fn test_get_env_var_scenario() {
    let parsed = parse_bru_file("script:pre-request {\n  bru.getEnvVar(\"token\");\n}\n");

    let references = &parsed.blocks[0].variable_references;
    assert_eq!(references.len(), 1);
    assert_eq!(references[0].variable_name, "token");
    assert_eq!(references[0].reference_type, VariableReferenceType::Read);
    assert_eq!(references[0].variable_type, VariableType::Environment);
    assert_eq!(references[0].variable_name_range, Range::at_line(1, 17, 22));
}

#[test]
fn test_interpolation_references() {
    let parsed = parse_bru_file(SCRIPTED_REQUEST);
    let get = parsed.block("get").unwrap();

    let names: Vec<_> = get
        .variable_references
        .iter()
        .map(|r| r.variable_name.as_str())
        .collect();
    assert_eq!(names, vec!["host", "page"]);
    assert_eq!(get.variable_references[0].variable_name_range, Range::at_line(1, 9, 13));
    assert!(get
        .variable_references
        .iter()
        .all(|r| r.variable_type == VariableType::Unknown));

    let body = parsed.block("body:json").unwrap();
    assert_eq!(body.variable_references.len(), 1);
    assert_eq!(body.variable_references[0].variable_name_range, Range::at_line(23, 16, 21));
}

#[test]
fn test_script_references() {
    let parsed = parse_bru_file(SCRIPTED_REQUEST);
    let script = parsed.block("script:pre-request").unwrap();

    let summary: Vec<_> = script
        .variable_references
        .iter()
        .map(|r| (r.variable_name.as_str(), r.reference_type, r.variable_type))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("token", VariableReferenceType::Read, VariableType::Environment),
            ("requestId", VariableReferenceType::Write, VariableType::Runtime),
            ("lastRun", VariableReferenceType::Write, VariableType::Global),
        ]
    );

    assert_eq!(script.variable_references[0].variable_name_range, Range::at_line(5, 31, 36));
    assert_eq!(script.variable_references[1].variable_name_range, Range::at_line(6, 14, 23));
}

#[test]
fn test_references_in_nested_test_callbacks() {
    let parsed = parse_bru_file(SCRIPTED_REQUEST);
    let tests = parsed.block("tests").unwrap();

    let summary: Vec<_> = tests
        .variable_references
        .iter()
        .map(|r| (r.variable_name.as_str(), r.variable_type))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("expectedStatus", VariableType::Collection),
            ("folder", VariableType::Folder),
            ("request", VariableType::Request),
            ("HOME", VariableType::ProcessEnv),
        ]
    );
}

#[test]
fn test_references_point_at_document_text() {
    let document = Document::new(SCRIPTED_REQUEST);
    let parsed = parse_bru_file(SCRIPTED_REQUEST);

    for block in &parsed.blocks {
        for reference in &block.variable_references {
            assert_eq!(
                document.text_in_range(&reference.variable_name_range),
                reference.variable_name
            );
        }
    }
}

#[test]
fn test_find_inbuilt_call_at_cursor() {
    let parsed = parse_bru_file(SCRIPTED_REQUEST);
    let script = parsed.block("script:pre-request").unwrap();
    let code = script.text().unwrap();
    let origin = script.content_range.start;

    let on_name = find_inbuilt_call_at(code, origin, Position::new(5, 33)).unwrap();
    assert_eq!(on_name.call.function, InbuiltFunction::GetEnvVar);
    assert_eq!(on_name.call.reference.variable_name, "token");
    assert!(on_name.position_in_argument);

    let on_function = find_inbuilt_call_at(code, origin, Position::new(6, 8)).unwrap();
    assert_eq!(on_function.call.function, InbuiltFunction::SetVar);
    assert!(!on_function.position_in_argument);

    assert!(find_inbuilt_call_at(code, origin, Position::new(8, 4)).is_none());
    assert!(find_inbuilt_call_at(code, origin, Position::new(9, 10)).is_none());
}

#[test]
fn test_crlf_script_block() {
    let text = "tests {\r\n  const x = 1;\r\n  bru.getVar(\"b\");\r\n}\r\n";
    let parsed = parse_bru_file(text);

    let references = &parsed.blocks[0].variable_references;
    assert_eq!(references.len(), 1);
    assert_eq!(references[0].variable_name_range, Range::at_line(2, 14, 15));
}

#[test]
fn test_find_reference_at_interpolation() {
    let parsed = parse_bru_file(SCRIPTED_REQUEST);
    let get = parsed.block("get").unwrap();

    let found = find_reference_at(&get.variable_references, Position::new(1, 30)).unwrap();
    assert_eq!(found.variable_name, "page");
    assert!(find_reference_at(&get.variable_references, Position::new(1, 3)).is_none());
}
