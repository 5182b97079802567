//! Variable reference scanning.
//!
//! Non-code block content references variables through `{{name}}`
//! interpolation. Code blocks reference them through inbuilt accessor calls
//! such as `bru.getEnvVar("name")`, which are found in the script's syntax
//! tree.

pub mod code;
pub mod inbuilt;
pub mod interpolation;
pub mod script;

pub use code::{
    find_inbuilt_call_at, find_inbuilt_call_at_with, find_inbuilt_function_calls,
    get_variable_references_from_code, get_variable_references_from_code_with,
    InbuiltFunctionCall, ReferenceAtPosition,
};
pub use inbuilt::{InbuiltFunction, INBUILT_FUNCTION_BASE_IDENTIFIER};
pub use interpolation::{find_reference_at, scan_interpolated_variables};
pub use script::{CallArgument, MemberCall, ScriptParser, TreeSitterScriptParser};
