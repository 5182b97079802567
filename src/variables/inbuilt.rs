//! Inbuilt variable accessor functions available to scripts.
//!
//! Scripts read and write variables through calls like
//! `bru.getEnvVar("name")` or `bru.setVar("name", value)`. Each accessor
//! determines the scope of the variable and whether the call reads or writes
//! it.

use crate::models::{VariableReferenceType, VariableType};

/// Identifier of the object that exposes the inbuilt functions.
pub const INBUILT_FUNCTION_BASE_IDENTIFIER: &str = "bru";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InbuiltFunction {
    GetEnvVar,
    SetEnvVar,
    GetVar,
    SetVar,
    GetGlobalEnvVar,
    SetGlobalEnvVar,
    GetFolderVar,
    GetCollectionVar,
    GetRequestVar,
    GetProcessEnv,
}

impl InbuiltFunction {
    pub const ALL: [InbuiltFunction; 10] = [
        InbuiltFunction::GetEnvVar,
        InbuiltFunction::SetEnvVar,
        InbuiltFunction::GetVar,
        InbuiltFunction::SetVar,
        InbuiltFunction::GetGlobalEnvVar,
        InbuiltFunction::SetGlobalEnvVar,
        InbuiltFunction::GetFolderVar,
        InbuiltFunction::GetCollectionVar,
        InbuiltFunction::GetRequestVar,
        InbuiltFunction::GetProcessEnv,
    ];

    /// Member name as written in scripts.
    pub fn name(&self) -> &'static str {
        match self {
            InbuiltFunction::GetEnvVar => "getEnvVar",
            InbuiltFunction::SetEnvVar => "setEnvVar",
            InbuiltFunction::GetVar => "getVar",
            InbuiltFunction::SetVar => "setVar",
            InbuiltFunction::GetGlobalEnvVar => "getGlobalEnvVar",
            InbuiltFunction::SetGlobalEnvVar => "setGlobalEnvVar",
            InbuiltFunction::GetFolderVar => "getFolderVar",
            InbuiltFunction::GetCollectionVar => "getCollectionVar",
            InbuiltFunction::GetRequestVar => "getRequestVar",
            InbuiltFunction::GetProcessEnv => "getProcessEnv",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|function| function.name() == name)
    }

    pub fn reference_type(&self) -> VariableReferenceType {
        match self {
            InbuiltFunction::SetEnvVar
            | InbuiltFunction::SetVar
            | InbuiltFunction::SetGlobalEnvVar => VariableReferenceType::Write,
            _ => VariableReferenceType::Read,
        }
    }

    pub fn variable_type(&self) -> VariableType {
        match self {
            InbuiltFunction::GetEnvVar | InbuiltFunction::SetEnvVar => VariableType::Environment,
            InbuiltFunction::GetVar | InbuiltFunction::SetVar => VariableType::Runtime,
            InbuiltFunction::GetGlobalEnvVar | InbuiltFunction::SetGlobalEnvVar => {
                VariableType::Global
            }
            InbuiltFunction::GetFolderVar => VariableType::Folder,
            InbuiltFunction::GetCollectionVar => VariableType::Collection,
            InbuiltFunction::GetRequestVar => VariableType::Request,
            InbuiltFunction::GetProcessEnv => VariableType::ProcessEnv,
        }
    }
}
