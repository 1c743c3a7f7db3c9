//! Launch request and ambient editor context
//!
//! A [`LaunchRequest`] is the partially specified, user-editable launch
//! configuration as the editor supplies it (camelCase JSON, matching launch
//! configuration files). [`WorkspaceContext`] carries the ambient context
//! the resolver defaults from.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Partially specified launch request supplied by the editor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LaunchRequest {
    /// Program to debug; defaulted from the active document when unset
    pub program: Option<PathBuf>,
    /// Working directory override
    pub cwd: Option<PathBuf>,
    /// VM executable override
    pub jello_path: Option<String>,
    /// Compiler executable override
    pub jelloc_path: Option<String>,
    /// Library search path override
    pub jello_lib_path: Option<String>,
}

impl LaunchRequest {
    /// Request for a specific program, other fields defaulted
    pub fn for_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: Some(program.into()),
            ..Default::default()
        }
    }

    /// VM path override, with empty values treated as unset
    pub fn jello_path(&self) -> Option<&str> {
        non_empty(self.jello_path.as_deref())
    }

    /// Compiler path override, with empty values treated as unset
    pub fn jelloc_path(&self) -> Option<&str> {
        non_empty(self.jelloc_path.as_deref())
    }

    /// Library path override, with empty values treated as unset
    pub fn jello_lib_path(&self) -> Option<&str> {
        non_empty(self.jello_lib_path.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Ambient editor context consulted during resolution
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkspaceContext {
    /// Enclosing workspace-folder root, if any
    pub workspace_root: Option<PathBuf>,
    /// File path of the currently active editor document, if any
    pub active_document: Option<PathBuf>,
}

impl WorkspaceContext {
    /// Context with only a workspace root
    pub fn in_workspace(root: impl Into<PathBuf>) -> Self {
        Self {
            workspace_root: Some(root.into()),
            active_document: None,
        }
    }
}
