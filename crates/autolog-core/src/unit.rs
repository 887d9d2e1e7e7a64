//! Generated unit model.
//!
//! A [`GeneratedUnit`] is the language-neutral description of one derived
//! `<Name>AutoLogged` class. It is built once by [`emit`](crate::emit()) and
//! never mutated; renderers turn it into Rust tokens or Kotlin source.

use crate::classify::CodecTag;
use std::path::{Path, PathBuf};

/// Capability the generated class must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Exposes `toLog` / `fromLog` against a log table.
    LoggableInputs,
    /// Exposes `clone`, returning the generated type.
    Cloneable,
}

/// How a field is carried over into a clone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CopyMode {
    /// The value is copied as is.
    Value,
    /// List contents are copied into a new list, so the clone never aliases the original.
    Contents,
}

impl CopyMode {
    pub fn for_tag(tag: CodecTag) -> Self {
        if tag.is_list() {
            CopyMode::Contents
        } else {
            CopyMode::Value
        }
    }
}

/// Names generated code uses to reach one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRef {
    /// Logical field name.
    pub name: String,
    /// Member identifier for direct access.
    pub member: String,
    /// `get<Name>` accessor.
    pub getter: String,
    /// `set<Name>` accessor.
    pub setter: String,
}

/// One generated statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// Store the field's value under `key`.
    Put {
        key: String,
        field: FieldRef,
        tag: CodecTag,
    },
    /// Read `key` back into the field, keeping the current value when absent.
    Get {
        key: String,
        field: FieldRef,
        tag: CodecTag,
    },
    /// Copy the field into the new instance.
    Copy {
        field: FieldRef,
        tag: CodecTag,
        mode: CopyMode,
    },
}

impl Statement {
    pub fn field(&self) -> &FieldRef {
        match self {
            Statement::Put { field, .. }
            | Statement::Get { field, .. }
            | Statement::Copy { field, .. } => field,
        }
    }

    pub fn tag(&self) -> CodecTag {
        match self {
            Statement::Put { tag, .. } | Statement::Get { tag, .. } | Statement::Copy { tag, .. } => {
                *tag
            }
        }
    }
}

/// A complete derived class definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUnit {
    pub(crate) namespace: String,
    pub(crate) name: String,
    pub(crate) base: String,
    pub(crate) origin: Option<PathBuf>,
    pub(crate) to_log: Vec<Statement>,
    pub(crate) from_log: Vec<Statement>,
    pub(crate) clone: Vec<Statement>,
}

impl GeneratedUnit {
    /// Namespace shared with the base class.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Generated class name (`<Base>AutoLogged`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Simple name of the base class.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Fully qualified generated class name.
    pub fn qualified_name(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.namespace, self.name)
        }
    }

    pub fn capabilities(&self) -> [Capability; 2] {
        [Capability::LoggableInputs, Capability::Cloneable]
    }

    /// Source file of the base class, for regenerate-on-change tracking.
    pub fn origin(&self) -> Option<&Path> {
        self.origin.as_deref()
    }

    /// Serialize body.
    pub fn to_log(&self) -> &[Statement] {
        &self.to_log
    }

    /// Deserialize body.
    pub fn from_log(&self) -> &[Statement] {
        &self.from_log
    }

    /// Clone body.
    pub fn clone_body(&self) -> &[Statement] {
        &self.clone
    }

    /// Log keys in emission order.
    pub fn log_keys(&self) -> Vec<&str> {
        self.to_log
            .iter()
            .filter_map(|s| match s {
                Statement::Put { key, .. } => Some(key.as_str()),
                _ => None,
            })
            .collect()
    }
}
