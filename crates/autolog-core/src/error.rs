//! Error types for auto-log generation

use crate::model::DeclaredType;
use std::path::PathBuf;
use thiserror::Error;

/// A field type that has no codec.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("type `{ty}` is not supported")]
pub struct UnsupportedType {
    /// The offending declared type.
    pub ty: DeclaredType,
}

/// A failure that stops generation for one class.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClassError {
    /// The class does not permit extension.
    #[error("auto-logged class `{class}` must be declared open")]
    NotExtensible { class: String },

    /// Two fields derive the same log key.
    #[error("fields `{first}` and `{second}` of `{class}` both map to log key `{key}`")]
    DuplicateLogKey {
        class: String,
        key: String,
        first: String,
        second: String,
    },
}

/// A failure reported by the writer that persists generated units.
#[derive(Error, Debug)]
pub enum PersistError {
    /// Filesystem error while writing a unit.
    #[error("failed to write {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Rendering or any other writer-specific failure.
    #[error("{0}")]
    Other(String),
}
