//! Diagnostics for unsupported fields and rejected classes.
//!
//! Diagnostics never abort a batch. Each one is tied to the class it came from
//! and, for field-level problems, to the field. Unsupported fields get a
//! suggested replacement when the declared type is a common near miss:
//!
//! | Declared | Suggested |
//! |---|---|
//! | `Option<T>`, `Box<T>` of a supported `T` | `T` |
//! | `i32`, `u64`, `usize`, bare `u8`, ... | `i64` |
//! | `VecDeque<T>`, `[T; N]`, `&[T]`, `Box<[T]>` | `Vec<T>` |
//! | `Vec<i32>`, `Vec<Option<f64>>` | `Vec<i64>`, `Vec<f64>` |

use crate::classify::classify;
use crate::error::{ClassError, PersistError, UnsupportedType};
use crate::model::{ClassDescriptor, DeclaredType, FieldDescriptor, Primitive};
use std::fmt;

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// What went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// A field was left out of the generated methods.
    UnsupportedFieldType,
    /// The class does not permit extension; no unit was produced.
    ClassNotExtensible,
    /// Two fields share a log key; no unit was produced.
    DuplicateLogKey,
    /// The writer could not persist a generated unit.
    OutputPersistenceFailure,
}

impl DiagnosticKind {
    pub fn severity(self) -> Severity {
        match self {
            DiagnosticKind::UnsupportedFieldType => Severity::Warning,
            DiagnosticKind::ClassNotExtensible
            | DiagnosticKind::DuplicateLogKey
            | DiagnosticKind::OutputPersistenceFailure => Severity::Error,
        }
    }
}

/// A human-readable problem report tied to its class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub severity: Severity,
    /// Qualified name of the originating class.
    pub class: String,
    /// Field name, for field-level diagnostics.
    pub field: Option<String>,
    pub message: String,
}

impl Diagnostic {
    /// An unsupported field, with a suggestion when one applies.
    pub fn unsupported_field(
        class: &ClassDescriptor,
        field: &FieldDescriptor,
        error: &UnsupportedType,
    ) -> Self {
        let detail = match suggest(&error.ty) {
            Some(suggestion) => format!("did you mean to use `{suggestion}` instead?"),
            None => format!("`{}` is not supported", error.ty),
        };

        Self {
            kind: DiagnosticKind::UnsupportedFieldType,
            severity: DiagnosticKind::UnsupportedFieldType.severity(),
            class: class.qualified_name(),
            field: Some(field.source_name().to_string()),
            message: format!(
                "unsupported type for field `{}` of `{}` ({detail})",
                field.source_name(),
                class.name
            ),
        }
    }

    /// A class-fatal error.
    pub fn class_error(error: &ClassError) -> Self {
        let (kind, class) = match error {
            ClassError::NotExtensible { class } => (DiagnosticKind::ClassNotExtensible, class),
            ClassError::DuplicateLogKey { class, .. } => (DiagnosticKind::DuplicateLogKey, class),
        };

        Self {
            kind,
            severity: kind.severity(),
            class: class.clone(),
            field: None,
            message: error.to_string(),
        }
    }

    /// A writer failure for the unit generated from `class`.
    pub fn persistence_failure(class: impl Into<String>, error: &PersistError) -> Self {
        let kind = DiagnosticKind::OutputPersistenceFailure;
        Self {
            kind,
            severity: kind.severity(),
            class: class.into(),
            field: None,
            message: error.to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

/// Suggest a supported replacement for a near-miss type.
pub fn suggest(ty: &DeclaredType) -> Option<DeclaredType> {
    match ty {
        DeclaredType::Primitive(Primitive::Byte) | DeclaredType::Integer(_) => {
            Some(DeclaredType::primitive(Primitive::Integer64))
        }
        DeclaredType::Nullable(inner) | DeclaredType::Boxed(inner) => {
            if classify(inner).is_ok() {
                Some(inner.as_ref().clone())
            } else {
                suggest(inner)
            }
        }
        DeclaredType::Sequence { element, .. } | DeclaredType::List(element) => list_form(element),
        DeclaredType::Primitive(_) | DeclaredType::Map { .. } | DeclaredType::Other(_) => None,
    }
}

fn list_form(element: &DeclaredType) -> Option<DeclaredType> {
    let element = match element {
        DeclaredType::Primitive(primitive) => *primitive,
        DeclaredType::Integer(_) => Primitive::Integer64,
        DeclaredType::Nullable(inner) | DeclaredType::Boxed(inner) => match inner.as_ref() {
            DeclaredType::Primitive(primitive) => *primitive,
            DeclaredType::Integer(_) => Primitive::Integer64,
            _ => return None,
        },
        _ => return None,
    };
    Some(DeclaredType::list_of(DeclaredType::primitive(element)))
}

/// Receives diagnostics as they are reported.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: &Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: &Diagnostic) {
        self.push(diagnostic.clone());
    }
}

/// Sink that forwards diagnostics to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&mut self, diagnostic: &Diagnostic) {
        let field = diagnostic.field.as_deref().unwrap_or("");
        match diagnostic.severity {
            Severity::Warning => tracing::warn!(
                target: "autolog",
                class = %diagnostic.class,
                field,
                "{}",
                diagnostic.message
            ),
            Severity::Error => tracing::error!(
                target: "autolog",
                class = %diagnostic.class,
                field,
                "{}",
                diagnostic.message
            ),
        }
    }
}

/// Hand every diagnostic to `sink`, in order.
pub fn report<'a>(
    diagnostics: impl IntoIterator<Item = &'a Diagnostic>,
    sink: &mut impl DiagnosticSink,
) {
    for diagnostic in diagnostics {
        sink.report(diagnostic);
    }
}
