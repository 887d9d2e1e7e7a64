//! autolog-core - Field-to-codec mapping engine for auto-logged inputs
//!
//! Given a class marked as auto-loggable, this crate decides how each field is
//! written to and read from a [`LogTable`], and produces a [`GeneratedUnit`]
//! describing the derived `<Name>AutoLogged` class:
//!
//! - [`classify`](mod@classify) maps a [`DeclaredType`] to a [`CodecTag`]
//! - [`naming`] derives log keys and accessor names
//! - [`emit`](mod@emit) assembles the serialize, deserialize and clone bodies
//! - [`diagnostics`] describes unsupported fields and rejected classes
//! - [`processor`] runs a whole batch and collects units plus diagnostics
//! - [`parse`] builds descriptors from Rust source with `syn`
//!
//! The crate also carries the small runtime the generated code targets:
//! [`LogTable`], [`LogValue`] and the [`LoggableInputs`] capability.
//!
//! # Pipeline
//!
//! ```text
//! ClassDescriptor ─→ [classify] ─→ CodecTag per field
//!                 ─→ [naming]   ─→ log key + accessors
//!                 ─→ [emit]     ─→ GeneratedUnit ─→ renderer (Rust tokens / Kotlin)
//!                         └────────→ Diagnostic ─→ DiagnosticSink
//! ```

pub mod classify;
pub mod diagnostics;
pub mod emit;
mod error;
pub mod model;
pub mod naming;
pub mod parse;
pub mod processor;
mod table;
mod unit;

pub use classify::{CodecTag, classify};
pub use diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink, Severity, TracingSink};
pub use emit::{check_unique_keys, emit};
pub use error::{ClassError, PersistError, UnsupportedType};
pub use model::{
    ClassDescriptor, DeclaredType, FieldDescriptor, IntegerKind, Primitive, SequenceKind,
};
pub use processor::{
    ClassOutcome, DescriptorEntry, GenerationReport, Selector, TaggedSelector, UnitWriter, generate,
    generate_selected, process_class,
};
pub use table::{LogTable, LogValue, LoggableInputs};
pub use unit::{Capability, CopyMode, FieldRef, GeneratedUnit, Statement};

/// Suffix appended to the base class name to form the generated class name.
pub const AUTO_LOGGED_SUFFIX: &str = "AutoLogged";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ClassDescriptor, CodecTag, DeclaredType, Diagnostic, FieldDescriptor, GeneratedUnit,
        GenerationReport, LogTable, LogValue, LoggableInputs, Primitive, Severity,
    };
}
