//! Batch processing.
//!
//! [`generate`] turns a batch of class descriptors into a [`GenerationReport`]:
//! every unit that could be produced plus every diagnostic, both in input
//! order. Nothing escapes the batch call; a failing class only loses its own
//! unit.
//!
//! Discovery of annotated classes is left to a [`Selector`] supplied by the
//! host, and persistence to a [`UnitWriter`].

use crate::classify::{CodecTag, classify};
use crate::diagnostics::{Diagnostic, DiagnosticSink, report};
use crate::emit::{check_unique_keys, emit};
use crate::error::{ClassError, PersistError};
use crate::model::{ClassDescriptor, FieldDescriptor};
use crate::unit::GeneratedUnit;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

/// Host capability that decides which models are generated.
pub trait Selector {
    /// Opaque class model supplied by the host.
    type Model;

    /// Describe `model` if it is selected for generation.
    fn describe(&self, model: &Self::Model) -> Option<ClassDescriptor>;
}

/// A descriptor tagged with whether it was selected for generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DescriptorEntry {
    #[serde(default = "default_selected")]
    pub selected: bool,
    pub class: ClassDescriptor,
}

fn default_selected() -> bool {
    true
}

/// Selects [`DescriptorEntry`] values by their own flag.
#[derive(Debug, Default, Clone, Copy)]
pub struct TaggedSelector;

impl Selector for TaggedSelector {
    type Model = DescriptorEntry;

    fn describe(&self, entry: &DescriptorEntry) -> Option<ClassDescriptor> {
        entry.selected.then(|| entry.class.clone())
    }
}

/// Persists generated units.
pub trait UnitWriter {
    fn write(&mut self, unit: &GeneratedUnit) -> Result<(), PersistError>;
}

/// Result of a batch: units and diagnostics, both ordered by input position.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GenerationReport {
    pub units: Vec<GeneratedUnit>,
    pub diagnostics: Vec<Diagnostic>,
}

impl GenerationReport {
    /// Whether any error-level diagnostic was produced.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    /// Forward every diagnostic to `sink`.
    pub fn report_to(&self, sink: &mut impl DiagnosticSink) {
        report(&self.diagnostics, sink);
    }

    /// Hand every unit to `writer`, recording failures as diagnostics.
    ///
    /// Returns the number of units written.
    pub fn persist(&mut self, writer: &mut impl UnitWriter) -> usize {
        let mut written = 0;

        for unit in &self.units {
            match writer.write(unit) {
                Ok(()) => {
                    tracing::debug!(unit = %unit.qualified_name(), "persisted generated unit");
                    written += 1;
                }
                Err(err) => {
                    let base = base_qualified_name(unit);
                    self.diagnostics
                        .push(Diagnostic::persistence_failure(base, &err));
                }
            }
        }

        written
    }
}

fn base_qualified_name(unit: &GeneratedUnit) -> String {
    if unit.namespace().is_empty() {
        unit.base().to_string()
    } else {
        format!("{}.{}", unit.namespace(), unit.base())
    }
}

/// Outcome of processing one class.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassOutcome {
    pub unit: Option<GeneratedUnit>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Process a single class.
pub fn process_class(class: &ClassDescriptor) -> ClassOutcome {
    let _span = tracing::debug_span!("auto_log", class = %class.qualified_name()).entered();

    if let Err(err) = check_class(class) {
        tracing::debug!(error = %err, "class rejected");
        return ClassOutcome {
            unit: None,
            diagnostics: vec![Diagnostic::class_error(&err)],
        };
    }

    let mut diagnostics = Vec::new();
    let mut classified: Vec<(&FieldDescriptor, CodecTag)> = Vec::with_capacity(class.fields.len());

    for field in &class.fields {
        match classify(&field.declared_type) {
            Ok(tag) => classified.push((field, tag)),
            Err(err) => {
                tracing::trace!(field = %field.name, error = %err, "field skipped");
                diagnostics.push(Diagnostic::unsupported_field(class, field, &err));
            }
        }
    }

    match emit(class, &classified) {
        Ok(unit) => {
            tracing::debug!(
                unit = %unit.name(),
                fields = classified.len(),
                skipped = diagnostics.len(),
                "generated auto-logged class"
            );
            ClassOutcome {
                unit: Some(unit),
                diagnostics,
            }
        }
        Err(err) => {
            diagnostics.push(Diagnostic::class_error(&err));
            ClassOutcome {
                unit: None,
                diagnostics,
            }
        }
    }
}

fn check_class(class: &ClassDescriptor) -> Result<(), ClassError> {
    if !class.is_extensible {
        return Err(ClassError::NotExtensible {
            class: class.qualified_name(),
        });
    }
    check_unique_keys(class, &class.fields)
}

/// Process a batch of classes already selected for generation.
pub fn generate<I>(classes: I) -> GenerationReport
where
    I: IntoIterator,
    I::Item: Borrow<ClassDescriptor>,
{
    let mut report = GenerationReport::default();

    for class in classes {
        let outcome = process_class(class.borrow());
        report.units.extend(outcome.unit);
        report.diagnostics.extend(outcome.diagnostics);
    }

    report
}

/// Process every model the selector picks, in input order.
pub fn generate_selected<'a, S>(
    selector: &S,
    models: impl IntoIterator<Item = &'a S::Model>,
) -> GenerationReport
where
    S: Selector,
    S::Model: 'a,
{
    generate(models.into_iter().filter_map(|model| selector.describe(model)))
}

#[cfg(test)]
#[path = "processor/processor_tests.rs"]
mod processor_tests;
