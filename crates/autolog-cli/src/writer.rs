//! Filesystem persistence for generated Kotlin units.
//!
//! [`FsWriter`] writes `<root>/<package path>/<Name>.kt`. A file that already
//! holds the rendered text is left untouched so its timestamp does not trigger
//! downstream rebuilds. Every output is recorded against the source file it was
//! generated from, and [`FsWriter::write_depfile`] emits those pairs as a
//! Make-style dependency file.

use crate::codegen::kotlin::{KotlinOptions, generate_kotlin_class};
use autolog_core::processor::UnitWriter;
use autolog_core::{GeneratedUnit, PersistError};
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of writing one unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteStatus {
    Written,
    Unchanged,
}

/// One persisted output and the source it depends on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRecord {
    pub path: PathBuf,
    pub origin: Option<PathBuf>,
    pub status: WriteStatus,
}

/// Writes rendered units below a root directory.
#[derive(Debug)]
pub struct FsWriter {
    root: PathBuf,
    options: KotlinOptions,
    records: Vec<OutputRecord>,
}

impl FsWriter {
    pub fn new(root: impl Into<PathBuf>, options: KotlinOptions) -> Self {
        Self {
            root: root.into(),
            options,
            records: Vec::new(),
        }
    }

    /// Path a unit is written to.
    pub fn output_path(&self, unit: &GeneratedUnit) -> PathBuf {
        let mut path = self.root.clone();
        for segment in unit.namespace().split('.').filter(|s| !s.is_empty()) {
            path.push(segment);
        }
        path.push(format!("{}.kt", unit.name()));
        path
    }

    /// Outputs handled so far, in write order.
    pub fn records(&self) -> &[OutputRecord] {
        &self.records
    }

    /// Number of files actually rewritten.
    pub fn written_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.status == WriteStatus::Written)
            .count()
    }

    /// Write a Make-style dependency file: one `output: origin` rule per unit
    /// with a known origin.
    pub fn write_depfile(&self, path: &Path) -> Result<(), PersistError> {
        let content = self.depfile_content();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| PersistError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        fs::write(path, content).map_err(|source| PersistError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!(path = %path.display(), rules = self.records.len(), "wrote depfile");
        Ok(())
    }

    /// Dependency rules for every recorded output.
    pub fn depfile_content(&self) -> String {
        let mut content = String::new();
        for record in &self.records {
            if let Some(origin) = &record.origin {
                content.push_str(&format!(
                    "{}: {}\n",
                    escape_make(&record.path),
                    escape_make(origin)
                ));
            }
        }
        content
    }
}

impl UnitWriter for FsWriter {
    fn write(&mut self, unit: &GeneratedUnit) -> Result<(), PersistError> {
        let path = self.output_path(unit);
        let code = generate_kotlin_class(unit, &self.options);

        let status = if fs::read_to_string(&path).is_ok_and(|existing| existing == code) {
            tracing::debug!(path = %path.display(), "generated file unchanged");
            WriteStatus::Unchanged
        } else {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).map_err(|source| PersistError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
            fs::write(&path, code).map_err(|source| PersistError::Io {
                path: path.clone(),
                source,
            })?;
            tracing::info!(path = %path.display(), "wrote {}", unit.name());
            WriteStatus::Written
        };

        self.records.push(OutputRecord {
            path,
            origin: unit.origin().map(Path::to_path_buf),
            status,
        });
        Ok(())
    }
}

/// Escape spaces, `#` and `$` for a Make rule.
fn escape_make(path: &Path) -> String {
    let mut escaped = String::new();
    for c in path.to_string_lossy().chars() {
        match c {
            ' ' => escaped.push_str("\\ "),
            '#' => escaped.push_str("\\#"),
            '$' => escaped.push_str("$$"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
#[path = "writer/writer_tests.rs"]
mod writer_tests;
