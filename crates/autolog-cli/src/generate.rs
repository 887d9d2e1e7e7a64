//! `generate` and `check` command implementations

use crate::config::Config;
use crate::writer::FsWriter;
use anyhow::{Context, Result};
use autolog_core::processor::{DescriptorEntry, Selector, TaggedSelector};
use autolog_core::{ClassDescriptor, Diagnostic, GenerationReport, TracingSink, generate};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// How the diagnostic summary is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    /// Diagnostics through the log, plus a short summary.
    #[default]
    Text,
    /// One JSON document on stdout.
    Json,
}

/// Options shared by `generate` and `check`.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub inputs: Vec<PathBuf>,
    pub package: Option<String>,
    pub config: Option<PathBuf>,
    pub format: ReportFormat,
}

/// Generate command implementation
pub fn run(
    options: &RunOptions,
    output: Option<PathBuf>,
    depfile: Option<PathBuf>,
) -> Result<()> {
    let config = load_config(options.config.as_deref())?;

    let output = output
        .or_else(|| config.output.dir.clone())
        .context("No output directory: pass --output or set [output] dir in autolog.toml")?;
    let depfile = depfile.or_else(|| config.output.depfile.clone());
    let package = package(options, &config);

    let classes = load_descriptors(&options.inputs, &package)?;
    let mut report = generate(&classes);

    let mut writer = FsWriter::new(&output, config.kotlin.options());
    report.persist(&mut writer);

    if let Some(depfile) = &depfile {
        writer
            .write_depfile(depfile)
            .with_context(|| format!("Failed to write depfile {depfile:?}"))?;
    }

    let summary = Summary::new(&classes, &report, writer.written_count());
    print_report(options.format, &report, &summary)?;

    if report.has_errors() {
        anyhow::bail!("Generation failed with {} error(s)", summary.errors);
    }

    Ok(())
}

/// Check command implementation: runs the pipeline without writing files.
pub fn check(options: &RunOptions) -> Result<()> {
    let config = load_config(options.config.as_deref())?;
    let package = package(options, &config);

    let classes = load_descriptors(&options.inputs, &package)?;
    let report = generate(&classes);

    let summary = Summary::new(&classes, &report, 0);
    print_report(options.format, &report, &summary)?;

    if report.has_errors() {
        anyhow::bail!("Check failed with {} error(s)", summary.errors);
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = Config::load(path)?;
    config.validate()?;
    Ok(config)
}

fn package(options: &RunOptions, config: &Config) -> String {
    options
        .package
        .clone()
        .or_else(|| config.output.package.clone())
        .unwrap_or_default()
}

/// Read class descriptors from Rust sources (`.rs`) and JSON batches (`.json`).
///
/// Rust sources contribute every `#[derive(AutoLog)]` item under `package`.
/// JSON batches hold `DescriptorEntry` values; unselected entries are dropped.
pub fn load_descriptors(inputs: &[PathBuf], package: &str) -> Result<Vec<ClassDescriptor>> {
    let mut classes = Vec::new();

    for input in inputs {
        let loaded = match input.extension().and_then(|e| e.to_str()) {
            Some("rs") => autolog_core::parse::parse_file(input, package)?,
            Some("json") => load_json(input)?,
            _ => anyhow::bail!("Unsupported input {input:?}: expected a .rs or .json file"),
        };

        tracing::debug!(input = %input.display(), classes = loaded.len(), "loaded descriptors");
        classes.extend(loaded);
    }

    Ok(classes)
}

fn load_json(path: &Path) -> Result<Vec<ClassDescriptor>> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {path:?}"))?;
    let entries: Vec<DescriptorEntry> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse descriptor batch {path:?}"))?;

    Ok(entries
        .iter()
        .filter_map(|entry| TaggedSelector.describe(entry))
        .map(|class| match class.origin {
            Some(_) => class,
            None => class.with_origin(path),
        })
        .collect())
}

/// Counts printed after a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub classes: usize,
    pub generated: usize,
    pub written: usize,
    pub warnings: usize,
    pub errors: usize,
}

impl Summary {
    pub fn new(classes: &[ClassDescriptor], report: &GenerationReport, written: usize) -> Self {
        let errors = report.diagnostics.iter().filter(|d| d.is_error()).count();
        Self {
            classes: classes.len(),
            generated: report.units.len(),
            written,
            warnings: report.diagnostics.len() - errors,
            errors,
        }
    }
}

/// Serialized form of a diagnostic for `--format json`.
#[derive(Debug, Serialize)]
struct JsonDiagnostic<'a> {
    kind: String,
    severity: String,
    class: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<&'a str>,
    message: &'a str,
}

impl<'a> From<&'a Diagnostic> for JsonDiagnostic<'a> {
    fn from(diagnostic: &'a Diagnostic) -> Self {
        Self {
            kind: format!("{:?}", diagnostic.kind),
            severity: diagnostic.severity.to_string(),
            class: &diagnostic.class,
            field: diagnostic.field.as_deref(),
            message: &diagnostic.message,
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    summary: &'a Summary,
    units: Vec<String>,
    diagnostics: Vec<JsonDiagnostic<'a>>,
}

/// Render the JSON report.
pub fn json_report(report: &GenerationReport, summary: &Summary) -> Result<String> {
    let json = JsonReport {
        summary,
        units: report.units.iter().map(|u| u.qualified_name()).collect(),
        diagnostics: report.diagnostics.iter().map(JsonDiagnostic::from).collect(),
    };
    serde_json::to_string_pretty(&json).context("Failed to serialize report")
}

/// Summary lines for text output. The check mark only marks error-free runs.
pub fn text_summary(summary: &Summary) -> String {
    let mark = if summary.errors == 0 { "✓" } else { "✗" };
    let mut text = format!(
        "{mark} Classes: {} ({} generated, {} written)\n",
        summary.classes, summary.generated, summary.written
    );
    if summary.warnings > 0 || summary.errors > 0 {
        text.push_str(&format!(
            "  {} warning(s), {} error(s)\n",
            summary.warnings, summary.errors
        ));
    }
    text
}

fn print_report(format: ReportFormat, report: &GenerationReport, summary: &Summary) -> Result<()> {
    match format {
        ReportFormat::Text => {
            report.report_to(&mut TracingSink);
            print!("{}", text_summary(summary));
        }
        ReportFormat::Json => {
            println!("{}", json_report(report, summary)?);
        }
    }
    Ok(())
}
