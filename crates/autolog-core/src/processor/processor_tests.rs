#![allow(non_snake_case)]

use super::*;
use crate::diagnostics::DiagnosticKind;
use crate::model::{DeclaredType, IntegerKind, Primitive};

fn f64_field(name: &str) -> FieldDescriptor {
    FieldDescriptor::new(name, DeclaredType::primitive(Primitive::Float64))
}

fn arm() -> ClassDescriptor {
    ClassDescriptor::new("frc.robot", "Arm")
        .with_field(f64_field("angleRad"))
        .with_field(FieldDescriptor::new(
            "currentAmps",
            DeclaredType::list_of(DeclaredType::primitive(Primitive::Float64)),
        ))
}

/// Writer that records unit names and fails for selected ones.
#[derive(Default)]
struct RecordingWriter {
    written: Vec<String>,
    fail_on: Option<String>,
}

impl UnitWriter for RecordingWriter {
    fn write(&mut self, unit: &GeneratedUnit) -> Result<(), PersistError> {
        if self.fail_on.as_deref() == Some(unit.name()) {
            return Err(PersistError::Other(format!("cannot write {}", unit.name())));
        }
        self.written.push(unit.name().to_string());
        Ok(())
    }
}

// ============================================================================
// Single class outcomes
// ============================================================================

#[test]
fn generate___supported_class___one_unit_no_diagnostics() {
    let report = generate([arm()]);

    assert_eq!(report.units.len(), 1);
    assert!(report.diagnostics.is_empty());
    assert_eq!(report.units[0].log_keys(), vec!["AngleRad", "CurrentAmps"]);
}

#[test]
fn generate___not_extensible___zero_units_one_diagnostic() {
    let report = generate([arm().extensible(false)]);

    assert!(report.units.is_empty());
    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(report.diagnostics[0].kind, DiagnosticKind::ClassNotExtensible);
    assert_eq!(report.diagnostics[0].class, "frc.robot.Arm");
    assert!(report.has_errors());
}

#[test]
fn generate___not_extensible_with_bad_fields___only_class_diagnostic() {
    let class = arm()
        .extensible(false)
        .with_field(FieldDescriptor::new("pose", DeclaredType::Other("Pose2d".into())));

    let report = generate([class]);

    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(report.diagnostics[0].kind, DiagnosticKind::ClassNotExtensible);
}

#[test]
fn generate___one_supported_one_unsupported___unit_with_supported_field_only() {
    let class = ClassDescriptor::new("frc.robot", "Arm")
        .with_field(f64_field("angleRad"))
        .with_field(FieldDescriptor::new(
            "motorCount",
            DeclaredType::boxed(DeclaredType::Integer(IntegerKind::I32)),
        ));

    let report = generate([class]);

    assert_eq!(report.units.len(), 1);
    assert_eq!(report.units[0].log_keys(), vec!["AngleRad"]);
    assert_eq!(report.units[0].from_log().len(), 1);
    assert_eq!(report.units[0].clone_body().len(), 1);
    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(report.diagnostics[0].kind, DiagnosticKind::UnsupportedFieldType);
    assert_eq!(report.diagnostics[0].field.as_deref(), Some("motorCount"));
    assert!(report.diagnostics[0].message.contains("`i64`"));
    assert!(!report.has_errors());
}

#[test]
fn generate___duplicate_keys___class_skipped_reported_once() {
    let class = ClassDescriptor::new("", "Arm")
        .with_field(f64_field("angle"))
        .with_field(f64_field("Angle"))
        .with_field(f64_field("ANGLE"));

    let report = generate([class]);

    assert!(report.units.is_empty());
    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(report.diagnostics[0].kind, DiagnosticKind::DuplicateLogKey);
}

#[test]
fn generate___duplicate_key_on_unsupported_field___still_rejected() {
    let class = ClassDescriptor::new("", "Arm")
        .with_field(f64_field("angle"))
        .with_field(FieldDescriptor::new("Angle", DeclaredType::Other("Rotation2d".into())));

    let report = generate([class]);

    assert!(report.units.is_empty());
    assert_eq!(report.diagnostics[0].kind, DiagnosticKind::DuplicateLogKey);
}

// ============================================================================
// Batch behavior
// ============================================================================

#[test]
fn generate___failing_class___does_not_block_others() {
    let batch = vec![
        ClassDescriptor::new("a", "First").with_field(f64_field("x")),
        ClassDescriptor::new("a", "Closed").extensible(false),
        ClassDescriptor::new("a", "Third").with_field(f64_field("y")),
    ];

    let report = generate(&batch);

    let names: Vec<&str> = report.units.iter().map(|u| u.name()).collect();
    assert_eq!(names, vec!["FirstAutoLogged", "ThirdAutoLogged"]);
    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(report.diagnostics[0].class, "a.Closed");
}

#[test]
fn generate___diagnostics___ordered_by_input_position() {
    let batch = vec![
        ClassDescriptor::new("", "B").with_field(FieldDescriptor::new(
            "flag",
            DeclaredType::nullable(DeclaredType::primitive(Primitive::Boolean)),
        )),
        ClassDescriptor::new("", "A").extensible(false),
    ];

    let report = generate(&batch);

    let classes: Vec<&str> = report.diagnostics.iter().map(|d| d.class.as_str()).collect();
    assert_eq!(classes, vec!["B", "A"]);
}

#[test]
fn generate___empty_batch___empty_report() {
    let report = generate(Vec::<ClassDescriptor>::new());

    assert_eq!(report, GenerationReport::default());
}

// ============================================================================
// Selection
// ============================================================================

#[test]
fn generate_selected___tagged_selector___skips_unselected() {
    let entries = vec![
        DescriptorEntry {
            selected: true,
            class: ClassDescriptor::new("", "Arm").with_field(f64_field("x")),
        },
        DescriptorEntry {
            selected: false,
            class: ClassDescriptor::new("", "Drive").extensible(false),
        },
    ];

    let report = generate_selected(&TaggedSelector, &entries);

    assert_eq!(report.units.len(), 1);
    assert_eq!(report.units[0].name(), "ArmAutoLogged");
    assert!(report.diagnostics.is_empty());
}

#[test]
fn DescriptorEntry___deserialize___selected_defaults_to_true() {
    let entry: DescriptorEntry = serde_json::from_str(r#"{ "class": { "name": "Arm" } }"#).unwrap();

    assert!(entry.selected);
}

// ============================================================================
// Persistence
// ============================================================================

#[test]
fn persist___writer_succeeds___writes_every_unit() {
    let mut report = generate([arm(), ClassDescriptor::new("frc.robot", "Drive")]);
    let mut writer = RecordingWriter::default();

    let written = report.persist(&mut writer);

    assert_eq!(written, 2);
    assert_eq!(writer.written, vec!["ArmAutoLogged", "DriveAutoLogged"]);
    assert!(report.diagnostics.is_empty());
}

#[test]
fn persist___writer_fails___surfaces_message_as_error() {
    let mut report = generate([arm(), ClassDescriptor::new("frc.robot", "Drive")]);
    let mut writer = RecordingWriter {
        fail_on: Some("ArmAutoLogged".into()),
        ..Default::default()
    };

    let written = report.persist(&mut writer);

    assert_eq!(written, 1);
    assert_eq!(writer.written, vec!["DriveAutoLogged"]);
    assert_eq!(report.diagnostics.len(), 1);
    assert_eq!(
        report.diagnostics[0].kind,
        DiagnosticKind::OutputPersistenceFailure
    );
    assert_eq!(report.diagnostics[0].class, "frc.robot.Arm");
    assert_eq!(report.diagnostics[0].message, "cannot write ArmAutoLogged");
    assert!(report.has_errors());
}

#[test]
fn report_to___forwards_all_diagnostics() {
    let report = generate([arm().extensible(false)]);
    let mut sink: Vec<Diagnostic> = Vec::new();

    report.report_to(&mut sink);

    assert_eq!(sink, report.diagnostics);
}
