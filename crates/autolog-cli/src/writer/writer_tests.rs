#![allow(non_snake_case)]

use super::*;
use autolog_core::{ClassDescriptor, DeclaredType, FieldDescriptor, Primitive, generate};
use tempfile::TempDir;

fn unit(namespace: &str, name: &str, origin: Option<&str>) -> GeneratedUnit {
    let mut class = ClassDescriptor::new(namespace, name).with_field(FieldDescriptor::new(
        "angleRad",
        DeclaredType::primitive(Primitive::Float64),
    ));
    if let Some(origin) = origin {
        class = class.with_origin(origin);
    }

    let mut report = generate([class]);
    report.units.remove(0)
}

// Output paths

#[test]
fn output_path___namespace___nested_package_directories() {
    let writer = FsWriter::new("out", KotlinOptions::default());

    let path = writer.output_path(&unit("frc.robot.arm", "Arm", None));

    assert_eq!(path, Path::new("out/frc/robot/arm/ArmAutoLogged.kt"));
}

#[test]
fn output_path___root_namespace___directly_under_root() {
    let writer = FsWriter::new("out", KotlinOptions::default());

    let path = writer.output_path(&unit("", "Arm", None));

    assert_eq!(path, Path::new("out/ArmAutoLogged.kt"));
}

// Writing

#[test]
fn write___new_unit___creates_file_with_rendered_class() {
    let dir = TempDir::new().unwrap();
    let mut writer = FsWriter::new(dir.path(), KotlinOptions::default());
    let unit = unit("frc.robot", "Arm", None);

    writer.write(&unit).unwrap();

    let content = fs::read_to_string(dir.path().join("frc/robot/ArmAutoLogged.kt")).unwrap();
    assert_eq!(content, generate_kotlin_class(&unit, &KotlinOptions::default()));
    assert_eq!(writer.records()[0].status, WriteStatus::Written);
}

#[test]
fn write___identical_content___left_unchanged() {
    let dir = TempDir::new().unwrap();
    let unit = unit("frc.robot", "Arm", None);
    FsWriter::new(dir.path(), KotlinOptions::default())
        .write(&unit)
        .unwrap();

    let mut writer = FsWriter::new(dir.path(), KotlinOptions::default());
    writer.write(&unit).unwrap();

    assert_eq!(writer.records()[0].status, WriteStatus::Unchanged);
    assert_eq!(writer.written_count(), 0);
}

#[test]
fn write___stale_content___rewritten() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ArmAutoLogged.kt");
    fs::write(&path, "// old").unwrap();
    let mut writer = FsWriter::new(dir.path(), KotlinOptions::default());

    writer.write(&unit("", "Arm", None)).unwrap();

    assert_ne!(fs::read_to_string(&path).unwrap(), "// old");
    assert_eq!(writer.written_count(), 1);
}

#[test]
fn write___root_is_a_file___io_error_with_path() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("not-a-dir");
    fs::write(&root, "").unwrap();
    let mut writer = FsWriter::new(&root, KotlinOptions::default());

    let err = writer.write(&unit("frc", "Arm", None)).unwrap_err();

    assert!(matches!(err, PersistError::Io { .. }));
    assert!(writer.records().is_empty());
}

#[test]
fn persist___root_is_a_file___reported_as_diagnostic() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("not-a-dir");
    fs::write(&root, "").unwrap();
    let mut writer = FsWriter::new(&root, KotlinOptions::default());
    let mut report = generate([ClassDescriptor::new("frc", "Arm")]);

    let written = report.persist(&mut writer);

    assert_eq!(written, 0);
    assert!(report.has_errors());
    assert_eq!(report.diagnostics[0].class, "frc.Arm");
}

// Depfile

#[test]
fn depfile_content___records_with_origin___one_rule_each() {
    let mut writer = FsWriter::new("gen", KotlinOptions::default());
    writer.records.push(OutputRecord {
        path: PathBuf::from("gen/frc/ArmAutoLogged.kt"),
        origin: Some(PathBuf::from("src/arm.rs")),
        status: WriteStatus::Written,
    });
    writer.records.push(OutputRecord {
        path: PathBuf::from("gen/frc/GyroAutoLogged.kt"),
        origin: None,
        status: WriteStatus::Written,
    });

    assert_eq!(
        writer.depfile_content(),
        "gen/frc/ArmAutoLogged.kt: src/arm.rs\n"
    );
}

#[test]
fn depfile_content___spaces_in_paths___escaped() {
    let mut writer = FsWriter::new("gen", KotlinOptions::default());
    writer.records.push(OutputRecord {
        path: PathBuf::from("my gen/A.kt"),
        origin: Some(PathBuf::from("src/$x#1.rs")),
        status: WriteStatus::Unchanged,
    });

    assert_eq!(writer.depfile_content(), "my\\ gen/A.kt: src/$$x\\#1.rs\n");
}

#[test]
fn write_depfile___after_writes___links_outputs_to_origins() {
    let dir = TempDir::new().unwrap();
    let mut writer = FsWriter::new(dir.path().join("gen"), KotlinOptions::default());
    writer.write(&unit("frc", "Arm", Some("src/arm.rs"))).unwrap();
    let depfile = dir.path().join("deps/autolog.d");

    writer.write_depfile(&depfile).unwrap();

    let content = fs::read_to_string(&depfile).unwrap();
    assert!(content.ends_with("ArmAutoLogged.kt: src/arm.rs\n"));
}
