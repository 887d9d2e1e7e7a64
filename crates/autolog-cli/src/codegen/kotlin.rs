//! Kotlin class generation from generated units.

use super::jvm_types::{FROM_ARRAY, map_tag, table_getter};
use autolog_core::{CopyMode, FieldRef, GeneratedUnit, Statement};
use serde::{Deserialize, Serialize};

/// Default log table class (AdvantageKit).
pub const DEFAULT_LOG_TABLE: &str = "org.littletonrobotics.junction.LogTable";

/// Default loggable-inputs interface (AdvantageKit).
pub const DEFAULT_LOGGABLE_INPUTS: &str = "org.littletonrobotics.junction.inputs.LoggableInputs";

/// How generated code reaches base class fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessStyle {
    /// Kotlin property syntax (`angleRad`).
    #[default]
    Property,
    /// Java bean accessors (`getAngleRad()` / `setAngleRad(...)`).
    Accessors,
}

/// Options for Kotlin rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KotlinOptions {
    /// Fully qualified log table class.
    pub log_table: String,
    /// Fully qualified loggable-inputs interface.
    pub loggable_inputs: String,
    pub access: AccessStyle,
}

impl Default for KotlinOptions {
    fn default() -> Self {
        Self {
            log_table: DEFAULT_LOG_TABLE.to_string(),
            loggable_inputs: DEFAULT_LOGGABLE_INPUTS.to_string(),
            access: AccessStyle::default(),
        }
    }
}

/// Generate the Kotlin source of a generated unit.
///
/// The output depends only on the unit and the options, so regenerating an
/// unchanged class yields identical text.
pub fn generate_kotlin_class(unit: &GeneratedUnit, options: &KotlinOptions) -> String {
    let mut code = String::new();

    code.push_str(&format!(
        "// Generated by autolog from {}. Do not edit.\n",
        unit.base()
    ));

    // Package declaration
    if !unit.namespace().is_empty() {
        code.push_str(&format!("package {}\n", unit.namespace()));
    }
    code.push('\n');

    // Imports
    code.push_str(&format!("import {}\n", options.log_table));
    code.push_str(&format!("import {}\n\n", options.loggable_inputs));

    let table = simple_name(&options.log_table);
    let inputs = simple_name(&options.loggable_inputs);

    // Class declaration
    code.push_str(&format!(
        "class {} : {}(), {}, Cloneable {{\n",
        unit.name(),
        unit.base(),
        inputs
    ));

    // toLog
    code.push_str(&format!("    override fun toLog(table: {table}) {{\n"));
    for statement in unit.to_log() {
        if let Statement::Put { key, field, tag } = statement {
            let conversion = map_tag(*tag).to_array.unwrap_or("");
            code.push_str(&format!(
                "        table.put(\"{}\", {}{})\n",
                key,
                read(field, options.access),
                conversion
            ));
        }
    }
    code.push_str("    }\n\n");

    // fromLog
    code.push_str(&format!("    override fun fromLog(table: {table}) {{\n"));
    for statement in unit.from_log() {
        if let Statement::Get { key, field, tag } = statement {
            let ty = map_tag(*tag);
            let current = format!("{}{}", read(field, options.access), ty.to_array.unwrap_or(""));
            let back = if ty.is_array() { FROM_ARRAY } else { "" };
            let value = format!("table.{}(\"{}\", {}){}", table_getter(*tag), key, current, back);
            code.push_str(&format!("        {}\n", write(field, options.access, "", &value)));
        }
    }
    code.push_str("    }\n\n");

    // clone
    code.push_str(&format!("    public override fun clone(): {} {{\n", unit.name()));
    code.push_str(&format!("        val copy = {}()\n", unit.name()));
    for statement in unit.clone_body() {
        if let Statement::Copy { field, mode, .. } = statement {
            let copied = match mode {
                CopyMode::Value => format!("this.{}", read(field, options.access)),
                CopyMode::Contents => format!("this.{}{}", read(field, options.access), FROM_ARRAY),
            };
            code.push_str(&format!(
                "        {}\n",
                write(field, options.access, "copy.", &copied)
            ));
        }
    }
    code.push_str("        return copy\n");
    code.push_str("    }\n");

    code.push_str("}\n");

    code
}

/// Kotlin hard keywords; they can only be used as identifiers inside backticks.
const HARD_KEYWORDS: &[&str] = &[
    "as", "break", "class", "continue", "do", "else", "false", "for", "fun", "if", "in",
    "interface", "is", "null", "object", "package", "return", "super", "this", "throw", "true",
    "try", "typealias", "typeof", "val", "var", "when", "while",
];

/// Property name as a Kotlin identifier, escaped when it is a hard keyword.
fn property(name: &str) -> String {
    if HARD_KEYWORDS.contains(&name) {
        format!("`{name}`")
    } else {
        name.to_string()
    }
}

/// Expression reading a field. Kotlin properties use the logical camelCase name.
fn read(field: &FieldRef, access: AccessStyle) -> String {
    match access {
        AccessStyle::Property => property(&field.name),
        AccessStyle::Accessors => format!("{}()", field.getter),
    }
}

/// Statement assigning `value` to a field of `receiver` (empty for `this`).
fn write(field: &FieldRef, access: AccessStyle, receiver: &str, value: &str) -> String {
    match access {
        AccessStyle::Property => format!("{receiver}{} = {value}", property(&field.name)),
        AccessStyle::Accessors => format!("{receiver}{}({value})", field.setter),
    }
}

/// Last segment of a dotted class name.
fn simple_name(qualified: &str) -> &str {
    qualified.rsplit('.').next().unwrap_or(qualified)
}
