//! Log key and accessor naming.
//!
//! All case conversions here are ASCII-only, so the output never depends on
//! the host locale. Non-ASCII characters pass through unchanged.
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `armAngle` | [`derive_log_key`] | `ArmAngle` |
//! | `armAngle` | [`derive_accessors`] | `getArmAngle` / `setArmAngle` |
//! | `arm_angle` | [`to_camel_case`] | `armAngle` |

use crate::AUTO_LOGGED_SUFFIX;

/// Getter and setter names for a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accessors {
    pub getter: String,
    pub setter: String,
}

/// Derive the log key for a field: the name with its first character uppercased.
///
/// # Examples
///
/// ```
/// use autolog_core::naming::derive_log_key;
///
/// assert_eq!(derive_log_key("armAngle"), "ArmAngle");
/// assert_eq!(derive_log_key("ArmAngle"), "ArmAngle");
/// ```
pub fn derive_log_key(field_name: &str) -> String {
    capitalize(field_name)
}

/// Derive `get<Name>` / `set<Name>` accessor names for a field.
pub fn derive_accessors(field_name: &str) -> Accessors {
    let capitalized = capitalize(field_name);
    Accessors {
        getter: format!("get{capitalized}"),
        setter: format!("set{capitalized}"),
    }
}

/// Name of the generated class for a base class.
pub fn auto_logged_name(base: &str) -> String {
    format!("{base}{AUTO_LOGGED_SUFFIX}")
}

/// Uppercase the first character (ASCII only), leaving the rest unchanged.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let mut out = String::with_capacity(s.len());
            out.push(first.to_ascii_uppercase());
            out.extend(chars);
            out
        }
    }
}

/// Convert snake_case to camelCase.
///
/// # Examples
///
/// ```
/// use autolog_core::naming::to_camel_case;
///
/// assert_eq!(to_camel_case("angle_rad"), "angleRad");
/// assert_eq!(to_camel_case("already"), "already");
/// ```
pub fn to_camel_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = false;

    for c in s.chars() {
        if c == '_' {
            capitalize_next = !result.is_empty();
        } else if capitalize_next {
            result.push(c.to_ascii_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }

    result
}

#[cfg(test)]
#[path = "naming/naming_tests.rs"]
mod naming_tests;
