//! JVM type mappings for Kotlin code generation.
//!
//! Log tables on the JVM store lists as fixed-size arrays, while auto-logged
//! classes declare them as `List<T>`. Each codec tag therefore maps to a Kotlin
//! field type plus the conversion applied on the way into the table.
//!
//! # Type Mappings
//!
//! | Codec tag | Kotlin field | Into the table | Table accessor |
//! |-----------|--------------|----------------|----------------|
//! | `Boolean` | `Boolean` | - | `getBoolean` |
//! | `Integer64` | `Long` | - | `getInteger` |
//! | `Float32` | `Float` | - | `getFloat` |
//! | `Float64` | `Double` | - | `getDouble` |
//! | `Text` | `String` | - | `getString` |
//! | `RawBytes` | `List<Byte>` | `.toByteArray()` | `getRaw` |
//! | `BooleanList` | `List<Boolean>` | `.toBooleanArray()` | `getBooleanArray` |
//! | `Integer64List` | `List<Long>` | `.toLongArray()` | `getIntegerArray` |
//! | `Float32List` | `List<Float>` | `.toFloatArray()` | `getFloatArray` |
//! | `Float64List` | `List<Double>` | `.toDoubleArray()` | `getDoubleArray` |
//! | `TextList` | `List<String>` | `.toTypedArray()` | `getStringArray` |
//!
//! Arrays read back from the table are turned into lists with `.toList()`.

use autolog_core::CodecTag;

/// Conversion applied to an array read back from the table.
pub const FROM_ARRAY: &str = ".toList()";

/// Represents the JVM side of one codec tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JvmType {
    /// Kotlin type of the field (e.g., "Double", "List<Double>").
    pub kotlin: &'static str,
    /// Conversion from the field to the table's array form, for list tags.
    pub to_array: Option<&'static str>,
}

impl JvmType {
    fn scalar(kotlin: &'static str) -> Self {
        Self {
            kotlin,
            to_array: None,
        }
    }

    fn list(kotlin: &'static str, to_array: &'static str) -> Self {
        Self {
            kotlin,
            to_array: Some(to_array),
        }
    }

    /// Whether values cross the table boundary as arrays.
    pub fn is_array(&self) -> bool {
        self.to_array.is_some()
    }
}

/// Map a codec tag to its JVM type.
pub fn map_tag(tag: CodecTag) -> JvmType {
    match tag {
        CodecTag::Boolean => JvmType::scalar("Boolean"),
        CodecTag::Integer64 => JvmType::scalar("Long"),
        CodecTag::Float32 => JvmType::scalar("Float"),
        CodecTag::Float64 => JvmType::scalar("Double"),
        CodecTag::Text => JvmType::scalar("String"),
        CodecTag::RawBytes => JvmType::list("List<Byte>", ".toByteArray()"),
        CodecTag::BooleanList => JvmType::list("List<Boolean>", ".toBooleanArray()"),
        CodecTag::Integer64List => JvmType::list("List<Long>", ".toLongArray()"),
        CodecTag::Float32List => JvmType::list("List<Float>", ".toFloatArray()"),
        CodecTag::Float64List => JvmType::list("List<Double>", ".toDoubleArray()"),
        CodecTag::TextList => JvmType::list("List<String>", ".toTypedArray()"),
    }
}

/// Name of the typed table getter for a tag (e.g., `getDoubleArray`).
pub fn table_getter(tag: CodecTag) -> String {
    format!("get{}", tag.accessor())
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    #[test]
    fn map_tag___scalars___no_array_conversion() {
        assert_eq!(map_tag(CodecTag::Float64).kotlin, "Double");
        assert_eq!(map_tag(CodecTag::Integer64).kotlin, "Long");
        assert!(!map_tag(CodecTag::Text).is_array());
    }

    #[test]
    fn map_tag___raw_bytes___byte_list_to_byte_array() {
        let ty = map_tag(CodecTag::RawBytes);

        assert_eq!(ty.kotlin, "List<Byte>");
        assert_eq!(ty.to_array, Some(".toByteArray()"));
    }

    #[test]
    fn map_tag___text_list___typed_array() {
        assert_eq!(map_tag(CodecTag::TextList).to_array, Some(".toTypedArray()"));
    }

    #[test]
    fn map_tag___every_list_tag___is_array() {
        for tag in CodecTag::ALL {
            assert_eq!(map_tag(tag).is_array(), tag.is_list(), "{tag}");
        }
    }

    #[test]
    fn table_getter___uses_accessor_stem() {
        assert_eq!(table_getter(CodecTag::Integer64), "getInteger");
        assert_eq!(table_getter(CodecTag::RawBytes), "getRaw");
        assert_eq!(table_getter(CodecTag::Float64List), "getDoubleArray");
    }
}
