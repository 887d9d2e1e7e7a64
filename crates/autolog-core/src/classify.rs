//! Type classification.
//!
//! Maps a field's [`DeclaredType`] to the [`CodecTag`] that decides which log
//! table accessor the generated code uses.
//!
//! | Declared type | CodecTag |
//! |---|---|
//! | `bool` | [`CodecTag::Boolean`] |
//! | `i64` | [`CodecTag::Integer64`] |
//! | `f32` | [`CodecTag::Float32`] |
//! | `f64` | [`CodecTag::Float64`] |
//! | `String` | [`CodecTag::Text`] |
//! | `Vec<u8>` | [`CodecTag::RawBytes`] |
//! | `Vec<bool>` | [`CodecTag::BooleanList`] |
//! | `Vec<i64>` | [`CodecTag::Integer64List`] |
//! | `Vec<f32>` | [`CodecTag::Float32List`] |
//! | `Vec<f64>` | [`CodecTag::Float64List`] |
//! | `Vec<String>` | [`CodecTag::TextList`] |
//!
//! Every other shape is an [`UnsupportedType`].

use crate::error::UnsupportedType;
use crate::model::{DeclaredType, Primitive};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Wire representation of a field in the log table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodecTag {
    Boolean,
    Integer64,
    Float32,
    Float64,
    Text,
    RawBytes,
    BooleanList,
    Integer64List,
    Float32List,
    Float64List,
    TextList,
}

impl CodecTag {
    /// All tags, in declaration order.
    pub const ALL: [CodecTag; 11] = [
        CodecTag::Boolean,
        CodecTag::Integer64,
        CodecTag::Float32,
        CodecTag::Float64,
        CodecTag::Text,
        CodecTag::RawBytes,
        CodecTag::BooleanList,
        CodecTag::Integer64List,
        CodecTag::Float32List,
        CodecTag::Float64List,
        CodecTag::TextList,
    ];

    /// Stem of the typed table accessor (`get<Stem>` / `get_<stem>`).
    pub fn accessor(self) -> &'static str {
        match self {
            CodecTag::Boolean => "Boolean",
            CodecTag::Integer64 => "Integer",
            CodecTag::Float32 => "Float",
            CodecTag::Float64 => "Double",
            CodecTag::Text => "String",
            CodecTag::RawBytes => "Raw",
            CodecTag::BooleanList => "BooleanArray",
            CodecTag::Integer64List => "IntegerArray",
            CodecTag::Float32List => "FloatArray",
            CodecTag::Float64List => "DoubleArray",
            CodecTag::TextList => "StringArray",
        }
    }

    /// Whether the field holds a list that is converted to an array on the wire.
    pub fn is_list(self) -> bool {
        self.element().is_some()
    }

    /// Element primitive of a list tag.
    pub fn element(self) -> Option<Primitive> {
        match self {
            CodecTag::RawBytes => Some(Primitive::Byte),
            CodecTag::BooleanList => Some(Primitive::Boolean),
            CodecTag::Integer64List => Some(Primitive::Integer64),
            CodecTag::Float32List => Some(Primitive::Float32),
            CodecTag::Float64List => Some(Primitive::Float64),
            CodecTag::TextList => Some(Primitive::Text),
            CodecTag::Boolean
            | CodecTag::Integer64
            | CodecTag::Float32
            | CodecTag::Float64
            | CodecTag::Text => None,
        }
    }

    /// The declared type this tag is produced from.
    pub fn declared_type(self) -> DeclaredType {
        let primitive = |p| DeclaredType::primitive(p);
        let list = |p| DeclaredType::list_of(DeclaredType::primitive(p));

        match self {
            CodecTag::Boolean => primitive(Primitive::Boolean),
            CodecTag::Integer64 => primitive(Primitive::Integer64),
            CodecTag::Float32 => primitive(Primitive::Float32),
            CodecTag::Float64 => primitive(Primitive::Float64),
            CodecTag::Text => primitive(Primitive::Text),
            CodecTag::RawBytes => list(Primitive::Byte),
            CodecTag::BooleanList => list(Primitive::Boolean),
            CodecTag::Integer64List => list(Primitive::Integer64),
            CodecTag::Float32List => list(Primitive::Float32),
            CodecTag::Float64List => list(Primitive::Float64),
            CodecTag::TextList => list(Primitive::Text),
        }
    }
}

impl fmt::Display for CodecTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Classify a declared type.
pub fn classify(ty: &DeclaredType) -> Result<CodecTag, UnsupportedType> {
    let tag = match ty {
        DeclaredType::Primitive(primitive) => scalar_tag(*primitive),
        DeclaredType::List(element) => match element.as_ref() {
            DeclaredType::Primitive(primitive) => Some(list_tag(*primitive)),
            _ => None,
        },
        _ => None,
    };

    tag.ok_or_else(|| UnsupportedType { ty: ty.clone() })
}

fn scalar_tag(primitive: Primitive) -> Option<CodecTag> {
    match primitive {
        Primitive::Boolean => Some(CodecTag::Boolean),
        Primitive::Integer64 => Some(CodecTag::Integer64),
        Primitive::Float32 => Some(CodecTag::Float32),
        Primitive::Float64 => Some(CodecTag::Float64),
        Primitive::Text => Some(CodecTag::Text),
        Primitive::Byte => None,
    }
}

fn list_tag(primitive: Primitive) -> CodecTag {
    match primitive {
        Primitive::Byte => CodecTag::RawBytes,
        Primitive::Boolean => CodecTag::BooleanList,
        Primitive::Integer64 => CodecTag::Integer64List,
        Primitive::Float32 => CodecTag::Float32List,
        Primitive::Float64 => CodecTag::Float64List,
        Primitive::Text => CodecTag::TextList,
    }
}
