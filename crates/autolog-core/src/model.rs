//! Class descriptor model.
//!
//! A [`ClassDescriptor`] is a static description of a class selected for
//! generation: its name, namespace, whether it may be extended, and its fields
//! in declaration order. Descriptors are independent of how they were obtained
//! (Rust source, a derive input, or a JSON batch).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// One source class selected for generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassDescriptor {
    /// Simple class name (e.g. `Arm`).
    pub name: String,

    /// Dot-separated namespace; empty for the root namespace.
    #[serde(default)]
    pub namespace: String,

    /// Whether the class permits the generated class to extend it.
    #[serde(default)]
    pub is_extensible: bool,

    /// Fields in declaration order.
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,

    /// Source file the descriptor was read from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<PathBuf>,
}

impl ClassDescriptor {
    /// Create an extensible class descriptor with no fields.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            is_extensible: true,
            fields: Vec::new(),
            origin: None,
        }
    }

    /// Append a field.
    pub fn with_field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    /// Mark the class as open or closed for extension.
    pub fn extensible(mut self, is_extensible: bool) -> Self {
        self.is_extensible = is_extensible;
        self
    }

    /// Record the source file this class came from.
    pub fn with_origin(mut self, origin: impl Into<PathBuf>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Namespace plus simple name, or just the name in the root namespace.
    pub fn qualified_name(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.namespace, self.name)
        }
    }
}

/// One field of a [`ClassDescriptor`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Logical field name; the log key is derived from it.
    pub name: String,

    /// Declared type of the field.
    #[serde(rename = "type")]
    pub declared_type: DeclaredType,

    /// Identifier the generated code reads and writes, when it differs from `name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member: Option<String>,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, declared_type: DeclaredType) -> Self {
        Self {
            name: name.into(),
            declared_type,
            member: None,
        }
    }

    /// Set the member identifier used by generated code.
    pub fn with_member(mut self, member: impl Into<String>) -> Self {
        self.member = Some(member.into());
        self
    }

    /// The identifier generated code uses to reach this field.
    pub fn member_name(&self) -> &str {
        self.member.as_deref().unwrap_or(&self.name)
    }

    /// Name as written in the source class, for messages (`r#type` reads as `type`).
    pub fn source_name(&self) -> &str {
        let member = self.member_name();
        member.strip_prefix("r#").unwrap_or(member)
    }
}

/// Primitive types a log table can hold directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Primitive {
    Boolean,
    Integer64,
    Float32,
    Float64,
    Text,
    /// Raw byte; only loggable inside a list.
    Byte,
}

/// Integer widths other than the loggable signed 64-bit integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegerKind {
    I8,
    I16,
    I32,
    I128,
    Isize,
    U16,
    U32,
    U64,
    U128,
    Usize,
}

/// Sequence containers that are not the canonical list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SequenceKind {
    VecDeque,
    LinkedList,
    Array(usize),
    Slice,
    BoxedSlice,
}

/// Semantic type of a field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclaredType {
    Primitive(Primitive),
    Integer(IntegerKind),
    List(Box<DeclaredType>),
    Sequence {
        kind: SequenceKind,
        element: Box<DeclaredType>,
    },
    Nullable(Box<DeclaredType>),
    Boxed(Box<DeclaredType>),
    Map {
        key: Box<DeclaredType>,
        value: Box<DeclaredType>,
    },
    Other(String),
}

impl DeclaredType {
    pub fn primitive(primitive: Primitive) -> Self {
        DeclaredType::Primitive(primitive)
    }

    /// A single-level list of `element`.
    pub fn list_of(element: DeclaredType) -> Self {
        DeclaredType::List(Box::new(element))
    }

    pub fn nullable(inner: DeclaredType) -> Self {
        DeclaredType::Nullable(Box::new(inner))
    }

    pub fn boxed(inner: DeclaredType) -> Self {
        DeclaredType::Boxed(Box::new(inner))
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Primitive::Boolean => "bool",
            Primitive::Integer64 => "i64",
            Primitive::Float32 => "f32",
            Primitive::Float64 => "f64",
            Primitive::Text => "String",
            Primitive::Byte => "u8",
        };
        f.write_str(name)
    }
}

impl fmt::Display for IntegerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IntegerKind::I8 => "i8",
            IntegerKind::I16 => "i16",
            IntegerKind::I32 => "i32",
            IntegerKind::I128 => "i128",
            IntegerKind::Isize => "isize",
            IntegerKind::U16 => "u16",
            IntegerKind::U32 => "u32",
            IntegerKind::U64 => "u64",
            IntegerKind::U128 => "u128",
            IntegerKind::Usize => "usize",
        };
        f.write_str(name)
    }
}

impl fmt::Display for DeclaredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeclaredType::Primitive(p) => write!(f, "{p}"),
            DeclaredType::Integer(kind) => write!(f, "{kind}"),
            DeclaredType::List(element) => write!(f, "Vec<{element}>"),
            DeclaredType::Sequence { kind, element } => match kind {
                SequenceKind::VecDeque => write!(f, "VecDeque<{element}>"),
                SequenceKind::LinkedList => write!(f, "LinkedList<{element}>"),
                SequenceKind::Array(len) => write!(f, "[{element}; {len}]"),
                SequenceKind::Slice => write!(f, "&[{element}]"),
                SequenceKind::BoxedSlice => write!(f, "Box<[{element}]>"),
            },
            DeclaredType::Nullable(inner) => write!(f, "Option<{inner}>"),
            DeclaredType::Boxed(inner) => write!(f, "Box<{inner}>"),
            DeclaredType::Map { key, value } => write!(f, "HashMap<{key}, {value}>"),
            DeclaredType::Other(name) => f.write_str(name),
        }
    }
}
