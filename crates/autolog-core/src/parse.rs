//! Class descriptors from Rust source.
//!
//! Items annotated with `#[derive(AutoLog)]` are described as
//! [`ClassDescriptor`]s. The same mapping backs the derive macro (through
//! [`describe_derive_input`]) and the CLI (through [`parse_source`]).
//!
//! # Shape rules
//!
//! - A struct with named fields and no generic parameters is extensible.
//! - Enums, unions, tuple and unit structs, and generic structs are not.
//! - `#[auto_log(skip)]` on a field leaves it out before classification.
//! - Field names are converted to camelCase for log keys; generated code keeps
//!   using the Rust identifier.
//!
//! # Examples
//!
//! ```rust
//! use autolog_core::parse::parse_source;
//!
//! let source = r#"
//!     #[derive(Default, AutoLog)]
//!     pub struct Arm {
//!         pub angle_rad: f64,
//!         pub current_amps: Vec<f64>,
//!     }
//! "#;
//!
//! let classes = parse_source(source, "frc.robot", None).unwrap();
//!
//! assert_eq!(classes[0].qualified_name(), "frc.robot.Arm");
//! assert_eq!(classes[0].fields[0].name, "angleRad");
//! ```

use crate::model::{
    ClassDescriptor, DeclaredType, FieldDescriptor, IntegerKind, Primitive, SequenceKind,
};
use crate::naming::to_camel_case;
use anyhow::{Context, Result};
use darling::FromField;
use std::path::Path;
use syn::ext::IdentExt;
use syn::punctuated::Punctuated;
use syn::{Attribute, Fields, GenericArgument, Generics, Item, PathArguments, Token, Type};

/// Name of the derive that selects an item for generation.
pub const DERIVE_NAME: &str = "AutoLog";

/// Field-level `#[auto_log(...)]` options.
#[derive(Debug, Default, FromField)]
#[darling(attributes(auto_log))]
struct FieldOpts {
    /// Leave the field out of the generated methods.
    #[darling(default)]
    skip: bool,
}

/// Parse a Rust source file and describe every `#[derive(AutoLog)]` item.
pub fn parse_file(path: &Path, namespace: &str) -> Result<Vec<ClassDescriptor>> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {path:?}"))?;

    parse_source(&content, namespace, Some(path))
        .with_context(|| format!("Failed to parse {path:?}"))
}

/// Parse Rust source and describe every `#[derive(AutoLog)]` item, in file order.
///
/// Inline modules extend the namespace with their name.
pub fn parse_source(
    source: &str,
    namespace: &str,
    origin: Option<&Path>,
) -> Result<Vec<ClassDescriptor>> {
    let file = syn::parse_file(source).context("Failed to parse Rust source")?;

    let mut classes = Vec::new();
    collect_items(&file.items, namespace, origin, &mut classes)?;
    Ok(classes)
}

fn collect_items(
    items: &[Item],
    namespace: &str,
    origin: Option<&Path>,
    classes: &mut Vec<ClassDescriptor>,
) -> Result<()> {
    for item in items {
        if let Item::Mod(module) = item {
            if let Some((_, nested)) = &module.content {
                let namespace = join_namespace(namespace, &module.ident.unraw().to_string());
                collect_items(nested, &namespace, origin, classes)?;
            }
            continue;
        }

        if let Some(class) = describe_item(item, namespace)? {
            let class = match origin {
                Some(origin) => class.with_origin(origin),
                None => class,
            };
            classes.push(class);
        }
    }
    Ok(())
}

fn join_namespace(namespace: &str, segment: &str) -> String {
    if namespace.is_empty() {
        segment.to_string()
    } else {
        format!("{namespace}.{segment}")
    }
}

/// Describe `item` if it derives `AutoLog`.
pub fn describe_item(item: &Item, namespace: &str) -> Result<Option<ClassDescriptor>> {
    let (ident, attrs, generics, fields) = match item {
        Item::Struct(s) => (&s.ident, &s.attrs, &s.generics, Some(&s.fields)),
        Item::Enum(e) => (&e.ident, &e.attrs, &e.generics, None),
        Item::Union(u) => (&u.ident, &u.attrs, &u.generics, None),
        _ => return Ok(None),
    };

    if !has_auto_log_derive(attrs) {
        return Ok(None);
    }

    let class = describe(ident, generics, fields, namespace)
        .map_err(|e| anyhow::anyhow!("Invalid #[auto_log] attribute on `{ident}`: {e}"))?;
    Ok(Some(class))
}

/// Describe a derive input. Used by `#[derive(AutoLog)]`.
pub fn describe_derive_input(
    input: &syn::DeriveInput,
    namespace: &str,
) -> darling::Result<ClassDescriptor> {
    let fields = match &input.data {
        syn::Data::Struct(data) => Some(&data.fields),
        syn::Data::Enum(_) | syn::Data::Union(_) => None,
    };
    describe(&input.ident, &input.generics, fields, namespace)
}

fn describe(
    ident: &syn::Ident,
    generics: &Generics,
    fields: Option<&Fields>,
    namespace: &str,
) -> darling::Result<ClassDescriptor> {
    let named = match fields {
        Some(Fields::Named(named)) => Some(named),
        _ => None,
    };
    let is_extensible = named.is_some() && generics.params.is_empty();

    let mut class =
        ClassDescriptor::new(namespace, ident.unraw().to_string()).extensible(is_extensible);

    if let Some(named) = named {
        for field in &named.named {
            if let Some(descriptor) = describe_field(field)? {
                class.fields.push(descriptor);
            }
        }
    }

    Ok(class)
}

fn describe_field(field: &syn::Field) -> darling::Result<Option<FieldDescriptor>> {
    let opts = FieldOpts::from_field(field)?;
    if opts.skip {
        return Ok(None);
    }

    let Some(ident) = &field.ident else {
        return Ok(None);
    };

    let name = to_camel_case(&ident.unraw().to_string());
    let member = ident.to_string();

    Ok(Some(
        FieldDescriptor::new(name, declared_type(&field.ty)).with_member(member),
    ))
}

/// Whether the attributes contain `#[derive(AutoLog)]` (or a path ending in `AutoLog`).
pub fn has_auto_log_derive(attrs: &[Attribute]) -> bool {
    attrs
        .iter()
        .filter(|attr| attr.path().is_ident("derive"))
        .filter_map(|attr| {
            attr.parse_args_with(Punctuated::<syn::Path, Token![,]>::parse_terminated)
                .ok()
        })
        .flatten()
        .any(|path| {
            path.segments
                .last()
                .is_some_and(|segment| segment.ident == DERIVE_NAME)
        })
}

/// Map a Rust type to its declared type.
pub fn declared_type(ty: &Type) -> DeclaredType {
    match ty {
        Type::Path(type_path) if type_path.qself.is_none() => path_type(ty, &type_path.path),
        Type::Array(array) => match array_len(&array.len) {
            Some(len) => DeclaredType::Sequence {
                kind: SequenceKind::Array(len),
                element: Box::new(declared_type(&array.elem)),
            },
            None => DeclaredType::Other(type_name(ty)),
        },
        Type::Slice(slice) => DeclaredType::Sequence {
            kind: SequenceKind::Slice,
            element: Box::new(declared_type(&slice.elem)),
        },
        Type::Reference(reference) => match reference.elem.as_ref() {
            Type::Slice(slice) => DeclaredType::Sequence {
                kind: SequenceKind::Slice,
                element: Box::new(declared_type(&slice.elem)),
            },
            _ => DeclaredType::Other(type_name(ty)),
        },
        Type::Paren(paren) => declared_type(&paren.elem),
        Type::Group(group) => declared_type(&group.elem),
        _ => DeclaredType::Other(type_name(ty)),
    }
}

fn path_type(ty: &Type, path: &syn::Path) -> DeclaredType {
    let Some(segment) = path.segments.last() else {
        return DeclaredType::Other(type_name(ty));
    };
    let name = segment.ident.to_string();
    let args = type_args(&segment.arguments);

    match (name.as_str(), args.as_slice()) {
        ("bool", []) => DeclaredType::primitive(Primitive::Boolean),
        ("i64", []) => DeclaredType::primitive(Primitive::Integer64),
        ("f32", []) => DeclaredType::primitive(Primitive::Float32),
        ("f64", []) => DeclaredType::primitive(Primitive::Float64),
        ("String", []) => DeclaredType::primitive(Primitive::Text),
        ("u8", []) => DeclaredType::primitive(Primitive::Byte),
        ("i8", []) => DeclaredType::Integer(IntegerKind::I8),
        ("i16", []) => DeclaredType::Integer(IntegerKind::I16),
        ("i32", []) => DeclaredType::Integer(IntegerKind::I32),
        ("i128", []) => DeclaredType::Integer(IntegerKind::I128),
        ("isize", []) => DeclaredType::Integer(IntegerKind::Isize),
        ("u16", []) => DeclaredType::Integer(IntegerKind::U16),
        ("u32", []) => DeclaredType::Integer(IntegerKind::U32),
        ("u64", []) => DeclaredType::Integer(IntegerKind::U64),
        ("u128", []) => DeclaredType::Integer(IntegerKind::U128),
        ("usize", []) => DeclaredType::Integer(IntegerKind::Usize),
        ("Vec", [inner]) => DeclaredType::list_of(declared_type(inner)),
        ("Option", [inner]) => DeclaredType::nullable(declared_type(inner)),
        ("Box", [Type::Slice(slice)]) => DeclaredType::Sequence {
            kind: SequenceKind::BoxedSlice,
            element: Box::new(declared_type(&slice.elem)),
        },
        ("Box", [inner]) => DeclaredType::boxed(declared_type(inner)),
        ("VecDeque", [inner]) => DeclaredType::Sequence {
            kind: SequenceKind::VecDeque,
            element: Box::new(declared_type(inner)),
        },
        ("LinkedList", [inner]) => DeclaredType::Sequence {
            kind: SequenceKind::LinkedList,
            element: Box::new(declared_type(inner)),
        },
        ("HashMap" | "BTreeMap", [key, value, ..]) => DeclaredType::Map {
            key: Box::new(declared_type(key)),
            value: Box::new(declared_type(value)),
        },
        _ => DeclaredType::Other(type_name(ty)),
    }
}

fn type_args(arguments: &PathArguments) -> Vec<&Type> {
    match arguments {
        PathArguments::AngleBracketed(args) => args
            .args
            .iter()
            .filter_map(|arg| match arg {
                GenericArgument::Type(ty) => Some(ty),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

fn array_len(len: &syn::Expr) -> Option<usize> {
    match len {
        syn::Expr::Lit(syn::ExprLit {
            lit: syn::Lit::Int(int),
            ..
        }) => int.base10_parse().ok(),
        _ => None,
    }
}

/// Compact source spelling of a type (`Vec<Vec<f64>>` rather than `Vec < Vec < f64 > >`).
fn type_name(ty: &Type) -> String {
    quote::quote!(#ty)
        .to_string()
        .replace(" <", "<")
        .replace("< ", "<")
        .replace(" >", ">")
        .replace(" ,", ",")
        .replace(" :: ", "::")
        .replace(":: ", "::")
        .replace("& ", "&")
}
