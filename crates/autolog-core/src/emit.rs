//! Codec emission.
//!
//! Turns a class and its classified fields into a [`GeneratedUnit`]. For each
//! field, in declaration order, three statements are produced: a `Put` into the
//! serialize body, a `Get` into the deserialize body and a `Copy` into the
//! clone body. Iteration only ever follows the input slice, so the same input
//! always yields the same unit.

use crate::classify::CodecTag;
use crate::error::ClassError;
use crate::model::{ClassDescriptor, FieldDescriptor};
use crate::naming;
use crate::unit::{CopyMode, FieldRef, GeneratedUnit, Statement};
use std::collections::BTreeMap;

/// Emit the generated unit for `class`.
///
/// Fails when the class is not extensible or two fields share a log key.
pub fn emit(
    class: &ClassDescriptor,
    fields: &[(&FieldDescriptor, CodecTag)],
) -> Result<GeneratedUnit, ClassError> {
    if !class.is_extensible {
        return Err(ClassError::NotExtensible {
            class: class.qualified_name(),
        });
    }
    check_unique_keys(class, fields.iter().map(|(field, _)| *field))?;

    let mut to_log = Vec::with_capacity(fields.len());
    let mut from_log = Vec::with_capacity(fields.len());
    let mut clone = Vec::with_capacity(fields.len());

    for (field, tag) in fields {
        let key = naming::derive_log_key(&field.name);
        let field_ref = field_ref(field);
        let tag = *tag;

        tracing::trace!(field = %field.name, key = %key, %tag, "emitting field codec");

        to_log.push(Statement::Put {
            key: key.clone(),
            field: field_ref.clone(),
            tag,
        });
        from_log.push(Statement::Get {
            key,
            field: field_ref.clone(),
            tag,
        });
        clone.push(Statement::Copy {
            field: field_ref,
            tag,
            mode: CopyMode::for_tag(tag),
        });
    }

    Ok(GeneratedUnit {
        namespace: class.namespace.clone(),
        name: naming::auto_logged_name(&class.name),
        base: class.name.clone(),
        origin: class.origin.clone(),
        to_log,
        from_log,
        clone,
    })
}

/// Reject the first pair of fields whose log keys collide.
pub fn check_unique_keys<'a>(
    class: &ClassDescriptor,
    fields: impl IntoIterator<Item = &'a FieldDescriptor>,
) -> Result<(), ClassError> {
    let mut seen: BTreeMap<String, &str> = BTreeMap::new();

    for field in fields {
        let key = naming::derive_log_key(&field.name);
        if let Some(first) = seen.get(&key) {
            return Err(ClassError::DuplicateLogKey {
                class: class.qualified_name(),
                key,
                first: (*first).to_string(),
                second: field.source_name().to_string(),
            });
        }
        seen.insert(key, field.source_name());
    }

    Ok(())
}

fn field_ref(field: &FieldDescriptor) -> FieldRef {
    let accessors = naming::derive_accessors(&field.name);
    FieldRef {
        name: field.name.clone(),
        member: field.member_name().to_string(),
        getter: accessors.getter,
        setter: accessors.setter,
    }
}
