//! Recursive, metadata-driven conversion of documents into mapped types.

use objmap_core::{Object, Presence, TypeCategory, Value, coerce};
use tracing::{debug, trace};

use crate::{
    context::ConversionContext,
    descriptor::{FieldDescriptor, Mapped, Slot},
    error::MapError,
};

/// Convert `document` into a fresh `T`; fails only when it is not an object.
pub(crate) fn try_convert<T: Mapped>(
    document: &Value,
    ctx: &ConversionContext<'_>,
) -> Result<T, MapError> {
    match document {
        Value::Object(members) => Ok(convert_object(members, ctx)),
        other => Err(not_an_object::<T>(other)),
    }
}

pub(crate) fn convert_object<T: Mapped>(document: &Object, ctx: &ConversionContext<'_>) -> T {
    let mut instance = T::default();
    populate_object(document, &mut instance, ctx);
    instance
}

/// Assign every field of `T` from `document`, in declaration order.
pub(crate) fn populate_object<T: Mapped>(
    document: &Object,
    instance: &mut T,
    ctx: &ConversionContext<'_>,
) {
    for field in T::descriptor().fields() {
        let key = field.effective_key();
        let presence = field.meta().resolve(document, key);
        trace!(
            type_name = T::TYPE_NAME,
            field = field.name(),
            key,
            present = presence.is_present(),
            "resolved field"
        );

        match &field.slot {
            Slot::Scalar(set) => set(instance, scalar_value(field, presence, ctx)),
            Slot::Raw(set) => {
                let elements = presence.value().map(elements_of).unwrap_or_default();
                set(instance, elements.to_vec())
            }
            Slot::Collection(set) => {
                let elements = presence.value().map(elements_of).unwrap_or_default();
                set(instance, elements, ctx)
            }
            Slot::Object(set) => set(instance, nested_document::<T>(field, presence), ctx),
        }
    }
}

/// Convert each element independently. An element that cannot be converted
/// becomes `None`; the others are kept at their positions.
pub(crate) fn convert_elements<U: Mapped>(
    elements: &[Value],
    ctx: &ConversionContext<'_>,
) -> Vec<Option<U>> {
    elements
        .iter()
        .enumerate()
        .map(|(index, element)| match try_convert::<U>(element, ctx) {
            Ok(value) => Some(value),
            Err(err) => {
                debug!(index, error = %err, "collection element replaced with null");
                None
            }
        })
        .collect()
}

fn scalar_value<T>(
    field: &FieldDescriptor<T>,
    presence: Presence<'_>,
    ctx: &ConversionContext<'_>,
) -> Value {
    let value = presence.value_or_null();
    if let Some(formatter) = field.meta().formatter() {
        return formatter.process(value, field.name(), ctx.root());
    }
    match field.category() {
        TypeCategory::Scalar(_) if value.is_null() && field.is_nullable() => Value::Null,
        TypeCategory::Scalar(kind) => coerce(*kind, value),
        _ => Value::Null,
    }
}

/// The nested document of an object field; `None` when it is absent, null or
/// not an object.
fn nested_document<'a, T: Mapped>(
    field: &FieldDescriptor<T>,
    presence: Presence<'a>,
) -> Option<&'a Object> {
    match presence.non_null()? {
        Value::Object(document) => Some(document),
        other => {
            debug!(
                type_name = T::TYPE_NAME,
                field = field.name(),
                found = other.kind_name(),
                "nested value is not an object, treating it as absent"
            );
            None
        }
    }
}

/// Elements of a collection value. Null has none; a lone non-list value is
/// read as a single element.
fn elements_of(value: &Value) -> &[Value] {
    match value {
        Value::List(items) => items,
        Value::Null => &[],
        other => std::slice::from_ref(other),
    }
}

pub(crate) fn not_an_object<T: Mapped>(value: &Value) -> MapError {
    MapError::NotAnObject {
        type_name: T::TYPE_NAME,
        found: value.kind_name(),
    }
}
