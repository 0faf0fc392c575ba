//! Pure traversal pass: sample document -> tree of [`GeneratedType`].

use std::collections::{BTreeSet, HashSet};

use objmap_core::{FieldMeta, Meta, Object, ScalarKind, TypeCategory, Value};
use tracing::debug;

use crate::{
    error::InferError,
    model::{GeneratedField, GeneratedType, InferOptions},
    naming,
};

/// Infer the type tree rooted at `options.type_name` from `sample`.
///
/// Nothing is written; see [`emit`](crate::emit) for the second pass.
pub fn infer_types(sample: &Value, options: &InferOptions) -> Result<GeneratedType, InferError> {
    let members = sample.as_object().ok_or(InferError::NotAnObject {
        found: sample.kind_name(),
    })?;
    let mut traversal = Traversal::new(naming::module_path(&options.namespace));
    let root_name = traversal.claim(naming::pascal_case(&options.type_name), "");
    traversal.build(members, root_name)
}

/// Names a generated artifact refers to besides its own types. A type may not
/// take one of these.
const RESERVED_NAMES: &[&str] = &[
    "FieldDescriptor",
    "Mapped",
    "OnceLock",
    "Option",
    "Self",
    "String",
    "TypeDescriptor",
    "Value",
    "Vec",
];

struct Traversal {
    namespace: String,
    /// Module names of the types created so far; one artifact per name.
    claimed: HashSet<String>,
}

impl Traversal {
    fn new(namespace: String) -> Self {
        Self {
            namespace,
            claimed: RESERVED_NAMES.iter().map(|name| naming::field_ident(name)).collect(),
        }
    }

    fn build(&mut self, members: &Object, name: String) -> Result<GeneratedType, InferError> {
        let mut fields: Vec<GeneratedField> = Vec::with_capacity(members.len());
        let mut children = Vec::new();

        for (key, value) in members {
            let field_name = naming::normalize_key(key);
            let ident = naming::field_ident(&field_name);
            if let Some(existing) = fields.iter().find(|field| field.ident() == ident) {
                return Err(InferError::DuplicateField {
                    type_name: name,
                    field: field_name,
                    first: existing.source_key.clone(),
                    second: key.clone(),
                });
            }

            let mut meta = FieldMeta::new();
            if field_name != *key {
                meta.attach(Meta::Alias(key.clone()));
            }

            let (category, nullable) = match value {
                Value::Null => {
                    debug!(
                        type_name = %name,
                        key = %key,
                        "null sample, inferring a nullable string"
                    );
                    (TypeCategory::Scalar(ScalarKind::String), true)
                }
                Value::List(items) => match uniform_shape(items) {
                    // the first element stands for all of them
                    Some(first) => {
                        let child_name = self.claim(naming::pascal_case(&field_name), &name);
                        children.push(self.build(first, child_name.clone())?);
                        meta.attach(Meta::NestedCollection(child_name.clone()));
                        (TypeCategory::NestedCollection(child_name), false)
                    }
                    None => {
                        meta.attach(Meta::RawCollection);
                        (TypeCategory::RawCollection, false)
                    }
                },
                Value::Object(nested) => {
                    let child_name = self.claim(naming::pascal_case(&field_name), &name);
                    children.push(self.build(nested, child_name.clone())?);
                    (TypeCategory::NestedObject(child_name), false)
                }
                Value::Bool(_) => (TypeCategory::Scalar(ScalarKind::Bool), false),
                Value::Int(_) => (TypeCategory::Scalar(ScalarKind::Int), false),
                Value::Float(_) => (TypeCategory::Scalar(ScalarKind::Float), false),
                Value::String(_) => (TypeCategory::Scalar(ScalarKind::String), false),
            };

            fields.push(GeneratedField {
                name: field_name,
                source_key: key.clone(),
                category,
                nullable,
                meta,
            });
        }

        let meta_kinds: BTreeSet<_> = fields.iter().flat_map(|field| field.meta.kinds()).collect();
        debug!(
            type_name = %name,
            fields = fields.len(),
            children = children.len(),
            "inferred type"
        );
        Ok(GeneratedType {
            namespace: self.namespace.clone(),
            name,
            fields,
            meta_kinds,
            children,
        })
    }

    /// Reserve a type name, prefixing it with the parent name (and then a
    /// counter) when another type already uses it.
    fn claim(&mut self, candidate: String, parent: &str) -> String {
        let mut name = candidate.clone();
        if self.claimed.contains(&naming::field_ident(&name)) {
            name = format!("{parent}{candidate}");
        }
        let base = name.clone();
        let mut counter = 2;
        while !self.claimed.insert(naming::field_ident(&name)) {
            name = format!("{base}{counter}");
            counter += 1;
        }
        name
    }
}

/// The first element of `items` when the list is non-empty and every element
/// is an object with exactly that element's key set.
fn uniform_shape(items: &[Value]) -> Option<&Object> {
    let Some(Value::Object(first)) = items.first() else {
        return None;
    };
    let uniform = items[1..].iter().all(|item| match item {
        Value::Object(other) => same_shape(first, other),
        _ => false,
    });
    uniform.then_some(first)
}

fn same_shape(a: &Object, b: &Object) -> bool {
    a.len() == b.len() && a.keys().all(|key| b.contains_key(key))
}
