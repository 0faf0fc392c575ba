use std::collections::BTreeSet;

use objmap_core::{FieldMeta, MetaKind, TypeCategory};

use crate::naming;

/// Root type name and module path of one inference run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InferOptions {
    pub type_name: String,
    /// Module path the generated types live in, e.g. `generated` or `api::v1`.
    pub namespace: String,
}

impl InferOptions {
    pub fn new(type_name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            namespace: namespace.into(),
        }
    }
}

/// One field of a generated type.
#[derive(Debug, Clone)]
pub struct GeneratedField {
    /// Normalized (camel-case) field name.
    pub name: String,
    /// Key as it appeared in the sample.
    pub source_key: String,
    pub category: TypeCategory,
    pub nullable: bool,
    pub meta: FieldMeta,
}

impl GeneratedField {
    /// Rust identifier of the struct member and its accessor.
    pub fn ident(&self) -> String {
        naming::field_ident(&self.name)
    }
}

/// Type discovered at one nesting level of the sample.
///
/// Built once by traversal and not modified afterwards.
#[derive(Debug, Clone)]
pub struct GeneratedType {
    pub namespace: String,
    pub name: String,
    pub fields: Vec<GeneratedField>,
    /// Metadata kinds used by any field of this type.
    pub meta_kinds: BTreeSet<MetaKind>,
    /// Types this one refers to, in field order.
    pub children: Vec<GeneratedType>,
}

impl GeneratedType {
    pub fn child(&self, name: &str) -> Option<&GeneratedType> {
        self.children.iter().find(|child| child.name == name)
    }

    /// Number of types in this subtree, including this one.
    pub fn type_count(&self) -> usize {
        1 + self.children.iter().map(GeneratedType::type_count).sum::<usize>()
    }

    /// Depth-first walk over this subtree, parents before children.
    pub fn walk(&self) -> Vec<&GeneratedType> {
        let mut out = vec![self];
        for child in &self.children {
            out.extend(child.walk());
        }
        out
    }

    /// Rust module name of the artifact.
    pub fn module_name(&self) -> String {
        naming::field_ident(&self.name)
    }

    pub fn file_name(&self) -> String {
        format!("{}.rs", self.module_name())
    }

    pub fn uses(&self, kind: MetaKind) -> bool {
        self.meta_kinds.contains(&kind)
    }
}
