use std::fmt::{Display, Formatter, Result};

/// Primitive target of a scalar field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Int,
    Float,
    String,
    Bool,
}

impl ScalarKind {
    pub fn type_name(&self) -> &'static str {
        match self {
            ScalarKind::Int => "int",
            ScalarKind::Float => "float",
            ScalarKind::String => "string",
            ScalarKind::Bool => "bool",
        }
    }
}

/// Classification of a field, shared by the mapper's descriptor tables and by
/// the types produced through schema inference.
///
/// Nested variants carry the name of the type they bind to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeCategory {
    Scalar(ScalarKind),
    NestedObject(String),
    NestedCollection(String),
    RawCollection,
    Unknown,
}

impl TypeCategory {
    pub fn is_scalar(&self) -> bool {
        matches!(self, TypeCategory::Scalar(_) | TypeCategory::Unknown)
    }

    /// Name of the bound nested type, if any.
    pub fn nested_type(&self) -> Option<&str> {
        match self {
            TypeCategory::NestedObject(name) | TypeCategory::NestedCollection(name) => {
                Some(name)
            }
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            TypeCategory::Scalar(kind) => kind.type_name(),
            TypeCategory::NestedObject(_) => "object",
            TypeCategory::NestedCollection(_) => "collection",
            TypeCategory::RawCollection => "raw_collection",
            TypeCategory::Unknown => "unknown",
        }
    }
}

impl Display for TypeCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self.nested_type() {
            Some(nested) => write!(f, "{}<{nested}>", self.type_name()),
            None => f.write_str(self.type_name()),
        }
    }
}
