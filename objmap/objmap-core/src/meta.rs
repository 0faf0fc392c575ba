//! Declarative per-field metadata and its fallback precedence.

use std::{
    fmt::{self, Debug},
    sync::Arc,
};

use crate::{
    formatter::Formatter,
    presence::Presence,
    value::{Object, Value},
};

/// Kinds of metadata a field can carry. At most one of each kind per field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MetaKind {
    Alias,
    Default,
    Formatter,
    NestedCollection,
    RawCollection,
}

impl MetaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetaKind::Alias => "alias",
            MetaKind::Default => "default_value",
            MetaKind::Formatter => "formatter",
            MetaKind::NestedCollection => "nested_collection",
            MetaKind::RawCollection => "raw_collection",
        }
    }
}

impl fmt::Display for MetaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One piece of metadata attached to a field.
#[derive(Clone)]
pub enum Meta {
    /// Source key to read instead of the field name.
    Alias(String),
    /// Value used when the source key is missing.
    Default(Value),
    Formatter(Arc<dyn Formatter>),
    /// Element type name of a homogeneous collection.
    NestedCollection(String),
    /// Marks a collection kept as untyped values.
    RawCollection,
}

impl Meta {
    pub fn kind(&self) -> MetaKind {
        match self {
            Meta::Alias(_) => MetaKind::Alias,
            Meta::Default(_) => MetaKind::Default,
            Meta::Formatter(_) => MetaKind::Formatter,
            Meta::NestedCollection(_) => MetaKind::NestedCollection,
            Meta::RawCollection => MetaKind::RawCollection,
        }
    }
}

impl Debug for Meta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Meta::Alias(key) => f.debug_tuple("Alias").field(key).finish(),
            Meta::Default(value) => f.debug_tuple("Default").field(value).finish(),
            Meta::Formatter(_) => f.write_str("Formatter(..)"),
            Meta::NestedCollection(name) => {
                f.debug_tuple("NestedCollection").field(name).finish()
            }
            Meta::RawCollection => f.write_str("RawCollection"),
        }
    }
}

/// Metadata attached to one field.
#[derive(Debug, Clone, Default)]
pub struct FieldMeta {
    entries: Vec<Meta>,
}

impl FieldMeta {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `meta`, replacing any existing entry of the same kind.
    pub fn attach(&mut self, meta: Meta) {
        let kind = meta.kind();
        match self.entries.iter_mut().find(|entry| entry.kind() == kind) {
            Some(slot) => *slot = meta,
            None => self.entries.push(meta),
        }
    }

    pub fn with(mut self, meta: Meta) -> Self {
        self.attach(meta);
        self
    }

    /// The entry of `kind`, if one is attached.
    pub fn lookup(&self, kind: MetaKind) -> Option<&Meta> {
        self.entries.iter().find(|entry| entry.kind() == kind)
    }

    pub fn kinds(&self) -> impl Iterator<Item = MetaKind> + '_ {
        self.entries.iter().map(Meta::kind)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Meta> {
        self.entries.iter()
    }

    pub fn alias(&self) -> Option<&str> {
        match self.lookup(MetaKind::Alias) {
            Some(Meta::Alias(key)) => Some(key),
            _ => None,
        }
    }

    pub fn default_value(&self) -> Option<&Value> {
        match self.lookup(MetaKind::Default) {
            Some(Meta::Default(value)) => Some(value),
            _ => None,
        }
    }

    pub fn formatter(&self) -> Option<&dyn Formatter> {
        match self.lookup(MetaKind::Formatter) {
            Some(Meta::Formatter(formatter)) => Some(formatter.as_ref()),
            _ => None,
        }
    }

    /// Source key for a field named `field_name`: the alias when attached.
    pub fn effective_key<'a>(&'a self, field_name: &'a str) -> &'a str {
        self.alias().unwrap_or(field_name)
    }

    /// Resolve the field's value in `document` under `key`.
    ///
    /// A supplied key always wins, even when its value is null; the default
    /// is consulted only when the key is missing.
    pub fn resolve<'a>(&'a self, document: &'a Object, key: &str) -> Presence<'a> {
        if let Some(value) = document.get(key) {
            return Presence::Supplied(value);
        }
        match self.default_value() {
            Some(value) => Presence::Defaulted(value),
            None => Presence::Missing,
        }
    }
}
