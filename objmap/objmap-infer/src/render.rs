//! Rust source rendering of generated types.
//!
//! Each artifact holds, in order: a header naming the module and type, the
//! `use` lines it needs, the struct (each field optionally preceded by one
//! line listing its metadata), one accessor per field, and the `Mapped`
//! registration carrying the same metadata as builder calls.

use std::fmt::{Error, Result, Write as _};

use objmap_core::{Meta, MetaKind, ScalarKind, TypeCategory};

use crate::model::{GeneratedField, GeneratedType};

/// Render the artifact for one type (children are rendered separately).
pub fn render_type(ty: &GeneratedType) -> std::result::Result<String, Error> {
    let mut out = String::new();
    write_type(ty, &mut out)?;
    Ok(out)
}

/// Render the `mod.rs` index declaring and re-exporting `types`.
pub fn render_module_index<'a>(
    namespace: &str,
    types: impl IntoIterator<Item = &'a GeneratedType>,
) -> std::result::Result<String, Error> {
    let mut types: Vec<&GeneratedType> = types.into_iter().collect();
    types.sort_by_key(|ty| ty.module_name());

    let mut out = String::new();
    writeln!(out, "//! Types of `{namespace}` inferred from a sample document.")?;
    writeln!(out)?;
    for ty in &types {
        writeln!(out, "mod {};", ty.module_name())?;
    }
    writeln!(out)?;
    for ty in &types {
        writeln!(out, "pub use {}::{};", ty.module_name(), ty.name)?;
    }
    Ok(out)
}

fn write_type(ty: &GeneratedType, out: &mut String) -> Result {
    writeln!(out, "//! `{}` in `{}`, inferred from a sample document.", ty.name, ty.namespace)?;
    if !ty.meta_kinds.is_empty() {
        let kinds: Vec<&str> = ty.meta_kinds.iter().map(MetaKind::as_str).collect();
        writeln!(out, "//! Field metadata: {}.", kinds.join(", "))?;
    }
    writeln!(out)?;

    writeln!(out, "use std::sync::OnceLock;")?;
    writeln!(out)?;
    let mut imports = vec!["FieldDescriptor", "Mapped", "TypeDescriptor"];
    if ty.uses(MetaKind::RawCollection) {
        imports.push("Value");
    }
    writeln!(out, "use objmap::{{{}}};", imports.join(", "))?;
    for child in &ty.children {
        if ty.namespace.is_empty() {
            writeln!(out, "use super::{};", child.name)?;
        } else {
            writeln!(out, "use crate::{}::{};", ty.namespace, child.name)?;
        }
    }
    writeln!(out)?;

    writeln!(out, "#[derive(Debug, Clone, Default, PartialEq)]")?;
    writeln!(out, "pub struct {} {{", ty.name)?;
    for field in &ty.fields {
        if let Some(line) = meta_line(field) {
            writeln!(out, "    /// {line}")?;
        }
        writeln!(out, "    {}: {},", field.ident(), rust_type(field))?;
    }
    writeln!(out, "}}")?;
    writeln!(out)?;

    writeln!(out, "impl {} {{", ty.name)?;
    for (i, field) in ty.fields.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        let (ret, body) = accessor(field);
        writeln!(out, "    pub fn {}(&self) -> {ret} {{", field.ident())?;
        writeln!(out, "        {body}")?;
        writeln!(out, "    }}")?;
    }
    writeln!(out, "}}")?;
    writeln!(out)?;

    writeln!(out, "impl Mapped for {} {{", ty.name)?;
    writeln!(out, "    const TYPE_NAME: &'static str = {:?};", ty.name)?;
    writeln!(out)?;
    writeln!(out, "    fn descriptor() -> &'static TypeDescriptor<Self> {{")?;
    writeln!(
        out,
        "        static DESCRIPTOR: OnceLock<TypeDescriptor<{}>> = OnceLock::new();",
        ty.name
    )?;
    writeln!(out, "        DESCRIPTOR.get_or_init(|| {{")?;
    writeln!(out, "            TypeDescriptor::new()")?;
    for field in &ty.fields {
        write!(
            out,
            "                .field(FieldDescriptor::{}({:?}, |t: &mut {}, v| t.{} = v)",
            constructor(field),
            field.name,
            ty.name,
            field.ident()
        )?;
        if let Some(key) = field.meta.alias() {
            write!(out, ".alias({key:?})")?;
        }
        writeln!(out, ")")?;
    }
    writeln!(out, "        }})")?;
    writeln!(out, "    }}")?;
    writeln!(out, "}}")?;
    Ok(())
}

fn meta_line(field: &GeneratedField) -> Option<String> {
    let parts: Vec<String> = field
        .meta
        .iter()
        .map(|meta| match meta {
            Meta::Alias(key) => format!("alias = {key:?}"),
            Meta::Default(value) => format!("default_value = {value:?}"),
            Meta::NestedCollection(name) => format!("nested_collection = {name:?}"),
            Meta::Formatter(_) | Meta::RawCollection => meta.kind().as_str().to_string(),
        })
        .collect();
    (!parts.is_empty()).then(|| format!("objmap: {}", parts.join(", ")))
}

fn scalar_type(kind: ScalarKind) -> &'static str {
    match kind {
        ScalarKind::Int => "i64",
        ScalarKind::Float => "f64",
        ScalarKind::String => "String",
        ScalarKind::Bool => "bool",
    }
}

fn rust_type(field: &GeneratedField) -> String {
    match &field.category {
        TypeCategory::Scalar(kind) if field.nullable => format!("Option<{}>", scalar_type(*kind)),
        TypeCategory::Scalar(kind) => scalar_type(*kind).to_string(),
        TypeCategory::NestedObject(name) => name.clone(),
        TypeCategory::NestedCollection(name) => format!("Vec<Option<{name}>>"),
        TypeCategory::RawCollection => "Vec<Value>".to_string(),
        TypeCategory::Unknown => "objmap::Value".to_string(),
    }
}

fn constructor(field: &GeneratedField) -> &'static str {
    match field.category {
        TypeCategory::Scalar(_) => "scalar",
        TypeCategory::NestedObject(_) => "object",
        TypeCategory::NestedCollection(_) => "collection",
        TypeCategory::RawCollection => "raw_collection",
        TypeCategory::Unknown => "custom",
    }
}

/// Return type and body of the field's accessor.
fn accessor(field: &GeneratedField) -> (String, String) {
    let ident = field.ident();
    match &field.category {
        TypeCategory::Scalar(ScalarKind::String) if field.nullable => {
            ("Option<&str>".into(), format!("self.{ident}.as_deref()"))
        }
        TypeCategory::Scalar(ScalarKind::String) => ("&str".into(), format!("&self.{ident}")),
        TypeCategory::Scalar(_) => (rust_type(field), format!("self.{ident}")),
        TypeCategory::NestedObject(name) => (format!("&{name}"), format!("&self.{ident}")),
        TypeCategory::NestedCollection(name) => {
            (format!("&[Option<{name}>]"), format!("&self.{ident}"))
        }
        TypeCategory::RawCollection => ("&[Value]".into(), format!("&self.{ident}")),
        TypeCategory::Unknown => ("&objmap::Value".into(), format!("&self.{ident}")),
    }
}
