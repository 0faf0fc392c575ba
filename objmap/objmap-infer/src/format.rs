use std::fmt::{Error, Result, Write as _};

use objmap_core::TypeCategory;

use crate::model::{GeneratedField, GeneratedType};

/// Format a generated type tree in a readable style:
/// scalar and raw fields are rendered in one line, nested fields are
/// expanded with the fields of the type they refer to.
pub fn format_generated_type(ty: &GeneratedType) -> std::result::Result<String, Error> {
    let mut out = String::new();
    writeln!(out, "{}:", ty.name)?;
    writeln!(out, "    type: struct")?;
    format_members(ty, 4, &mut out)?;
    Ok(out)
}

fn format_members(ty: &GeneratedType, indent: usize, out: &mut String) -> Result {
    let pad = " ".repeat(indent);
    if !ty.meta_kinds.is_empty() {
        let kinds: Vec<&str> = ty.meta_kinds.iter().map(|kind| kind.as_str()).collect();
        writeln!(out, "{pad}metadata: [{}]", kinds.join(", "))?;
    }
    writeln!(out, "{pad}fields:")?;
    for field in &ty.fields {
        format_field(ty, field, indent + 4, out)?;
    }
    Ok(())
}

fn format_field(
    owner: &GeneratedType,
    field: &GeneratedField,
    indent: usize,
    out: &mut String,
) -> Result {
    let pad = " ".repeat(indent);
    let alias = match field.meta.alias() {
        Some(key) => format!(", alias: {key}"),
        None => String::new(),
    };

    let nested = field.category.nested_type().and_then(|name| owner.child(name));
    let Some(child) = nested else {
        writeln!(
            out,
            "{pad}{}: {{ type: {}, nullable: {}{alias} }}",
            field.name,
            field.category.type_name(),
            field.nullable
        )?;
        return Ok(());
    };

    writeln!(out, "{pad}{}:", field.name)?;
    writeln!(out, "{pad}    type: {}", field.category)?;
    writeln!(out, "{pad}    nullable: {}", field.nullable)?;
    if let Some(key) = field.meta.alias() {
        writeln!(out, "{pad}    alias: {key}")?;
    }
    match field.category {
        TypeCategory::NestedCollection(_) => {
            writeln!(out, "{pad}    item:")?;
            writeln!(out, "{pad}        type: struct")?;
            format_members(child, indent + 8, out)?;
        }
        _ => format_members(child, indent + 4, out)?,
    }
    Ok(())
}
