use crate::value::Value;

/// User-supplied single-value transform attached to a scalar field.
///
/// `root` is the document passed to the top-level conversion that is
/// currently running, so formatters may read sibling or ancestor members.
/// The returned value is assigned as-is; built-in coercion is skipped.
pub trait Formatter: Send + Sync {
    fn process(&self, value: &Value, field_name: &str, root: &Value) -> Value;
}

impl<F> Formatter for F
where
    F: Fn(&Value, &str, &Value) -> Value + Send + Sync,
{
    fn process(&self, value: &Value, field_name: &str, root: &Value) -> Value {
        self(value, field_name, root)
    }
}
