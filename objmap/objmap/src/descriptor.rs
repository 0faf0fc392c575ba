//! Field-descriptor tables registered once per mapped type.
//!
//! A [`TypeDescriptor`] lists a type's fields in declaration order. Each
//! [`FieldDescriptor`] carries the field's [`TypeCategory`], nullability,
//! [`FieldMeta`] and an explicit mutator bound at registration time.
//!
//! ```rust
//! use std::sync::OnceLock;
//!
//! use objmap::{FieldDescriptor, Mapped, TypeDescriptor};
//!
//! #[derive(Debug, Default)]
//! struct User {
//!     id: i64,
//!     name: Option<String>,
//! }
//!
//! impl Mapped for User {
//!     const TYPE_NAME: &'static str = "User";
//!
//!     fn descriptor() -> &'static TypeDescriptor<Self> {
//!         static DESCRIPTOR: OnceLock<TypeDescriptor<User>> = OnceLock::new();
//!         DESCRIPTOR.get_or_init(|| {
//!             TypeDescriptor::new()
//!                 .field(
//!                     FieldDescriptor::scalar("id", |u: &mut User, v| u.id = v).alias("user_id"),
//!                 )
//!                 .field(FieldDescriptor::scalar("name", |u: &mut User, v| u.name = v))
//!         })
//!     }
//! }
//! ```

use std::sync::Arc;

use objmap_core::{
    FieldMeta, Formatter, Meta, MetaKind, Object, ScalarKind, TypeCategory, Value, coerce,
};

use crate::{context::ConversionContext, engine};

/// A type the mapping engine can build from a document.
///
/// `Default` provides the blank instance every conversion starts from, and the
/// empty instance assigned to non-nullable nested objects that are absent.
pub trait Mapped: Default + Sized + 'static {
    /// Name used in nested-type references and error messages.
    const TYPE_NAME: &'static str;

    /// The field table for this type, built once.
    fn descriptor() -> &'static TypeDescriptor<Self>;
}

/// Ordered field table of one mapped type.
pub struct TypeDescriptor<T> {
    name: &'static str,
    fields: Vec<FieldDescriptor<T>>,
}

impl<T: Mapped> TypeDescriptor<T> {
    pub fn new() -> Self {
        Self {
            name: T::TYPE_NAME,
            fields: Vec::new(),
        }
    }

    /// Append a field.
    ///
    /// # Panics
    ///
    /// Panics if a field with the same name is already registered.
    pub fn field(mut self, field: FieldDescriptor<T>) -> Self {
        assert!(
            self.field_named(field.name).is_none(),
            "duplicate field '{}' registered on '{}'",
            field.name,
            self.name
        );
        self.fields.push(field);
        self
    }
}

impl<T: Mapped> Default for TypeDescriptor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TypeDescriptor<T> {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn fields(&self) -> &[FieldDescriptor<T>] {
        &self.fields
    }

    pub fn field_named(&self, name: &str) -> Option<&FieldDescriptor<T>> {
        self.fields.iter().find(|field| field.name == name)
    }
}

type ScalarSetter<T> = Box<dyn Fn(&mut T, Value) + Send + Sync>;

/// Receives the nested document, or `None` when it is absent, null or not an
/// object.
type ObjectSetter<T> = Box<dyn Fn(&mut T, Option<&Object>, &ConversionContext<'_>) + Send + Sync>;
type CollectionSetter<T> = Box<dyn Fn(&mut T, &[Value], &ConversionContext<'_>) + Send + Sync>;

pub(crate) enum Slot<T> {
    Scalar(ScalarSetter<T>),
    Raw(fn(&mut T, Vec<Value>)),
    Object(ObjectSetter<T>),
    Collection(CollectionSetter<T>),
}

/// Compiled description of one field of `T`.
pub struct FieldDescriptor<T> {
    name: &'static str,
    category: TypeCategory,
    nullable: bool,
    meta: FieldMeta,
    pub(crate) slot: Slot<T>,
}

impl<T: 'static> FieldDescriptor<T> {
    /// Scalar field. Category and nullability follow `X`: `Option<_>` targets
    /// are nullable.
    pub fn scalar<X: FromScalar + 'static>(name: &'static str, set: fn(&mut T, X)) -> Self {
        Self {
            name,
            category: TypeCategory::Scalar(X::KIND),
            nullable: X::NULLABLE,
            meta: FieldMeta::new(),
            slot: Slot::Scalar(Box::new(move |target: &mut T, value: Value| {
                set(target, X::from_scalar(value))
            })),
        }
    }

    /// Field of a type without built-in coercion.
    ///
    /// Receives the output of its formatter verbatim, or null when no
    /// formatter is attached.
    pub fn custom(name: &'static str, set: fn(&mut T, Value)) -> Self {
        Self {
            name,
            category: TypeCategory::Unknown,
            nullable: true,
            meta: FieldMeta::new(),
            slot: Slot::Scalar(Box::new(move |target: &mut T, value: Value| {
                set(target, value)
            })),
        }
    }

    /// Collection kept as untyped values.
    pub fn raw_collection(name: &'static str, set: fn(&mut T, Vec<Value>)) -> Self {
        Self {
            name,
            category: TypeCategory::RawCollection,
            nullable: false,
            meta: FieldMeta::new().with(Meta::RawCollection),
            slot: Slot::Raw(set),
        }
    }

    /// Non-nullable nested object; absent or null input yields `U::default()`.
    pub fn object<U: Mapped>(name: &'static str, set: fn(&mut T, U)) -> Self {
        Self::nested_object::<U>(
            name,
            false,
            Box::new(
                move |target: &mut T, input: Option<&Object>, ctx: &ConversionContext<'_>| {
                    let value = match input {
                        Some(document) => engine::convert_object::<U>(document, ctx),
                        None => U::default(),
                    };
                    set(target, value)
                },
            ),
        )
    }

    /// Nullable nested object; absent or null input yields `None`.
    pub fn optional_object<U: Mapped>(name: &'static str, set: fn(&mut T, Option<U>)) -> Self {
        Self::nested_object::<U>(
            name,
            true,
            Box::new(
                move |target: &mut T, input: Option<&Object>, ctx: &ConversionContext<'_>| {
                    set(target, input.map(|document| engine::convert_object::<U>(document, ctx)))
                },
            ),
        )
    }

    fn nested_object<U: Mapped>(
        name: &'static str,
        nullable: bool,
        setter: ObjectSetter<T>,
    ) -> Self {
        Self {
            name,
            category: TypeCategory::NestedObject(U::TYPE_NAME.to_string()),
            nullable,
            meta: FieldMeta::new(),
            slot: Slot::Object(setter),
        }
    }

    /// Homogeneous collection of `U`. Elements that fail to convert are `None`.
    pub fn collection<U: Mapped>(name: &'static str, set: fn(&mut T, Vec<Option<U>>)) -> Self {
        Self {
            name,
            category: TypeCategory::NestedCollection(U::TYPE_NAME.to_string()),
            nullable: false,
            meta: FieldMeta::new().with(Meta::NestedCollection(U::TYPE_NAME.to_string())),
            slot: Slot::Collection(Box::new(
                move |target: &mut T, elements: &[Value], ctx: &ConversionContext<'_>| {
                    set(target, engine::convert_elements::<U>(elements, ctx))
                },
            )),
        }
    }
}

impl<T> FieldDescriptor<T> {
    /// Read the field from `key` instead of its name.
    pub fn alias(mut self, key: impl Into<String>) -> Self {
        self.meta.attach(Meta::Alias(key.into()));
        self
    }

    /// Value used when the source key is missing.
    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.meta.attach(Meta::Default(value.into()));
        self
    }

    /// Transform applied instead of built-in coercion. Only consulted for
    /// scalar and custom fields.
    pub fn formatter(mut self, formatter: impl Formatter + 'static) -> Self {
        self.meta.attach(Meta::Formatter(Arc::new(formatter)));
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn category(&self) -> &TypeCategory {
        &self.category
    }

    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    pub fn meta(&self) -> &FieldMeta {
        &self.meta
    }

    pub fn lookup(&self, kind: MetaKind) -> Option<&Meta> {
        self.meta.lookup(kind)
    }

    /// Source key: the alias when attached, otherwise the field name.
    pub fn effective_key(&self) -> &str {
        self.meta.effective_key(self.name)
    }
}

/// Rust types a scalar field can be declared as.
pub trait FromScalar: Sized {
    const KIND: ScalarKind;
    const NULLABLE: bool = false;

    /// Build the field value from an already mapped scalar. Total: values of
    /// another kind are coerced, and null falls back to the type's zero value.
    fn from_scalar(value: Value) -> Self;
}

impl FromScalar for i64 {
    const KIND: ScalarKind = ScalarKind::Int;

    fn from_scalar(value: Value) -> Self {
        match value {
            Value::Int(v) => v,
            other => coerce(Self::KIND, &other).as_i64().unwrap_or_default(),
        }
    }
}

impl FromScalar for f64 {
    const KIND: ScalarKind = ScalarKind::Float;

    fn from_scalar(value: Value) -> Self {
        match value {
            Value::Float(v) => v,
            other => coerce(Self::KIND, &other).as_f64().unwrap_or_default(),
        }
    }
}

impl FromScalar for bool {
    const KIND: ScalarKind = ScalarKind::Bool;

    fn from_scalar(value: Value) -> Self {
        match value {
            Value::Bool(v) => v,
            other => coerce(Self::KIND, &other).as_bool().unwrap_or_default(),
        }
    }
}

impl FromScalar for String {
    const KIND: ScalarKind = ScalarKind::String;

    fn from_scalar(value: Value) -> Self {
        match value {
            Value::String(v) => v.to_string(),
            other => coerce(Self::KIND, &other)
                .as_str()
                .map(str::to_string)
                .unwrap_or_default(),
        }
    }
}

impl<X: FromScalar> FromScalar for Option<X> {
    const KIND: ScalarKind = X::KIND;
    const NULLABLE: bool = true;

    fn from_scalar(value: Value) -> Self {
        match value {
            Value::Null => None,
            other => Some(X::from_scalar(other)),
        }
    }
}
