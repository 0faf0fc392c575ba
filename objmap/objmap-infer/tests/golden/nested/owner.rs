//! `Owner` in `nested`, inferred from a sample document.
//! Field metadata: alias.

use std::sync::OnceLock;

use objmap::{FieldDescriptor, Mapped, TypeDescriptor};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Owner {
    name: String,
    /// objmap: alias = "e-mail"
    e_mail: Option<String>,
}

impl Owner {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn e_mail(&self) -> Option<&str> {
        self.e_mail.as_deref()
    }
}

impl Mapped for Owner {
    const TYPE_NAME: &'static str = "Owner";

    fn descriptor() -> &'static TypeDescriptor<Self> {
        static DESCRIPTOR: OnceLock<TypeDescriptor<Owner>> = OnceLock::new();
        DESCRIPTOR.get_or_init(|| {
            TypeDescriptor::new()
                .field(FieldDescriptor::scalar("name", |t: &mut Owner, v| t.name = v))
                .field(FieldDescriptor::scalar("eMail", |t: &mut Owner, v| t.e_mail = v).alias("e-mail"))
        })
    }
}
