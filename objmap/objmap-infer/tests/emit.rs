use std::{collections::BTreeMap, io, path::PathBuf};

use objmap_core::Value;
use objmap_infer::{
    FsStore, InferError, InferOptions, SourceStore, emit, infer, infer_into, infer_types,
};
use serde_json::json;

/// In-memory store failing on the configured file names.
#[derive(Default)]
struct MemoryStore {
    files: BTreeMap<String, String>,
    failing: Vec<&'static str>,
}

impl SourceStore for MemoryStore {
    fn write(&mut self, file_name: &str, contents: &str) -> io::Result<PathBuf> {
        if self.failing.contains(&file_name) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"));
        }
        self.files.insert(file_name.to_string(), contents.to_string());
        Ok(PathBuf::from(file_name))
    }
}

fn sample() -> Value {
    Value::from(json!({
        "id": 1,
        "owner": { "name": "x", "address": { "city": "y" } },
        "items": [{ "sku": "a" }],
    }))
}

fn options() -> InferOptions {
    InferOptions::new("Order", "generated")
}

#[test]
fn infer_writes_every_type() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("generated");

    let report = infer(&sample(), &options(), &output).unwrap();

    assert!(report.is_complete());
    assert_eq!(report.emitted, ["Order", "Owner", "Address", "Items"]);
    for file in ["order.rs", "owner.rs", "address.rs", "items.rs", "mod.rs"] {
        assert!(output.join(file).is_file(), "{file} was not written");
    }
    assert_eq!(report.written.last(), Some(&output.join("mod.rs")));

    let order = std::fs::read_to_string(output.join("order.rs")).unwrap();
    assert!(order.contains("pub struct Order {"));
}

#[test]
fn failed_write_skips_nested_types_only() {
    let root = infer_types(&sample(), &options()).unwrap();
    let mut store = MemoryStore {
        failing: vec!["owner.rs"],
        ..Default::default()
    };

    let report = emit(&root, &mut store);

    assert!(!report.is_complete());
    assert_eq!(report.emitted, ["Order", "Items"]);
    assert_eq!(report.failures.len(), 1);
    assert!(matches!(
        &report.failures[0],
        InferError::Io { path, .. } if path == &PathBuf::from("owner.rs")
    ));
    assert!(!store.files.contains_key("address.rs"));

    let index = &store.files["mod.rs"];
    assert!(index.contains("mod items;"));
    assert!(!index.contains("owner"));
}

#[test]
fn failed_root_write_is_an_error() {
    let mut store = MemoryStore {
        failing: vec!["order.rs"],
        ..Default::default()
    };

    let err = infer_into(&sample(), &options(), &mut store).unwrap_err();
    assert!(matches!(err, InferError::Io { .. }));
    assert!(store.files.is_empty());
}

#[test]
fn failed_index_write_is_reported() {
    let mut store = MemoryStore {
        failing: vec!["mod.rs"],
        ..Default::default()
    };

    let report = infer_into(&sample(), &options(), &mut store).unwrap();
    assert_eq!(report.emitted.len(), 4);
    assert_eq!(report.failures.len(), 1);
}

#[test]
fn fs_store_creates_directory() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FsStore::new(dir.path().join("a").join("b"));

    let path = store.write("x.rs", "// x\n").unwrap();
    assert_eq!(path, store.root().join("x.rs"));
    assert_eq!(std::fs::read_to_string(path).unwrap(), "// x\n");
}
