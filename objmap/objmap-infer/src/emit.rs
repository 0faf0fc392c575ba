//! Emission pass: generated type tree -> source artifacts.

use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
};

use objmap_core::Value;
use tracing::{info, warn};

use crate::{
    error::InferError,
    model::{GeneratedType, InferOptions},
    render::{render_module_index, render_type},
    traverse::infer_types,
};

const MODULE_INDEX: &str = "mod.rs";

/// Path-addressed write target for generated artifacts.
pub trait SourceStore {
    /// Write `contents` under `file_name`, returning the location written.
    fn write(&mut self, file_name: &str, contents: &str) -> io::Result<PathBuf>;
}

/// Writes artifacts into a directory, creating it on first write.
#[derive(Debug, Clone)]
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl SourceStore for FsStore {
    fn write(&mut self, file_name: &str, contents: &str) -> io::Result<PathBuf> {
        if !self.root.is_dir() {
            fs::create_dir_all(&self.root)?;
        }
        let path = self.root.join(file_name);
        fs::write(&path, contents)?;
        Ok(path)
    }
}

/// Outcome of one emission pass.
#[derive(Debug, Default)]
pub struct EmitReport {
    /// Locations written, parents before children, module index last.
    pub written: Vec<PathBuf>,
    /// Names of the types whose artifact was written.
    pub emitted: Vec<String>,
    /// One entry per type whose artifact could not be written. The types
    /// nested under it were skipped.
    pub failures: Vec<InferError>,
}

impl EmitReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Write every type of the tree rooted at `root`, then the module index.
///
/// A failed write aborts that type and its not-yet-emitted descendants;
/// types already written and sibling subtrees are unaffected.
pub fn emit(root: &GeneratedType, store: &mut impl SourceStore) -> EmitReport {
    let mut report = EmitReport::default();
    let mut emitted_types = Vec::new();
    emit_subtree(root, store, &mut report, &mut emitted_types);

    if !emitted_types.is_empty() {
        let index = render_module_index(&root.namespace, emitted_types);
        match write_artifact(store, MODULE_INDEX, index) {
            Ok(path) => report.written.push(path),
            Err(err) => {
                warn!(error = %err, "failed to write module index");
                report.failures.push(err);
            }
        }
    }
    report
}

fn write_artifact(
    store: &mut impl SourceStore,
    file_name: &str,
    contents: Result<String, fmt::Error>,
) -> Result<PathBuf, InferError> {
    let contents = contents.map_err(|source| InferError::Render {
        file_name: file_name.to_string(),
        source,
    })?;
    store
        .write(file_name, &contents)
        .map_err(|source| InferError::Io {
            path: PathBuf::from(file_name),
            source,
        })
}

fn emit_subtree<'a>(
    ty: &'a GeneratedType,
    store: &mut impl SourceStore,
    report: &mut EmitReport,
    emitted_types: &mut Vec<&'a GeneratedType>,
) {
    let file_name = ty.file_name();
    match write_artifact(store, &file_name, render_type(ty)) {
        Ok(path) => {
            info!(type_name = %ty.name, path = %path.display(), "emitted type");
            report.written.push(path);
            report.emitted.push(ty.name.clone());
            emitted_types.push(ty);
            for child in &ty.children {
                emit_subtree(child, store, report, emitted_types);
            }
        }
        Err(err) => {
            warn!(
                type_name = %ty.name,
                skipped = ty.type_count() - 1,
                error = %err,
                "emission aborted for type and its nested types"
            );
            report.failures.push(err);
        }
    }
}

/// Infer the types described by `sample` and write them into `store`.
///
/// Fails when the sample cannot be traversed, or when nothing could be
/// written because the root type's artifact failed.
pub fn infer_into(
    sample: &Value,
    options: &InferOptions,
    store: &mut impl SourceStore,
) -> Result<EmitReport, InferError> {
    let root = infer_types(sample, options)?;
    let mut report = emit(&root, store);
    if report.emitted.is_empty() && !report.failures.is_empty() {
        return Err(report.failures.remove(0));
    }
    Ok(report)
}

/// Infer the types described by `sample` and write them under `output`.
pub fn infer(
    sample: &Value,
    options: &InferOptions,
    output: impl AsRef<Path>,
) -> Result<EmitReport, InferError> {
    infer_into(sample, options, &mut FsStore::new(output.as_ref()))
}
