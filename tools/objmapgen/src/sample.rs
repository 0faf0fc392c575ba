use std::{fs, io::Read, path::Path};

use anyhow::{Context, Result};
use objmap_core::{Value, parse_document};

/// Read and parse a sample document; `-` reads stdin.
pub fn read_sample(path: &Path) -> Result<Value> {
    let text = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?
    };
    parse_document(&text).with_context(|| format!("failed to parse {}", path.display()))
}
