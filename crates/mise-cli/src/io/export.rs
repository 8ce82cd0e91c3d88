use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::output;

/// Print `value` on stdout, or write it to `out` when given.
pub fn emit<T: Serialize>(value: &T, out: Option<&str>) -> Result<()> {
    match out {
        Some(path) => write_json(path, value),
        None => output::print(value),
    }
}

/// Write `value` as JSON, creating parent directories as needed.
pub fn write_json<P: AsRef<Path>, T: Serialize>(path: P, value: &T) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    let mut s = output::to_json(value)?;
    s.push('\n');
    fs::write(path, s).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::debug!(path = %path.display(), "wrote output file");
    Ok(())
}
