use std::fs;
use std::io::{self, Read};

use anyhow::{anyhow, bail, Context, Result};

/// Read text from a file, or stdin when `input` is absent or `-`.
pub fn read_text(input: Option<&str>, max_bytes: usize) -> Result<String> {
    let bytes = match input {
        None | Some("-") => {
            let mut buf = Vec::new();
            io::stdin()
                .lock()
                .take(max_bytes as u64 + 1)
                .read_to_end(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
        Some(path) => fs::read(path).with_context(|| format!("failed to read {path}"))?,
    };

    if bytes.len() > max_bytes {
        bail!("input too large ({} bytes > limit {max_bytes})", bytes.len());
    }

    String::from_utf8(bytes).map_err(|_| anyhow!("input is not valid UTF-8"))
}

/// Read and decode a JSON value with the same source rules as [`read_text`].
pub fn read_json(input: Option<&str>, max_bytes: usize) -> Result<serde_json::Value> {
    let raw = read_text(input, max_bytes)?;
    serde_json::from_str(&raw).map_err(|e| anyhow!("invalid json: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_file_within_limit() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("r.txt");
        fs::write(&p, "Soup\nBoil").unwrap();
        let s = read_text(p.to_str(), 64).unwrap();
        assert_eq!(s, "Soup\nBoil");
    }

    #[test]
    fn rejects_oversized_file() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("big.txt");
        fs::write(&p, "x".repeat(10)).unwrap();
        let err = read_text(p.to_str(), 4).unwrap_err();
        assert!(err.to_string().contains("too large"));
    }

    #[test]
    fn invalid_json_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("bad.json");
        fs::write(&p, "{").unwrap();
        let err = read_json(p.to_str(), 64).unwrap_err();
        assert!(err.to_string().contains("invalid json"));
    }
}
