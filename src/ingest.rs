use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

/// Invalid UTF-8 is replaced with U+FFFD rather than failing the run.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)
        .with_context(|| format!("failed to open input file: {}", path.display()))?;
    let mut reader = BufReader::new(file);

    let mut lines = Vec::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let count = reader
            .read_until(b'\n', &mut buf)
            .with_context(|| format!("failed to read input file: {}", path.display()))?;
        if count == 0 {
            break;
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        lines.push(String::from_utf8_lossy(&buf).into_owned());
    }

    info!(path = %path.display(), lines = lines.len(), "ingested lines");
    Ok(lines)
}
