use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::util::ensure_directory;

pub fn write_statements(path: &Path, statements: &[String], echo: bool) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        ensure_directory(parent)?;
    }

    let file = File::create(path)
        .with_context(|| format!("failed to create output file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    for statement in statements {
        writeln!(writer, "{statement}")
            .with_context(|| format!("failed to write output file: {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("failed to flush output file: {}", path.display()))?;

    if echo {
        print_statements(statements)?;
    }

    info!(path = %path.display(), statements = statements.len(), "wrote statements");
    Ok(())
}

pub fn print_statements(statements: &[String]) -> Result<()> {
    let mut output = BufWriter::new(io::stdout().lock());
    for statement in statements {
        writeln!(output, "{statement}")?;
    }
    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("techsql-output-{}-{name}", std::process::id()))
    }

    #[test]
    fn write_statements_overwrites_previous_content() {
        let dir = scratch_dir("overwrite");
        let path = dir.join("nested").join("out.sql");

        write_statements(&path, &["first;".to_string(), "second;".to_string()], false)
            .expect("initial write should succeed");
        write_statements(&path, &["third;".to_string()], false)
            .expect("second write should succeed");

        let content = fs::read_to_string(&path).expect("output should be readable");
        assert_eq!(content, "third;\n");

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn write_statements_with_no_statements_leaves_empty_file() {
        let dir = scratch_dir("empty");
        let path = dir.join("out.sql");

        write_statements(&path, &["stale;".to_string()], false).expect("write should succeed");
        write_statements(&path, &[], false).expect("empty write should succeed");

        let content = fs::read_to_string(&path).expect("output should be readable");
        assert!(content.is_empty());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn write_statements_fails_when_parent_is_a_file() {
        let dir = scratch_dir("blocked");
        fs::create_dir_all(&dir).expect("scratch dir should be creatable");
        let blocker = dir.join("not-a-dir");
        fs::write(&blocker, "").expect("blocker file should be writable");
        let path = blocker.join("out.sql");

        let err = write_statements(&path, &["insert;".to_string()], false)
            .expect_err("writing below a regular file should fail");
        assert!(format!("{err:#}").contains(&blocker.display().to_string()));

        let _ = fs::remove_dir_all(&dir);
    }
}
