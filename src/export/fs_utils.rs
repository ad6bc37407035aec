use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Check whether an export may create or replace `path`, asking on stdin
/// when the file exists and `force` is off.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    ensure_writable_with(path, force, io::stdin().lock())
}

fn ensure_writable_with<R: BufRead>(path: &Path, force: bool, mut input: R) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));
    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    if matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes") {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(format!(
            "export cancelled: '{}' not overwritten",
            path.display()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn existing(name: &str) -> std::path::PathBuf {
        let p = std::env::temp_dir().join(format!("{}_catlog_fs_utils.csv", name));
        fs::write(&p, "x").unwrap();
        p
    }

    #[test]
    fn missing_file_needs_no_answer() {
        let p = std::env::temp_dir().join("catlog_fs_utils_missing.csv");
        let _ = fs::remove_file(&p);
        assert!(ensure_writable_with(&p, false, &b""[..]).is_ok());
    }

    #[test]
    fn existing_file_needs_yes_or_force() {
        let p = existing("answer");
        assert!(ensure_writable_with(&p, false, &b"Y\n"[..]).is_ok());
        assert!(ensure_writable_with(&p, true, &b""[..]).is_ok());
        assert!(matches!(
            ensure_writable_with(&p, false, &b"\n"[..]),
            Err(AppError::Export(_))
        ));
    }
}
