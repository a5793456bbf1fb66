// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, Write};
use std::path::Path;

/// Check that the export target can be created or overwritten.
///
/// A missing file or `force` is fine; otherwise `confirm` decides.
pub(crate) fn ensure_writable<F>(path: &Path, force: bool, confirm: F) -> AppResult<()>
where
    F: FnOnce() -> io::Result<bool>,
{
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    if confirm()? {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(format!(
            "cancelled, '{}' not overwritten (use --force)",
            path.display()
        )))
    }
}

/// Interactive y/N prompt on stdin; anything but yes declines.
pub(crate) fn ask_overwrite() -> io::Result<bool> {
    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}
