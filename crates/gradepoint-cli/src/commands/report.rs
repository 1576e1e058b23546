//! The `gradepoint report` command.

use std::path::PathBuf;

use anyhow::Result;

use gradepoint_core::batch::read_batch_file;
use gradepoint_core::config::load_config_from;
use gradepoint_report::batch::{render_banner, render_listing};

/// Batch failures come back as a [`gradepoint_core::error::BatchError`]
/// inside the `anyhow::Error`; `main` renders those with the batch hints.
pub fn execute(file: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let path = match file {
        Some(path) => path,
        None => load_config_from(config_path.as_deref())?.batch_file,
    };

    print!("{}", render_banner(&path));

    let report = read_batch_file(&path).inspect_err(|e| {
        tracing::debug!(error = ?e, "batch report failed");
    })?;
    print!("{}", render_listing(&report));
    Ok(())
}
