//! Writes fetched templates into the project tree.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument, warn};

use crate::errors::WriteError;

/// Writes files beneath a fixed project root.
#[derive(Debug, Clone)]
pub struct ProjectWriter {
    root: PathBuf,
}

impl ProjectWriter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute target for a destination relative to the root.
    pub fn target_path(&self, dest_path: &str) -> PathBuf {
        self.root.join(dest_path)
    }

    /// Replace the file at `dest_path` with `content`, creating parent
    /// directories as needed. Returns the confirmation message.
    ///
    /// Directories created here are left in place if the write itself fails.
    #[instrument(skip(self, content), fields(bytes = content.len()))]
    pub fn write(&self, dest_path: &str, content: &str) -> Result<String, WriteError> {
        let target = self.target_path(dest_path);
        debug!(path = %target.display(), "target path");

        log_existing(&target, content);

        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| WriteError::from_io(dest_path, e))?;
        }
        fs::write(&target, content).map_err(|e| WriteError::from_io(dest_path, e))?;

        verify_written(&target, content);
        Ok(format!("Updated: {}", dest_path))
    }
}

/// Debug-level comparison of the current file against the incoming content.
fn log_existing(target: &Path, content: &str) {
    if !tracing::enabled!(tracing::Level::DEBUG) {
        return;
    }
    match fs::read(target) {
        Ok(existing) => debug!(
            existing_bytes = existing.len(),
            new_bytes = content.len(),
            differs = existing != content.as_bytes(),
            "file exists"
        ),
        Err(_) => debug!("new file will be created"),
    }
}

/// Read the file back and report whether it matches what was written.
fn verify_written(target: &Path, content: &str) {
    if !tracing::enabled!(tracing::Level::DEBUG) {
        return;
    }
    match fs::read(target) {
        Ok(written) if written == content.as_bytes() => {
            debug!(bytes = written.len(), "write verified")
        }
        Ok(written) => warn!(
            expected = content.len(),
            actual = written.len(),
            "write verification mismatch"
        ),
        Err(e) => warn!(error = %e, "write verification failed"),
    }
}
