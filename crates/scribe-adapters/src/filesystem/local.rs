//! Local filesystem adapter using std::fs.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use scribe_core::{
    application::{ApplicationError, ports::Filesystem},
    error::ScribeResult,
};
use tracing::trace;

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn ensure_dir(&self, path: &Path) -> ScribeResult<()> {
        match fs::create_dir_all(path) {
            Ok(()) => Ok(()),
            // Lost a race with another creator; the directory is there.
            Err(_) if path.is_dir() => Ok(()),
            Err(e) => Err(ApplicationError::directory_creation(path, &e).into()),
        }
    }

    fn create_new_file(&self, path: &Path, content: &str) -> ScribeResult<()> {
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|e| ApplicationError::write(path, &e))?;
        trace!(path = %path.display(), "File opened");

        file.write_all(content.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|e| ApplicationError::write(path, &e))?;

        Ok(())
    }
}
