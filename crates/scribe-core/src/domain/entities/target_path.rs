use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::Slug;

/// Directory used when the caller names none.
pub const DEFAULT_ARTICLES_DIR: &str = "articles";

/// Where an article lands: `<articles_dir>/<slug>.md`.
///
/// Invariant: `dir` must exist before the file is written. The scaffolder
/// ensures it; this type only composes the path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetPath {
    dir: PathBuf,
    slug: Slug,
}

impl TargetPath {
    pub fn new(dir: impl Into<PathBuf>, slug: Slug) -> Self {
        Self {
            dir: dir.into(),
            slug,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn slug(&self) -> &Slug {
        &self.slug
    }

    pub fn file_path(&self) -> PathBuf {
        self.dir.join(self.slug.file_name())
    }
}

impl fmt::Display for TargetPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.file_path().display())
    }
}
