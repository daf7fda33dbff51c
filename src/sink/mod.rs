
use crate::splitter::SplitError;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Destination for completed prefix groups
///
/// The splitter writes through this seam so the partition pass can be
/// exercised against an in-memory sink in tests.
pub trait RangeSink {
    /// Persist the body of one completed group under its prefix.
    ///
    /// Called once per contiguous run of a prefix; a later run of the
    /// same prefix (unsorted input) replaces the earlier content.
    fn flush_range(&mut self, prefix: &str, body: &str) -> Result<(), SplitError>;
}

/// Writes each group to a file named by its prefix inside one directory
pub struct DirSink {
    root: PathBuf,
}

impl DirSink {
    /// Create the output directory if absent and a sink rooted at it.
    ///
    /// An already-existing directory is not an error.
    pub fn create(root: impl Into<PathBuf>) -> Result<Self, SplitError> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|source| SplitError::CreateDirFailed {
            path: root.clone(),
            source,
        })?;

        Ok(Self { root })
    }

    /// Resolve the range file path for a prefix, rejecting prefixes that
    /// cannot safely name a file inside the root.
    ///
    /// The prefix comes from untrusted corpus data and becomes a file
    /// name; anything that resolves outside the output directory
    /// (separators, parent components, empty names) is corrupt input,
    /// not a valid partition key.
    fn range_path(&self, prefix: &str) -> Result<PathBuf, SplitError> {
        let mut components = Path::new(prefix).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(name)), None) if name.to_str() == Some(prefix) => {
                Ok(self.root.join(prefix))
            }
            _ => Err(SplitError::UnsafePrefix(prefix.to_string())),
        }
    }
}

impl RangeSink for DirSink {
    fn flush_range(&mut self, prefix: &str, body: &str) -> Result<(), SplitError> {
        let path = self.range_path(prefix)?;
        fs::write(&path, body).map_err(|source| SplitError::WriteFailed { path, source })
    }
}
