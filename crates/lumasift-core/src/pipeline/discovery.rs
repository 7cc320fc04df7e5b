//! File discovery for finding images under the source root.

use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::config::DiscoveryConfig;
use crate::error::{PipelineError, PipelineResult};
use crate::types::Candidate;

/// Discovers image files in a directory tree.
pub struct FileDiscovery {
    config: DiscoveryConfig,
    excluded: Option<PathBuf>,
}

impl FileDiscovery {
    /// Create a new file discovery instance.
    pub fn new(config: DiscoveryConfig) -> Self {
        Self {
            config,
            excluded: None,
        }
    }

    /// Never descend into `dir`, even if it lies under the source root.
    ///
    /// Used to keep the destination tree out of the walk when it is nested
    /// inside the source.
    pub fn excluding(mut self, dir: impl Into<PathBuf>) -> Self {
        self.excluded = Some(dir.into());
        self
    }

    /// Lazily enumerate supported image files under `root`.
    ///
    /// Entries are visited in file-name order within each directory.
    /// Unreadable entries are logged and skipped. A missing root, or a root
    /// that is not a directory, is an error rather than an empty walk.
    pub fn discover<'a>(
        &'a self,
        root: &Path,
    ) -> PipelineResult<impl Iterator<Item = Candidate> + 'a> {
        if !root.exists() {
            return Err(PipelineError::SourceNotFound(root.to_path_buf()));
        }
        if !root.is_dir() {
            return Err(PipelineError::SourceNotADirectory(root.to_path_buf()));
        }

        let root = root.to_path_buf();
        let excluded = self.excluded_under(&root);
        if let Some(dir) = &excluded {
            tracing::debug!("Excluding {:?} from discovery", dir);
        }

        let walker = WalkDir::new(&root)
            .follow_links(self.config.follow_links)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |entry| !is_excluded(entry, excluded.as_deref()));

        Ok(walker
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry: {e}");
                    None
                }
            })
            .filter(move |entry| entry.path().is_file() && self.is_supported(entry.path()))
            .filter_map(move |entry| {
                let relative = entry.path().strip_prefix(&root).ok()?.to_path_buf();
                Some(Candidate {
                    path: entry.into_path(),
                    relative,
                })
            }))
    }

    /// Check if a file has a supported extension.
    pub fn is_supported(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                let ext_lower = ext.to_lowercase();
                self.config
                    .supported_formats
                    .iter()
                    .any(|fmt| fmt.to_lowercase() == ext_lower)
            })
            .unwrap_or(false)
    }

    /// Map the excluded directory onto the walk's path space, if it lies under `root`.
    fn excluded_under(&self, root: &Path) -> Option<PathBuf> {
        let excluded = self.excluded.as_ref()?.canonicalize().ok()?;
        let canonical_root = root.canonicalize().ok()?;
        let relative = excluded.strip_prefix(&canonical_root).ok()?;
        if relative.as_os_str().is_empty() {
            return None;
        }
        Some(root.join(relative))
    }
}

fn is_excluded(entry: &DirEntry, excluded: Option<&Path>) -> bool {
    match excluded {
        Some(dir) => entry.file_type().is_dir() && entry.path() == dir,
        None => false,
    }
}
