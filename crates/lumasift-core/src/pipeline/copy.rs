//! Copying selected files into the mirrored destination tree.

use std::fs::{self, File, FileTimes};
use std::io;
use std::path::{Path, PathBuf};

use crate::config::CopyConfig;
use crate::error::{PipelineError, PipelineResult};
use crate::types::Candidate;

/// Copies candidates to `destination / candidate.relative`.
pub struct Copier {
    destination: PathBuf,
    config: CopyConfig,
}

impl Copier {
    /// Create a copier rooted at `destination`.
    pub fn new(destination: impl Into<PathBuf>, config: CopyConfig) -> Self {
        Self {
            destination: destination.into(),
            config,
        }
    }

    /// The destination root.
    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Whether copies are only simulated.
    pub fn is_dry_run(&self) -> bool {
        self.config.dry_run
    }

    /// Where `candidate` lands in the destination tree.
    pub fn target_for(&self, candidate: &Candidate) -> PathBuf {
        self.destination.join(&candidate.relative)
    }

    /// Create the destination root. A no-op in dry-run mode.
    pub fn ensure_root(&self) -> PipelineResult<()> {
        if self.config.dry_run {
            return Ok(());
        }
        create_dir(&self.destination)
    }

    /// Copy one candidate, creating parent directories as needed.
    ///
    /// Existing files at the target are overwritten. Returns the target path;
    /// in dry-run mode nothing is written.
    pub fn copy(&self, candidate: &Candidate) -> PipelineResult<PathBuf> {
        let target = self.target_for(candidate);
        if self.config.dry_run {
            tracing::debug!("Dry run: would copy {:?} -> {:?}", candidate.path, target);
            return Ok(target);
        }

        if let Some(parent) = target.parent() {
            create_dir(parent)?;
        }

        let copy_err = |source: io::Error| PipelineError::Copy {
            from: candidate.path.clone(),
            to: target.clone(),
            source,
        };

        // fs::copy truncates the target before reading the source
        if is_same_file(&candidate.path, &target) {
            return Err(copy_err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "source and target are the same file",
            )));
        }

        fs::copy(&candidate.path, &target).map_err(copy_err)?;
        if self.config.preserve_timestamps {
            copy_times(&candidate.path, &target).map_err(copy_err)?;
        }

        tracing::debug!("Copied {:?} -> {:?}", candidate.path, target);
        Ok(target)
    }
}

fn create_dir(path: &Path) -> PipelineResult<()> {
    fs::create_dir_all(path).map_err(|source| PipelineError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

/// True when both paths resolve to one existing file.
fn is_same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Give `to` the access and modification times of `from`.
fn copy_times(from: &Path, to: &Path) -> io::Result<()> {
    let meta = fs::metadata(from)?;
    let mut times = FileTimes::new();
    if let Ok(accessed) = meta.accessed() {
        times = times.set_accessed(accessed);
    }
    if let Ok(modified) = meta.modified() {
        times = times.set_modified(modified);
    }
    // fs::copy carries permissions over, so the copy may be read-only
    File::open(to)?.set_times(times)
}
