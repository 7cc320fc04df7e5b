//! Pipeline orchestration: discover, evaluate, select, copy.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{PipelineError, PipelineResult, Result};
use crate::types::{Candidate, FileOutcome, RunStats};

use super::brightness::BrightnessEvaluator;
use super::copy::Copier;
use super::discovery::FileDiscovery;
use super::select::Selector;

/// Runs the brightness selection pipeline over one source tree.
pub struct ImageProcessor {
    source: PathBuf,
    discovery: FileDiscovery,
    evaluator: BrightnessEvaluator,
    selector: Selector,
    copier: Copier,
}

impl ImageProcessor {
    /// Create a processor for the given configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            source: config.source.clone(),
            discovery: FileDiscovery::new(config.discovery.clone())
                .excluding(config.destination.clone()),
            evaluator: BrightnessEvaluator::new(),
            selector: Selector::new(&config.selection),
            copier: Copier::new(config.destination.clone(), config.copy.clone()),
        }
    }

    /// The destination root.
    pub fn destination(&self) -> &Path {
        self.copier.destination()
    }

    /// Whether copies are only simulated.
    pub fn is_dry_run(&self) -> bool {
        self.copier.is_dry_run()
    }

    /// Check the source root and create the destination root.
    ///
    /// The source is checked first so a typo in it never leaves an empty
    /// destination directory behind. A destination that resolves to the
    /// source itself is refused, however it is spelled.
    pub fn prepare(&self) -> PipelineResult<()> {
        if !self.source.exists() {
            return Err(PipelineError::SourceNotFound(self.source.clone()));
        }
        if !self.source.is_dir() {
            return Err(PipelineError::SourceNotADirectory(self.source.clone()));
        }
        self.copier.ensure_root()?;

        let destination = self.copier.destination();
        if let (Ok(src), Ok(dst)) = (self.source.canonicalize(), destination.canonicalize()) {
            if src == dst {
                return Err(PipelineError::DestinationIsSource {
                    source_dir: self.source.clone(),
                    destination: destination.to_path_buf(),
                });
            }
        }
        Ok(())
    }

    /// Lazily enumerate candidates under the source root.
    pub fn discover(&self) -> PipelineResult<impl Iterator<Item = Candidate> + '_> {
        self.discovery.discover(&self.source)
    }

    /// Evaluate one candidate and copy it if selected.
    ///
    /// Decode failures come back as a skipped outcome; filesystem failures
    /// while copying are returned as errors and should end the run.
    pub fn process(&self, candidate: &Candidate) -> PipelineResult<FileOutcome> {
        tracing::debug!("Processing: {:?}", candidate.path);

        let brightness = match self.evaluator.evaluate(&candidate.path) {
            Ok(value) => value,
            Err(e) if e.is_recoverable() => {
                return Ok(FileOutcome::skipped(candidate, e.reason()));
            }
            Err(e) => return Err(e),
        };

        let selected = self.selector.is_selected(brightness);
        let mut outcome = FileOutcome::measured(candidate, brightness, selected);
        tracing::debug!(
            "{:?}: brightness {:.2}, {}",
            candidate.relative,
            brightness,
            if selected { "selected" } else { "not selected" }
        );

        if selected {
            outcome.copied_to = Some(self.copier.copy(candidate)?);
        }
        Ok(outcome)
    }

    /// Run the whole pipeline, handing each outcome to `on_outcome`.
    ///
    /// Stops at the first fatal error; files already copied stay in place.
    pub fn run<F>(&self, on_outcome: F) -> Result<RunStats>
    where
        F: FnMut(&FileOutcome) -> Result<()>,
    {
        self.prepare()?;

        let mut stats = RunStats::default();
        self.process_all(&mut stats, on_outcome)?;

        tracing::info!(
            "Processed {} files, selected {}, skipped {}",
            stats.total,
            stats.selected,
            stats.skipped
        );
        Ok(stats)
    }

    /// Process every candidate of an already prepared run.
    ///
    /// `stats` is updated before `on_outcome` sees each outcome, so it holds
    /// the partial counts when a fatal error ends the walk early.
    pub fn process_all<F>(&self, stats: &mut RunStats, mut on_outcome: F) -> Result<()>
    where
        F: FnMut(&FileOutcome) -> Result<()>,
    {
        for candidate in self.discover()? {
            let outcome = self.process(&candidate)?;
            stats.record(&outcome);
            on_outcome(&outcome)?;
        }
        Ok(())
    }
}
