//! Batch processing: sequential walk with progress, warnings, report, and summary.

use std::io::{self, Write};
use std::path::Path;
use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};
use lumasift_core::{FileOutcome, ImageProcessor, PipelineError, ReportWriter, RunStats};

use super::SiftArgs;

/// Process every candidate under the source root, one at a time.
pub fn process_batch(processor: &ImageProcessor, args: &SiftArgs) -> anyhow::Result<()> {
    process_batch_to(processor, args, &mut io::stdout().lock())
}

/// Process the batch, writing the summary lines to `out`.
///
/// The summary is written whether the run completes or a fatal error stops
/// it early. A fatal run error is returned first, then any report error.
fn process_batch_to<W: Write>(
    processor: &ImageProcessor,
    args: &SiftArgs,
    out: &mut W,
) -> anyhow::Result<()> {
    let mut report = match &args.report {
        Some(path) => Some(ReportWriter::create(path, args.report_format.into())?),
        None => None,
    };

    let progress = create_progress_bar(args.no_progress);
    let start_time = Instant::now();
    let mut stats = RunStats::default();

    let result = processor.process_all(&mut stats, |outcome| {
        progress.set_message(outcome.relative_path.display().to_string());
        if let Some(line) = warning_line(outcome) {
            progress.suspend(|| eprintln!("{line}"));
        }
        if let Some(writer) = report.as_mut() {
            writer.record(outcome)?;
        }
        progress.inc(1);
        Ok(())
    });

    progress.finish_and_clear();

    let report_result = match (report, &args.report) {
        (Some(writer), Some(path)) => {
            let written = writer.records_written();
            match writer.finish() {
                Ok(_) => {
                    tracing::info!(
                        "Report ({}, {written} records) written to {:?}",
                        args.report_format,
                        path
                    );
                    Ok(())
                }
                Err(e) => Err(PipelineError::Report {
                    path: path.clone(),
                    message: e.to_string(),
                }),
            }
        }
        _ => Ok(()),
    };

    let elapsed = start_time.elapsed();
    let rate = if elapsed.as_secs_f64() > 0.0 {
        stats.total as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    };
    tracing::info!(
        "Finished in {:.1}s ({:.1} img/sec, {} skipped)",
        elapsed.as_secs_f64(),
        rate,
        stats.skipped
    );

    for line in summary_lines(&stats, processor.destination(), processor.is_dry_run()) {
        writeln!(out, "{line}")?;
    }

    result?;
    report_result?;
    Ok(())
}

/// The stderr line for a file that could not be decoded.
fn warning_line(outcome: &FileOutcome) -> Option<String> {
    outcome
        .error
        .as_ref()
        .map(|err| format!("[WARN] Could not read {}: {}", outcome.path.display(), err))
}

/// The two summary lines printed to stdout.
fn summary_lines(stats: &RunStats, destination: &Path, dry_run: bool) -> [String; 2] {
    let verb = if dry_run { "Would copy" } else { "Copied" };
    [
        format!("Processed {} files", stats.total),
        format!("{verb} {} files to {}", stats.selected, destination.display()),
    ]
}

/// Create a spinner for the walk; the total is unknown up front.
fn create_progress_bar(hidden: bool) -> ProgressBar {
    if hidden {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .template("{spinner:.green} [{elapsed_precise}] {pos} files {wide_msg}")
    {
        pb.set_style(style);
    }
    pb.set_message("starting...");
    pb
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, ImageFormat, Luma};
    use lumasift_core::Config;
    use std::path::PathBuf;

    fn write_png(path: &Path, value: u8) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        GrayImage::from_pixel(8, 8, Luma([value]))
            .save_with_format(path, ImageFormat::Png)
            .unwrap();
    }

    fn quiet_args(report: Option<PathBuf>) -> SiftArgs {
        SiftArgs {
            report,
            no_progress: true,
            ..SiftArgs::default()
        }
    }

    #[test]
    fn summary_lines_match_expected_text() {
        let stats = RunStats {
            total: 2,
            selected: 1,
            skipped: 0,
        };
        let lines = summary_lines(&stats, Path::new("out"), false);
        assert_eq!(lines[0], "Processed 2 files");
        assert_eq!(lines[1], "Copied 1 files to out");

        let dry = summary_lines(&stats, Path::new("out"), true);
        assert_eq!(dry[1], "Would copy 1 files to out");
    }

    #[test]
    fn warning_line_only_for_skipped_files() {
        let candidate = lumasift_core::Candidate {
            path: PathBuf::from("/src/bad.png"),
            relative: PathBuf::from("bad.png"),
        };
        let skipped = FileOutcome::skipped(&candidate, "File is empty");
        assert_eq!(
            warning_line(&skipped).unwrap(),
            "[WARN] Could not read /src/bad.png: File is empty"
        );

        let measured = FileOutcome::measured(&candidate, 10.0, false);
        assert!(warning_line(&measured).is_none());
    }

    fn run_captured(processor: &ImageProcessor, args: &SiftArgs) -> (anyhow::Result<()>, String) {
        let mut out = Vec::new();
        let result = process_batch_to(processor, args, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn batch_copies_and_writes_report() {
        let src = tempfile::tempdir().unwrap();
        let dst = tempfile::tempdir().unwrap();
        let report_path = dst.path().join("report.jsonl");
        write_png(&src.path().join("bright.png"), 200);
        write_png(&src.path().join("dark.png"), 50);
        std::fs::write(src.path().join("bad.png"), b"").unwrap();

        let config = Config::new(src.path(), dst.path().join("out"), 100.0);
        let processor = ImageProcessor::new(&config);
        processor.prepare().unwrap();

        let (result, stdout) = run_captured(&processor, &quiet_args(Some(report_path.clone())));
        result.unwrap();
        assert_eq!(
            stdout,
            format!(
                "Processed 3 files\nCopied 1 files to {}\n",
                dst.path().join("out").display()
            )
        );

        assert!(dst.path().join("out/bright.png").exists());
        assert!(!dst.path().join("out/dark.png").exists());
        assert!(!dst.path().join("out/bad.png").exists());

        let report = std::fs::read_to_string(&report_path).unwrap();
        let records: Vec<FileOutcome> = report
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(records.len(), 3);
        assert_eq!(records.iter().filter(|r| r.selected).count(), 1);
        assert_eq!(records.iter().filter(|r| r.is_skipped()).count(), 1);
    }

    #[test]
    fn batch_returns_fatal_copy_error() {
        let src = tempfile::tempdir().unwrap();
        let dst = tempfile::tempdir().unwrap();
        write_png(&src.path().join("a/x.png"), 200);
        // A file where the "a" directory needs to be created
        std::fs::write(dst.path().join("a"), b"blocker").unwrap();

        let config = Config::new(src.path(), dst.path(), 100.0);
        let processor = ImageProcessor::new(&config);

        let (result, stdout) = run_captured(&processor, &quiet_args(None));
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to create directory"));
        assert!(stdout.starts_with("Processed 0 files\n"));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn batch_prints_summary_when_report_cannot_be_flushed() {
        let src = tempfile::tempdir().unwrap();
        let dst = tempfile::tempdir().unwrap();
        write_png(&src.path().join("bright.png"), 200);

        let config = Config::new(src.path(), dst.path(), 100.0);
        let processor = ImageProcessor::new(&config);
        processor.prepare().unwrap();

        // Writes to /dev/full fail with ENOSPC once the buffer is flushed
        let (result, stdout) = run_captured(&processor, &quiet_args(Some("/dev/full".into())));

        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to write report"));
        assert!(stdout.starts_with("Processed 1 files\n"));
        assert!(dst.path().join("bright.png").exists());
    }
}
