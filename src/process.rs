//! Batch thumbnail generation.
//!
//! Takes a source directory, a destination directory and a
//! [`SizingPolicy`], and writes one PNG thumbnail per eligible source image.
//!
//! ## Steps
//!
//! 1. **Scan** the source directory ([`scan`](crate::scan::scan)), sorted.
//! 2. **Plan** one job per image; output names come from the sorted position,
//!    so they are fixed before any work starts.
//! 3. **Check** the destination exists and, unless overwriting is enabled,
//!    that no planned output is already there. Any failure here aborts the
//!    run before a single file is written.
//! 4. **Process** jobs in parallel with [rayon](https://docs.rs/rayon). Each
//!    job decodes, downsamples and encodes independently; a failing image is
//!    recorded as skipped and the rest carry on.
//!
//! ## Output Structure
//!
//! ```text
//! thumbs/
//! ├── thumbnail0.png     # from a.png
//! ├── thumbnail1.png     # from c.JPEG
//! └── ...
//! ```
//!
//! Progress is reported through an optional channel of [`ProcessEvent`]s so
//! the caller decides how (and whether) to display it.

use crate::config::RunConfig;
use crate::imaging::{
    BackendError, GeneratedThumbnail, ImageBackend, RustBackend, SizingPolicy, create_thumbnail,
};
use crate::naming::{NamingScheme, output_filename};
use crate::scan::{self, ScanError};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error("Destination directory does not exist: {}", .0.display())]
    MissingDestination(PathBuf),
    #[error("Output already exists (pass --overwrite to replace): {}", .0.display())]
    OutputExists(PathBuf),
}

/// Settings for one batch run.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessOptions {
    pub policy: SizingPolicy,
    pub prefix: String,
    pub naming: NamingScheme,
    pub overwrite: bool,
}

impl ProcessOptions {
    /// Combine a sizing policy with the output settings of a run config.
    pub fn from_config(policy: SizingPolicy, config: &RunConfig) -> Self {
        Self {
            policy,
            prefix: config.output.prefix.clone(),
            naming: config.output.naming,
            overwrite: config.output.overwrite,
        }
    }
}

/// One source image and where its thumbnail goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailJob {
    /// 0-based position in the sorted source list.
    pub index: usize,
    pub source: PathBuf,
    pub output: PathBuf,
}

/// Progress events emitted while a batch runs.
///
/// Per-image events arrive in completion order, which under parallel
/// processing is not the source order; `position` identifies the image.
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessEvent {
    Started {
        total: usize,
        policy: SizingPolicy,
    },
    ImageProcessed {
        /// 1-based position in the sorted source list.
        position: usize,
        total: usize,
        source: PathBuf,
        output: PathBuf,
        thumbnail: GeneratedThumbnail,
    },
    ImageSkipped {
        position: usize,
        total: usize,
        source: PathBuf,
        reason: String,
    },
}

/// What happened to one job.
#[derive(Debug)]
pub enum ImageOutcome {
    Generated {
        job: ThumbnailJob,
        thumbnail: GeneratedThumbnail,
    },
    Skipped {
        job: ThumbnailJob,
        error: BackendError,
    },
}

impl ImageOutcome {
    pub fn job(&self) -> &ThumbnailJob {
        match self {
            Self::Generated { job, .. } | Self::Skipped { job, .. } => job,
        }
    }
}

/// Result of a batch run; outcomes are in source order.
#[derive(Debug, Default)]
pub struct ProcessResult {
    pub outcomes: Vec<ImageOutcome>,
}

impl ProcessResult {
    pub fn generated(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, ImageOutcome::Generated { .. }))
            .count()
    }

    pub fn skipped(&self) -> usize {
        self.outcomes.len() - self.generated()
    }
}

/// Pair each source with its output path in `destination`.
///
/// The index is the position in `sources`, whether or not that image later
/// decodes.
pub fn plan_jobs(sources: &[PathBuf], destination: &Path, options: &ProcessOptions) -> Vec<ThumbnailJob> {
    sources
        .iter()
        .enumerate()
        .map(|(index, source)| ThumbnailJob {
            index,
            source: source.clone(),
            output: destination.join(output_filename(
                options.naming,
                &options.prefix,
                index,
                source,
            )),
        })
        .collect()
}

/// Fail on the first planned output that already exists.
fn check_conflicts(jobs: &[ThumbnailJob]) -> Result<(), ProcessError> {
    match jobs.iter().find(|job| job.output.exists()) {
        Some(job) => Err(ProcessError::OutputExists(job.output.clone())),
        None => Ok(()),
    }
}

pub fn process(
    source_dir: &Path,
    destination: &Path,
    options: &ProcessOptions,
    events: Option<Sender<ProcessEvent>>,
) -> Result<ProcessResult, ProcessError> {
    let backend = RustBackend::new();
    process_with_backend(&backend, source_dir, destination, options, events)
}

/// Process a directory using a specific backend (allows testing with mock).
pub fn process_with_backend(
    backend: &impl ImageBackend,
    source_dir: &Path,
    destination: &Path,
    options: &ProcessOptions,
    events: Option<Sender<ProcessEvent>>,
) -> Result<ProcessResult, ProcessError> {
    let sources = scan::scan(source_dir)?;
    run_jobs(backend, &sources, destination, options, events)
}

/// Plan, check and run jobs for an explicit list of sources.
pub fn run_jobs(
    backend: &impl ImageBackend,
    sources: &[PathBuf],
    destination: &Path,
    options: &ProcessOptions,
    events: Option<Sender<ProcessEvent>>,
) -> Result<ProcessResult, ProcessError> {
    if !destination.is_dir() {
        return Err(ProcessError::MissingDestination(destination.to_path_buf()));
    }

    let jobs = plan_jobs(sources, destination, options);
    if !options.overwrite {
        check_conflicts(&jobs)?;
    }

    let total = jobs.len();
    let emit = |event: ProcessEvent| {
        if let Some(tx) = &events {
            // A dropped receiver only means nobody is watching.
            let _ = tx.send(event);
        }
    };
    emit(ProcessEvent::Started {
        total,
        policy: options.policy,
    });

    let outcomes: Vec<ImageOutcome> = jobs
        .into_par_iter()
        .map(|job| {
            let position = job.index + 1;
            match create_thumbnail(backend, &job.source, &job.output, &options.policy) {
                Ok(thumbnail) => {
                    emit(ProcessEvent::ImageProcessed {
                        position,
                        total,
                        source: job.source.clone(),
                        output: job.output.clone(),
                        thumbnail,
                    });
                    ImageOutcome::Generated { job, thumbnail }
                }
                Err(error) => {
                    tracing::warn!(source = %job.source.display(), "skipping: {error}");
                    emit(ProcessEvent::ImageSkipped {
                        position,
                        total,
                        source: job.source.clone(),
                        reason: error.to_string(),
                    });
                    ImageOutcome::Skipped { job, error }
                }
            }
        })
        .collect();

    Ok(ProcessResult { outcomes })
}
