//! CLI output formatting.
//!
//! Each image is shown by its position in the sorted source list, its file
//! name and the size change; failures get an indented reason line.
//!
//! ```text
//! Reducing 3 images (PAR 1: width 50, keep aspect)
//! 001/003 a.png 100x50 → thumbnail0.png 50x25
//! 003/003 c.JPEG 640x480 → thumbnail2.png 50x37
//! 002/003 b.jpg
//!     Skipped: Failed to decode /photos/b.jpg: ...
//!
//! Generated 2 thumbnails, 1 skipped
//! ```
//!
//! Lines for individual images appear in completion order. Format functions
//! are pure and return `Vec<String>`; `print_*` wrappers write to stdout.

use crate::process::{ProcessEvent, ProcessResult};
use std::path::Path;

/// Format a 1-based position as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

/// Format a single process progress event as display lines.
pub fn format_process_event(event: &ProcessEvent) -> Vec<String> {
    match event {
        ProcessEvent::Started { total, policy } => {
            vec![format!(
                "Reducing {} (PAR {}: {})",
                plural(*total, "image"),
                policy.code(),
                policy
            )]
        }
        ProcessEvent::ImageProcessed {
            position,
            total,
            source,
            output,
            thumbnail,
        } => vec![format!(
            "{}/{} {} {} \u{2192} {} {}",
            format_index(*position),
            format_index(*total),
            file_name(source),
            thumbnail.source,
            file_name(output),
            thumbnail.target
        )],
        ProcessEvent::ImageSkipped {
            position,
            total,
            source,
            reason,
        } => vec![
            format!(
                "{}/{} {}",
                format_index(*position),
                format_index(*total),
                file_name(source)
            ),
            format!("{}Skipped: {}", indent(1), reason),
        ],
    }
}

/// Format the closing summary for a batch.
pub fn format_summary(result: &ProcessResult) -> Vec<String> {
    if result.outcomes.is_empty() {
        return vec!["No images found".to_string()];
    }
    let generated = plural(result.generated(), "thumbnail");
    match result.skipped() {
        0 => vec![format!("Generated {generated}")],
        skipped => vec![format!("Generated {generated}, {skipped} skipped")],
    }
}

pub fn print_summary(result: &ProcessResult) {
    println!();
    for line in format_summary(result) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::{BackendError, Dimensions, GeneratedThumbnail, SizingPolicy};
    use crate::process::{ImageOutcome, ThumbnailJob};
    use std::path::PathBuf;

    fn job(index: usize) -> ThumbnailJob {
        ThumbnailJob {
            index,
            source: PathBuf::from(format!("/in/{index}.png")),
            output: PathBuf::from(format!("/out/thumbnail{index}.png")),
        }
    }

    fn generated(index: usize) -> ImageOutcome {
        ImageOutcome::Generated {
            job: job(index),
            thumbnail: GeneratedThumbnail {
                source: Dimensions::new(10, 10),
                target: Dimensions::new(5, 5),
            },
        }
    }

    fn skipped(index: usize) -> ImageOutcome {
        ImageOutcome::Skipped {
            job: job(index),
            error: BackendError::EmptyImage(PathBuf::from("/in/x.png")),
        }
    }

    #[test]
    fn format_index_pads() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(1234), "1234");
    }

    #[test]
    fn indent_levels() {
        assert_eq!(indent(0), "");
        assert_eq!(indent(2), "        ");
    }

    #[test]
    fn plural_forms() {
        assert_eq!(plural(1, "image"), "1 image");
        assert_eq!(plural(0, "image"), "0 images");
        assert_eq!(plural(3, "thumbnail"), "3 thumbnails");
    }

    #[test]
    fn format_started() {
        let lines = format_process_event(&ProcessEvent::Started {
            total: 3,
            policy: SizingPolicy::PreserveByWidth { width: 50 },
        });
        assert_eq!(lines, vec!["Reducing 3 images (PAR 1: width 50, keep aspect)"]);

        let lines = format_process_event(&ProcessEvent::Started {
            total: 1,
            policy: SizingPolicy::ScaleFactor { factor: 2.5 },
        });
        assert_eq!(lines, vec!["Reducing 1 image (PAR 3: shrink by 2.5)"]);
    }

    #[test]
    fn format_image_processed() {
        let lines = format_process_event(&ProcessEvent::ImageProcessed {
            position: 1,
            total: 3,
            source: PathBuf::from("/photos/a.png"),
            output: PathBuf::from("/thumbs/thumbnail0.png"),
            thumbnail: GeneratedThumbnail {
                source: Dimensions::new(100, 50),
                target: Dimensions::new(50, 25),
            },
        });
        assert_eq!(
            lines,
            vec!["001/003 a.png 100x50 \u{2192} thumbnail0.png 50x25"]
        );
    }

    #[test]
    fn format_image_skipped() {
        let lines = format_process_event(&ProcessEvent::ImageSkipped {
            position: 2,
            total: 3,
            source: PathBuf::from("/photos/b.jpg"),
            reason: "Failed to decode /photos/b.jpg: bad".to_string(),
        });
        assert_eq!(
            lines,
            vec![
                "002/003 b.jpg",
                "    Skipped: Failed to decode /photos/b.jpg: bad",
            ]
        );
    }

    #[test]
    fn summary_all_generated() {
        let result = ProcessResult {
            outcomes: vec![generated(0), generated(1)],
        };
        assert_eq!(format_summary(&result), vec!["Generated 2 thumbnails"]);
    }

    #[test]
    fn summary_with_skips() {
        let result = ProcessResult {
            outcomes: vec![generated(0), skipped(1)],
        };
        assert_eq!(
            format_summary(&result),
            vec!["Generated 1 thumbnail, 1 skipped"]
        );
    }

    #[test]
    fn summary_empty() {
        assert_eq!(
            format_summary(&ProcessResult::default()),
            vec!["No images found"]
        );
    }
}
