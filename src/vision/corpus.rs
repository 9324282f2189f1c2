//! Labeled corpus evaluation
//!
//! A corpus is a directory holding one sub-directory per expected state,
//! named by the state label (`blue`, `red`, `bluered`, `redblue`,
//! `undetermined`), each containing `.jpg` images. Every image is normalized,
//! classified and compared against its directory label.

use super::capture::load_normalized;
use super::overlay::render_overlay;
use crate::detector::BeaconDetector;
use crate::error::Result;
use crate::pipeline::BeaconState;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::io;
use std::path::{Path, PathBuf};

/// Extension of corpus images, compared case-insensitively
const IMAGE_EXTENSION: &str = "jpg";

/// An image with its expected state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledImage {
    pub expected: BeaconState,
    pub path: PathBuf,
}

/// Outcome for one image
#[derive(Debug, Clone, Serialize)]
pub struct CaseResult {
    pub path: PathBuf,
    pub expected: BeaconState,
    /// Detected state, `None` if the image could not be processed
    pub actual: Option<BeaconState>,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Pass/fail counts over a corpus run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvaluationSummary {
    pub passed: usize,
    pub failed: usize,
}

impl EvaluationSummary {
    /// Count one outcome
    pub fn record(&mut self, ok: bool) {
        if ok {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    /// Percentage of passing images, 0 for an empty run
    pub fn pass_rate(&self) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.passed as f64 / total as f64 * 100.0,
        }
    }
}

impl Serialize for EvaluationSummary {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("EvaluationSummary", 4)?;
        s.serialize_field("passed", &self.passed)?;
        s.serialize_field("failed", &self.failed)?;
        s.serialize_field("total", &self.total())?;
        s.serialize_field("pass_rate", &self.pass_rate())?;
        s.end()
    }
}

/// Per-image results plus their summary
#[derive(Debug, Clone, Default, Serialize)]
pub struct EvaluationReport {
    pub cases: Vec<CaseResult>,
    pub summary: EvaluationSummary,
}

impl EvaluationReport {
    /// Append a case and count it
    pub fn push(&mut self, case: CaseResult) {
        self.summary.record(case.ok);
        self.cases.push(case);
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the report as JSON
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

/// Options for a corpus run
#[derive(Debug, Clone, Default)]
pub struct EvaluationOptions {
    /// Write a debug overlay per image into this directory
    pub overlay_dir: Option<PathBuf>,
}

impl EvaluationOptions {
    /// Set the overlay output directory
    pub fn with_overlay_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.overlay_dir = Some(dir.into());
        self
    }
}

fn is_corpus_image(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(IMAGE_EXTENSION))
}

/// Find every labeled image under `root`, sorted by path.
///
/// `root` itself must be a directory. Missing label directories are skipped.
pub fn discover(root: impl AsRef<Path>) -> Result<Vec<LabeledImage>> {
    let root = root.as_ref();
    if !root.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("corpus directory {} not found", root.display()),
        )
        .into());
    }

    let mut images = Vec::new();

    for expected in BeaconState::ALL {
        let dir = root.join(expected.label());
        if !dir.is_dir() {
            log::warn!("No '{}' directory in {}", expected, root.display());
            continue;
        }

        for entry in std::fs::read_dir(&dir)? {
            let path = entry?.path();
            if is_corpus_image(&path) {
                images.push(LabeledImage { expected, path });
            }
        }
    }

    images.sort_by(|a, b| a.path.cmp(&b.path));
    log::info!("Found {} labeled images in {}", images.len(), root.display());
    Ok(images)
}

fn overlay_path(dir: &Path, case: &LabeledImage) -> PathBuf {
    let stem = case
        .path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    dir.join(format!("{}_{}.png", case.expected, stem))
}

fn evaluate_case(
    case: &LabeledImage,
    detector: &BeaconDetector,
    options: &EvaluationOptions,
) -> Result<BeaconState> {
    let thresholds = detector.thresholds();
    let image = load_normalized(&case.path, thresholds.reference_edge)?;
    let state = detector.detect(&image)?;

    if let Some(dir) = &options.overlay_dir {
        let path = overlay_path(dir, case);
        if let Err(e) = render_overlay(&image, state, thresholds).save(&path) {
            log::warn!("Failed to write overlay {}: {}", path.display(), e);
        }
    }

    Ok(state)
}

/// Classify every image and compare against its label
pub fn evaluate(
    cases: &[LabeledImage],
    detector: &BeaconDetector,
    options: &EvaluationOptions,
) -> Result<EvaluationReport> {
    if let Some(dir) = &options.overlay_dir {
        std::fs::create_dir_all(dir)?;
    }

    let mut report = EvaluationReport::default();

    for case in cases {
        let result = match evaluate_case(case, detector, options) {
            Ok(actual) => {
                let ok = actual == case.expected;
                log::info!(
                    "{}: Expected: {}, Actual: {}, OK: {}",
                    case.path.display(),
                    case.expected,
                    actual,
                    ok
                );
                CaseResult {
                    path: case.path.clone(),
                    expected: case.expected,
                    actual: Some(actual),
                    ok,
                    error: None,
                }
            }
            Err(e) => {
                log::warn!("{}: {}", case.path.display(), e);
                CaseResult {
                    path: case.path.clone(),
                    expected: case.expected,
                    actual: None,
                    ok: false,
                    error: Some(e.to_string()),
                }
            }
        };
        report.push(result);
    }

    let summary = report.summary;
    log::info!(
        "Pass: {}/{}. {:.1}%",
        summary.passed,
        summary.total(),
        summary.pass_rate()
    );
    Ok(report)
}

/// Discover and evaluate a corpus directory
pub fn evaluate_dir(
    root: impl AsRef<Path>,
    detector: &BeaconDetector,
    options: &EvaluationOptions,
) -> Result<EvaluationReport> {
    let cases = discover(root)?;
    evaluate(&cases, detector, options)
}
