//! Image file handling around the detector
//!
//! This module loads and normalizes image files, renders debug overlays and
//! evaluates the detector against a labeled corpus of photographs.
//!
//! # Example
//!
//! ```ignore
//! use beacon_detector::vision::{evaluate_dir, EvaluationOptions};
//! use beacon_detector::BeaconDetector;
//!
//! let detector = BeaconDetector::default();
//! let options = EvaluationOptions::default().with_overlay_dir("overlays");
//! let report = evaluate_dir("images", &detector, &options)?;
//! println!("{}/{} passed", report.summary.passed, report.summary.total());
//! ```

pub mod capture;
pub mod corpus;
pub mod overlay;

pub use capture::{load_normalized, normalize};
pub use corpus::{
    discover, evaluate, evaluate_dir, CaseResult, EvaluationOptions, EvaluationReport,
    EvaluationSummary, LabeledImage,
};
pub use overlay::{classification_mask, render_overlay, swatch_colors};
