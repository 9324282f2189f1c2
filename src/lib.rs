//! Beacon Detector
//!
//! Classifies the lit state of a two-lamp competition beacon from a single
//! photograph: blue, red, blue-then-red, red-then-blue, or undetermined.
//!
//! Pixels are thresholded into red and blue, counted per image column, and
//! the totals decide between a single color, no beacon, or a two-color beacon
//! whose left-to-right order comes from the longest run of each color.
//!
//! ```
//! use beacon_detector::{detect, BeaconState, Frame, Thresholds};
//!
//! let frame = Frame::from_fn(10, 1, |x, _| if x < 5 { [255, 0, 0] } else { [0, 0, 255] });
//! let thresholds = Thresholds::default().with_classify(2.0, 0.5);
//! assert_eq!(detect(&frame, &thresholds).unwrap(), BeaconState::RedBlue);
//! ```

pub mod config;
pub mod detector;
pub mod error;
pub mod frame;
pub mod pipeline;

#[cfg(feature = "vision")]
pub mod vision;

// Re-export commonly used types
pub use config::{BlueBounds, ClassifyBounds, RedBounds, Thresholds, NOMINAL_EDGE};
pub use pipeline::{BeaconState, ColumnTally, PixelClass, Streak};
pub use detector::{detect, BeaconDetector, Detection};
pub use error::{BeaconError, Result};
pub use frame::{Frame, PixelSource};
