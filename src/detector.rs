//! Beacon detection entry point
//!
//! Precondition: the classification bounds in [`Thresholds`] are pixel counts
//! calibrated for an image whose longest edge is `thresholds.reference_edge`
//! (1000 by default). Callers should normalize images to that edge first, as
//! `vision::normalize` does, or rescale the bounds with
//! [`Thresholds::with_reference_edge`].

use crate::config::Thresholds;
use crate::error::{BeaconError, Result};
use crate::frame::PixelSource;
use crate::pipeline::{aggregate, classify_tally, BeaconState, ColumnTally};

/// Result of analyzing one image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    /// Classified beacon state
    pub state: BeaconState,
    /// Column counts as aggregated, before any ordering step
    pub tally: ColumnTally,
}

/// Detect the beacon state of an image with the given thresholds
pub fn detect<S: PixelSource + Sync + ?Sized>(image: &S, thresholds: &Thresholds) -> Result<BeaconState> {
    BeaconDetector::new(*thresholds).detect(image)
}

/// Beacon detector holding an immutable threshold set.
///
/// Nothing is retained between calls, so one detector can be shared freely
/// across threads and images.
#[derive(Debug, Clone, Default)]
pub struct BeaconDetector {
    thresholds: Thresholds,
}

impl BeaconDetector {
    /// Create a detector with the given thresholds
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    /// Thresholds in use
    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Classify an image
    pub fn detect<S: PixelSource + Sync + ?Sized>(&self, image: &S) -> Result<BeaconState> {
        self.analyze(image).map(|detection| detection.state)
    }

    /// Classify an image and keep its column counts
    pub fn analyze<S: PixelSource + Sync + ?Sized>(&self, image: &S) -> Result<Detection> {
        let (width, height) = (image.width(), image.height());
        if width == 0 || height == 0 {
            return Err(BeaconError::empty_image(width, height));
        }

        let longest = width.max(height);
        if longest != self.thresholds.reference_edge {
            log::debug!(
                "Image longest edge {} differs from reference edge {}; classification bounds may not fit",
                longest,
                self.thresholds.reference_edge
            );
        }

        let tally = aggregate(image, &self.thresholds);
        let state = classify_tally(tally.clone(), &self.thresholds.classify)?;
        log::debug!("Detected {} in {}x{} image", state, width, height);

        Ok(Detection { state, tally })
    }
}
