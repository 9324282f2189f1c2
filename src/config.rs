//! Threshold configuration for beacon detection
//!
//! Every field has a calibrated default and may be overridden individually,
//! either programmatically through the `with_*` builders or from a TOML file
//! in which any subset of keys is present.
//!
//! The classification bounds (`main`, `other`) are pixel counts sized for an
//! image whose longest edge is [`NOMINAL_EDGE`]. Images must be normalized to
//! that edge before detection for the defaults to be meaningful; use
//! [`ClassifyBounds::for_reference_edge`] when working at another size.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Longest image edge the default classification bounds are calibrated for
pub const NOMINAL_EDGE: u32 = 1000;

/// Fraction of the reference edge a color must exceed to count as present
const MAIN_FRACTION: f64 = 0.2;

/// Fraction of the reference edge below which a color is treated as noise
const OTHER_FRACTION: f64 = 0.05;

/// Bounds of the blue pixel test: `r < r_max && g < g_max && b > b_min`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlueBounds {
    pub r_max: u8,
    pub g_max: u8,
    pub b_min: u8,
}

impl Default for BlueBounds {
    fn default() -> Self {
        Self {
            r_max: 85,
            g_max: 255,
            b_min: 200,
        }
    }
}

/// Bounds of the red pixel test: `r > r_min && g < g_max && b < b_max`
///
/// Beacon "red" is really a light pink with a strong blue component, so
/// `b_max` is loose while `r_min` is strict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedBounds {
    pub r_min: u8,
    pub g_max: u8,
    pub b_max: u8,
}

impl Default for RedBounds {
    fn default() -> Self {
        Self {
            r_min: 210,
            g_max: 150,
            b_max: 240,
        }
    }
}

/// Pixel-count bounds used by the image-level decision
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifyBounds {
    /// A color with more hits than this is definitively present
    pub main: f64,
    /// A color with at most this many hits is treated as absent
    pub other: f64,
}

impl ClassifyBounds {
    /// Bounds proportional to an image whose longest edge is `edge` pixels
    pub fn for_reference_edge(edge: u32) -> Self {
        let edge = f64::from(edge);
        Self {
            main: edge * MAIN_FRACTION,
            other: edge * OTHER_FRACTION,
        }
    }
}

impl Default for ClassifyBounds {
    fn default() -> Self {
        Self::for_reference_edge(NOMINAL_EDGE)
    }
}

/// Complete threshold configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    pub blue: BlueBounds,
    pub red: RedBounds,
    pub classify: ClassifyBounds,
    /// Longest image edge the classification bounds assume
    pub reference_edge: u32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            blue: BlueBounds::default(),
            red: RedBounds::default(),
            classify: ClassifyBounds::default(),
            reference_edge: NOMINAL_EDGE,
        }
    }
}

impl Thresholds {
    /// Parse thresholds from TOML; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load thresholds from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let thresholds = Self::from_toml_str(&content)?;
        log::info!("Loaded thresholds from {}", path.display());
        Ok(thresholds)
    }

    /// Serialize to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Set the blue pixel test bounds
    pub fn with_blue(mut self, r_max: u8, g_max: u8, b_min: u8) -> Self {
        self.blue = BlueBounds { r_max, g_max, b_min };
        self
    }

    /// Set the red pixel test bounds
    pub fn with_red(mut self, r_min: u8, g_max: u8, b_max: u8) -> Self {
        self.red = RedBounds { r_min, g_max, b_max };
        self
    }

    /// Set the classification bounds directly
    pub fn with_classify(mut self, main: f64, other: f64) -> Self {
        self.classify = ClassifyBounds { main, other };
        self
    }

    /// Rescale the classification bounds for another reference edge
    pub fn with_reference_edge(mut self, edge: u32) -> Self {
        self.reference_edge = edge;
        self.classify = ClassifyBounds::for_reference_edge(edge);
        self
    }
}
