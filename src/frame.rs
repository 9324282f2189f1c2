//! Image buffers the detector can read from

use crate::error::{BeaconError, Result};
use crate::pipeline::pixel::Rgb;

/// Read-only access to an RGB image.
///
/// Implementors must return a sample for every `x < width()`, `y < height()`.
pub trait PixelSource {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn rgb(&self, x: u32, y: u32) -> Rgb;
}

/// An owned, row-major RGB frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u32,
    height: u32,
    /// RGB pixel data, 3 bytes per pixel
    data: Vec<u8>,
}

impl Frame {
    /// Create a frame from packed RGB bytes
    pub fn from_rgb(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * 3;
        if data.len() != expected {
            return Err(BeaconError::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self { width, height, data })
    }

    /// Create a frame from packed RGBA bytes, dropping alpha
    pub fn from_rgba(width: u32, height: u32, data: &[u8]) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(BeaconError::BufferSize {
                expected,
                actual: data.len(),
            });
        }
        let rgb = data
            .chunks_exact(4)
            .flat_map(|px| [px[0], px[1], px[2]])
            .collect();
        Ok(Self {
            width,
            height,
            data: rgb,
        })
    }

    /// Create a frame filled with one color
    pub fn filled(width: u32, height: u32, color: Rgb) -> Self {
        let data = color
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * 3)
            .collect();
        Self { width, height, data }
    }

    /// Create a frame by evaluating `f` at every pixel
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Rgb) -> Self {
        let mut data = Vec::with_capacity(width as usize * height as usize * 3);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&f(x, y));
            }
        }
        Self { width, height, data }
    }

    /// Get a pixel at (x, y)
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 3;
        Some([self.data[idx], self.data[idx + 1], self.data[idx + 2]])
    }

    /// Raw RGB bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl PixelSource for Frame {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn rgb(&self, x: u32, y: u32) -> Rgb {
        let idx = (y as usize * self.width as usize + x as usize) * 3;
        [self.data[idx], self.data[idx + 1], self.data[idx + 2]]
    }
}

#[cfg(feature = "vision")]
impl PixelSource for image::RgbImage {
    fn width(&self) -> u32 {
        self.width()
    }

    fn height(&self) -> u32 {
        self.height()
    }

    #[inline]
    fn rgb(&self, x: u32, y: u32) -> Rgb {
        self.get_pixel(x, y).0
    }
}

#[cfg(feature = "vision")]
impl PixelSource for image::RgbaImage {
    fn width(&self) -> u32 {
        self.width()
    }

    fn height(&self) -> u32 {
        self.height()
    }

    #[inline]
    fn rgb(&self, x: u32, y: u32) -> Rgb {
        let [r, g, b, _] = self.get_pixel(x, y).0;
        [r, g, b]
    }
}

impl<T: PixelSource + ?Sized> PixelSource for &T {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn rgb(&self, x: u32, y: u32) -> Rgb {
        (**self).rgb(x, y)
    }
}
