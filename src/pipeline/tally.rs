//! Per-column color aggregation
//!
//! Every pixel of the image is classified and counted against its column.
//! Columns are independent of each other, so with the `parallel` feature the
//! scan is split across rayon workers by column; the result is identical to
//! the sequential scan.

use crate::config::Thresholds;
use crate::frame::PixelSource;
use crate::pipeline::pixel::{classify_pixel, PixelClass};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Minimum columns handed to one rayon job
#[cfg(feature = "parallel")]
const MIN_COLUMNS_PER_JOB: usize = 16;

/// Red and blue hit counts for each image column
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnTally {
    /// `reds[x]` is the number of red pixels in column `x`
    pub reds: Vec<u32>,
    /// `blues[x]` is the number of blue pixels in column `x`
    pub blues: Vec<u32>,
}

impl ColumnTally {
    /// Create a tally from existing column counts
    pub fn new(reds: Vec<u32>, blues: Vec<u32>) -> Self {
        Self { reds, blues }
    }

    /// An all-zero tally for an image `width` columns wide
    pub fn zeroed(width: usize) -> Self {
        Self {
            reds: vec![0; width],
            blues: vec![0; width],
        }
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.reds.len()
    }

    /// True if there are no columns
    pub fn is_empty(&self) -> bool {
        self.reds.is_empty() && self.blues.is_empty()
    }

    /// Total red pixels
    pub fn total_red(&self) -> u64 {
        self.reds.iter().map(|&n| u64::from(n)).sum()
    }

    /// Total blue pixels
    pub fn total_blue(&self) -> u64 {
        self.blues.iter().map(|&n| u64::from(n)).sum()
    }

    /// Make every column single-colored by zeroing its smaller count.
    ///
    /// Ties go to blue: a column with `reds[i] == blues[i]` loses its reds.
    pub fn make_exclusive(&mut self) {
        for (red, blue) in self.reds.iter_mut().zip(self.blues.iter_mut()) {
            if *red <= *blue {
                *red = 0;
            } else {
                *blue = 0;
            }
        }
    }
}

/// Count one column
fn tally_column<S: PixelSource + ?Sized>(image: &S, x: u32, thresholds: &Thresholds) -> (u32, u32) {
    let mut red = 0;
    let mut blue = 0;
    for y in 0..image.height() {
        match classify_pixel(image.rgb(x, y), thresholds) {
            PixelClass::Red => red += 1,
            PixelClass::Blue => blue += 1,
            PixelClass::Neither => {}
        }
    }
    (red, blue)
}

/// Aggregate column counts on the calling thread
pub fn aggregate_sequential<S: PixelSource + ?Sized>(image: &S, thresholds: &Thresholds) -> ColumnTally {
    let (reds, blues) = (0..image.width())
        .map(|x| tally_column(image, x, thresholds))
        .unzip();
    ColumnTally { reds, blues }
}

/// Aggregate column counts across the rayon pool
#[cfg(feature = "parallel")]
pub fn aggregate_parallel<S: PixelSource + Sync + ?Sized>(image: &S, thresholds: &Thresholds) -> ColumnTally {
    let columns: Vec<(u32, u32)> = (0..image.width())
        .into_par_iter()
        .with_min_len(MIN_COLUMNS_PER_JOB)
        .map(|x| tally_column(image, x, thresholds))
        .collect();
    let (reds, blues) = columns.into_iter().unzip();
    ColumnTally { reds, blues }
}

/// Aggregate column counts, in parallel when the `parallel` feature is on
#[cfg(feature = "parallel")]
pub fn aggregate<S: PixelSource + Sync + ?Sized>(image: &S, thresholds: &Thresholds) -> ColumnTally {
    aggregate_parallel(image, thresholds)
}

/// Aggregate column counts, in parallel when the `parallel` feature is on
#[cfg(not(feature = "parallel"))]
pub fn aggregate<S: PixelSource + Sync + ?Sized>(image: &S, thresholds: &Thresholds) -> ColumnTally {
    aggregate_sequential(image, thresholds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::Frame;

    const RED: [u8; 3] = [255, 0, 0];
    const BLUE: [u8; 3] = [0, 0, 255];
    const BLACK: [u8; 3] = [0, 0, 0];

    /// Deterministic pseudo-random frame mixing red, blue and other pixels
    fn noisy_frame(width: u32, height: u32) -> Frame {
        let mut state: u32 = 0x2545_F491;
        Frame::from_fn(width, height, |_, _| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            [(state >> 24) as u8, (state >> 16) as u8, (state >> 8) as u8]
        })
    }

    #[test]
    fn test_lengths_match_width() {
        let frame = noisy_frame(37, 5);
        let tally = aggregate(&frame, &Thresholds::default());
        assert_eq!(tally.reds.len(), 37);
        assert_eq!(tally.blues.len(), 37);
        assert_eq!(tally.width(), 37);
    }

    #[test]
    fn test_counts_per_column() {
        let frame = Frame::from_fn(3, 4, |x, y| match (x, y) {
            (0, _) => RED,
            (1, 0) | (1, 1) => BLUE,
            (1, 2) => RED,
            _ => BLACK,
        });
        let tally = aggregate(&frame, &Thresholds::default());

        assert_eq!(tally.reds, vec![4, 1, 0]);
        assert_eq!(tally.blues, vec![0, 2, 0]);
        assert_eq!(tally.total_red(), 5);
        assert_eq!(tally.total_blue(), 2);
    }

    #[test]
    fn test_totals_match_brute_force() {
        let thresholds = Thresholds::default();
        let frame = noisy_frame(64, 48);
        let tally = aggregate(&frame, &thresholds);

        let mut red = 0u64;
        let mut blue = 0u64;
        for y in 0..frame.height() {
            for x in 0..frame.width() {
                match classify_pixel(frame.rgb(x, y), &thresholds) {
                    PixelClass::Red => red += 1,
                    PixelClass::Blue => blue += 1,
                    PixelClass::Neither => {}
                }
            }
        }

        assert_eq!(tally.total_red(), red);
        assert_eq!(tally.total_blue(), blue);
    }

    #[test]
    fn test_idempotent() {
        let thresholds = Thresholds::default();
        let frame = noisy_frame(50, 20);
        assert_eq!(aggregate(&frame, &thresholds), aggregate(&frame, &thresholds));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let thresholds = Thresholds::default();
        let frame = noisy_frame(257, 31);
        assert_eq!(
            aggregate_parallel(&frame, &thresholds),
            aggregate_sequential(&frame, &thresholds)
        );
    }

    #[test]
    fn test_make_exclusive() {
        let mut tally = ColumnTally::new(vec![3, 2, 0, 5, 1], vec![1, 2, 0, 6, 0]);
        tally.make_exclusive();

        assert_eq!(tally.reds, vec![3, 0, 0, 0, 1]);
        assert_eq!(tally.blues, vec![0, 2, 0, 6, 0]);
        for (r, b) in tally.reds.iter().zip(&tally.blues) {
            assert!(*r == 0 || *b == 0);
        }
    }

    #[test]
    fn test_zeroed() {
        let tally = ColumnTally::zeroed(4);
        assert_eq!(tally.width(), 4);
        assert_eq!(tally.total_red(), 0);
        assert!(!tally.is_empty());
        assert!(ColumnTally::default().is_empty());
    }
}
