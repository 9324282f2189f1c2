//! Beacon classification pipeline
//!
//! Pure functions over an immutable image and a threshold set:
//! - `classify_pixel` - Red / Blue / Neither for one RGB sample
//! - `aggregate` - per-column red and blue hit counts
//! - `longest_run` - longest streak of non-zero columns
//! - `resolve_order` - which color band lies further left
//! - `classify_tally` - final `BeaconState` decision

pub mod classify;
pub mod order;
pub mod pixel;
pub mod state;
pub mod streak;
pub mod tally;

pub use classify::classify_tally;
pub use order::resolve_order;
pub use pixel::{classify_pixel, PixelClass, Rgb};
pub use state::BeaconState;
pub use streak::{longest_run, Streak};
pub use tally::{aggregate, aggregate_sequential, ColumnTally};

#[cfg(feature = "parallel")]
pub use tally::aggregate_parallel;
