//! Image-level beacon classification

use super::order::resolve_order;
use super::state::BeaconState;
use super::tally::ColumnTally;
use crate::config::ClassifyBounds;
use crate::error::{BeaconError, Result};

/// Classify an aggregated image into a beacon state.
///
/// Tests run in order, first match wins:
/// 1. little blue and plenty of red: `Red`
/// 2. little red and plenty of blue: `Blue`
/// 3. neither color reaches `main`: `Undetermined`
/// 4. otherwise both are present and the column order decides
///
/// The tally is consumed because ordering rewrites its columns.
pub fn classify_tally(mut tally: ColumnTally, bounds: &ClassifyBounds) -> Result<BeaconState> {
    if tally.is_empty() || tally.reds.len() != tally.blues.len() {
        return Err(BeaconError::malformed_tally(tally.reds.len(), tally.blues.len()));
    }

    let total_red = tally.total_red() as f64;
    let total_blue = tally.total_blue() as f64;
    log::debug!(
        "Classifying {} columns: red={}, blue={} (main={}, other={})",
        tally.width(),
        total_red,
        total_blue,
        bounds.main,
        bounds.other
    );

    if total_blue <= bounds.other && total_red > bounds.main {
        return Ok(BeaconState::Red);
    }
    if total_red <= bounds.other && total_blue > bounds.main {
        return Ok(BeaconState::Blue);
    }
    if total_red < bounds.main && total_blue < bounds.main {
        return Ok(BeaconState::Undetermined);
    }

    Ok(resolve_order(&mut tally))
}
