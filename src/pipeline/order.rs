//! Left-to-right ordering of a two-color beacon

use super::state::BeaconState;
use super::streak::longest_run;
use super::tally::ColumnTally;

/// Decide which color band lies further left.
///
/// Each column is first assigned to the color with more hits (blue on a tie),
/// so the two streaks never share a column. Only the start positions of the
/// longest red and blue streaks are compared; their lengths are not.
pub fn resolve_order(tally: &mut ColumnTally) -> BeaconState {
    tally.make_exclusive();

    let red = longest_run(&tally.reds);
    let blue = longest_run(&tally.blues);

    log::debug!(
        "Resolving order: red streak {}+{}, blue streak {}+{}",
        red.start,
        red.length,
        blue.start,
        blue.length
    );

    if red.start < blue.start {
        BeaconState::RedBlue
    } else {
        BeaconState::BlueRed
    }
}
