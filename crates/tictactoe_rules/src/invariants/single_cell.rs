//! Single-cell invariant: a move touches exactly one cell.

use super::{Invariant, Placement};

/// Invariant: Every cell other than the marked one is unchanged.
pub struct SingleCellInvariant;

impl Invariant<Placement> for SingleCellInvariant {
    fn holds(step: &Placement) -> bool {
        step.before
            .cells()
            .filter(|(pos, _)| *pos != step.position)
            .all(|(pos, cell)| step.after.get(pos) == cell)
    }

    fn description() -> &'static str {
        "Only the marked cell changes"
    }
}
