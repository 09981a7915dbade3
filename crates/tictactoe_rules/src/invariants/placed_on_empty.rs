//! Placed-on-empty invariant: marks go on empty cells and stay there.

use super::{Invariant, Placement};

/// Invariant: The marked cell was empty before and holds the mover's mark after.
///
/// Together with [`super::SingleCellInvariant`] this means a mark, once
/// placed, is never cleared or reassigned.
pub struct PlacedOnEmptyInvariant;

impl Invariant<Placement> for PlacedOnEmptyInvariant {
    fn holds(step: &Placement) -> bool {
        step.before.get(step.position).is_none()
            && step.after.get(step.position) == Some(step.mark)
    }

    fn description() -> &'static str {
        "Marks are only placed on empty cells"
    }
}
