//! Formal verification of placement invariants using Kani model checker.
//!
//! These proof harnesses verify that a game transition keeps every
//! placement invariant for all single moves over small reachable boards.

#[cfg(kani)]
mod proofs {
    use crate::invariants::{Invariant, InvariantSet, Placement, PlacementInvariants};
    use crate::invariants::SingleCellInvariant;
    use crate::{Board, Mark, Position};

    fn any_position() -> Position {
        let index: usize = kani::any();
        kani::assume(index < 9);
        Position::ALL[index]
    }

    fn any_mark() -> Mark {
        if kani::any() { Mark::O } else { Mark::X }
    }

    /// Proves: `Board::mark` leaves the other 8 cells alone.
    #[kani::proof]
    fn verify_mark_touches_one_cell() {
        let before = Board::empty().mark(any_position(), any_mark());
        let position = any_position();
        let mark = any_mark();

        let step = Placement {
            before,
            after: before.mark(position, mark),
            position,
            mark,
        };

        assert!(SingleCellInvariant::holds(&step));
    }

    /// Proves: marking an empty cell satisfies the full invariant set.
    #[kani::proof]
    fn verify_empty_cell_placement() {
        let before = Board::empty().mark(any_position(), any_mark());
        let position = any_position();
        kani::assume(!before.is_occupied(position));
        let mark = any_mark();

        let step = Placement {
            before,
            after: before.mark(position, mark),
            position,
            mark,
        };

        assert!(PlacementInvariants::check_all(&step).is_ok());
    }
}
