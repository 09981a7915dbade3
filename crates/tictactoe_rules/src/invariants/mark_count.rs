//! Mark-count invariant: a move adds one mark for the mover and none for the opponent.

use super::{Invariant, Placement};
use crate::Player;

/// Invariant: The mover's mark count grows by one; the opponent's is unchanged.
pub struct MarkCountInvariant;

impl Invariant<Placement> for MarkCountInvariant {
    fn holds(step: &Placement) -> bool {
        let mine = step.mark;
        let theirs = Player::from(mine).opponent().mark();

        step.after.count(mine) == step.before.count(mine) + 1
            && step.after.count(theirs) == step.before.count(theirs)
    }

    fn description() -> &'static str {
        "Each move adds exactly one mark for the mover"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::invariants::tests::placement;
    use crate::{Board, Column, Mark, Position, Row};

    #[test]
    fn test_single_move_holds() {
        let step = placement(
            Board::empty(),
            Position::new(Row::First, Column::First),
            Mark::O,
        );
        assert!(MarkCountInvariant::holds(&step));
    }

    #[test]
    fn test_stolen_cell_violates() {
        // X overwrites an O: X gains one, but O loses one.
        let pos = Position::new(Row::First, Column::First);
        let before = Board::empty().mark(pos, Mark::O);
        let step = placement(before, pos, Mark::X);
        assert!(!MarkCountInvariant::holds(&step));
    }
}
