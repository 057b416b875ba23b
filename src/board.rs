use hashbrown::{HashMap, HashSet};

use crate::{HOME_ROW_LEN, MoveOutcome, RING_LEN, Seat, Space, TokenId};

/// Mutable board state: which tokens stand on which cell. Every ring and
/// home-row cell is a key from construction; home, ready and finish are
/// never keys. The `occupied` set mirrors the non-empty cells so that
/// occupancy checks stay O(1), and `finish` records tokens in the order
/// they crossed the line.
#[derive(Debug, Clone)]
pub struct Board {
    spaces: HashMap<Space, Vec<TokenId>>,
    occupied: HashSet<Space>,
    finish: Vec<TokenId>,
}

impl Board {
    pub fn new() -> Self {
        let mut spaces = HashMap::new();
        for n in 1..=RING_LEN {
            spaces.insert(Space::Ring(n), Vec::new());
        }
        for seat in Seat::ALL {
            for cell in 1..=HOME_ROW_LEN {
                spaces.insert(Space::HomeRow(seat, cell), Vec::new());
            }
        }
        Board {
            spaces,
            occupied: HashSet::new(),
            finish: Vec::new(),
        }
    }

    /// Tokens standing on a cell, in arrival order.
    pub fn occupants(&self, space: Space) -> &[TokenId] {
        self.spaces.get(&space).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_occupied(&self, space: Space) -> bool {
        self.occupied.contains(&space)
    }

    pub fn occupied_spaces(&self) -> &HashSet<Space> {
        &self.occupied
    }

    /// Tokens that have crossed the finish line, in finishing order.
    pub fn finish(&self) -> &[TokenId] {
        &self.finish
    }

    /// Executes a move and resolves what happens on the target cell:
    /// a friendly occupant merges, hostile occupants are evicted en
    /// masse, a finish target leaves general occupancy tracking. The
    /// caller owns the seat-state side effects of the outcome.
    pub fn move_token(&mut self, token: TokenId, from: Space, to: Space) -> MoveOutcome {
        match to {
            Space::Finished => {
                self.vacate(from, token);
                self.finish.push(token);
                MoveOutcome::Moved
            }
            Space::Ring(_) | Space::HomeRow(..) => {
                if self.occupied.contains(&to) {
                    let cell = self.spaces.entry(to).or_default();
                    if cell.first().is_some_and(|t| t.seat == token.seat) {
                        cell.push(token);
                        self.vacate(from, token);
                        MoveOutcome::Doubled
                    } else {
                        let evicted = std::mem::take(cell);
                        cell.push(token);
                        self.vacate(from, token);
                        MoveOutcome::Captured(evicted)
                    }
                } else {
                    self.vacate(from, token);
                    self.spaces.entry(to).or_default().push(token);
                    self.occupied.insert(to);
                    MoveOutcome::Moved
                }
            }
            // A token sent to home just leaves the board.
            _ => {
                self.vacate(from, token);
                MoveOutcome::Moved
            }
        }
    }

    /// Removes a token from a cell, if present. Tolerates non-cell
    /// spaces and already-removed tokens; needed when un-doubling a seat
    /// whose surviving token must come off the board.
    pub fn remove_token(&mut self, space: Space, token: TokenId) {
        self.vacate(space, token);
    }

    /// Puts a token straight onto a cell, for direct state injection.
    pub fn insert_token(&mut self, space: Space, token: TokenId) {
        if !space.is_cell() {
            return;
        }
        self.spaces.entry(space).or_default().push(token);
        self.occupied.insert(space);
    }

    fn vacate(&mut self, from: Space, token: TokenId) {
        if !from.is_cell() {
            return;
        }
        if let Some(cell) = self.spaces.get_mut(&from) {
            cell.retain(|t| *t != token);
            if cell.is_empty() {
                self.occupied.remove(&from);
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TokenSlot;

    fn token(seat: Seat, slot: TokenSlot) -> TokenId {
        TokenId::new(seat, slot)
    }

    fn occupancy_set_is_consistent(board: &Board) -> bool {
        board
            .spaces
            .iter()
            .all(|(space, cell)| board.occupied.contains(space) == !cell.is_empty())
            && board.occupied.iter().all(|space| space.is_cell())
    }

    #[test]
    fn plain_move_updates_occupancy() {
        let mut board = Board::new();
        let a1 = token(Seat::A, TokenSlot::First);

        let outcome = board.move_token(a1, Space::Ready, Space::Ring(5));
        assert_eq!(outcome, MoveOutcome::Moved);
        assert_eq!(board.occupants(Space::Ring(5)), &[a1]);
        assert!(board.is_occupied(Space::Ring(5)));

        let outcome = board.move_token(a1, Space::Ring(5), Space::Ring(9));
        assert_eq!(outcome, MoveOutcome::Moved);
        assert!(!board.is_occupied(Space::Ring(5)));
        assert_eq!(board.occupants(Space::Ring(9)), &[a1]);
        assert!(occupancy_set_is_consistent(&board));
    }

    #[test]
    fn friendly_landing_merges() {
        let mut board = Board::new();
        let a1 = token(Seat::A, TokenSlot::First);
        let a2 = token(Seat::A, TokenSlot::Second);
        board.move_token(a1, Space::Ready, Space::Ring(12));
        board.move_token(a2, Space::Ready, Space::Ring(8));

        let outcome = board.move_token(a2, Space::Ring(8), Space::Ring(12));
        assert_eq!(outcome, MoveOutcome::Doubled);
        assert_eq!(board.occupants(Space::Ring(12)), &[a1, a2]);
        assert!(!board.is_occupied(Space::Ring(8)));
        assert!(occupancy_set_is_consistent(&board));
    }

    #[test]
    fn hostile_landing_evicts_every_occupant() {
        let mut board = Board::new();
        let b1 = token(Seat::B, TokenSlot::First);
        let b2 = token(Seat::B, TokenSlot::Second);
        let a1 = token(Seat::A, TokenSlot::First);
        board.move_token(b1, Space::Ready, Space::Ring(20));
        board.move_token(b2, Space::Ready, Space::Ring(20));
        board.move_token(a1, Space::Ready, Space::Ring(14));

        let outcome = board.move_token(a1, Space::Ring(14), Space::Ring(20));
        assert_eq!(outcome, MoveOutcome::Captured(vec![b1, b2]));
        assert_eq!(board.occupants(Space::Ring(20)), &[a1]);
        assert!(board.is_occupied(Space::Ring(20)));
        assert!(!board.is_occupied(Space::Ring(14)));
        assert!(occupancy_set_is_consistent(&board));
    }

    #[test]
    fn finish_bypasses_occupancy_tracking() {
        let mut board = Board::new();
        let d2 = token(Seat::D, TokenSlot::Second);
        board.move_token(d2, Space::Ready, Space::HomeRow(Seat::D, 4));

        let outcome = board.move_token(d2, Space::HomeRow(Seat::D, 4), Space::Finished);
        assert_eq!(outcome, MoveOutcome::Moved);
        assert_eq!(board.finish(), &[d2]);
        assert!(!board.is_occupied(Space::HomeRow(Seat::D, 4)));
        assert!(occupancy_set_is_consistent(&board));
    }

    #[test]
    fn removing_a_missing_token_is_a_no_op() {
        let mut board = Board::new();
        let c1 = token(Seat::C, TokenSlot::First);
        board.remove_token(Space::Ring(3), c1);
        board.remove_token(Space::Ready, c1);
        assert!(occupancy_set_is_consistent(&board));
    }
}
