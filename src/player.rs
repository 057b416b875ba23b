use crate::{Seat, Space, Token, TokenSlot, TokenStatus, space_for};

/// Per-seat record: the seat's two tokens plus the flags that shape its
/// turns. Participation (`in_play`) is set once at match start; the
/// `doubled` flag holds while both tokens share a cell and move as one.
#[derive(Debug, Clone)]
pub struct SeatState {
    seat: Seat,
    tokens: [Token; 2],
    in_play: bool,
    doubled: bool,
}

impl SeatState {
    pub fn new(seat: Seat) -> Self {
        SeatState {
            seat,
            tokens: [Token::new(); 2],
            in_play: false,
            doubled: false,
        }
    }

    pub fn seat(&self) -> Seat {
        self.seat
    }

    pub fn token(&self, slot: TokenSlot) -> &Token {
        &self.tokens[slot.index()]
    }

    pub fn step_count(&self, slot: TokenSlot) -> i8 {
        self.tokens[slot.index()].step_count()
    }

    pub fn set_step_count(&mut self, slot: TokenSlot, steps: i8) {
        self.tokens[slot.index()].set_step_count(steps);
    }

    pub fn status(&self, slot: TokenSlot) -> TokenStatus {
        self.tokens[slot.index()].status()
    }

    /// The cell this token currently stands on.
    pub fn space(&self, slot: TokenSlot) -> Space {
        space_for(self.seat, self.step_count(slot))
    }

    pub fn in_play(&self) -> bool {
        self.in_play
    }

    pub fn set_in_play(&mut self, in_play: bool) {
        self.in_play = in_play;
    }

    pub fn doubled(&self) -> bool {
        self.doubled
    }

    pub fn set_doubled(&mut self, doubled: bool) {
        self.doubled = doubled;
    }

    /// True once both tokens have crossed the finish line.
    pub fn completed(&self) -> bool {
        self.tokens.iter().all(|t| t.status() == TokenStatus::Finished)
    }

    /// Sends one token back to home.
    pub fn reset_token(&mut self, slot: TokenSlot) {
        self.tokens[slot.index()].set_step_count(-1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FINISH_STEPS;

    #[test]
    fn fresh_seat_has_both_tokens_at_home() {
        let state = SeatState::new(Seat::B);
        assert_eq!(state.status(TokenSlot::First), TokenStatus::Home);
        assert_eq!(state.status(TokenSlot::Second), TokenStatus::Home);
        assert!(!state.in_play());
        assert!(!state.doubled());
        assert!(!state.completed());
    }

    #[test]
    fn completed_needs_both_tokens_finished() {
        let mut state = SeatState::new(Seat::A);
        state.set_step_count(TokenSlot::First, FINISH_STEPS);
        assert!(!state.completed());
        state.set_step_count(TokenSlot::Second, FINISH_STEPS);
        assert!(state.completed());
    }

    #[test]
    fn reset_returns_a_token_home() {
        let mut state = SeatState::new(Seat::C);
        state.set_step_count(TokenSlot::First, 23);
        state.reset_token(TokenSlot::First);
        assert_eq!(state.step_count(TokenSlot::First), -1);
        assert_eq!(state.status(TokenSlot::First), TokenStatus::Home);
    }
}
