use crate::{
    Board, FINISH_STEPS, LudoError, MoveOutcome, Seat, SeatState, Space, TokenId, TokenSlot,
    TokenStatus, space_for,
};

/// Full state of one match: the shared board plus all four seat records.
/// Rebuilt from scratch for every match; nothing persists across
/// `play_game` calls.
#[derive(Debug, Clone)]
pub struct LudoGame {
    board: Board,
    seats: [SeatState; 4],
}

impl LudoGame {
    pub fn new() -> Self {
        LudoGame {
            board: Board::new(),
            seats: [
                SeatState::new(Seat::A),
                SeatState::new(Seat::B),
                SeatState::new(Seat::C),
                SeatState::new(Seat::D),
            ],
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player(&self, seat: Seat) -> &SeatState {
        &self.seats[seat.index()]
    }

    pub fn player_by_letter(&self, letter: char) -> Result<&SeatState, LudoError> {
        Ok(self.player(Seat::from_char(letter)?))
    }

    pub fn token_space(&self, seat: Seat, slot: TokenSlot) -> Space {
        self.player(seat).space(slot)
    }

    /// Puts a token at an arbitrary step count, keeping board occupancy
    /// in sync. Scenario setup hook; bypasses movement legality.
    pub fn place_token(&mut self, seat: Seat, slot: TokenSlot, steps: i8) {
        let id = TokenId::new(seat, slot);
        let from = self.player(seat).space(slot);
        self.seats[seat.index()].set_step_count(slot, steps);
        let to = space_for(seat, steps);
        if to == Space::Finished {
            self.board.move_token(id, from, Space::Finished);
        } else {
            self.board.remove_token(from, id);
            self.board.insert_token(to, id);
        }
    }

    /// Moves one token by one die roll, enforcing movement legality and
    /// applying every capture and doubling side effect before returning.
    pub fn move_token(
        &mut self,
        seat: Seat,
        slot: TokenSlot,
        roll: u8,
    ) -> Result<MoveOutcome, LudoError> {
        let id = TokenId::new(seat, slot);
        let steps = self.player(seat).step_count(slot);
        match space_for(seat, steps) {
            Space::Finished => Err(LudoError::AlreadyFinished),
            Space::Home if roll != 6 => Err(LudoError::NeedsSixToLeaveHome),
            Space::Home => {
                // Entering play consumes the whole move; the token waits
                // on the ready space. The bonus turn for the six lives in
                // the script, not here.
                self.seats[seat.index()].set_step_count(slot, 0);
                log::debug!("{} enters play on the ready space", id);
                Ok(MoveOutcome::Moved)
            }
            from => {
                let target = steps + roll as i8;
                let to = space_for(seat, target);
                if let Space::Overshoot(excess) = to {
                    return Err(LudoError::Overshoot {
                        roll,
                        excess: excess.unsigned_abs(),
                    });
                }
                let outcome = self.board.move_token(id, from, to);
                self.seats[seat.index()].set_step_count(slot, target);
                match outcome {
                    MoveOutcome::Doubled => {
                        self.seats[seat.index()].set_doubled(true);
                        log::debug!("{} doubles up on {}", id, to);
                        Ok(MoveOutcome::Doubled)
                    }
                    MoveOutcome::Captured(evicted) => {
                        log::debug!("{} kicks {} token(s) off {}", id, evicted.len(), to);
                        for &victim in &evicted {
                            self.send_home(victim);
                        }
                        Ok(MoveOutcome::Captured(evicted))
                    }
                    MoveOutcome::Moved => {
                        if to == Space::Finished {
                            log::debug!("{} crosses the finish line", id);
                        }
                        Ok(MoveOutcome::Moved)
                    }
                }
            }
        }
    }

    /// Char-addressed variant of [`Self::move_token`] for callers that
    /// speak the external seat/token vocabulary.
    pub fn move_token_by_name(
        &mut self,
        seat: char,
        token: char,
        roll: u8,
    ) -> Result<MoveOutcome, LudoError> {
        let seat = Seat::from_char(seat)?;
        let slot = TokenSlot::from_char(token)?;
        self.move_token(seat, slot, roll)
    }

    /// Plays a scripted match: marks the given seats as participating,
    /// resolves every (seat, roll) entry in order, and reports the final
    /// space of each participant's tokens (first then second, seats in
    /// supplied order). Bad entries in `turns` are skipped; a bad letter
    /// in `players` is caller misuse and fails the match up front.
    pub fn play_game(
        &mut self,
        players: &[char],
        turns: &[(char, u8)],
    ) -> Result<Vec<String>, LudoError> {
        *self = LudoGame::new();
        let mut order = Vec::with_capacity(players.len());
        for &letter in players {
            let seat = Seat::from_char(letter)?;
            self.seats[seat.index()].set_in_play(true);
            order.push(seat);
        }

        for &(letter, roll) in turns {
            match Seat::from_char(letter) {
                Ok(seat) => self.take_turn(seat, roll),
                Err(err) => log::debug!("skipping turn: {}", err),
            }
        }

        let mut positions = Vec::with_capacity(order.len() * 2);
        for seat in order {
            for slot in TokenSlot::ALL {
                positions.push(self.token_space(seat, slot).to_string());
            }
        }
        Ok(positions)
    }

    /// Resolves one scripted turn under the standard priority rules:
    /// bring a token out on a six, land exactly on the finish, capture,
    /// otherwise march the furthest-behind token.
    fn take_turn(&mut self, seat: Seat, roll: u8) {
        let state = self.player(seat);
        if !state.in_play() || state.completed() {
            log::debug!("seat {} cannot act, skipping turn", seat);
            return;
        }
        let status = TokenSlot::ALL.map(|slot| state.status(slot));
        let steps = TokenSlot::ALL.map(|slot| state.step_count(slot));
        let doubled = state.doubled();

        // One token already finished: only the other may move.
        let finished = status.map(|s| s == TokenStatus::Finished);
        if finished[0] != finished[1] {
            let slot = if finished[0] {
                TokenSlot::Second
            } else {
                TokenSlot::First
            };
            self.try_move(seat, slot, roll);
            return;
        }

        // A doubled pair moves as a unit, each half on its own legality.
        if doubled {
            self.try_move(seat, TokenSlot::First, roll);
            self.try_move(seat, TokenSlot::Second, roll);
            return;
        }

        // A six brings a waiting token out of home before anything else.
        if roll == 6 {
            if let Some(i) = status.iter().position(|&s| s == TokenStatus::Home) {
                self.try_move(seat, TokenSlot::ALL[i], roll);
                return;
            }
        }

        // Travelling tokens that would not overshoot.
        let targets: [Option<i8>; 2] = [0, 1].map(|i| {
            matches!(status[i], TokenStatus::Ready | TokenStatus::OnBoard)
                .then(|| steps[i] + roll as i8)
                .filter(|&t| t <= FINISH_STEPS)
        });

        // Landing exactly on the finish beats every other move.
        if let Some(i) = (0..2).find(|&i| targets[i] == Some(FINISH_STEPS)) {
            self.try_move(seat, TokenSlot::ALL[i], roll);
            return;
        }

        // Then a capture: a target cell held by another seat. A cell held
        // by the sibling would be a merge and gets no preference.
        let capture = (0..2).find(|&i| {
            targets[i].is_some_and(|t| {
                let to = space_for(seat, t);
                to.is_cell()
                    && self
                        .board
                        .occupants(to)
                        .first()
                        .is_some_and(|occupant| occupant.seat != seat)
            })
        });
        if let Some(i) = capture {
            self.try_move(seat, TokenSlot::ALL[i], roll);
            return;
        }

        // Otherwise march the furthest-behind token, falling back to the
        // other if the first choice is illegal.
        let first_choice = if steps[1] < steps[0] {
            TokenSlot::Second
        } else {
            TokenSlot::First
        };
        if !self.try_move(seat, first_choice, roll) {
            self.try_move(seat, first_choice.other(), roll);
        }
    }

    fn try_move(&mut self, seat: Seat, slot: TokenSlot, roll: u8) -> bool {
        match self.move_token(seat, slot, roll) {
            Ok(_) => true,
            Err(err) => {
                log::debug!("seat {} cannot move its {:?} token: {}", seat, slot, err);
                false
            }
        }
    }

    /// Resets a captured token. A doubled seat loses the whole pair: the
    /// sibling comes off the board too, unless it already finished.
    fn send_home(&mut self, id: TokenId) {
        let idx = id.seat.index();
        if self.seats[idx].doubled() {
            self.seats[idx].set_doubled(false);
            let sibling = id.slot.other();
            if self.seats[idx].status(sibling) != TokenStatus::Finished {
                let space = self.seats[idx].space(sibling);
                self.board
                    .remove_token(space, TokenId::new(id.seat, sibling));
                self.seats[idx].reset_token(sibling);
            }
        }
        self.seats[idx].reset_token(id.slot);
        log::debug!("{} is sent back home", id);
    }
}

impl Default for LudoGame {
    fn default() -> Self {
        LudoGame::new()
    }
}
