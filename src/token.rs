use std::fmt::{self, Display};

use crate::{FINISH_STEPS, LudoError, Seat};

/// Selects one of a seat's two tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenSlot {
    First,
    Second,
}

impl TokenSlot {
    pub const ALL: [TokenSlot; 2] = [TokenSlot::First, TokenSlot::Second];

    pub fn other(&self) -> TokenSlot {
        match self {
            TokenSlot::First => TokenSlot::Second,
            TokenSlot::Second => TokenSlot::First,
        }
    }

    /// Parses an external token selector. Accepts digits and the p/q
    /// letters, case-insensitive.
    pub fn from_char(selector: char) -> Result<TokenSlot, LudoError> {
        match selector.to_ascii_lowercase() {
            '1' | 'p' => Ok(TokenSlot::First),
            '2' | 'q' => Ok(TokenSlot::Second),
            _ => Err(LudoError::InvalidTokenSelector(selector)),
        }
    }

    pub fn index(&self) -> usize {
        match self {
            TokenSlot::First => 0,
            TokenSlot::Second => 1,
        }
    }
}

/// Lifecycle phase of a token, always derived from its step count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenStatus {
    Home,
    Ready,
    OnBoard,
    Finished,
}

/// Board-level identity of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenId {
    pub seat: Seat,
    pub slot: TokenSlot,
}

impl TokenId {
    pub fn new(seat: Seat, slot: TokenSlot) -> Self {
        TokenId { seat, slot }
    }
}

impl Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = match self.slot {
            TokenSlot::First => 1,
            TokenSlot::Second => 2,
        };
        write!(f, "{}_{}", self.seat.letter().to_ascii_lowercase(), n)
    }
}

/// A single playing piece, tracked purely by its step count:
/// -1 at home, 0 on the ready space, 1..=56 travelling, 57 finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    steps: i8,
}

impl Token {
    pub fn new() -> Self {
        Token { steps: -1 }
    }

    pub fn step_count(&self) -> i8 {
        self.steps
    }

    pub fn set_step_count(&mut self, steps: i8) {
        debug_assert!(
            (-1..=FINISH_STEPS).contains(&steps),
            "step count {} out of range",
            steps
        );
        self.steps = steps;
    }

    pub fn status(&self) -> TokenStatus {
        match self.steps {
            -1 => TokenStatus::Home,
            0 => TokenStatus::Ready,
            FINISH_STEPS => TokenStatus::Finished,
            _ => TokenStatus::OnBoard,
        }
    }
}

impl Default for Token {
    fn default() -> Self {
        Token::new()
    }
}
