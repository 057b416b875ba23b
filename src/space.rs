use std::fmt::{self, Display};

use crate::Seat;

/// Number of shared ring cells all seats travel along.
pub const RING_LEN: u8 = 56;

/// Number of private home-row cells per seat.
pub const HOME_ROW_LEN: u8 = 6;

/// Step count of a token that has crossed the finish line exactly.
pub const FINISH_STEPS: i8 = 57;

/// Canonical identifier of the cell a token occupies. Every step count
/// maps to exactly one of these; `Overshoot` is the rejection signal for
/// step counts past the finish and is never stored on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Space {
    Home,
    Ready,
    Finished,
    /// Shared ring cell, 1..=56.
    Ring(u8),
    /// Private home-row cell of a seat, 1..=6.
    HomeRow(Seat, u8),
    /// Steps past the finish line, as `57 - step_count` (strictly negative).
    Overshoot(i8),
}

impl Space {
    /// True for the spaces tracked by the board occupancy set. Home,
    /// ready and finish live outside general occupancy tracking.
    pub fn is_cell(&self) -> bool {
        matches!(self, Space::Ring(_) | Space::HomeRow(..))
    }
}

/// Maps a per-token step count to the cell it stands on. Pure and total
/// over step counts from -1 up.
pub fn space_for(seat: Seat, steps: i8) -> Space {
    match steps {
        -1 => Space::Home,
        0 => Space::Ready,
        FINISH_STEPS => Space::Finished,
        s if s > FINISH_STEPS => Space::Overshoot(FINISH_STEPS - s),
        s => {
            let pos = (seat.entry_offset() + s as u8 - 1) % RING_LEN;
            let past_threshold = (pos + RING_LEN - seat.home_row_threshold()) % RING_LEN;
            if (1..=HOME_ROW_LEN).contains(&past_threshold) {
                Space::HomeRow(seat, past_threshold)
            } else {
                Space::Ring(pos + 1)
            }
        }
    }
}

impl Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Space::Home => write!(f, "H"),
            Space::Ready => write!(f, "R"),
            Space::Finished => write!(f, "F"),
            Space::Ring(n) => write!(f, "{}", n),
            Space::HomeRow(seat, n) => write!(f, "{}{}", seat.letter(), n),
            Space::Overshoot(n) => write!(f, "{}", n),
        }
    }
}
