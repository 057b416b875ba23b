use std::fmt::{self, Display};

use crate::{HOME_ROW_LEN, LudoError, RING_LEN};

/// One of the four table positions. Fixed for the lifetime of a match:
/// each seat defines where its tokens enter the shared ring and where
/// they peel off into their private home row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    A,
    B,
    C,
    D,
}

impl Seat {
    pub const ALL: [Seat; 4] = [Seat::A, Seat::B, Seat::C, Seat::D];

    /// Looks up a seat by its table letter, case-insensitive.
    pub fn from_char(letter: char) -> Result<Seat, LudoError> {
        match letter.to_ascii_uppercase() {
            'A' => Ok(Seat::A),
            'B' => Ok(Seat::B),
            'C' => Ok(Seat::C),
            'D' => Ok(Seat::D),
            _ => Err(LudoError::InvalidSeat(letter)),
        }
    }

    pub fn letter(&self) -> char {
        match self {
            Seat::A => 'A',
            Seat::B => 'B',
            Seat::C => 'C',
            Seat::D => 'D',
        }
    }

    /// 0-based ring index where this seat's tokens enter play.
    /// Entries are spaced a quarter ring apart.
    pub fn entry_offset(&self) -> u8 {
        match self {
            Seat::A => 0,
            Seat::B => 14,
            Seat::C => 28,
            Seat::D => 42,
        }
    }

    /// 0-based ring index past which this seat's tokens leave the shared
    /// ring for their private home row.
    pub fn home_row_threshold(&self) -> u8 {
        (self.entry_offset() + RING_LEN - HOME_ROW_LEN - 1) % RING_LEN
    }

    pub fn index(&self) -> usize {
        match self {
            Seat::A => 0,
            Seat::B => 1,
            Seat::C => 2,
            Seat::D => 3,
        }
    }
}

impl Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seat_lookup() {
        assert_eq!(Seat::from_char('a'), Ok(Seat::A));
        assert_eq!(Seat::from_char('D'), Ok(Seat::D));
        assert_eq!(Seat::from_char('x'), Err(LudoError::InvalidSeat('x')));
    }

    #[test]
    fn entry_offsets_are_quarter_spaced() {
        let offsets: Vec<u8> = Seat::ALL.iter().map(|s| s.entry_offset()).collect();
        assert_eq!(offsets, vec![0, 14, 28, 42]);
    }

    #[test]
    fn home_row_thresholds() {
        assert_eq!(Seat::A.home_row_threshold(), 49);
        assert_eq!(Seat::B.home_row_threshold(), 7);
        assert_eq!(Seat::C.home_row_threshold(), 21);
        assert_eq!(Seat::D.home_row_threshold(), 35);
    }
}
