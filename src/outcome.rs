use crate::TokenId;

/// What a successfully executed move did to the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Plain movement, including entering the ring and finishing.
    Moved,
    /// Landed on a friendly token; the seat now moves both as a unit.
    Doubled,
    /// Landed on hostile tokens and evicted them all.
    Captured(Vec<TokenId>),
}
