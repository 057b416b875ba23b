use thiserror::Error;

/// Everything that can go wrong while resolving a turn. All variants are
/// expected, locally recoverable conditions: the scripted turn loop logs
/// and skips them, and only direct callers of the per-token move API see
/// them as errors.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LudoError {
    #[error("no seat at table position '{0}'")]
    InvalidSeat(char),
    #[error("'{0}' does not select a token")]
    InvalidTokenSelector(char),
    #[error("token has already finished")]
    AlreadyFinished,
    #[error("a roll of six is required to leave home")]
    NeedsSixToLeaveHome,
    #[error("a roll of {roll} would carry the token {excess} steps past the finish")]
    Overshoot { roll: u8, excess: u8 },
}
