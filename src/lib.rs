mod seat;
pub use seat::Seat;

mod space;
pub use space::Space;
pub use space::space_for;
pub use space::{FINISH_STEPS, HOME_ROW_LEN, RING_LEN};

mod token;
pub use token::Token;
pub use token::TokenId;
pub use token::TokenSlot;
pub use token::TokenStatus;

mod player;
pub use player::SeatState;

mod board;
pub use board::Board;

mod outcome;
pub use outcome::MoveOutcome;

mod error;
pub use error::LudoError;

mod game;
pub use game::LudoGame;
