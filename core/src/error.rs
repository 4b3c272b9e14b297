use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Position is outside the board")]
    OutOfRange,
    #[error("No checker of the side to move on this square")]
    InvalidSelection,
    #[error("Checker cannot be put on this square")]
    InvalidMove,
    #[error("Board shape does not match an 8x8 grid")]
    InvalidBoardShape,
}

pub type Result<T> = core::result::Result<T, GameError>;
