use serde::{Deserialize, Serialize};

use crate::Side;

/// Message describing the latest thing that happened, shown under the board.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Welcome,
    Selected,
    Moved,
    Captured,
    EmptySquare,
    NotYourTurn(Side),
    InvalidMove,
}

impl Status {
    pub const fn message(self) -> &'static str {
        match self {
            Self::Welcome => "You awesome!",
            Self::Selected => "Put a checker where you want!",
            Self::Moved => "Okay, good!",
            Self::Captured => "Nice jump!",
            Self::EmptySquare => "There is no checker here",
            Self::NotYourTurn(Side::White) => "White turn!",
            Self::NotYourTurn(Side::Black) => "Black turn!",
            Self::InvalidMove => "You cannot put checker here :-(",
        }
    }
}

impl core::fmt::Display for Status {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}
