use serde::{Deserialize, Serialize};

/// Colour of a player and of the pieces they own.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    #[default]
    White,
    Black,
}

impl Side {
    pub const fn opponent(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }
}

impl core::fmt::Display for Side {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Self::White => "White",
            Self::Black => "Black",
        })
    }
}

/// Contents of a single board square.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    White,
    Black,
}

impl Cell {
    pub const fn piece(side: Side) -> Self {
        match side {
            Side::White => Self::White,
            Side::Black => Self::Black,
        }
    }

    pub const fn side(self) -> Option<Side> {
        match self {
            Self::Empty => None,
            Self::White => Some(Side::White),
            Self::Black => Some(Side::Black),
        }
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Whether this square holds a piece owned by `side`.
    pub fn belongs_to(self, side: Side) -> bool {
        self.side() == Some(side)
    }

    pub fn is_opponent_of(self, side: Side) -> bool {
        self.belongs_to(side.opponent())
    }
}
