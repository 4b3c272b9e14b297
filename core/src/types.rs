use serde::{Deserialize, Serialize};

use crate::{GameError, Result};

/// Single coordinate axis used for board columns and rows.
pub type Coord = u8;

/// Width and height of the checkerboard.
pub const BOARD_SIZE: Coord = 8;

/// Square on the board, `x` is the column and `y` the row, both `0..BOARD_SIZE`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: Coord,
    pub y: Coord,
}

impl Position {
    pub const fn new(x: Coord, y: Coord) -> Self {
        Self { x, y }
    }

    pub fn checked(x: Coord, y: Coord) -> Result<Self> {
        Self::new(x, y).validate()
    }

    pub const fn in_bounds(self) -> bool {
        self.x < BOARD_SIZE && self.y < BOARD_SIZE
    }

    pub fn validate(self) -> Result<Self> {
        if self.in_bounds() {
            Ok(self)
        } else {
            Err(GameError::OutOfRange)
        }
    }

    /// Neighbouring square in `direction`, `None` when it would leave the board.
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (dx, dy) = direction.delta();
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        Self::new(x, y).validate().ok()
    }

    /// Absolute column and row distance to `other`.
    pub const fn distance(self, other: Self) -> (Coord, Coord) {
        (self.x.abs_diff(other.x), self.y.abs_diff(other.y))
    }

    /// Square halfway between `self` and `other`, rounded toward zero.
    pub const fn midpoint(self, other: Self) -> Self {
        Self::new((self.x + other.x) / 2, (self.y + other.y) / 2)
    }

    /// Squares pieces stand on in the opening position.
    pub const fn is_dark(self) -> bool {
        (self.x + self.y) % 2 == 1
    }

    pub(crate) const fn to_nd_index(self) -> [usize; 2] {
        [self.y as usize, self.x as usize]
    }
}

impl From<(Coord, Coord)> for Position {
    fn from((x, y): (Coord, Coord)) -> Self {
        Self::new(x, y)
    }
}

impl core::fmt::Display for Position {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Cursor motion, `Up` points toward row 0.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    const fn delta(self) -> (i8, i8) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_stops_at_edges() {
        assert_eq!(Position::new(0, 0).step(Direction::Up), None);
        assert_eq!(Position::new(0, 0).step(Direction::Left), None);
        assert_eq!(Position::new(7, 7).step(Direction::Down), None);
        assert_eq!(Position::new(7, 7).step(Direction::Right), None);
        assert_eq!(
            Position::new(3, 4).step(Direction::Up),
            Some(Position::new(3, 3))
        );
        assert_eq!(
            Position::new(3, 4).step(Direction::Right),
            Some(Position::new(4, 4))
        );
    }

    #[test]
    fn checked_rejects_outside_grid() {
        assert_eq!(Position::checked(8, 0), Err(GameError::OutOfRange));
        assert_eq!(Position::checked(0, 8), Err(GameError::OutOfRange));
        assert_eq!(Position::checked(7, 7), Ok(Position::new(7, 7)));
    }

    #[test]
    fn distance_and_midpoint_are_symmetric() {
        let a = Position::new(2, 4);
        let b = Position::new(4, 6);
        assert_eq!(a.distance(b), (2, 2));
        assert_eq!(b.distance(a), (2, 2));
        assert_eq!(a.midpoint(b), Position::new(3, 5));
        assert_eq!(b.midpoint(a), Position::new(3, 5));
    }
}
