use core::fmt;
use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

const OPENING_ROWS: Coord = 3;

/// Plain 8x8 grid of cells, stored row-major and indexed by [`Position`].
///
/// The board does not know the rules: [`Board::set`] accepts any cell on any
/// square, legality lives in [`MoveRules`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Array2<Cell>", into = "Array2<Cell>")]
pub struct Board {
    cells: Array2<Cell>,
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: Array2::default(Position::new(BOARD_SIZE, BOARD_SIZE).to_nd_index()),
        }
    }

    /// Black occupies the dark squares of the first three rows and White the
    /// dark squares of the last three.
    pub fn opening() -> Self {
        let mut board = Self::empty();
        for y in 0..BOARD_SIZE {
            let cell = if y < OPENING_ROWS {
                Cell::piece(Side::Black)
            } else if y >= BOARD_SIZE - OPENING_ROWS {
                Cell::piece(Side::White)
            } else {
                continue;
            };
            for x in 0..BOARD_SIZE {
                let pos = Position::new(x, y);
                if pos.is_dark() {
                    board[pos] = cell;
                }
            }
        }
        board
    }

    /// Parses one string per row, `.` for empty, `w` white and `b` black.
    /// Whitespace inside a row is ignored.
    pub fn from_rows(rows: &[&str]) -> Result<Self> {
        if rows.len() != usize::from(BOARD_SIZE) {
            return Err(GameError::InvalidBoardShape);
        }

        let mut board = Self::empty();
        for (y, row) in rows.iter().enumerate() {
            let mut x = 0;
            for ch in row.chars().filter(|ch| !ch.is_whitespace()) {
                let cell = match ch {
                    '.' => Cell::Empty,
                    'w' => Cell::White,
                    'b' => Cell::Black,
                    _ => return Err(GameError::InvalidBoardShape),
                };
                let pos = Position::checked(x, y as Coord)
                    .map_err(|_| GameError::InvalidBoardShape)?;
                board[pos] = cell;
                x += 1;
            }
            if x != BOARD_SIZE {
                return Err(GameError::InvalidBoardShape);
            }
        }
        Ok(board)
    }

    pub fn get(&self, pos: Position) -> Result<Cell> {
        let pos = pos.validate()?;
        Ok(self.cells[pos.to_nd_index()])
    }

    pub fn set(&mut self, pos: Position, cell: Cell) -> Result<()> {
        let pos = pos.validate()?;
        self.cells[pos.to_nd_index()] = cell;
        Ok(())
    }

    /// All squares in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((y, x), &cell)| (Position::new(x as Coord, y as Coord), cell))
    }

    pub fn count(&self, side: Side) -> usize {
        self.cells.iter().filter(|cell| cell.belongs_to(side)).count()
    }

    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::opening()
    }
}

/// Unchecked access, panics when `pos` lies outside the board.
impl Index<Position> for Board {
    type Output = Cell;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos.to_nd_index()]
    }
}

impl IndexMut<Position> for Board {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        &mut self.cells[pos.to_nd_index()]
    }
}

impl TryFrom<Array2<Cell>> for Board {
    type Error = GameError;

    fn try_from(cells: Array2<Cell>) -> Result<Self> {
        let size = usize::from(BOARD_SIZE);
        if cells.dim() == (size, size) {
            Ok(Self { cells })
        } else {
            Err(GameError::InvalidBoardShape)
        }
    }
}

impl From<Board> for Array2<Cell> {
    fn from(board: Board) -> Self {
        board.cells
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            for cell in row {
                f.write_str(match cell {
                    Cell::Empty => ".",
                    Cell::White => "w",
                    Cell::Black => "b",
                })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
