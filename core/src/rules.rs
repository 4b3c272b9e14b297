use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveKind {
    Step,
    Capture,
}

/// A validated relocation of the piece on `from`, ready to be applied.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedMove {
    pub from: Position,
    pub to: Position,
    pub captured: Option<Position>,
}

impl PlannedMove {
    pub const fn kind(&self) -> MoveKind {
        match self.captured {
            Some(_) => MoveKind::Capture,
            None => MoveKind::Step,
        }
    }

    pub fn apply(&self, board: &mut Board) {
        if let Some(captured) = self.captured {
            board[captured] = Cell::Empty;
        }
        board[self.to] = board[self.from];
        board[self.from] = Cell::Empty;
    }
}

/// Decides whether the piece of `side` on `from` may go to `to`.
///
/// Both positions are on the board and `from` holds a piece of `side`.
pub trait MoveRules {
    fn plan(&self, board: &Board, side: Side, from: Position, to: Position) -> Result<PlannedMove>;
}

/// One diagonal step onto an empty square, or a single jump over an opposing
/// piece onto an empty square. Pieces move in every diagonal direction, there
/// are no kings, no forced captures and no chained jumps.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicRules;

impl MoveRules for BasicRules {
    fn plan(&self, board: &Board, side: Side, from: Position, to: Position) -> Result<PlannedMove> {
        if !board[to].is_empty() {
            return Err(GameError::InvalidMove);
        }

        match from.distance(to) {
            (1, 1) => Ok(PlannedMove {
                from,
                to,
                captured: None,
            }),
            (2, 2) => {
                let jumped = from.midpoint(to);
                if board[jumped].is_opponent_of(side) {
                    Ok(PlannedMove {
                        from,
                        to,
                        captured: Some(jumped),
                    })
                } else {
                    Err(GameError::InvalidMove)
                }
            }
            _ => Err(GameError::InvalidMove),
        }
    }
}
