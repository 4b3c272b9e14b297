use serde::{Deserialize, Serialize};

use crate::*;

/// Discrete input accepted from the input collaborator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    MoveCursor(Direction),
    Confirm,
    /// Ends the session; intercepted by the collaborator, ignored by the engine.
    Quit,
}

/// Selection state machine: `Idle` until a piece is picked up.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Idle,
    Armed(Position),
}

impl Phase {
    pub const fn is_armed(self) -> bool {
        matches!(self, Self::Armed(_))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CursorOutcome {
    Moved,
    Blocked,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConfirmOutcome {
    Selected(Position),
    Moved(PlannedMove),
    Rejected(GameError),
}

impl ConfirmOutcome {
    /// Whether the board changed and the turn passed.
    pub const fn is_move(self) -> bool {
        matches!(self, Self::Moved(_))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Cursor(CursorOutcome),
    Confirm(ConfirmOutcome),
    Ignored,
}

impl Outcome {
    pub const fn has_update(self) -> bool {
        use Outcome::*;
        match self {
            Cursor(CursorOutcome::Moved) => true,
            Cursor(CursorOutcome::Blocked) => false,
            Confirm(_) => true,
            Ignored => false,
        }
    }
}

/// Read-only copy of everything a renderer needs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub board: Board,
    pub cursor: Position,
    pub selection: Option<Position>,
    pub turn: Side,
    pub status: Status,
}

impl Snapshot {
    /// Unchecked access, panics when `pos` lies outside the board.
    pub fn cell(&self, pos: Position) -> Cell {
        self.board[pos]
    }

    pub fn phase(&self) -> Phase {
        match self.selection {
            Some(pos) => Phase::Armed(pos),
            None => Phase::Idle,
        }
    }

    pub fn status_message(&self) -> &'static str {
        self.status.message()
    }
}

/// Restore through [`GameEngine::from_snapshot`], which checks the cursor and
/// selection, rather than deserializing the engine directly.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GameEngine<R = BasicRules> {
    board: Board,
    cursor: Position,
    selection: Option<Position>,
    turn: Side,
    status: Status,
    rules: R,
}

impl GameEngine {
    pub fn new() -> Self {
        Self::with_rules(BasicRules)
    }

    /// Start from an arbitrary position, with nothing selected.
    pub fn from_parts(board: Board, turn: Side) -> Self {
        Self {
            board,
            turn,
            ..Self::new()
        }
    }

    /// Resume from a snapshot. The cursor and selection must be on the board
    /// and a selection must hold a piece of the side to move.
    pub fn from_snapshot(snapshot: Snapshot) -> Result<Self> {
        let cursor = snapshot.cursor.validate()?;
        if let Some(selected) = snapshot.selection {
            let cell = snapshot.board.get(selected)?;
            if !cell.belongs_to(snapshot.turn) {
                return Err(GameError::InvalidSelection);
            }
        }

        Ok(Self {
            board: snapshot.board,
            cursor,
            selection: snapshot.selection,
            turn: snapshot.turn,
            status: snapshot.status,
            rules: BasicRules,
        })
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: MoveRules> GameEngine<R> {
    pub fn with_rules(rules: R) -> Self {
        Self {
            board: Board::opening(),
            cursor: Position::default(),
            selection: None,
            turn: Side::White,
            status: Status::Welcome,
            rules,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cursor(&self) -> Position {
        self.cursor
    }

    pub fn selection(&self) -> Option<Position> {
        self.selection
    }

    pub fn phase(&self) -> Phase {
        match self.selection {
            Some(pos) => Phase::Armed(pos),
            None => Phase::Idle,
        }
    }

    pub fn turn(&self) -> Side {
        self.turn
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            cursor: self.cursor,
            selection: self.selection,
            turn: self.turn,
            status: self.status,
        }
    }

    pub fn apply(&mut self, command: Command) -> Outcome {
        match command {
            Command::MoveCursor(direction) => Outcome::Cursor(self.move_cursor(direction)),
            Command::Confirm => Outcome::Confirm(self.toggle_select()),
            Command::Quit => Outcome::Ignored,
        }
    }

    pub fn move_cursor(&mut self, direction: Direction) -> CursorOutcome {
        match self.cursor.step(direction) {
            Some(pos) => {
                self.cursor = pos;
                log::trace!("cursor {:?} -> {}", direction, pos);
                CursorOutcome::Moved
            }
            None => CursorOutcome::Blocked,
        }
    }

    pub fn set_cursor(&mut self, pos: Position) -> Result<()> {
        self.cursor = pos.validate()?;
        Ok(())
    }

    /// Picks up the piece under the cursor, or tries to put the held piece
    /// down there. Any attempt with a piece in hand releases it.
    pub fn toggle_select(&mut self) -> ConfirmOutcome {
        let target = self.cursor;
        match self.selection.take() {
            None => self.select(target),
            Some(origin) => self.put(origin, target),
        }
    }

    fn select(&mut self, pos: Position) -> ConfirmOutcome {
        let cell = self.board[pos];
        if cell.belongs_to(self.turn) {
            self.selection = Some(pos);
            self.status = Status::Selected;
            log::debug!("{} selected {}", self.turn, pos);
            return ConfirmOutcome::Selected(pos);
        }

        self.status = if cell.is_empty() {
            Status::EmptySquare
        } else {
            Status::NotYourTurn(self.turn)
        };
        log::debug!("{} cannot select {} ({:?})", self.turn, pos, cell);
        ConfirmOutcome::Rejected(GameError::InvalidSelection)
    }

    fn put(&mut self, origin: Position, target: Position) -> ConfirmOutcome {
        match self.rules.plan(&self.board, self.turn, origin, target) {
            Ok(planned) => {
                planned.apply(&mut self.board);
                self.status = match planned.kind() {
                    MoveKind::Step => Status::Moved,
                    MoveKind::Capture => Status::Captured,
                };
                log::debug!("{} {:?} {} -> {}", self.turn, planned.kind(), origin, target);
                self.turn = self.turn.opponent();
                ConfirmOutcome::Moved(planned)
            }
            Err(err) => {
                self.status = Status::InvalidMove;
                log::debug!("{} rejected {} -> {}: {}", self.turn, origin, target, err);
                ConfirmOutcome::Rejected(err)
            }
        }
    }
}
