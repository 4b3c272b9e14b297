use checkers_core::*;
use proptest::prelude::*;

fn command() -> impl Strategy<Value = Command> {
    prop_oneof![
        3 => prop::sample::select(Direction::ALL.to_vec()).prop_map(Command::MoveCursor),
        2 => Just(Command::Confirm),
        1 => Just(Command::Quit),
    ]
}

/// Crowded positions where most pieces have an opposing neighbour to jump.
const FIXTURES: [[&str; 8]; 3] = [
    [
        "........",
        "..b.b...",
        ".w.w.b..",
        "..b.b.w.",
        ".w.w.b..",
        "..b.w.w.",
        ".w...b..",
        "........",
    ],
    [
        ".b.b.b.b",
        "b.w.w.b.",
        "...b....",
        "..w.w...",
        "...b.b..",
        "..w...w.",
        ".b.w.b..",
        "w.......",
    ],
    [
        "........",
        "...b....",
        "..w.w...",
        ".b...b..",
        "..w.w...",
        "...b....",
        "........",
        "........",
    ],
];

/// Pick up a square and try to put it down one or two diagonal steps away.
fn attempt() -> impl Strategy<Value = (Position, Option<Position>)> {
    (
        0..BOARD_SIZE,
        0..BOARD_SIZE,
        prop::bool::ANY,
        prop::bool::ANY,
        1..=2i8,
    )
        .prop_map(|(x, y, east, south, len)| {
            let from = Position::new(x, y);
            let dx = if east { len } else { -len };
            let dy = if south { len } else { -len };
            let to = x
                .checked_add_signed(dx)
                .zip(y.checked_add_signed(dy))
                .map(Position::from)
                .filter(|to| to.in_bounds());
            (from, to)
        })
}

fn crowded_engine(index: usize, turn: Side) -> GameEngine {
    let board = Board::from_rows(&FIXTURES[index]).unwrap();
    GameEngine::from_parts(board, turn)
}

fn side() -> impl Strategy<Value = Side> {
    prop_oneof![Just(Side::White), Just(Side::Black)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn captures_remove_exactly_one_opposing_piece(
        index in 0..FIXTURES.len(),
        turn in side(),
        attempts in prop::collection::vec(attempt(), 0..200),
    ) {
        let mut engine = crowded_engine(index, turn);

        for (from, to) in attempts {
            let Some(to) = to else { continue };
            let mover = engine.turn();
            let own = engine.board().count(mover);
            let other = engine.board().count(mover.opponent());
            let board = engine.board().clone();

            engine.set_cursor(from).unwrap();
            if !matches!(engine.toggle_select(), ConfirmOutcome::Selected(_)) {
                prop_assert_eq!(engine.board(), &board);
                continue;
            }
            engine.set_cursor(to).unwrap();
            match engine.toggle_select() {
                ConfirmOutcome::Moved(planned) => {
                    prop_assert_eq!(engine.turn(), mover.opponent());
                    prop_assert_eq!(engine.board().count(mover), own);
                    match planned.captured {
                        Some(jumped) => {
                            prop_assert!(board[jumped].is_opponent_of(mover));
                            prop_assert_eq!(engine.board()[jumped], Cell::Empty);
                            prop_assert_eq!(engine.board().count(mover.opponent()), other - 1);
                        }
                        None => {
                            prop_assert_eq!(engine.board().count(mover.opponent()), other);
                        }
                    }
                    prop_assert!(engine.board()[planned.to].belongs_to(mover));
                    prop_assert!(engine.board()[planned.from].is_empty());
                }
                _ => {
                    prop_assert_eq!(engine.turn(), mover);
                    prop_assert_eq!(engine.board(), &board);
                }
            }
            prop_assert_eq!(engine.phase(), Phase::Idle);
        }
    }

    #[test]
    fn piece_count_never_increases(commands in prop::collection::vec(command(), 0..400)) {
        let mut engine = GameEngine::new();
        prop_assert_eq!(engine.board().count(Side::White), 12);
        prop_assert_eq!(engine.board().count(Side::Black), 12);

        let mut pieces = engine.board().piece_count();
        for command in commands {
            engine.apply(command);
            let now = engine.board().piece_count();
            prop_assert!(now <= pieces);
            pieces = now;
        }
    }

    #[test]
    fn turn_flips_only_on_accepted_moves(commands in prop::collection::vec(command(), 0..400)) {
        let mut engine = GameEngine::new();

        for command in commands {
            let turn = engine.turn();
            let board = engine.board().clone();
            let outcome = engine.apply(command);

            match outcome {
                Outcome::Confirm(ConfirmOutcome::Moved(_)) => {
                    prop_assert_eq!(engine.turn(), turn.opponent());
                    prop_assert_ne!(engine.board(), &board);
                }
                _ => {
                    prop_assert_eq!(engine.turn(), turn);
                    prop_assert_eq!(engine.board(), &board);
                }
            }
        }
    }

    #[test]
    fn cursor_stays_on_board(commands in prop::collection::vec(command(), 0..400)) {
        let mut engine = GameEngine::new();

        for command in commands {
            let before = engine.cursor();
            let outcome = engine.apply(command);
            prop_assert!(engine.cursor().in_bounds());
            if outcome == Outcome::Cursor(CursorOutcome::Blocked) {
                prop_assert_eq!(engine.cursor(), before);
            }
        }
    }

    #[test]
    fn armed_confirm_always_returns_to_idle(commands in prop::collection::vec(command(), 0..400)) {
        let mut engine = GameEngine::new();

        for command in commands {
            let armed = engine.phase().is_armed();
            engine.apply(command);
            if armed && command == Command::Confirm {
                prop_assert_eq!(engine.phase(), Phase::Idle);
            }
        }
    }

    #[test]
    fn confirm_on_selection_is_rejected(x in 0..BOARD_SIZE, y in 5..BOARD_SIZE) {
        let mut engine = GameEngine::new();
        let pos = Position::new(x, y);
        engine.set_cursor(pos).unwrap();

        if let ConfirmOutcome::Selected(_) = engine.toggle_select() {
            prop_assert_eq!(
                engine.toggle_select(),
                ConfirmOutcome::Rejected(GameError::InvalidMove)
            );
            prop_assert_eq!(engine.phase(), Phase::Idle);
            prop_assert_eq!(engine.board(), &Board::opening());
        }
    }
}
