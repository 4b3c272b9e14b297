use std::fmt::Write;

use checkers_core::{BOARD_SIZE, Cell, Position, Snapshot};

fn glyph(cell: Cell, under_cursor: bool) -> char {
    match (cell, under_cursor) {
        (Cell::Empty, false) => '◦',
        (Cell::Empty, true) => '○',
        (Cell::White, false) => 'w',
        (Cell::White, true) => 'W',
        (Cell::Black, false) => 'b',
        (Cell::Black, true) => 'B',
    }
}

/// Draws the board, cursor coordinates, side to move and the status line.
pub fn render(snapshot: &Snapshot) -> String {
    let mut out = String::new();

    for y in 0..BOARD_SIZE {
        for x in 0..BOARD_SIZE {
            let pos = Position::new(x, y);
            let ch = glyph(snapshot.cell(pos), pos == snapshot.cursor);
            let (open, close) = if snapshot.selection == Some(pos) {
                ('[', ']')
            } else {
                (' ', ' ')
            };
            out.push(open);
            out.push(ch);
            out.push(close);
        }
        out.push('\n');
    }

    let _ = writeln!(out, "x: {} y: {}", snapshot.cursor.x, snapshot.cursor.y);
    let _ = writeln!(out, "turn: {}", snapshot.turn);
    let _ = writeln!(out, "{}", snapshot.status);
    out
}
