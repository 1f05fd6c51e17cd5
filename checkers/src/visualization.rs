use crate::{Board, CellsSet, Color, Coord, Piece, BOARD_SIZE};

fn piece_char(piece: &Piece) -> char {
    match (piece.color(), piece.is_king()) {
        (Color::Light, false) => '⛀',
        (Color::Light, true) => '⛁',
        (Color::Dark, false) => '⛂',
        (Color::Dark, true) => '⛃',
    }
}

/// Draws the board as text, with row 8 at the top.
///
/// Empty squares in `highlight` are marked with a dot, e.g. to show the
/// [available moves](crate::AvailableMoves) of a piece.
pub fn visualize_board(board: &Board, highlight: CellsSet) -> String {
    // Draw the top of the box
    let mut result = String::from("   ");
    for x in 0..BOARD_SIZE {
        result += &format!(" {}", (b'a' + x as u8) as char);
    }
    result += "\n  ╭";
    for _ in 0..BOARD_SIZE {
        result += "──";
    }
    result += "─╮\n";

    for y in (0..BOARD_SIZE).rev() {
        result += &format!("{} │", y + 1);
        for x in 0..BOARD_SIZE {
            let coord = Coord::new(x, y);
            let c = match board.piece_at(coord) {
                Some(piece) => piece_char(piece),
                None if highlight.contains(coord) => '·',
                None => ' ',
            };
            result.push(' ');
            result.push(c);
        }
        result += " │\n";
    }

    // Draw the bottom of the box
    result += "  ╰";
    for _ in 0..BOARD_SIZE {
        result += "──";
    }
    result += "─╯";
    result
}
