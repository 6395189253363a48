//! Plain-text board rendering
//!
//! Draws both boards (Upper above Lower, row 0 at the bottom of each) with
//! the current selection and its highlight set:
//!
//! ```text
//!  r / b   red / black man       R / B   king
//!  [r]     selected piece        *       candidate square
//!  .       empty dark square
//! ```

use std::fmt::Write;

use crate::game::components::{GameState, MoveRecord, Piece};
use crate::game::rules::board_state::pieces_on;
use crate::game::types::{Board, CandidateMoves, PieceColor, Square};

fn piece_char(piece: &Piece) -> char {
    match (piece.color, piece.is_king) {
        (PieceColor::Red, false) => 'r',
        (PieceColor::Red, true) => 'R',
        (PieceColor::Black, false) => 'b',
        (PieceColor::Black, true) => 'B',
    }
}

fn cell(state: &GameState, highlights: &CandidateMoves, square: Square) -> String {
    let occupants = pieces_on(state, square);
    let highlighted = highlights.contains(&square);

    match occupants.first() {
        Some(piece) => {
            let c = piece_char(piece);
            if state.selected_piece_id() == Some(&piece.id) {
                format!("[{c}]")
            } else if highlighted {
                format!("*{c}*")
            } else {
                format!(" {c} ")
            }
        }
        None if highlighted => " * ".to_string(),
        None if square.is_playable() => " . ".to_string(),
        None => "   ".to_string(),
    }
}

/// Render one board
pub fn render_board(state: &GameState, board: Board) -> String {
    let size = state.board_size();
    let highlights = state.highlights();
    let mut out = String::new();

    let _ = writeln!(out, "{} board", board.name().to_uppercase());
    for row in (0..size).rev() {
        let _ = write!(out, "{row:>2} |");
        for col in 0..size {
            out.push_str(&cell(state, &highlights, Square::new(row, col, board)));
        }
        out.push_str("|\n");
    }
    out.push_str("    ");
    for col in 0..size {
        let _ = write!(out, "{col:^3}");
    }
    out.push('\n');
    out
}

/// Both boards plus a status line
pub fn render_state(state: &GameState) -> String {
    let mut out = String::new();
    out.push_str(&render_board(state, Board::Upper));
    out.push('\n');
    out.push_str(&render_board(state, Board::Lower));

    let _ = write!(out, "Current player: {}", state.current_player().name().to_uppercase());
    if let Some(id) = state.selected_piece_id() {
        let _ = write!(out, "  |  Selected: {id}");
    }
    out.push('\n');
    out
}

/// The highlight set as a list, or a hint when nothing is selected
pub fn render_moves(state: &GameState) -> String {
    let Some(id) = state.selected_piece_id() else {
        return "No piece selected".to_string();
    };
    let highlights = state.highlights();
    if highlights.is_empty() {
        return format!("{id} has no legal moves");
    }
    let list: Vec<String> = highlights.iter().map(Square::to_string).collect();
    format!("{id} can move to: {}", list.join("  "))
}

pub fn render_record(record: &MoveRecord) -> String {
    let mut line = format!("{} {} {} -> {}", record.color, record.piece_id, record.from, record.to);
    if record.crossed_boards {
        line.push_str(" (crossed)");
    }
    if record.promoted {
        line.push_str(" (crowned)");
    }
    line
}

pub fn render_history(state: &GameState) -> String {
    if state.history().is_empty() {
        return "No moves yet".to_string();
    }
    state
        .history()
        .iter()
        .enumerate()
        .map(|(i, record)| format!("{:>3}. {}", i + 1, render_record(record)))
        .collect::<Vec<_>>()
        .join("\n")
}
