//! Text rendering of the board.

use strictly_grid::GameState;
use unicode_width::UnicodeWidthStr;

/// Draws the board as an ASCII table, one table row per board row.
///
/// Empty squares are blank; occupied squares show the occupant's glyph.
/// Cells are as wide as the widest glyph so wide characters line up.
///
/// ```text
/// +---+---+---+
/// | X |   | O |
/// +---+---+---+
/// ```
pub fn render_board(game: &GameState) -> String {
    let width = game
        .players()
        .iter()
        .map(|(_, p)| p.glyph().as_str().width())
        .max()
        .unwrap_or(1)
        .max(1);

    let mut separator = String::from("+");
    for _ in 0..game.size() {
        separator.push_str(&"-".repeat(width + 2));
        separator.push('+');
    }
    separator.push('\n');

    let mut out = separator.clone();
    for row in game.board().rows() {
        out.push('|');
        for square in row {
            let glyph = square
                .occupant()
                .map(|id| game.player(id).glyph().as_str())
                .unwrap_or(" ");
            let pad = width.saturating_sub(glyph.width());
            out.push_str(&format!(" {}{} |", glyph, " ".repeat(pad)));
        }
        out.push('\n');
        out.push_str(&separator);
    }
    out
}
