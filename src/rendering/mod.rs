//! Text rendering of a generation to a console-friendly grid.
//!
//! Rows run from the highest y down to the lowest, columns from the
//! lowest x to the highest, so the output reads like ordinary graph
//! paper with y pointing up.

use crate::domain::{Bounds, Cell, State};

/// Glyph for a living cell
pub const ALIVE_GLYPH: char = '\u{25A3}'; // ▣

/// Glyph for a dead cell
pub const DEAD_GLYPH: char = '\u{25A2}'; // ▢

/// Render one cell of a state as its glyph
pub fn render_cell(cell: Cell, state: &State) -> char {
    if state.contains(cell) {
        ALIVE_GLYPH
    } else {
        DEAD_GLYPH
    }
}

/// Render a whole state as newline-terminated rows of glyphs.
///
/// Covers exactly the state's bounding box; the empty state renders as
/// the single dead cell at the origin (the degenerate 1x1 box).
pub fn render(state: &State) -> String {
    let bounds = Bounds::of(state);
    let mut out = String::new();
    for y in bounds.y_range().rev() {
        let row: Vec<String> = bounds
            .x_range()
            .map(|x| render_cell(Cell::new(x, y), state).to_string())
            .collect();
        out.push_str(&row.join(" "));
        out.push('\n');
    }
    out
}
