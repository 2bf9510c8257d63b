//! Formats a solved assignment as a printable grid.
//!
//! A pure output step: the solver hands over a complete assignment and this
//! module turns it into text. Blocked cells render as `█`, fillable cells
//! show their letter (or a space if the assignment leaves them open).

use std::path::Path;

use crate::{
    error::{Error, Result},
    puzzle::Crossword,
    solver::Assignment,
};

/// Lays the assigned words onto the grid, one letter per cell.
pub fn letter_grid(crossword: &Crossword, assignment: &Assignment) -> Vec<Vec<Option<char>>> {
    let mut letters = vec![vec![None; crossword.width()]; crossword.height()];
    for (slot, word) in assignment {
        for (k, (row, col)) in slot.cells().enumerate() {
            letters[row][col] = Some(word.as_bytes()[k] as char);
        }
    }
    letters
}

/// Renders the filled grid as terminal text, one line per row.
pub fn render_text(crossword: &Crossword, assignment: &Assignment) -> String {
    let letters = letter_grid(crossword, assignment);
    let mut out = String::new();
    for row in 0..crossword.height() {
        for col in 0..crossword.width() {
            if crossword.is_fillable(row, col) {
                out.push(letters[row][col].unwrap_or(' '));
            } else {
                out.push('█');
            }
        }
        out.push('\n');
    }
    out
}

/// Writes the text rendering to `path`.
pub fn save_text(crossword: &Crossword, assignment: &Assignment, path: &Path) -> Result<()> {
    std::fs::write(path, render_text(crossword, assignment)).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}
