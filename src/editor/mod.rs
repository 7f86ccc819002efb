//! Glyph editor state.
//!
//! The editor owns a working grid and the character it will be saved under.
//! Painting happens on the working grid only; nothing reaches the font until
//! [`Editor::save_into`] copies the grid into the store.
//!
//! Pointer painting works in strokes: pressing on a cell picks the stroke
//! value (the opposite of that cell, or "off" when erasing) and every cell
//! the pointer then passes over is set to that value until the stroke ends.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;

use hexfont_core::codec::RECORD_SEPARATOR;
use hexfont_core::{COLS, GlyphGrid, ROWS};

use crate::store::FontStore;

/// Characters offered by the picker, in display order.
///
/// The record separator is left out: a glyph stored under it could not be
/// decoded again.
pub const PALETTE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789.!?-:;()/ ";

/// Why typed input cannot be used as a glyph key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
    #[error("no character given")]
    Empty,
    #[error("{0:?} is more than one character")]
    TooLong(String),
    #[error("{0:?} cannot be stored in a font token")]
    Unencodable(char),
    #[error("{0:?} is not a displayable character")]
    NotDisplayable(char),
}

/// Turn typed input into a glyph key.
///
/// The input must be one grapheme cluster which (after optional
/// upper-casing) is a single displayable `char` other than `,`.
pub fn normalize_key(input: &str, uppercase: bool) -> Result<char, KeyError> {
    let mut graphemes = input.graphemes(true);
    let first = graphemes.next().ok_or(KeyError::Empty)?;
    if graphemes.next().is_some() {
        return Err(KeyError::TooLong(input.to_owned()));
    }

    let normalized = if uppercase {
        first.to_uppercase()
    } else {
        first.to_owned()
    };
    let mut chars = normalized.chars();
    let ch = chars.next().ok_or(KeyError::Empty)?;
    if chars.next().is_some() {
        return Err(KeyError::TooLong(normalized));
    }

    if ch == RECORD_SEPARATOR {
        return Err(KeyError::Unencodable(ch));
    }
    match UnicodeWidthChar::width(ch) {
        Some(w) if w > 0 && !ch.is_control() => Ok(ch),
        _ => Err(KeyError::NotDisplayable(ch)),
    }
}

/// Working grid plus the character it belongs to.
#[derive(Debug, Clone)]
pub struct Editor {
    current: char,
    grid: GlyphGrid,
    /// Value being painted by the active stroke.
    stroke: Option<bool>,
    uppercase: bool,
}

impl Editor {
    /// Create an editor on `first` with an empty working grid.
    pub fn new(first: char, uppercase: bool) -> Self {
        Self {
            current: first,
            grid: GlyphGrid::new(),
            stroke: None,
            uppercase,
        }
    }

    /// Character the working grid will be saved under.
    pub fn current(&self) -> char {
        self.current
    }

    pub fn grid(&self) -> &GlyphGrid {
        &self.grid
    }

    /// Retarget the working grid to the typed character.
    ///
    /// The grid itself is kept, so a drawing can be saved under a new key.
    pub fn select(&mut self, input: &str) -> Result<char, KeyError> {
        let ch = normalize_key(input, self.uppercase)?;
        self.current = ch;
        Ok(ch)
    }

    /// Switch to `ch` and load its glyph (empty if undesigned).
    pub fn load_from(&mut self, store: &FontStore, ch: char) {
        self.stroke = None;
        self.current = ch;
        self.grid = store.load(ch);
    }

    /// Copy the working grid into the store under the current character.
    pub fn save_into(&self, store: &FontStore) {
        store.save(self.current, &self.grid);
    }

    /// Flip one cell. Coordinates outside the grid are ignored.
    pub fn toggle(&mut self, row: usize, col: usize) -> Option<bool> {
        Self::in_grid(row, col).then(|| self.grid.toggle(row, col))
    }

    /// Set one cell. Coordinates outside the grid are ignored.
    pub fn paint(&mut self, row: usize, col: usize, value: bool) {
        if Self::in_grid(row, col) {
            self.grid.set(row, col, value);
        }
    }

    /// Start a stroke on a cell and return the value it paints.
    pub fn begin_stroke(&mut self, row: usize, col: usize, erase: bool) -> Option<bool> {
        if !Self::in_grid(row, col) {
            return None;
        }
        let value = !erase && !self.grid.get(row, col);
        self.stroke = Some(value);
        self.grid.set(row, col, value);
        Some(value)
    }

    /// Paint the stroke value onto a cell the pointer moved over.
    pub fn extend_stroke(&mut self, row: usize, col: usize) {
        if let Some(value) = self.stroke {
            self.paint(row, col, value);
        }
    }

    /// Finish the active stroke (pointer released or left the grid).
    pub fn end_stroke(&mut self) {
        self.stroke = None;
    }

    pub fn is_stroking(&self) -> bool {
        self.stroke.is_some()
    }

    /// Empty the working grid. The saved glyph is untouched.
    pub fn clear(&mut self) {
        self.grid.clear();
    }

    /// Pointer input is clipped to the grid.
    fn in_grid(row: usize, col: usize) -> bool {
        row < ROWS && col < COLS
    }
}
