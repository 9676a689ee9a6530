//! Glyph palettes and per-row glyph selection.

use crate::core::{
    config::Style,
    constants::{FILL_GLYPH, FILLED_GLYPHS, OUTLINE_GLYPHS},
};

/// Ordered glyphs, lowest level first, plus what to draw beneath the curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    glyphs: &'static [char],
    filler: Option<char>,
}

impl Palette {
    #[must_use]
    pub const fn for_style(style: Style) -> Self {
        match style {
            Style::Outline => Self {
                glyphs: OUTLINE_GLYPHS,
                filler: None,
            },
            Style::Filled => Self {
                glyphs: FILLED_GLYPHS,
                filler: Some(FILL_GLYPH),
            },
        }
    }

    /// Number of levels one terminal row can show.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.glyphs.len()
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// Glyph shown on glyph row `row` (0 = top) of `rows` for a sample at
    /// `step`, or `None` when that cell is blank.
    ///
    /// Row `row` covers steps `(rows - row - 1) * P .. (rows - row) * P`.
    /// Cells below the covering row get the filler, if any.
    #[inline]
    #[must_use]
    pub fn glyph(&self, step: usize, row: usize, rows: usize) -> Option<char> {
        let floor = (rows - row - 1).saturating_mul(self.len());
        if step < floor {
            return None;
        }
        match self.glyphs.get(step - floor) {
            Some(&c) => Some(c),
            None => self.filler,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::for_style(Style::Outline)
    }
}
