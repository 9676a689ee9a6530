//! Block renderer: splits a sequence into terminal-wide chunks and prints
//! each one as glyph rows followed by vertical labels.
//!
//! A block has no fixed height. Rows are produced one at a time until
//! [`Chunk::has_content`] says the next one would be empty:
//! - `rows` glyph rows, always;
//! - if any sample in the chunk is labeled, `label_margin_top` blank rows;
//! - one label row per character offset, while some label is still that long.

use std::io::Write;

use tracing::trace;
use unicode_width::UnicodeWidthChar;

use crate::{
    core::{config::Config, error::GraphError, sequence::Sample, sequence::Sequence},
    render::{glyph::Palette, scale::Scale},
};

/// What a given row index of a block holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// Glyph row, 0 = top.
    Glyph(usize),
    /// Blank separator between glyphs and labels.
    Margin,
    /// Label characters at this offset.
    Label(usize),
    /// Past the end of the block.
    Done,
}

/// Label characters that would not fill exactly one cell print as this.
const WIDE_OR_CONTROL: char = '?';

/// `c` if it occupies exactly one terminal cell.
#[inline]
fn single_cell(c: char) -> char {
    if UnicodeWidthChar::width(c) == Some(1) {
        c
    } else {
        WIDE_OR_CONTROL
    }
}

/// One block's worth of samples with their precomputed steps.
pub struct Chunk<'a> {
    samples: &'a [Sample],
    steps: Vec<usize>,
    rows: usize,
    label_margin_top: usize,
    labeled: bool,
}

impl<'a> Chunk<'a> {
    #[must_use]
    pub fn new(samples: &'a [Sample], scale: &Scale, rows: usize, label_margin_top: usize) -> Self {
        Self {
            samples,
            steps: samples.iter().map(|s| scale.step(s.value)).collect(),
            rows,
            label_margin_top,
            labeled: samples.iter().any(|s| s.label.is_some()),
        }
    }

    #[inline]
    #[must_use]
    pub fn width(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn kind(&self, row: usize) -> RowKind {
        if row < self.rows {
            return RowKind::Glyph(row);
        }
        if !self.labeled {
            return RowKind::Done;
        }
        let below = row - self.rows;
        if below < self.label_margin_top {
            RowKind::Margin
        } else {
            RowKind::Label(below - self.label_margin_top)
        }
    }

    /// Whether row `row` has anything to show; the block ends at the first
    /// row for which this is false.
    #[must_use]
    pub fn has_content(&self, row: usize) -> bool {
        if self.samples.is_empty() {
            return false;
        }
        match self.kind(row) {
            RowKind::Glyph(_) | RowKind::Margin => true,
            RowKind::Label(off) => self.samples.iter().any(|s| s.label_char(off).is_some()),
            RowKind::Done => false,
        }
    }

    /// Fill `line` with row `row`, exactly [`Chunk::width`] characters.
    pub fn fill_row(&self, row: usize, palette: &Palette, line: &mut String) {
        line.clear();
        match self.kind(row) {
            RowKind::Glyph(r) => line.extend(
                self.steps
                    .iter()
                    .map(|&step| palette.glyph(step, r, self.rows).unwrap_or(' ')),
            ),
            RowKind::Label(off) => line.extend(
                self.samples
                    .iter()
                    .map(|s| s.label_char(off).map_or(' ', single_cell)),
            ),
            RowKind::Margin | RowKind::Done => {
                line.extend(std::iter::repeat_n(' ', self.width()));
            }
        }
    }
}

/// Stateless sparkline printer configured once from [`Config`].
#[derive(Debug, Clone)]
pub struct Renderer {
    columns: usize,
    rows: usize,
    label_margin_top: usize,
    log_scale: bool,
    palette: Palette,
}

impl Renderer {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            columns: config.columns.max(1),
            rows: config.rows.max(1),
            label_margin_top: config.label_margin_top,
            log_scale: config.log_scale,
            palette: Palette::for_style(config.style),
        }
    }

    /// Scale shared by every chunk of `seq`.
    #[must_use]
    pub fn scale(&self, seq: &Sequence) -> Scale {
        Scale::new(seq, self.palette.len().saturating_mul(self.rows), self.log_scale)
    }

    /// Chunks of at most `columns` samples, in order.
    pub fn chunks<'a>(&self, seq: &'a Sequence) -> impl Iterator<Item = Chunk<'a>> {
        let scale = self.scale(seq);
        let (rows, margin) = (self.rows, self.label_margin_top);
        seq.chunks(self.columns)
            .map(move |samples| Chunk::new(samples, &scale, rows, margin))
    }

    /// Print `seq` to `out`, one line per row, block after block.
    ///
    /// # Errors
    /// Write failures on `out`.
    pub fn render<W: Write>(&self, seq: &Sequence, out: &mut W) -> Result<(), GraphError> {
        let mut line = String::with_capacity(self.columns * 4);

        for (i, chunk) in self.chunks(seq).enumerate() {
            let mut row = 0;
            while chunk.has_content(row) {
                chunk.fill_row(row, &self.palette, &mut line);
                writeln!(out, "{line}")?;
                row += 1;
            }
            trace!(
                offset = i * self.columns,
                width = chunk.width(),
                rows = row,
                "rendered block"
            );
        }
        Ok(())
    }

    /// [`Renderer::render`] into a `String`.
    #[must_use]
    pub fn render_to_string(&self, seq: &Sequence) -> String {
        let mut buf = Vec::new();
        // writing to a Vec cannot fail
        let _ = self.render(seq, &mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}
