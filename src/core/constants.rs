//! A collection of constants.

/// Width used when neither `--columns`, `COLUMNS` nor the terminal tell us.
pub const DEFAULT_COLUMNS: usize = 80;
/// Two stacked rows give six distinct levels with a three-glyph palette.
pub const DEFAULT_ROWS: usize = 2;
/// Blank rows between the sparkline and its labels.
pub const DEFAULT_LABEL_MARGIN_TOP: usize = 1;

/// Environment variable consulted for the terminal width.
pub const COLUMNS_ENV: &str = "COLUMNS";

/// Outline palette, lowest level first.
pub const OUTLINE_GLYPHS: &[char] = &['_', '-', '`'];
/// Filled palette, lowest level first.
pub const FILLED_GLYPHS: &[char] = &['_', 'o', '#'];
/// Drawn under a filled glyph, down to the bottom glyph row.
pub const FILL_GLYPH: char = '|';

/// Text-frequency mode covers `!` through `Z`.
pub const TXTFREQ_FIRST: u8 = b'!';
pub const TXTFREQ_LAST: u8 = b'Z';
