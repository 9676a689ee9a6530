//! Run-time configuration object + fluent builder.

use crate::core::{
    constants::{
        DEFAULT_COLUMNS, DEFAULT_LABEL_MARGIN_TOP, DEFAULT_ROWS, FILLED_GLYPHS, OUTLINE_GLYPHS,
    },
    error::ConfigError,
};

/// Where the samples come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Inline `1,2,3:label` data.
    Argument(String),
    /// One value (and optional label) per stdin line.
    Stream,
    /// Upper-cased character histogram of stdin, `!` through `Z`.
    TextFrequency,
    /// Histogram of all 256 byte values of stdin.
    BinaryFrequency,
}

/// Input mode without the payload; what the CLI flags select.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Argument,
    Stream,
    TextFrequency,
    BinaryFrequency,
}

impl Mode {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Mode::Argument => "argument",
            Mode::Stream => "stream",
            Mode::TextFrequency => "txtfreq",
            Mode::BinaryFrequency => "binfreq",
        }
    }
}

/// Outline draws only the curve; filled also paints the area beneath it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Style {
    #[default]
    Outline,
    Filled,
}

/// Immutable parameters handed to the sequence builder and renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub source: Source,
    pub columns: usize,
    pub rows: usize,
    pub label_margin_top: usize,
    pub style: Style,
    pub log_scale: bool,
}

impl Config {
    #[inline]
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

/// Fluent builder; validation happens once in `build`.
#[derive(Debug)]
pub struct ConfigBuilder {
    mode: Mode,
    data: Option<String>,
    columns: usize,
    rows: usize,
    label_margin_top: usize,
    style: Style,
    log_scale: bool,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigBuilder {
    pub(crate) fn new() -> Self {
        Self {
            mode: Mode::Argument,
            data: None,
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            label_margin_top: DEFAULT_LABEL_MARGIN_TOP,
            style: Style::Outline,
            log_scale: false,
        }
    }

    #[inline]
    #[must_use]
    pub fn mode(mut self, m: Mode) -> Self {
        self.mode = m;
        self
    }
    #[inline]
    #[must_use]
    pub fn data(mut self, d: impl Into<String>) -> Self {
        self.data = Some(d.into());
        self
    }
    #[inline]
    #[must_use]
    pub fn data_opt(mut self, d: Option<String>) -> Self {
        self.data = d;
        self
    }
    #[inline]
    #[must_use]
    pub fn columns(mut self, n: usize) -> Self {
        self.columns = n;
        self
    }
    #[inline]
    #[must_use]
    pub fn rows(mut self, n: usize) -> Self {
        self.rows = n;
        self
    }
    #[inline]
    #[must_use]
    pub fn label_margin_top(mut self, n: usize) -> Self {
        self.label_margin_top = n;
        self
    }
    #[inline]
    #[must_use]
    pub fn style(mut self, s: Style) -> Self {
        self.style = s;
        self
    }
    #[inline]
    #[must_use]
    pub fn fill(self, on: bool) -> Self {
        self.style(if on { Style::Filled } else { Style::Outline })
    }
    #[inline]
    #[must_use]
    pub fn log_scale(mut self, on: bool) -> Self {
        self.log_scale = on;
        self
    }

    /// Check that exactly one data source is active and the geometry is
    /// usable.
    ///
    /// # Errors
    /// [`ConfigError`] when data is missing in argument mode, present in any
    /// other mode, looks like an unknown `--flag`, when columns/rows are 0, or
    /// when rows is too large to count steps in.
    pub fn build(self) -> Result<Config, ConfigError> {
        if let Some(flag) = self.data.as_deref().filter(|d| d.starts_with("--")) {
            return Err(ConfigError::UnrecognizedOption(flag.to_owned()));
        }
        let source = match (self.mode, self.data) {
            (Mode::Argument, Some(d)) => Source::Argument(d),
            (Mode::Argument, None) => return Err(ConfigError::MissingData),
            (mode, Some(_)) => return Err(ConfigError::UnexpectedData { mode: mode.name() }),
            (Mode::Stream, None) => Source::Stream,
            (Mode::TextFrequency, None) => Source::TextFrequency,
            (Mode::BinaryFrequency, None) => Source::BinaryFrequency,
        };
        if self.columns == 0 {
            return Err(ConfigError::Zero("columns"));
        }
        if self.rows == 0 {
            return Err(ConfigError::Zero("rows"));
        }
        // rows * palette size is the step count and must fit the step math
        let levels = OUTLINE_GLYPHS.len().max(FILLED_GLYPHS.len());
        if self
            .rows
            .checked_mul(levels)
            .is_none_or(|steps| i64::try_from(steps).is_err())
        {
            return Err(ConfigError::TooManyRows(self.rows));
        }
        Ok(Config {
            source,
            columns: self.columns,
            rows: self.rows,
            label_margin_top: self.label_margin_top,
            style: self.style,
            log_scale: self.log_scale,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = Config::builder().data("1,2").build().unwrap();
        assert_eq!(cfg.source, Source::Argument("1,2".into()));
        assert_eq!(cfg.columns, 80);
        assert_eq!(cfg.rows, 2);
        assert_eq!(cfg.label_margin_top, 1);
        assert_eq!(cfg.style, Style::Outline);
        assert!(!cfg.log_scale);
    }

    #[test]
    fn argument_mode_requires_data() {
        assert_eq!(Config::builder().build(), Err(ConfigError::MissingData));
    }

    #[test]
    fn other_modes_reject_data() {
        for mode in [Mode::Stream, Mode::TextFrequency, Mode::BinaryFrequency] {
            let err = Config::builder().mode(mode).data("1").build().unwrap_err();
            assert_eq!(err, ConfigError::UnexpectedData { mode: mode.name() });
        }
    }

    #[test]
    fn other_modes_without_data_are_fine() {
        let cfg = Config::builder().mode(Mode::BinaryFrequency).build().unwrap();
        assert_eq!(cfg.source, Source::BinaryFrequency);
    }

    #[test]
    fn unknown_flag_in_data_position() {
        let err = Config::builder().data("--bogus").build().unwrap_err();
        assert_eq!(err, ConfigError::UnrecognizedOption("--bogus".into()));
    }

    #[test]
    fn zero_geometry_is_rejected() {
        assert_eq!(
            Config::builder().data("1").rows(0).build(),
            Err(ConfigError::Zero("rows"))
        );
        assert_eq!(
            Config::builder().data("1").columns(0).build(),
            Err(ConfigError::Zero("columns"))
        );
    }

    #[test]
    fn rows_beyond_step_range_are_rejected() {
        let huge = usize::MAX / 2;
        assert_eq!(
            Config::builder().data("0").rows(huge).build(),
            Err(ConfigError::TooManyRows(huge))
        );
        assert!(Config::builder().data("0").rows(1000).build().is_ok());
    }

    #[test]
    fn fill_toggles_style() {
        let cfg = Config::builder().data("1").fill(true).build().unwrap();
        assert_eq!(cfg.style, Style::Filled);
    }
}
