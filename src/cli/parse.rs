use std::ffi::OsString;

use clap::Parser;

use crate::core::{
    config::Mode,
    constants::{DEFAULT_LABEL_MARGIN_TOP, DEFAULT_ROWS},
};

/// Top-level CLI structure.
#[derive(Parser, Debug)]
#[command(
    name = "aspark",
    version,
    args_override_self = true,
    about = "ASCII sparklines for the terminal",
    after_help = "Examples:\n  \
        aspark 1,2,3,4,10,7,6,5\n  \
        aspark --rows 4 --fill '1:mon,5:tue,3:wed'\n  \
        seq 0 40 | awk '{print sin($1/5)}' | aspark --stream\n  \
        aspark --txtfreq < README.md"
)]
pub struct Cli {
    /// Comma separated values, each `<number>` or `<number>:<label>`
    #[arg(value_name = "DATA", allow_hyphen_values = true)]
    pub data: Option<String>,

    /// Read one value per line (optionally followed by a label) from stdin
    #[arg(long, overrides_with_all = ["txtfreq", "binfreq"])]
    pub stream: bool,

    /// Chart the frequency of characters `!`..`Z` in stdin, case-folded
    #[arg(long, overrides_with_all = ["stream", "binfreq"])]
    pub txtfreq: bool,

    /// Chart the frequency of every byte value in stdin
    #[arg(long, overrides_with_all = ["stream", "txtfreq"])]
    pub binfreq: bool,

    /// Logarithmic scale
    #[arg(long)]
    pub log: bool,

    /// Fill the area under the sparkline
    #[arg(long)]
    pub fill: bool,

    /// Output width (default: $COLUMNS, then the terminal, then 80)
    #[arg(long, value_name = "N")]
    pub columns: Option<usize>,

    /// Terminal rows stacked per chart to increase resolution
    #[arg(long, value_name = "N", default_value_t = DEFAULT_ROWS)]
    pub rows: usize,

    /// Blank rows between the chart and its labels
    #[arg(long, value_name = "N", default_value_t = DEFAULT_LABEL_MARGIN_TOP)]
    pub label_margin_top: usize,
}

impl Cli {
    /// Input mode selected by the flags; the last one given wins.
    #[must_use]
    pub fn mode(&self) -> Mode {
        if self.stream {
            Mode::Stream
        } else if self.txtfreq {
            Mode::TextFrequency
        } else if self.binfreq {
            Mode::BinaryFrequency
        } else {
            Mode::Argument
        }
    }
}

/// Lower-case every `--flag` token so long options match case-insensitively.
///
/// Option values and positional data are left untouched.
pub fn normalize_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(|a| {
            let a: OsString = a.into();
            match a.to_str() {
                Some(s) if s.starts_with("--") => OsString::from(s.to_ascii_lowercase()),
                _ => a,
            }
        })
        .collect()
}
