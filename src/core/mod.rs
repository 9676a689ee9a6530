//! Aggregates the “business logic” layer.

pub mod bounds;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod sequence;

// re-export frequently-used items for convenience
pub use config::{Config, ConfigBuilder, Mode, Source, Style};
pub use constants::{DEFAULT_COLUMNS, DEFAULT_LABEL_MARGIN_TOP, DEFAULT_ROWS};
pub use data::{Frequency, argument_to_sequence, datastream_to_sequence, file_freq_to_sequence};
pub use error::{ConfigError, GraphError, ParseDataError, ParseErrorKind};
pub use sequence::{Sample, Sequence};
