//! Public-facing crate root – re-exports + one-shot helper.

pub mod cli;
pub mod core;
pub mod render;

pub use crate::core::{
    config::{Config, ConfigBuilder, Mode, Source, Style},
    data::{Frequency, argument_to_sequence, datastream_to_sequence, file_freq_to_sequence},
    error::{ConfigError, GraphError, ParseDataError, ParseErrorKind},
    sequence::{Sample, Sequence},
};

pub use render::{Renderer, RowKind};

/// Render inline `1,2,3:label` data to a string with `config`'s geometry.
///
/// `config.source` is ignored; `data` is always parsed in argument mode.
///
/// # Errors
/// [`GraphError::Data`] when `data` is malformed.
pub fn spark_str(data: &str, config: &Config) -> Result<String, GraphError> {
    let seq = argument_to_sequence(data)?;
    Ok(Renderer::new(config).render_to_string(&seq))
}
