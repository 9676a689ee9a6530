mod handlers;
pub mod parse;

use std::{
    ffi::OsString,
    io::{self, Read, Write},
};

use clap::Parser;
pub use parse::Cli;

use crate::core::error::GraphError;

/// Run against the real process arguments, stdin and stdout.
///
/// # Errors
/// Anything that should end the process with a non-success status, plus
/// clap's help/version "errors" (see [`GraphError::exit_code`]).
pub fn run() -> Result<(), GraphError> {
    run_from(std::env::args_os(), io::stdin().lock(), &mut io::stdout().lock())
}

/// [`run`] with injectable arguments (program name first) and streams.
///
/// # Errors
/// See [`run`].
pub fn run_from<I, T, R, W>(args: I, input: R, out: &mut W) -> Result<(), GraphError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    R: Read,
    W: Write,
{
    let cli = Cli::try_parse_from(parse::normalize_flags(args))?;
    handlers::spark(cli, input, out)
}
