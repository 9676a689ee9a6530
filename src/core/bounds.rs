//! Terminal width plumbing.

use terminal_size::{Width, terminal_size};
use tracing::debug;

use crate::core::constants::{COLUMNS_ENV, DEFAULT_COLUMNS};

/// Width of the attached terminal, if stdout is one.
#[inline]
#[must_use]
pub fn terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| usize::from(w))
}

/// Output width: explicit request, then `$COLUMNS`, then the terminal, then 80.
///
/// `env` is the raw value of `COLUMNS`; unparsable or zero values are
/// ignored. `probe` is only called when the first two sources are absent.
#[must_use]
pub fn resolve_columns(
    explicit: Option<usize>,
    env: Option<&str>,
    probe: impl FnOnce() -> Option<usize>,
) -> usize {
    if let Some(n) = explicit {
        return n;
    }
    if let Some(raw) = env {
        match raw.trim().parse::<usize>() {
            Ok(n) if n > 0 => return n,
            _ => debug!(value = raw, "ignoring unusable {COLUMNS_ENV}"),
        }
    }
    probe().filter(|&n| n > 0).unwrap_or(DEFAULT_COLUMNS)
}

/// [`resolve_columns`] against the live process environment.
#[must_use]
pub fn detect_columns(explicit: Option<usize>) -> usize {
    let env = std::env::var(COLUMNS_ENV).ok();
    resolve_columns(explicit, env.as_deref(), terminal_width)
}
