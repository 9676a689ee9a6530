use std::io::{Read, Write};

use tracing::debug;

use crate::{
    core::{bounds::detect_columns, config::Config, data::build_sequence, error::GraphError},
    render::Renderer,
};

use super::parse::Cli;

/// Build the config, read the sequence, print the chart.
pub fn spark<R: Read, W: Write>(cli: Cli, input: R, out: &mut W) -> Result<(), GraphError> {
    let cfg = Config::builder()
        .mode(cli.mode())
        .data_opt(cli.data)
        .columns(detect_columns(cli.columns))
        .rows(cli.rows)
        .label_margin_top(cli.label_margin_top)
        .fill(cli.fill)
        .log_scale(cli.log)
        .build()?;
    debug!(?cfg, "configuration");

    let seq = build_sequence(&cfg.source, input)?;
    debug!(
        samples = seq.len(),
        labeled = seq.labeled_count(),
        min = seq.min(),
        max = seq.max(),
        "sequence ready"
    );

    Renderer::new(&cfg).render(&seq, out)?;
    out.flush()?;
    Ok(())
}
