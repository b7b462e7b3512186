use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use anyhow::Context;
use cidrex_common::config::Config;
use cidrex_common::expand::{Expander, Report};
use tracing::debug;

/// Expands the input file (or stdin) to stdout.
///
/// Fails before writing anything if the input file cannot be opened.
/// Returns `None` when stdout was closed before the input was exhausted.
pub fn expand(input: Option<&Path>, cfg: Config) -> anyhow::Result<Option<Report>> {
    let reader: Box<dyn BufRead> = match input {
        Some(path) if path != Path::new("-") => {
            debug!("reading from {}", path.display());
            let file = File::open(path)
                .with_context(|| format!("failed to open input file {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        _ => {
            debug!("reading from stdin");
            Box::new(io::stdin().lock())
        }
    };

    expand_to(reader, io::stdout().lock(), cfg)
}

fn expand_to<R: BufRead, W: Write>(
    reader: R,
    writer: W,
    cfg: Config,
) -> anyhow::Result<Option<Report>> {
    match Expander::new(cfg).process(reader, writer) {
        Ok(report) => Ok(Some(report)),
        Err(e) if e.is_broken_pipe() => {
            debug!("output closed early");
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}
