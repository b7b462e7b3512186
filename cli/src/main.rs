mod commands;
mod terminal;

use commands::CommandLine;
use terminal::logging;
use tracing::debug;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose)?;

    let input = commands.input.as_deref();
    if let Some(report) = commands::expand::expand(input, commands.config())? {
        debug!("done: {} addresses from {} lines", report.written, report.lines);
    }
    Ok(())
}
