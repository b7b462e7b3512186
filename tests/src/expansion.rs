mod integration;
mod properties;

use std::io::Cursor;

use cidrex_common::config::Config;
use cidrex_common::expand::{Expander, Report};
use cidrex_common::network::family::FamilyFilter;

/// Runs `input` through an expander with the given `-4` / `-6` flags and
/// returns the output lines with the report.
pub(crate) fn run(
    input: &str,
    only_ipv4: bool,
    only_ipv6: bool,
) -> anyhow::Result<(Vec<String>, Report)> {
    let expander = Expander::new(Config {
        filter: FamilyFilter::from_flags(only_ipv4, only_ipv6),
        ..Config::default()
    });

    let mut output: Vec<u8> = Vec::new();
    let report = expander.process(Cursor::new(input), &mut output)?;
    let lines = String::from_utf8(output)?
        .lines()
        .map(str::to_owned)
        .collect();

    Ok((lines, report))
}
