//! # Stream Expansion
//!
//! Reads lines from a [`BufRead`], expands each one through
//! [`Target`](crate::network::target::Target) and writes the surviving
//! addresses, one per line, to a [`Write`] sink.
//!
//! Bad lines are logged and skipped. Only I/O failures end a run early.

use std::borrow::Cow;
use std::io::{BufRead, BufWriter, Write};
use std::iter::FusedIterator;

use tracing::{debug, error, trace};

use crate::config::Config;
use crate::error::{Error, ParseError, Result};
use crate::network::address::Address;
use crate::network::family::FamilyFilter;
use crate::network::target::{Addresses, Target};

/// Counters for a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Report {
    /// Lines read from the input.
    pub lines: u64,
    /// Lines that were neither an address nor a CIDR block.
    pub invalid: u64,
    /// Addresses written to the output.
    pub written: u64,
}

pub struct Expander {
    config: Config,
}

impl Expander {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Expands a single line (without its terminator) into the addresses
    /// that pass the family filter.
    pub fn expand_line(&self, line: &str) -> std::result::Result<Expansion, ParseError> {
        let target: Target = line.parse()?;
        let filter = self.config.filter;

        // Every address of a target shares its family, so a filtered-out
        // family never has to be walked.
        let addrs = if filter.includes(target.family()) {
            target.addresses()
        } else {
            Addresses::Host(None)
        };

        Ok(Expansion { addrs, filter })
    }

    /// Expands every line of `reader` into `writer`.
    ///
    /// The output is buffered and flushed before returning, also when the
    /// input contained invalid lines.
    pub fn process<R, W>(&self, mut reader: R, writer: W) -> Result<Report>
    where
        R: BufRead,
        W: Write,
    {
        let mut out = BufWriter::with_capacity(self.config.output_buffer, writer);
        let mut report = Report::default();
        let mut buf: Vec<u8> = Vec::new();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf).map_err(Error::Read)? == 0 {
                break;
            }
            report.lines += 1;

            let line: Cow<'_, str> = String::from_utf8_lossy(strip_line_ending(&buf));
            trace!("line {}: {line}", report.lines);

            match self.expand_line(&line) {
                Ok(addrs) => {
                    for addr in addrs {
                        writeln!(out, "{addr}").map_err(Error::Write)?;
                        report.written += 1;
                    }
                }
                Err(err) => {
                    report.invalid += 1;
                    error!("invalid IP or CIDR: {line}");
                    debug!("line {} rejected: {err}", report.lines);
                }
            }
        }

        out.flush().map_err(Error::Write)?;

        debug!(
            "{} lines read, {} invalid, {} addresses written",
            report.lines, report.invalid, report.written
        );
        Ok(report)
    }
}

/// Drops a trailing `\n` and, if present, the `\r` before it.
fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

/// Filtered addresses of one input line, in ascending order.
#[derive(Clone, Debug)]
pub struct Expansion {
    addrs: Addresses,
    filter: FamilyFilter,
}

impl Iterator for Expansion {
    type Item = Address;

    fn next(&mut self) -> Option<Address> {
        let filter = self.filter;
        self.addrs.find(|addr| filter.allows(addr))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.addrs.size_hint().1)
    }
}

impl FusedIterator for Expansion {}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
