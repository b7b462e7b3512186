pub mod expand;

use std::path::PathBuf;

use cidrex_common::config::Config;
use cidrex_common::network::family::FamilyFilter;
use clap::{ArgAction, Parser};

const EXAMPLES: &str = "\
Examples:
  cidrex input.txt
  cidrex -4 input.txt
  cat input.txt | cidrex -6";

#[derive(Parser, Debug)]
#[command(name = "cidrex")]
#[command(version, about = "Expand CIDR ranges into individual IP addresses.")]
#[command(after_help = EXAMPLES)]
pub struct CommandLine {
    /// File with one IP address or CIDR range per line [default: stdin]
    pub input: Option<PathBuf>,

    /// Print only IPv4 addresses
    #[arg(short = '4', long = "ipv4")]
    pub ipv4: bool,

    /// Print only IPv6 addresses
    #[arg(short = '6', long = "ipv6")]
    pub ipv6: bool,

    /// Show more diagnostics on stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            filter: FamilyFilter::from_flags(self.ipv4, self.ipv6),
            ..Config::default()
        }
    }
}
