//! # Input Line Model
//!
//! Classifies one line of input. A line can be:
//! * A single IP address (e.g., `192.168.1.5`, `2001:db8::1`).
//! * A CIDR block (e.g., `192.168.1.0/24`, `2001:db8::/126`).
//!
//! Anything else, including surrounding whitespace, is rejected.

use std::iter::FusedIterator;
use std::str::FromStr;

use super::address::Address;
use super::family::Family;
use super::range::{AddressIter, CidrRange};
use crate::error::ParseError;

/// What one input line expands from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    /// A single literal address.
    Host { addr: Address },
    /// A CIDR block.
    Range { range: CidrRange },
}

impl FromStr for Target {
    type Err = ParseError;

    /// Parses a line into a `Target`.
    ///
    /// A literal address is tried first; only if that fails is the line read
    /// as `address/prefix`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseError::Empty);
        }

        if let Ok(addr) = s.parse::<Address>() {
            return Ok(Target::Host { addr });
        }

        parse_cidr_range(s)
    }
}

impl Target {
    pub fn family(&self) -> Family {
        match self {
            Target::Host { addr } => addr.family(),
            Target::Range { range } => range.family(),
        }
    }

    /// Every address this target stands for, in ascending order.
    pub fn addresses(&self) -> Addresses {
        match self {
            Target::Host { addr } => Addresses::Host(Some(*addr)),
            Target::Range { range } => Addresses::Range(range.iter()),
        }
    }
}

/// Parses CIDR notation like "192.168.1.0/24".
fn parse_cidr_range(s: &str) -> Result<Target, ParseError> {
    let Some((ip_str, prefix_str)) = s.split_once('/') else {
        return Err(ParseError::InvalidAddress(s.to_string()));
    };

    let addr = ip_str.parse::<Address>()?;
    let prefix = parse_prefix(prefix_str)?;
    let range = CidrRange::new(addr, prefix)?;

    Ok(Target::Range { range })
}

/// Decimal digits only. `u8::from_str` would also take a leading `+`.
fn parse_prefix(s: &str) -> Result<u8, ParseError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidPrefix(s.to_string()));
    }
    s.parse::<u8>()
        .map_err(|_| ParseError::InvalidPrefix(s.to_string()))
}

/// Iterator returned by [`Target::addresses`].
#[derive(Clone, Debug)]
pub enum Addresses {
    Host(Option<Address>),
    Range(AddressIter),
}

impl Iterator for Addresses {
    type Item = Address;

    fn next(&mut self) -> Option<Address> {
        match self {
            Addresses::Host(addr) => addr.take(),
            Addresses::Range(iter) => iter.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Addresses::Host(addr) => {
                let n = usize::from(addr.is_some());
                (n, Some(n))
            }
            Addresses::Range(iter) => iter.size_hint(),
        }
    }
}

impl FusedIterator for Addresses {}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
