//! # Address Model
//!
//! A fixed-width, big-endian byte representation of a single IP address.
//!
//! Parsing and rendering go through [`std::net`], so the textual forms are
//! exactly the ones the standard library accepts and prints. Arithmetic
//! (increment, masking) works directly on the bytes and is shared by both
//! families.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use super::family::Family;
use crate::error::ParseError;

/// A single IPv4 or IPv6 address.
///
/// The family is fixed by the variant and never re-derived from the value,
/// so `::ffff:10.0.0.1` stays an IPv6 address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Address {
    V4([u8; 4]),
    V6([u8; 16]),
}

impl Address {
    pub fn family(&self) -> Family {
        match self {
            Address::V4(_) => Family::V4,
            Address::V6(_) => Family::V6,
        }
    }

    /// The address as an unsigned integer, widened to 128 bits.
    pub fn to_u128(&self) -> u128 {
        match self {
            Address::V4(bytes) => u32::from_be_bytes(*bytes) as u128,
            Address::V6(bytes) => u128::from_be_bytes(*bytes),
        }
    }

    /// An address of the same family with the given integer value. IPv4
    /// values are truncated to 32 bits.
    pub(crate) fn with_u128(&self, value: u128) -> Address {
        match self {
            Address::V4(_) => Address::V4((value as u32).to_be_bytes()),
            Address::V6(_) => Address::V6(value.to_be_bytes()),
        }
    }

    /// The next address up, or `None` when `self` is the last address of
    /// its family.
    pub fn successor(&self) -> Option<Address> {
        let mut next = *self;
        increment(next.octets_mut()).then_some(next)
    }

    /// Clears every bit after the first `prefix` bits.
    ///
    /// `prefix` must not exceed [`Family::bits`].
    pub fn masked(&self, prefix: u8) -> Address {
        debug_assert!(prefix <= self.family().bits());
        let mut out = *self;
        fill_host_bits(out.octets_mut(), prefix, false);
        out
    }

    /// Sets every bit after the first `prefix` bits.
    ///
    /// `prefix` must not exceed [`Family::bits`].
    pub fn with_host_bits_set(&self, prefix: u8) -> Address {
        debug_assert!(prefix <= self.family().bits());
        let mut out = *self;
        fill_host_bits(out.octets_mut(), prefix, true);
        out
    }

    fn octets_mut(&mut self) -> &mut [u8] {
        match self {
            Address::V4(bytes) => bytes,
            Address::V6(bytes) => bytes,
        }
    }
}

/// Adds one to a big-endian byte string in place.
///
/// Returns `false` if the carry ran off the most significant byte, in which
/// case the bytes have wrapped to all zeros and must be discarded.
fn increment(bytes: &mut [u8]) -> bool {
    for byte in bytes.iter_mut().rev() {
        let (value, carry) = byte.overflowing_add(1);
        *byte = value;
        if !carry {
            return true;
        }
    }
    false
}

/// Zeroes (or sets, with `ones`) all bits past `prefix`.
fn fill_host_bits(bytes: &mut [u8], prefix: u8, ones: bool) {
    let prefix = prefix as usize;
    for (i, byte) in bytes.iter_mut().enumerate() {
        let start = i * 8;
        if prefix >= start + 8 {
            continue;
        }
        let network_mask: u8 = if prefix <= start {
            0
        } else {
            0xFF << (8 - (prefix - start))
        };
        *byte = if ones {
            *byte | !network_mask
        } else {
            *byte & network_mask
        };
    }
}

impl FromStr for Address {
    type Err = ParseError;

    /// Parses a literal address. Whitespace is not trimmed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseError::Empty);
        }
        s.parse::<IpAddr>()
            .map(Address::from)
            .map_err(|_| ParseError::InvalidAddress(s.to_string()))
    }
}

impl From<IpAddr> for Address {
    fn from(ip: IpAddr) -> Self {
        match ip {
            IpAddr::V4(v4) => Address::V4(v4.octets()),
            IpAddr::V6(v6) => Address::V6(v6.octets()),
        }
    }
}

impl From<Ipv4Addr> for Address {
    fn from(ip: Ipv4Addr) -> Self {
        Address::V4(ip.octets())
    }
}

impl From<Ipv6Addr> for Address {
    fn from(ip: Ipv6Addr) -> Self {
        Address::V6(ip.octets())
    }
}

impl From<Address> for IpAddr {
    fn from(addr: Address) -> Self {
        match addr {
            Address::V4(bytes) => IpAddr::V4(Ipv4Addr::from(bytes)),
            Address::V6(bytes) => IpAddr::V6(Ipv6Addr::from(bytes)),
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&IpAddr::from(*self), f)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
