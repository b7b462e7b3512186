//! # Address Families
//!
//! Classification of addresses into IPv4 / IPv6 and the output filter
//! selected on the command line.

use std::fmt;

use super::address::Address;

/// The two address-length classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// 4-byte addresses.
    V4,
    /// 16-byte addresses.
    V6,
}

impl Family {
    /// Width of an address in bits.
    pub const fn bits(self) -> u8 {
        match self {
            Family::V4 => 32,
            Family::V6 => 128,
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Family::V4 => f.write_str("IPv4"),
            Family::V6 => f.write_str("IPv6"),
        }
    }
}

/// Which families make it to the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FamilyFilter {
    pub ipv4: bool,
    pub ipv6: bool,
}

impl FamilyFilter {
    /// Lets every address through.
    pub const ALL: FamilyFilter = FamilyFilter {
        ipv4: true,
        ipv6: true,
    };

    /// Builds the filter from the `-4` / `-6` flags.
    ///
    /// Asking for exactly one family restricts the output to it. Asking for
    /// neither or both keeps everything.
    pub fn from_flags(only_ipv4: bool, only_ipv6: bool) -> Self {
        if only_ipv4 == only_ipv6 {
            return Self::ALL;
        }
        Self {
            ipv4: only_ipv4,
            ipv6: only_ipv6,
        }
    }

    pub fn includes(&self, family: Family) -> bool {
        match family {
            Family::V4 => self.ipv4,
            Family::V6 => self.ipv6,
        }
    }

    /// Emit-or-suppress decision for a single address.
    pub fn allows(&self, addr: &Address) -> bool {
        self.includes(addr.family())
    }
}

impl Default for FamilyFilter {
    fn default() -> Self {
        Self::ALL
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
