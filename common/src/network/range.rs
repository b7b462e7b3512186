//! # CIDR Range Model
//!
//! Provides a power-of-two aligned block of addresses (e.g. `192.168.1.0/24`
//! or `2001:db8::/126`) and a lazy iterator over every address in it.
//!
//! This module is used by [`crate::network::target::Target`] to represent
//! lines written in CIDR notation.

use std::iter::FusedIterator;

use super::address::Address;
use super::family::Family;
use crate::error::ParseError;

/// A CIDR block. The base address is always masked to the prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CidrRange {
    network: Address,
    prefix: u8,
}

impl CidrRange {
    /// Creates the block containing `addr` (e.g. `192.168.1.42/24` becomes
    /// `192.168.1.0/24`).
    pub fn new(addr: Address, prefix: u8) -> Result<Self, ParseError> {
        let family = addr.family();
        if prefix > family.bits() {
            return Err(ParseError::PrefixOutOfRange { prefix, family });
        }
        Ok(Self {
            network: addr.masked(prefix),
            prefix,
        })
    }

    pub fn family(&self) -> Family {
        self.network.family()
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// First address of the block.
    pub fn network(&self) -> Address {
        self.network
    }

    /// Last address of the block (the broadcast address for IPv4).
    pub fn last(&self) -> Address {
        self.network.with_host_bits_set(self.prefix)
    }

    /// Number of free bits after the prefix.
    pub fn host_bits(&self) -> u8 {
        self.family().bits() - self.prefix
    }

    /// Number of addresses in the block, or `None` for `::/0`, whose 2^128
    /// addresses do not fit in a `u128`.
    pub fn size(&self) -> Option<u128> {
        1u128.checked_shl(self.host_bits() as u32)
    }

    pub fn contains(&self, addr: &Address) -> bool {
        addr.family() == self.family() && addr.masked(self.prefix) == self.network
    }

    /// Iterates from the network address up to and including [`Self::last`].
    pub fn iter(&self) -> AddressIter {
        AddressIter {
            next: Some(self.network),
            last: self.last(),
        }
    }
}

impl IntoIterator for &CidrRange {
    type Item = Address;
    type IntoIter = AddressIter;

    fn into_iter(self) -> AddressIter {
        self.iter()
    }
}

/// Ascending walk over a [`CidrRange`].
#[derive(Clone, Debug)]
pub struct AddressIter {
    next: Option<Address>,
    last: Address,
}

impl AddressIter {
    /// Addresses left to yield, `None` if that count overflows `u128`.
    fn remaining(&self) -> Option<u128> {
        match self.next {
            Some(next) => (self.last.to_u128() - next.to_u128()).checked_add(1),
            None => Some(0),
        }
    }
}

impl Iterator for AddressIter {
    type Item = Address;

    fn next(&mut self) -> Option<Address> {
        let current = self.next?;
        // Stopping on `last` rather than on a failed increment keeps `/0`
        // from wrapping around to the zero address.
        self.next = if current == self.last {
            None
        } else {
            current.successor()
        };
        Some(current)
    }

    /// Jumps straight to the `n`th address instead of stepping through the
    /// ones before it.
    fn nth(&mut self, n: usize) -> Option<Address> {
        let current = self.next?;
        match self.remaining() {
            Some(left) if n as u128 >= left => {
                self.next = None;
                None
            }
            _ => {
                self.next = Some(current.with_u128(current.to_u128() + n as u128));
                self.next()
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining().map(usize::try_from) {
            Some(Ok(n)) => (n, Some(n)),
            _ => (usize::MAX, None),
        }
    }
}

impl FusedIterator for AddressIter {}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
