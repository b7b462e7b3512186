use std::net::{Ipv4Addr, Ipv6Addr};

use cidrex_common::network::address::Address;
use cidrex_common::network::range::CidrRange;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SEED: u64 = 0x00c1_d4e5;

fn rng() -> StdRng {
    StdRng::seed_from_u64(SEED)
}

/// Calls `successor` `steps` times.
fn step(mut addr: Address, steps: u32) -> Option<Address> {
    for _ in 0..steps {
        addr = addr.successor()?;
    }
    Some(addr)
}

#[test]
fn ipv4_increment_matches_integer_addition() {
    let mut rng = rng();
    for _ in 0..500 {
        let start: u32 = rng.random();
        let steps: u32 = rng.random_range(0..2_000);
        let got = step(Address::from(Ipv4Addr::from(start)), steps);
        let want = start
            .checked_add(steps)
            .map(|n| Address::from(Ipv4Addr::from(n)));
        assert_eq!(got, want, "{start} + {steps}");
    }
}

#[test]
fn ipv6_increment_matches_integer_addition() {
    let mut rng = rng();
    for _ in 0..500 {
        // Bias towards long runs of 0xff so carries cross many bytes.
        let start: u128 = rng.random::<u128>() | ((1u128 << rng.random_range(0..128u32)) - 1);
        let steps: u32 = rng.random_range(0..2_000);
        let got = step(Address::from(Ipv6Addr::from(start)), steps);
        let want = start
            .checked_add(steps as u128)
            .map(|n| Address::from(Ipv6Addr::from(n)));
        assert_eq!(got, want, "{start:#x} + {steps}");
    }
}

#[test]
fn random_ipv4_blocks_have_expected_shape() {
    let mut rng = rng();
    for _ in 0..200 {
        let base: u32 = rng.random();
        let prefix: u8 = rng.random_range(20..=32);
        let range = CidrRange::new(Address::from(Ipv4Addr::from(base)), prefix).unwrap();

        let addrs: Vec<Address> = range.iter().collect();
        let mask = u32::MAX.checked_shl(32 - prefix as u32).unwrap_or(0);

        assert_eq!(addrs.len() as u128, range.size().unwrap());
        assert_eq!(addrs.len(), 1 << (32 - prefix));
        assert_eq!(addrs[0], Address::from(Ipv4Addr::from(base & mask)));
        assert_eq!(addrs[addrs.len() - 1], Address::from(Ipv4Addr::from(base | !mask)));
        assert!(addrs.windows(2).all(|w| w[1].to_u128() == w[0].to_u128() + 1));
        assert!(addrs.iter().all(|a| range.contains(a)));
    }
}

#[test]
fn random_ipv6_blocks_have_expected_shape() {
    let mut rng = rng();
    for _ in 0..200 {
        let base: u128 = rng.random();
        let prefix: u8 = rng.random_range(116..=128);
        let range = CidrRange::new(Address::from(Ipv6Addr::from(base)), prefix).unwrap();

        let mut addrs: Vec<Address> = Vec::new();
        for addr in &range {
            addrs.push(addr);
        }
        let mask = u128::MAX.checked_shl(128 - prefix as u32).unwrap_or(0);

        assert_eq!(addrs.len(), 1 << (128 - prefix));
        assert_eq!(addrs[0].to_u128(), base & mask);
        assert_eq!(addrs[addrs.len() - 1].to_u128(), base | !mask);
        assert!(addrs.windows(2).all(|w| w[1] > w[0]));
    }
}
