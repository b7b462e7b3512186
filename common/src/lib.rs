//! # cidrex
//!
//! Expands lists of IP addresses and CIDR blocks into one address per line.
//!
//! * **[`network`]**: the address model, CIDR ranges, family filtering and
//!   line classification. No I/O.
//! * **[`expand`]**: drives a whole input stream through the network layer
//!   into an output sink.
//! * **[`config`]** and **[`error`]**: run settings and error types.

pub mod config;
pub mod error;
pub mod expand;
pub mod network;

pub use config::Config;
pub use error::{Error, ParseError};
pub use expand::{Expander, Report};
pub use network::address::Address;
pub use network::family::{Family, FamilyFilter};
pub use network::range::CidrRange;
pub use network::target::Target;
