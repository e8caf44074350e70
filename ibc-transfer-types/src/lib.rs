//! Implementation of the IBC [fungible token transfer](https://github.com/cosmos/ibc/blob/main/spec/app/ics-020-fungible-token-transfer/README.md)
//! message layer: the datagrams the transfer module accepts from the
//! transaction pipeline, and the domain types they are built from.
#![no_std]
#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::disallowed_methods, clippy::disallowed_types))]
#![deny(
    warnings,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications,
    rust_2018_idioms
)]

#[cfg(any(test, feature = "std"))]
extern crate std;

mod amount;
mod coin;
mod denom;

pub use amount::*;
pub use coin::*;
pub use denom::*;
pub mod commitment;
pub mod error;
pub mod msgs;
pub mod packet;
pub mod serializer;
/// Re-exports `U256` from `primitive-types` crate for convenience.
pub use primitive_types::U256;

/// Module identifier for the token transfer application.
pub const MODULE_ID_STR: &str = "transfer";

/// The port identifier that the transfer application typically binds with.
pub const PORT_ID_STR: &str = "transfer";

/// The routing key the host dispatcher selects handlers by; all messages in
/// this crate are handled by the IBC module registered under it.
pub const ROUTER_KEY: &str = "ibc";
