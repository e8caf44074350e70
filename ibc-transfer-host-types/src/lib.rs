//! Identifier domain types and validators for the IBC transfer message crates,
//! following the [`ICS-24`](https://github.com/cosmos/ibc/tree/main/spec/core/ics-024-host-requirements)
//! host requirements.
#![no_std]
#![forbid(unsafe_code)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::disallowed_methods, clippy::disallowed_types))]
#![deny(
    warnings,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications,
    rust_2018_idioms
)]

#[cfg(feature = "std")]
extern crate std;

pub mod error;
pub mod identifiers;
pub mod validate;
