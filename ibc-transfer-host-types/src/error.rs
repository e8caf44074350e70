//! Errors produced when parsing and validating identifiers.

use displaydoc::Display;
use ibc_transfer_primitives::prelude::*;

/// Errors that arise when parsing identifiers.
#[derive(Debug, Display)]
pub enum IdentifierError {
    /// identifier `{id}` has invalid length; must be between [`{min}`,`{max}`]
    InvalidLength { id: String, min: u64, max: u64 },
    /// identifier `{id}` can only contain alphanumeric characters or `.`, `_`, `+`, `-`, `#`, `[`, `]`, `<`, `>`
    InvalidCharacter { id: String },
    /// identifier `{prefix}` is not in the `{{name}}-{{u64}}` format
    InvalidPrefix { prefix: String },
}

#[cfg(feature = "std")]
impl std::error::Error for IdentifierError {}
