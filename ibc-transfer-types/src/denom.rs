//! Defines the token denomination type
use core::str::FromStr;

use derive_more::Display;
use ibc_transfer_primitives::prelude::*;

use crate::error::TokenTransferError;

/// The denomination of a token, e.g. `uatom`.
///
/// The transfer message layer treats denominations as opaque names; any
/// escrow/mint bookkeeping keyed by them happens in the module keeper.
#[derive(Clone, Debug, Eq, PartialEq, PartialOrd, Ord, Hash, Display)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct BaseDenom(String);

impl BaseDenom {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for BaseDenom {
    type Err = TokenTransferError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            Err(TokenTransferError::EmptyBaseDenom)
        } else {
            Ok(BaseDenom(s.to_owned()))
        }
    }
}
