//! Defines coin types; the objects that are being transferred.
use core::cmp::Ordering;
use core::fmt::{Display, Error as FmtError, Formatter};
use core::str::FromStr;

use derive_more::From;
use ibc_transfer_primitives::prelude::*;

use crate::error::{CoinError, TokenTransferError};
use crate::{Amount, BaseDenom};

/// A single token: an amount of some base denomination.
#[derive(Clone, Debug, Eq, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Coin {
    /// Denomination
    pub denom: BaseDenom,
    /// Amount
    pub amount: Amount,
}

impl Coin {
    pub fn new(denom: BaseDenom, amount: impl Into<Amount>) -> Self {
        Self {
            denom,
            amount: amount.into(),
        }
    }
}

impl FromStr for Coin {
    type Err = TokenTransferError;

    fn from_str(coin_str: &str) -> Result<Self, Self::Err> {
        // A coin string is a decimal amount immediately followed by its
        // denomination, e.g. "100atom".
        let (amount, denom) = coin_str
            .chars()
            .position(|c| !c.is_ascii_digit())
            .map(|index| coin_str.split_at(index))
            .filter(|(amount, _)| !amount.is_empty())
            .ok_or_else(|| TokenTransferError::InvalidCoin {
                coin: coin_str.to_string(),
            })?;

        Ok(Coin {
            amount: amount.parse()?,
            denom: denom.parse()?,
        })
    }
}

impl Display for Coin {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

/// An ordered collection of coins, mirroring the host chain's native
/// multi-coin value type: well-formed collections keep their coins in
/// strictly ascending denomination order, so each denomination appears at
/// most once.
///
/// Construction does not validate; a collection that entered through
/// deserialization is checked by [`Coins::validate`] when the message
/// carrying it is validated.
#[derive(Clone, Debug, Eq, PartialEq, From)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Coins(Vec<Coin>);

impl Coins {
    pub fn new(coins: Vec<Coin>) -> Self {
        Self(coins)
    }

    /// Checks that every denomination is non-blank and that coins are sorted
    /// in strictly ascending denomination order.
    pub fn validate(&self) -> Result<(), CoinError> {
        let mut previous: Option<&BaseDenom> = None;
        for coin in &self.0 {
            if coin.denom.as_str().trim().is_empty() {
                return Err(CoinError::EmptyDenom);
            }
            if let Some(prev) = previous {
                match prev.cmp(&coin.denom) {
                    Ordering::Less => {}
                    Ordering::Equal => {
                        return Err(CoinError::DuplicateDenom {
                            denom: coin.denom.clone(),
                        })
                    }
                    Ordering::Greater => {
                        return Err(CoinError::UnsortedDenom {
                            denom: coin.denom.clone(),
                        })
                    }
                }
            }
            previous = Some(&coin.denom);
        }
        Ok(())
    }

    /// Returns `true` only for a non-empty collection whose every entry is
    /// strictly positive. An empty collection carries no value to transfer
    /// and is therefore not considered positive.
    pub fn is_all_positive(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|coin| !coin.amount.is_zero())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Coin> {
        self.0.iter()
    }
}

impl From<Coin> for Coins {
    fn from(coin: Coin) -> Self {
        Self(vec![coin])
    }
}
