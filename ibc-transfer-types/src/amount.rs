//! Contains the `Amount` type, which represents amounts of tokens transferred.
use core::str::FromStr;

use derive_more::{Display, From, Into};
use ibc_transfer_primitives::prelude::*;
use ibc_transfer_primitives::serializers;
use primitive_types::U256;

use crate::error::TokenTransferError;

/// A type for representing token transfer amounts.
///
/// Amounts are unsigned; a negative quantity is unrepresentable by
/// construction.
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord, Display, From, Into)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Amount(
    #[serde(serialize_with = "serializers::serialize")]
    #[serde(deserialize_with = "deserialize")]
    U256,
);

impl Amount {
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Self)
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl AsRef<U256> for Amount {
    fn as_ref(&self) -> &U256 {
        &self.0
    }
}

impl FromStr for Amount {
    type Err = TokenTransferError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let amount = U256::from_dec_str(s).map_err(TokenTransferError::InvalidAmount)?;
        Ok(Self(amount))
    }
}

impl From<u64> for Amount {
    fn from(v: u64) -> Self {
        Self(v.into())
    }
}

fn deserialize<'de, D>(deserializer: D) -> Result<U256, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;
    U256::from_dec_str(<String>::deserialize(deserializer)?.as_str())
        .map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::Amount;

    #[test]
    fn serde_amount() {
        let value = Amount::from(42);
        let string = serde_json::to_string(&value).expect("can serde string");
        assert_eq!(string, "\"42\"");
        let binary = serde_json::to_vec(&value).expect("can serde binary");
        let de: Amount = serde_json::from_slice(binary.as_ref()).expect("can deserialize");
        assert_eq!(de, value);
    }

    #[test]
    fn parse_amount() {
        let amount: Amount = "1000000".parse().expect("can parse decimal");
        assert_eq!(amount, Amount::from(1_000_000));
        assert!("".parse::<Amount>().is_err());
        assert!("12a".parse::<Amount>().is_err());
    }

    #[test]
    fn zero_amount() {
        assert!(Amount::from(0).is_zero());
        assert!(!Amount::from(1).is_zero());
    }
}
