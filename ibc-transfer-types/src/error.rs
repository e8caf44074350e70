//! Defines the error types returned by message and domain-type validation
use displaydoc::Display;
use ibc_transfer_host_types::error::IdentifierError;
use ibc_transfer_primitives::prelude::*;
use uint::FromDecStrErr;

use crate::denom::BaseDenom;

/// Errors arising from a malformed coin collection.
#[derive(Debug, Display)]
pub enum CoinError {
    /// coin denomination cannot be blank
    EmptyDenom,
    /// coin denominations must be sorted in ascending order: `{denom}` is out of place
    UnsortedDenom { denom: BaseDenom },
    /// duplicate coin denomination: `{denom}`
    DuplicateDenom { denom: BaseDenom },
}

/// Errors raised when constructing or validating a transfer message.
#[derive(Debug, Display)]
pub enum TokenTransferError {
    /// invalid source port identifier: `{0}`
    InvalidPortId(IdentifierError),
    /// invalid source channel identifier: `{0}`
    InvalidChannelId(IdentifierError),
    /// invalid transfer amount: `{0}`
    InvalidCoins(CoinError),
    /// transfer amount must be positive
    NonPositiveAmount,
    /// missing sender address
    MissingSender,
    /// missing recipient address
    MissingReceiver,
    /// invalid amount error: `{0}`
    InvalidAmount(FromDecStrErr),
    /// invalid coin string: `{coin}`
    InvalidCoin { coin: String },
    /// base denomination is empty
    EmptyBaseDenom,
}

/// Errors a packet envelope can fail its shape checks with.
#[derive(Debug, Display)]
pub enum PacketError {
    /// invalid identifier: `{0}`
    InvalidIdentifier(IdentifierError),
    /// packet sequence cannot be 0
    ZeroSequence,
    /// packet data bytes cannot be empty
    EmptyPacketData,
    /// packet timeout height cannot be 0
    ZeroTimeoutHeight,
}

/// Errors raised when validating a packet-delivery message.
#[derive(Debug, Display)]
pub enum RecvPacketError {
    /// proof height must be greater than 0
    InvalidHeight,
    /// missing proofs
    MissingProof,
    /// cannot submit an empty proof: entry `{index}` has no bytes
    EmptyProof { index: usize },
    /// missing signer address
    MissingSigner,
    /// invalid packet: `{0}`
    InvalidPacket(PacketError),
}

impl From<CoinError> for TokenTransferError {
    fn from(e: CoinError) -> Self {
        Self::InvalidCoins(e)
    }
}

impl From<PacketError> for RecvPacketError {
    fn from(e: PacketError) -> Self {
        Self::InvalidPacket(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CoinError {}

#[cfg(feature = "std")]
impl std::error::Error for TokenTransferError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self {
            Self::InvalidPortId(e) | Self::InvalidChannelId(e) => Some(e),
            Self::InvalidCoins(e) => Some(e),
            Self::InvalidAmount(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PacketError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self {
            Self::InvalidIdentifier(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RecvPacketError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self {
            Self::InvalidPacket(e) => Some(e),
            _ => None,
        }
    }
}
