//! Defines the packet type; the unit of data sent between channel endpoints
use ibc_transfer_host_types::identifiers::{ChannelId, PortId, Sequence};
use ibc_transfer_primitives::prelude::*;

use crate::error::PacketError;

/// The packet type; this is what applications send to one another.
///
/// Each application defines the structure of the `data` field; this layer
/// only checks the envelope around it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Packet {
    pub sequence: Sequence,
    pub source_port: PortId,
    pub source_channel: ChannelId,
    pub destination_port: PortId,
    pub destination_channel: ChannelId,
    #[serde(serialize_with = "crate::serializer::ser_hex_upper")]
    #[serde(deserialize_with = "crate::serializer::deser_hex_upper")]
    pub data: Vec<u8>,
    /// Block height on the destination chain after which the packet times
    /// out, disabled when it would be 0 (and rejected as such here).
    pub timeout_height: u64,
}

impl Packet {
    /// Stateless shape checks on the packet envelope, run by the messages
    /// that carry packets before those enter the transaction pipeline.
    pub fn validate_basic(&self) -> Result<(), PacketError> {
        if self.sequence.is_zero() {
            return Err(PacketError::ZeroSequence);
        }
        self.source_port
            .validate()
            .map_err(PacketError::InvalidIdentifier)?;
        self.source_channel
            .validate()
            .map_err(PacketError::InvalidIdentifier)?;
        self.destination_port
            .validate()
            .map_err(PacketError::InvalidIdentifier)?;
        self.destination_channel
            .validate()
            .map_err(PacketError::InvalidIdentifier)?;
        if self.data.is_empty() {
            return Err(PacketError::EmptyPacketData);
        }
        if self.timeout_height == 0 {
            return Err(PacketError::ZeroTimeoutHeight);
        }
        Ok(())
    }
}
