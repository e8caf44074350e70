use ibc_transfer_primitives::prelude::*;
use ibc_transfer_primitives::{Msg, Signer};

use crate::commitment::CommitmentProof;
use crate::error::RecvPacketError;
use crate::packet::Packet;
use crate::ROUTER_KEY;

pub const RECV_PACKET_MSG_TYPE: &str = "recv_packet";

///
/// Message definition for the "packet receiving" datagram.
///
/// Submitted by a relayer to deliver a packet sent on the counterparty
/// chain, together with the existence proofs the destination chain needs to
/// verify the packet commitment, anchored at `height`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct MsgRecvPacket {
    /// The packet to be received
    pub packet: Packet,
    /// Proofs of the packet commitment on the sending chain
    pub proofs: Vec<CommitmentProof>,
    /// Height at which the proofs in this message were taken
    pub height: u64,
    /// The relayer address that submits, and pays for, this message
    pub signer: Signer,
}

impl MsgRecvPacket {
    /// Creates a new `MsgRecvPacket` instance
    pub fn new(packet: Packet, proofs: Vec<CommitmentProof>, height: u64, signer: Signer) -> Self {
        Self {
            packet,
            proofs,
            height,
            signer,
        }
    }
}

impl Msg for MsgRecvPacket {
    type Error = RecvPacketError;

    fn route(&self) -> &'static str {
        ROUTER_KEY
    }

    fn msg_type(&self) -> &'static str {
        RECV_PACKET_MSG_TYPE
    }

    fn validate_basic(&self) -> Result<(), RecvPacketError> {
        if self.height == 0 {
            return Err(RecvPacketError::InvalidHeight);
        }
        if self.proofs.is_empty() {
            return Err(RecvPacketError::MissingProof);
        }
        // The first empty entry wins; later entries stay unchecked.
        for (index, proof) in self.proofs.iter().enumerate() {
            if proof.is_empty() {
                return Err(RecvPacketError::EmptyProof { index });
            }
        }
        if self.signer.is_empty() {
            return Err(RecvPacketError::MissingSigner);
        }
        self.packet
            .validate_basic()
            .map_err(RecvPacketError::InvalidPacket)
    }

    fn get_signers(&self) -> Vec<Signer> {
        vec![self.signer.clone()]
    }
}
