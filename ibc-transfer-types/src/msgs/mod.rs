//! Message definitions for the transfer module: the transfer-initiation and
//! packet-delivery datagrams.

mod recv_packet;
mod transfer;

use ibc_transfer_primitives::Msg;
pub use recv_packet::*;
pub use transfer::*;

/// All messages handled by the transfer module.
#[derive(Clone, Debug, PartialEq, Eq, derive_more::From)]
pub enum TransferMsg {
    Transfer(MsgTransfer),
    RecvPacket(MsgRecvPacket),
}

impl TransferMsg {
    /// The routing key of the wrapped message.
    pub fn route(&self) -> &'static str {
        match self {
            TransferMsg::Transfer(msg) => msg.route(),
            TransferMsg::RecvPacket(msg) => msg.route(),
        }
    }

    /// The type discriminator of the wrapped message.
    pub fn msg_type(&self) -> &'static str {
        match self {
            TransferMsg::Transfer(msg) => msg.msg_type(),
            TransferMsg::RecvPacket(msg) => msg.msg_type(),
        }
    }
}
