//! Defines the token transfer message type

use ibc_transfer_host_types::identifiers::{ChannelId, PortId};
use ibc_transfer_primitives::prelude::*;
use ibc_transfer_primitives::{Msg, Signer};

use crate::coin::Coins;
use crate::error::TokenTransferError;
use crate::ROUTER_KEY;

pub const TRANSFER_MSG_TYPE: &str = "transfer";

/// Message used to initiate a token transfer from a sender on the local
/// chain to a recipient on the counterparty chain.
///
/// Note that this message only names the local end of the link. The
/// destination port and channel, the packet sequence number and the timeout
/// are filled in by the transfer keeper when it builds the outgoing packet,
/// so the submitting client only has to describe the transfer itself.
#[derive(Clone, Debug, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct MsgTransfer {
    /// the port on which the packet will be sent
    pub source_port: PortId,
    /// the channel by which the packet will be sent
    pub source_channel: ChannelId,
    /// the tokens to be transferred
    pub amount: Coins,
    /// the sender address on the local chain
    pub sender: Signer,
    /// the recipient address on the destination chain
    pub receiver: Signer,
    /// indicates if the sending chain is the source chain of the tokens to
    /// be transferred
    pub source: bool,
}

impl MsgTransfer {
    /// Creates a new `MsgTransfer` instance
    pub fn new(
        source_port: PortId,
        source_channel: ChannelId,
        amount: Coins,
        sender: Signer,
        receiver: Signer,
        source: bool,
    ) -> Self {
        Self {
            source_port,
            source_channel,
            amount,
            sender,
            receiver,
            source,
        }
    }
}

impl Msg for MsgTransfer {
    type Error = TokenTransferError;

    fn route(&self) -> &'static str {
        ROUTER_KEY
    }

    fn msg_type(&self) -> &'static str {
        TRANSFER_MSG_TYPE
    }

    fn validate_basic(&self) -> Result<(), TokenTransferError> {
        self.source_port
            .validate()
            .map_err(TokenTransferError::InvalidPortId)?;
        self.source_channel
            .validate()
            .map_err(TokenTransferError::InvalidChannelId)?;
        self.amount
            .validate()
            .map_err(TokenTransferError::InvalidCoins)?;
        if !self.amount.is_all_positive() {
            return Err(TokenTransferError::NonPositiveAmount);
        }
        if self.sender.is_empty() {
            return Err(TokenTransferError::MissingSender);
        }
        if self.receiver.is_empty() {
            return Err(TokenTransferError::MissingReceiver);
        }
        Ok(())
    }

    fn get_signers(&self) -> Vec<Signer> {
        vec![self.sender.clone()]
    }
}

#[cfg(test)]
mod tests {
    use core::str::FromStr;

    use ibc_transfer_host_types::identifiers::{ChannelId, PortId};
    use ibc_transfer_primitives::prelude::*;
    use ibc_transfer_primitives::{Msg, Signer};

    use crate::coin::{Coin, Coins};
    use crate::error::TokenTransferError;
    use crate::msgs::transfer::MsgTransfer;
    use crate::ROUTER_KEY;

    const SENDER: &str = "cosmos1wxeyh7zgn4tctjzs0vtqpc6p5cxq5t2muzl7ng";
    const RECEIVER: &str = "cosmos1q6zlvs3lxr8mmq3cfwnhkgg5hhwtmfwd84qww9";

    fn coins(raw: &[&str]) -> Coins {
        Coins::new(
            raw.iter()
                .map(|c| Coin::from_str(c).expect("parse coin"))
                .collect(),
        )
    }

    fn dummy_msg_transfer(amount: Coins) -> MsgTransfer {
        MsgTransfer::new(
            PortId::transfer(),
            ChannelId::zero(),
            amount,
            Signer::new(SENDER),
            Signer::new(RECEIVER),
            true,
        )
    }

    #[test]
    fn msg_transfer_validate_basic() {
        struct Test {
            name: &'static str,
            msg: MsgTransfer,
            want_pass: bool,
        }

        let tests: Vec<Test> = vec![
            Test {
                name: "Good parameters",
                msg: dummy_msg_transfer(coins(&["100atom"])),
                want_pass: true,
            },
            Test {
                name: "Multiple sorted denominations",
                msg: dummy_msg_transfer(coins(&["5atom", "3btc", "7uatom"])),
                want_pass: true,
            },
            Test {
                name: "Zero amount",
                msg: dummy_msg_transfer(coins(&["0atom"])),
                want_pass: false,
            },
            Test {
                name: "Empty coin collection",
                msg: dummy_msg_transfer(coins(&[])),
                want_pass: false,
            },
            Test {
                name: "Duplicate denominations",
                msg: dummy_msg_transfer(coins(&["5atom", "7atom"])),
                want_pass: false,
            },
            Test {
                name: "Unsorted denominations",
                msg: dummy_msg_transfer(coins(&["3btc", "5atom"])),
                want_pass: false,
            },
            Test {
                name: "Empty sender",
                msg: MsgTransfer {
                    sender: Signer::new_empty(),
                    ..dummy_msg_transfer(coins(&["100atom"]))
                },
                want_pass: false,
            },
            Test {
                name: "Empty receiver",
                msg: MsgTransfer {
                    receiver: Signer::new_empty(),
                    ..dummy_msg_transfer(coins(&["100atom"]))
                },
                want_pass: false,
            },
        ];

        for test in tests {
            let res = test.msg.validate_basic();

            assert_eq!(
                res.is_ok(),
                test.want_pass,
                "MsgTransfer::validate_basic failed for test {}, \nmsg {:?} with error {:?}",
                test.name,
                test.msg,
                res.err(),
            );
        }
    }

    #[test]
    fn msg_transfer_error_kinds() {
        let res = dummy_msg_transfer(coins(&["0atom"])).validate_basic();
        assert!(matches!(res, Err(TokenTransferError::NonPositiveAmount)));

        let res = dummy_msg_transfer(coins(&["5atom", "7atom"])).validate_basic();
        assert!(matches!(res, Err(TokenTransferError::InvalidCoins(_))));

        let msg = MsgTransfer {
            sender: Signer::new_empty(),
            ..dummy_msg_transfer(coins(&["100atom"]))
        };
        assert!(matches!(
            msg.validate_basic(),
            Err(TokenTransferError::MissingSender)
        ));

        let msg = MsgTransfer {
            receiver: Signer::new_empty(),
            ..dummy_msg_transfer(coins(&["100atom"]))
        };
        assert!(matches!(
            msg.validate_basic(),
            Err(TokenTransferError::MissingReceiver)
        ));
    }

    #[test]
    fn msg_transfer_rejects_unvalidated_identifiers() {
        // identifiers deserialized from a client submission bypass `FromStr`;
        // `validate_basic` must catch them
        let json = format!(
            r#"{{"source_port":"p","source_channel":"channel-0","amount":[{{"denom":"atom","amount":"100"}}],"sender":"{SENDER}","receiver":"{RECEIVER}","source":true}}"#
        );
        let msg: MsgTransfer = serde_json::from_str(&json).expect("can deserialize");
        assert!(matches!(
            msg.validate_basic(),
            Err(TokenTransferError::InvalidPortId(_))
        ));

        let json = format!(
            r#"{{"source_port":"transfer","source_channel":"channel","amount":[{{"denom":"atom","amount":"100"}}],"sender":"{SENDER}","receiver":"{RECEIVER}","source":true}}"#
        );
        let msg: MsgTransfer = serde_json::from_str(&json).expect("can deserialize");
        assert!(matches!(
            msg.validate_basic(),
            Err(TokenTransferError::InvalidChannelId(_))
        ));
    }

    #[test]
    fn msg_transfer_routing() {
        let msg = dummy_msg_transfer(coins(&["100atom"]));
        assert_eq!(msg.route(), ROUTER_KEY);
        assert_eq!(msg.msg_type(), "transfer");
    }

    #[test]
    fn msg_transfer_signers_are_sender() {
        let msg = dummy_msg_transfer(coins(&["100atom"]));
        assert_eq!(msg.get_signers(), vec![Signer::new(SENDER)]);
    }

    #[test]
    fn msg_transfer_sign_bytes_deterministic() {
        let msg = dummy_msg_transfer(coins(&["100atom"]));
        let again = dummy_msg_transfer(coins(&["100atom"]));
        assert_eq!(msg.get_sign_bytes(), again.get_sign_bytes());
    }

    #[test]
    fn msg_transfer_sign_bytes_canonical() {
        let msg = dummy_msg_transfer(coins(&["100atom"]));
        let expected = format!(
            r#"{{"amount":[{{"amount":"100","denom":"atom"}}],"receiver":"{RECEIVER}","sender":"{SENDER}","source":true,"source_channel":"channel-0","source_port":"transfer"}}"#
        );
        assert_eq!(
            String::from_utf8(msg.get_sign_bytes()).expect("sign bytes are utf8"),
            expected
        );
    }
}
