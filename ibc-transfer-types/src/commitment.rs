//! Defines the existence-proof type carried by packet-delivery messages

use core::fmt;

use ibc_transfer_primitives::prelude::*;
use subtle_encoding::{Encoding, Hex};

/// Bytes of a single existence proof: evidence that a value is present in
/// the sending chain's committed state at a stated height.
///
/// The bytes are opaque at this layer; the proof verifier interprets them
/// against a commitment root during execution. Emptiness is the only
/// property message validation looks at, and it is reported there rather
/// than at construction so a decoded message can always be formed first and
/// rejected with a precise error kind afterwards.
#[derive(Clone, PartialEq, Eq, derive_more::AsRef, derive_more::From, derive_more::Into)]
#[as_ref(forward)]
pub struct CommitmentProof {
    bytes: Vec<u8>,
}

impl CommitmentProof {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for CommitmentProof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hex = Hex::upper_case()
            .encode_to_string(&self.bytes)
            .map_err(|_| fmt::Error)?;
        f.debug_tuple("CommitmentProof").field(&hex).finish()
    }
}

/// Proofs travel as upper-case hex strings, like every other raw byte field
/// in the message layer.
impl serde::Serialize for CommitmentProof {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        crate::serializer::ser_hex_upper(&self.bytes, serializer)
    }
}

impl<'de> serde::Deserialize<'de> for CommitmentProof {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        crate::serializer::deser_hex_upper(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use ibc_transfer_primitives::prelude::*;

    use super::CommitmentProof;

    #[test]
    fn debug_renders_hex() {
        let proof = CommitmentProof::from(vec![0xAB, 0xCD]);
        assert_eq!(format!("{proof:?}"), "CommitmentProof(\"ABCD\")");
    }

    #[test]
    fn serde_hex_round_trip() {
        let proof = CommitmentProof::from(vec![0xAB, 0xCD]);
        let json = serde_json::to_string(&proof).expect("can serialize");
        assert_eq!(json, "\"ABCD\"");
        let de: CommitmentProof = serde_json::from_str(&json).expect("can deserialize");
        assert_eq!(de, proof);
    }
}
