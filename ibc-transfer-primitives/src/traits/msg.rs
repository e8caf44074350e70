use core::fmt::Display;

use crate::prelude::*;
use crate::serializers;
use crate::types::Signer;

/// The contract every message must satisfy before the host's
/// transaction-processing pipeline accepts it into a block.
///
/// The pipeline calls `validate_basic` first, then verifies the transaction
/// signatures against `get_sign_bytes`/`get_signers`, and only then routes
/// the message to the handler registered under `route`.
pub trait Msg: serde::Serialize {
    /// The error type returned by `validate_basic`.
    type Error: Display;

    /// The routing key of the module that handles this message.
    fn route(&self) -> &'static str;

    /// A constant discriminator for this message, used for indexing and
    /// client-side decoding.
    fn msg_type(&self) -> &'static str;

    /// Stateless structural checks performed before the message enters
    /// consensus-relevant processing. Must not read chain state.
    fn validate_basic(&self) -> Result<(), Self::Error>;

    /// The canonical bytes the authorizing accounts sign. Map keys are
    /// sorted, so equal messages always produce identical bytes.
    fn get_sign_bytes(&self) -> Vec<u8> {
        serializers::canonical_json_bytes(self)
    }

    /// The addresses whose signatures must be present and valid, in the
    /// order the transaction layer aggregates them.
    fn get_signers(&self) -> Vec<Signer>;
}
