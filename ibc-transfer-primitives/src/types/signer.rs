use derive_more::Display;

use crate::prelude::*;

/// Represents the address of the account that signs a message submitted to
/// the chain, as well as the opaque counterparty addresses carried inside
/// transfer messages.
///
/// The address encoding is host-defined; this type only knows whether the
/// address is present at all.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Signer(String);

impl Signer {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn new_empty() -> Self {
        Self::new(String::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get this address as a borrowed `&str`
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Signer {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Signer {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for Signer {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}
