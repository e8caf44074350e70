//! Defines identifier types

mod channel_id;
mod port_id;
mod sequence;

pub use channel_id::*;
pub use port_id::*;
pub use sequence::*;
