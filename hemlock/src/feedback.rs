use thiserror::Error;

use crate::framework::Address;

/// Decoding failures for inbound advertisements. These should be treated as
/// warnings: the datagram is dropped and the routing table is left untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecodeError {
    /// The buffer is empty, there is not even an entry-count header.
    #[error("empty advertisement, missing entry count header")]
    MissingHeader,
    /// The buffer ends before the declared number of entries.
    #[error("truncated advertisement: {count} entries declared, need {needed} bytes, got {got}")]
    Truncated { count: u8, needed: usize, got: usize },
    /// The buffer is longer than the declared number of entries accounts for.
    #[error("advertisement length {got} inconsistent with {count} declared entries")]
    LengthMismatch { count: u8, got: usize },
    /// An entry carries a cost no well-formed sender produces (NaN or
    /// negative). +Infinity is valid, it marks a poisoned route.
    #[error("entry for {dest} carries invalid cost {cost}")]
    InvalidCost { dest: Address, cost: f32 },
}

/// Encoding failures for outbound advertisements. Hitting this means the
/// node's table outgrew the wire format; the send is skipped for the cycle.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("{routes} routes exceed the {max} entries one advertisement can carry")]
    TooManyRoutes { routes: usize, max: usize },
}
