use std::fmt::{Display, Formatter};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Address of a node on the routing network, MUST be unique across the
/// network. The wire format carries it as a 32-bit word; `Display` renders it
/// dotted-quad for readability.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct Address(pub u32);

impl Display for Address {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let [a, b, c, d] = self.0.to_be_bytes();
        write!(f, "{a}.{b}.{c}.{d}")
    }
}

/// Identifies one local interface of a node. Only meaningful on the node that
/// owns it; two nodes may use the same id for unrelated interfaces.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct InterfaceId(pub u32);

impl Display for InterfaceId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "if{}", self.0)
    }
}

/// Datagram sender supplied by the harness. The engine hands every encoded
/// advertisement to this, addressed to a directly connected neighbour; it
/// never blocks on the result.
pub trait Transport {
    fn send(&mut self, itf: InterfaceId, dest: Address, payload: &[u8]);
}

/// Protocol timing parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProtocolParams {
    /// Period of the full-table advertisement cycle.
    pub update_interval: Duration,
    /// Window over which the first advertisement of each node is spread, so
    /// that nodes booted together do not burst in lockstep.
    pub initial_jitter: Duration,
}

impl Default for ProtocolParams {
    fn default() -> Self {
        Self {
            update_interval: Duration::from_secs(2),
            initial_jitter: Duration::from_millis(250),
        }
    }
}
