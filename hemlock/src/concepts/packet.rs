use serde::{Deserialize, Serialize};

use crate::framework::Address;

/// A full-table routing update sent to one directly connected neighbour.
/// Entry order carries no meaning.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Advertisement {
    pub entries: Vec<AdvertEntry>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdvertEntry {
    pub dest: Address,
    /// Advertised reachability cost, `f64::INFINITY` for a poisoned route.
    pub cost: f64,
}
