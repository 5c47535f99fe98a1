use std::collections::HashMap;

use anyhow::{bail, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use crate::framework::{Address, InterfaceId};

pub const DEFAULT_LINK_COST: f64 = 1.0;

/// A directly connected peer, reachable over one local interface. Immutable
/// once added to a [`NeighbourTable`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Neighbour {
    /// The local interface this neighbour sits behind. The pair
    /// (interface, address) is unique within one node.
    pub itf: InterfaceId,
    /// The neighbour's address on the routing network.
    pub addr: Address,
    /// Direct link cost to this neighbour. Lower is better.
    pub link_cost: f64,
}

impl Neighbour {
    pub fn new(itf: InterfaceId, addr: Address) -> Self {
        Self::with_cost(itf, addr, DEFAULT_LINK_COST)
    }

    pub fn with_cost(itf: InterfaceId, addr: Address, link_cost: f64) -> Self {
        Neighbour { itf, addr, link_cost }
    }
}

/// Administrative map of local interface to adjacent peer, supplied by the
/// topology layer at startup. Static once the engine is running.
#[serde_as]
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct NeighbourTable {
    #[serde_as(as = "Vec<(_, _)>")]
    links: HashMap<InterfaceId, Neighbour>,
}

impl NeighbourTable {
    pub fn new(links: impl IntoIterator<Item = Neighbour>) -> Result<Self> {
        let mut table = NeighbourTable::default();
        for neighbour in links {
            table.add(neighbour)?;
        }
        Ok(table)
    }

    pub fn add(&mut self, neighbour: Neighbour) -> Result<()> {
        if !neighbour.link_cost.is_finite() || neighbour.link_cost < 0.0 {
            bail!(
                "link cost {} to {} is not a finite non-negative number",
                neighbour.link_cost,
                neighbour.addr
            );
        }
        if neighbour.link_cost == 0.0 {
            // a free link lets equal-cost loops form
            warn!("link to {} over {} has zero cost", neighbour.addr, neighbour.itf);
        }
        if self.links.contains_key(&neighbour.itf) {
            bail!("duplicate neighbour interface {}", neighbour.itf);
        }
        self.links.insert(neighbour.itf, neighbour);
        Ok(())
    }

    /// All directly attached peers, in unspecified order.
    pub fn neighbours(&self) -> impl Iterator<Item = &Neighbour> {
        self.links.values()
    }

    pub fn link(&self, itf: InterfaceId) -> Option<&Neighbour> {
        self.links.get(&itf)
    }

    /// Reverse lookup: which interface faces the given peer.
    pub fn interface_for(&self, addr: Address) -> Option<InterfaceId> {
        self.links
            .values()
            .find(|neighbour| neighbour.addr == addr)
            .map(|neighbour| neighbour.itf)
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}
