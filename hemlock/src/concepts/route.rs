use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use crate::framework::{Address, InterfaceId};

/// Best known path to a single destination. The destination itself is the key
/// in the owning [`RouteTable`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Additive cost to reach the destination, `f64::INFINITY` if unreachable.
    pub cost: f64,
    /// Interface toward the next hop, `None` for addresses owned by this node
    /// (local delivery).
    pub via: Option<InterfaceId>,
}

/// Destination-keyed table of best routes. At most one entry per destination;
/// entries are only ever inserted or improved, never removed.
#[serde_as]
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RouteTable {
    #[serde_as(as = "Vec<(_, _)>")]
    routes: HashMap<Address, Route>,
}

impl RouteTable {
    pub fn get(&self, dest: Address) -> Option<&Route> {
        self.routes.get(&dest)
    }

    /// Inserts or overwrites the entry for `dest`. Returns whether the stored
    /// cost or next hop actually changed.
    pub fn upsert(&mut self, dest: Address, cost: f64, via: Option<InterfaceId>) -> bool {
        let next = Route { cost, via };
        match self.routes.insert(dest, next) {
            Some(prev) => prev != next,
            None => true,
        }
    }

    /// Immutable copy of the table for serialization. Iteration order is
    /// unspecified.
    pub fn snapshot(&self) -> Vec<(Address, Route)> {
        self.routes.iter().map(|(addr, route)| (*addr, *route)).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Address, &Route)> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
