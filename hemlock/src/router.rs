use std::collections::HashSet;
use std::fmt::{Display, Formatter};
use std::time::Duration;

use log::{error, trace, warn};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::codec;
use crate::concepts::neighbour::NeighbourTable;
use crate::concepts::packet::{AdvertEntry, Advertisement};
use crate::concepts::route::RouteTable;
use crate::feedback::DecodeError;
use crate::framework::{Address, InterfaceId, ProtocolParams, Transport};
use crate::util::{jitter_for, sum_cost};

/// Routes with this cost are unreachable.
pub const INF: f64 = f64::INFINITY;

/// Outcome of a forwarding lookup.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NextHop {
    /// The destination is owned by this node; deliver locally.
    Local,
    /// Forward out `itf` to the directly connected `neighbour`.
    Forward { itf: InterfaceId, neighbour: Address },
}

/// The per-node protocol engine. Owns the node's routing state exclusively;
/// the harness drives it through [`Router::start`], the periodic
/// [`Router::send_cycle`] and the inbound [`Router::handle_advertisement`],
/// and queries it with [`Router::route_for`].
///
/// The engine performs no I/O and holds no timers, so one execution context
/// per node (or an outer mutex) is all the synchronization it needs.
#[derive(Serialize, Deserialize)]
pub struct Router {
    pub routes: RouteTable,
    pub neighbours: NeighbourTable,
    local: HashSet<Address>,
    params: ProtocolParams,
}

impl Router {
    pub fn new(
        local: impl IntoIterator<Item = Address>,
        neighbours: NeighbourTable,
        params: ProtocolParams,
    ) -> Self {
        Router {
            routes: RouteTable::default(),
            neighbours,
            local: local.into_iter().collect(),
            params,
        }
    }

    /// Seeds the zero-cost self-route for every owned address and returns the
    /// delay after which the harness should fire the first [`send_cycle`],
    /// spread over the configured jitter window so that nodes booted together
    /// do not advertise in lockstep.
    ///
    /// [`send_cycle`]: Router::send_cycle
    pub fn start(&mut self) -> Duration {
        for addr in &self.local {
            self.routes.upsert(*addr, 0.0, None);
        }
        let seed = self.local.iter().min().copied().unwrap_or(Address(0));
        jitter_for(seed, self.params.initial_jitter)
    }

    pub fn params(&self) -> &ProtocolParams {
        &self.params
    }

    /// Addresses this node delivers locally.
    pub fn local_addresses(&self) -> impl Iterator<Item = Address> + '_ {
        self.local.iter().copied()
    }

    pub fn is_local(&self, addr: Address) -> bool {
        self.local.contains(&addr)
    }

    /// One periodic update: advertise the full table out every interface.
    /// Fires every `params().update_interval`; the harness re-schedules it.
    ///
    /// A route is poisoned (advertised at [`INF`]) on the interface it was
    /// learned over, so the next hop never routes back through us toward
    /// itself.
    pub fn send_cycle<T: Transport>(&self, transport: &mut T) {
        for neighbour in self.neighbours.neighbours() {
            let advert = self.advertisement_for(neighbour.itf);
            match codec::encode(&advert) {
                Ok(payload) => transport.send(neighbour.itf, neighbour.addr, &payload),
                Err(e) => {
                    // table outgrew the wire format; a deployment this size
                    // is misconfigured, but the node keeps running
                    error!("skipping update to {} this cycle: {e}", json!(neighbour.addr));
                }
            }
        }
    }

    fn advertisement_for(&self, itf: InterfaceId) -> Advertisement {
        let mut entries = Vec::with_capacity(self.routes.len());
        for (dest, route) in self.routes.iter() {
            let cost = if route.via == Some(itf) { INF } else { route.cost };
            entries.push(AdvertEntry { dest: *dest, cost });
        }
        Advertisement { entries }
    }

    /// Merges one inbound advertisement received on `from`. On a decode
    /// failure the table is left untouched and the error is returned for the
    /// harness to log; nothing here is fatal.
    ///
    /// A candidate replaces the stored route only when strictly cheaper, so
    /// merging is idempotent and its order across neighbours does not matter.
    /// Costs never rise: a worsened or vanished path keeps its stale entry
    /// (there is no route aging or withdrawal).
    pub fn handle_advertisement(
        &mut self,
        from: InterfaceId,
        payload: &[u8],
    ) -> Result<(), DecodeError> {
        let advert = codec::decode(payload)?;
        let Some(neighbour) = self.neighbours.link(from) else {
            warn!("dropping advertisement received on unknown interface {from}");
            return Ok(());
        };
        let link_cost = neighbour.link_cost;
        for AdvertEntry { dest, cost } in advert.entries {
            if self.local.contains(&dest) {
                // the zero-cost self-route is authoritative
                continue;
            }
            let candidate = sum_cost(link_cost, cost);
            if candidate.is_infinite() {
                // poisoned or unreachable; never worth a table entry
                continue;
            }
            let current = self.routes.get(dest).map(|route| route.cost);
            if current.map_or(true, |cur| candidate < cur) {
                trace!(
                    "route to {} now via {from} at cost {candidate}",
                    json!(dest)
                );
                self.routes.upsert(dest, candidate, Some(from));
            }
        }
        Ok(())
    }

    /// Next-hop decision for one destination. Local addresses always resolve
    /// to [`NextHop::Local`]; a missing or infinite-cost entry is no route.
    pub fn route_for(&self, dest: Address) -> Option<NextHop> {
        if self.local.contains(&dest) {
            return Some(NextHop::Local);
        }
        let route = self.routes.get(dest)?;
        if route.cost == INF {
            return None;
        }
        let itf = route.via?;
        let neighbour = self.neighbours.link(itf)?;
        Some(NextHop::Forward { itf, neighbour: neighbour.addr })
    }
}

impl Display for Router {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut entries = self.routes.snapshot();
        entries.sort_by_key(|(dest, _)| *dest);
        writeln!(f, "routes ({} destinations):", entries.len())?;
        for (dest, route) in entries {
            match route.via {
                None => writeln!(f, "  {dest} local")?,
                Some(itf) => writeln!(f, "  {dest} via {itf} cost {}", route.cost)?,
            }
        }
        Ok(())
    }
}
