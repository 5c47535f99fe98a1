use serde::{Deserialize, Serialize};

use hemlock::concepts::neighbour::{Neighbour, NeighbourTable};
use hemlock::framework::{Address, InterfaceId, ProtocolParams, Transport};
use hemlock::router::{NextHop, Router};

/// Captures everything a router sends during one cycle.
#[derive(Default)]
pub struct Wire {
    pub sent: Vec<(InterfaceId, Address, Vec<u8>)>,
}

impl Transport for Wire {
    fn send(&mut self, itf: InterfaceId, dest: Address, payload: &[u8]) {
        self.sent.push((itf, dest, payload.to_vec()));
    }
}

/// In-memory multi-node network. Edges are named by a shared link id that
/// both endpoints use as their interface id for that link, so a datagram sent
/// over a link arrives on the peer's same-named interface.
#[derive(Serialize, Deserialize)]
pub struct VirtualNetwork {
    pub routers: Vec<Router>,
    pub in_flight: Vec<(InterfaceId, Address, Vec<u8>)>,
}

impl VirtualNetwork {
    /// `links` entries are (link id, node a, node b, cost).
    pub fn create(nodes: &[u32], links: &[(u32, u32, u32, f64)]) -> VirtualNetwork {
        let routers = nodes
            .iter()
            .map(|&id| {
                let mut table = NeighbourTable::default();
                for &(lid, a, b, cost) in links {
                    if a == id || b == id {
                        let peer = if a == id { b } else { a };
                        table
                            .add(Neighbour::with_cost(InterfaceId(lid), Address(peer), cost))
                            .unwrap();
                    }
                }
                let mut router = Router::new([Address(id)], table, ProtocolParams::default());
                router.start();
                router
            })
            .collect();
        VirtualNetwork { routers, in_flight: Vec::new() }
    }

    pub fn get_node(&self, node: u32) -> &Router {
        self.routers
            .iter()
            .find(|r| r.is_local(Address(node)))
            .unwrap_or_else(|| panic!("no node {node} found"))
    }

    pub fn get_next_hop(&self, cur: u32, dest: u32) -> u32 {
        match self.get_node(cur).route_for(Address(dest)) {
            Some(NextHop::Forward { neighbour, .. }) => neighbour.0,
            Some(NextHop::Local) => panic!("{dest} is local to {cur}"),
            None => panic!("no route from {cur} to {dest}"),
        }
    }

    pub fn get_cost_to(&self, cur: u32, dest: u32) -> f64 {
        self.get_node(cur)
            .routes
            .get(Address(dest))
            .unwrap_or_else(|| panic!("no route from {cur} to {dest}"))
            .cost
    }

    /// Delivers last cycle's datagrams, then runs everyone's send cycle.
    pub fn tick(&mut self) {
        for (itf, dest, payload) in std::mem::take(&mut self.in_flight) {
            if let Some(router) = self.routers.iter_mut().find(|r| r.is_local(dest)) {
                router
                    .handle_advertisement(itf, &payload)
                    .expect("malformed advertisement on virtual wire");
            }
        }
        let mut wire = Wire::default();
        for router in &self.routers {
            router.send_cycle(&mut wire);
        }
        self.in_flight = wire.sent;
    }

    pub fn tick_n(&mut self, times: u32) {
        for _ in 0..times {
            self.tick();
        }
    }

    pub fn freeze(&self) -> String {
        serde_json::to_string(&self).unwrap()
    }

    pub fn restore(state: &str) -> VirtualNetwork {
        serde_json::from_str(state).unwrap()
    }
}
