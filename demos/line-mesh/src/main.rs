use std::collections::HashMap;

use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use hemlock::concepts::neighbour::{Neighbour, NeighbourTable};
use hemlock::framework::{Address, InterfaceId, ProtocolParams, Transport};
use hemlock::router::{NextHop, Router};

const BOB: Address = Address(0x0a00_0001); // 10.0.0.1
const EVE: Address = Address(0x0a00_0002); // 10.0.0.2
const ALICE: Address = Address(0x0a00_0003); // 10.0.0.3

/// Datagrams in flight; both ends of a link name it by the same interface id,
/// so a datagram is handled on the receiver's same-named interface.
#[derive(Default)]
struct Wire {
    sent: Vec<(InterfaceId, Address, Vec<u8>)>,
}

impl Transport for Wire {
    fn send(&mut self, itf: InterfaceId, dest: Address, payload: &[u8]) {
        self.sent.push((itf, dest, payload.to_vec()));
    }
}

fn main() -> anyhow::Result<()> {
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    // we have the following connection: bob <-> eve <-> alice

    let mut nodes: HashMap<Address, Router> = HashMap::new();

    let links = NeighbourTable::new([Neighbour::new(InterfaceId(1), EVE)])?;
    nodes.insert(BOB, Router::new([BOB], links, ProtocolParams::default()));

    let links = NeighbourTable::new([
        Neighbour::new(InterfaceId(1), BOB),
        Neighbour::new(InterfaceId(2), ALICE),
    ])?;
    nodes.insert(EVE, Router::new([EVE], links, ProtocolParams::default()));

    let links = NeighbourTable::new([Neighbour::new(InterfaceId(2), EVE)])?;
    nodes.insert(ALICE, Router::new([ALICE], links, ProtocolParams::default()));

    for (addr, node) in &mut nodes {
        let delay = node.start();
        let period = node.params().update_interval;
        log::info!("{addr} sends its first update after {delay:?}, then every {period:?}");
    }

    // lets simulate routing!

    let mut in_flight: Vec<(InterfaceId, Address, Vec<u8>)> = Vec::new();
    for step in 0..3 {
        // deliver the previous cycle's advertisements
        for (itf, dest, payload) in in_flight.drain(..) {
            if let Some(node) = nodes.get_mut(&dest) {
                node.handle_advertisement(itf, &payload)?;
            }
        }

        // every node advertises to its neighbours
        let mut wire = Wire::default();
        for node in nodes.values() {
            node.send_cycle(&mut wire);
        }
        in_flight = wire.sent;

        // lets observe bob's route table:
        println!("bob's routes in step {step}:\n{}", nodes[&BOB]);
    }

    // and ask bob's forwarding layer where a packet for alice should go
    match nodes[&BOB].route_for(ALICE) {
        Some(NextHop::Forward { itf, neighbour }) => {
            println!("bob forwards traffic for {ALICE} out {itf} toward {neighbour}")
        }
        Some(NextHop::Local) => println!("{ALICE} is bob himself?!"),
        None => println!("bob has no route to {ALICE}"),
    }

    Ok(())

    // OUTPUT:
    // bob's routes in step 0:
    // routes (1 destinations):
    //   10.0.0.1 local
    //
    // bob's routes in step 1:
    // routes (2 destinations):
    //   10.0.0.1 local
    //   10.0.0.2 via if1 cost 1
    //
    // bob's routes in step 2:
    // routes (3 destinations):
    //   10.0.0.1 local
    //   10.0.0.2 via if1 cost 1
    //   10.0.0.3 via if1 cost 2
    //
    // bob forwards traffic for 10.0.0.3 out if1 toward 10.0.0.2
}
