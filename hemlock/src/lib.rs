//! hemlock is an I/O-free distance-vector routing engine. Each node owns its
//! own routing state; the embedding harness supplies timers and a datagram
//! transport, and asks the engine for next-hop decisions.

pub mod codec;
pub mod concepts;
pub mod feedback;
pub mod framework;
pub mod router;
pub mod util;
