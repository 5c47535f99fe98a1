use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::time::Duration;

use crate::framework::Address;

/// Adds two non-negative costs, saturating at infinity.
///
/// # Examples
///
/// ```
/// use hemlock::util::sum_cost;
///
/// assert_eq!(sum_cost(1.0, 2.5), 3.5);
/// assert!(sum_cost(1.0, f64::INFINITY).is_infinite());
/// assert!(sum_cost(f64::INFINITY, f64::INFINITY).is_infinite());
/// ```
pub fn sum_cost(cost_a: f64, cost_b: f64) -> f64 {
    if cost_a.is_infinite() || cost_b.is_infinite() {
        f64::INFINITY
    } else {
        cost_a + cost_b
    }
}

/// Spreads a node's first advertisement over `window` by hashing its address.
/// Deterministic, so the engine needs no entropy source and simulations stay
/// reproducible; distinct addresses land on distinct offsets.
///
/// ```
/// use std::time::Duration;
/// use hemlock::framework::Address;
/// use hemlock::util::jitter_for;
///
/// let window = Duration::from_millis(250);
/// assert!(jitter_for(Address(7), window) < window);
/// assert_eq!(jitter_for(Address(7), Duration::ZERO), Duration::ZERO);
/// ```
pub fn jitter_for(addr: Address, window: Duration) -> Duration {
    if window.is_zero() {
        return Duration::ZERO;
    }
    let mut hasher = DefaultHasher::new();
    addr.hash(&mut hasher);
    Duration::from_nanos(hasher.finish() % window.as_nanos() as u64)
}
