//! Wire form of an advertisement, big-endian:
//!
//! ```text
//! byte 0      : entry count (u8)
//! bytes 1..   : count x { dest: u32, cost: f32 }
//! ```
//!
//! Decoding is strict: the buffer must hold exactly the declared entries, and
//! no input can make it read past the end of the slice.

use crate::concepts::packet::{AdvertEntry, Advertisement};
use crate::feedback::{DecodeError, EncodeError};
use crate::framework::Address;

pub const HEADER_LEN: usize = 1;
pub const ENTRY_LEN: usize = 8;
pub const MAX_ENTRIES: usize = u8::MAX as usize;

pub fn encode(advert: &Advertisement) -> Result<Vec<u8>, EncodeError> {
    let count = advert.entries.len();
    if count > MAX_ENTRIES {
        return Err(EncodeError::TooManyRoutes { routes: count, max: MAX_ENTRIES });
    }
    let mut buf = Vec::with_capacity(HEADER_LEN + count * ENTRY_LEN);
    buf.push(count as u8);
    for entry in &advert.entries {
        buf.extend_from_slice(&entry.dest.0.to_be_bytes());
        buf.extend_from_slice(&(entry.cost as f32).to_be_bytes());
    }
    Ok(buf)
}

pub fn decode(buf: &[u8]) -> Result<Advertisement, DecodeError> {
    let (&count, body) = buf.split_first().ok_or(DecodeError::MissingHeader)?;
    let needed = count as usize * ENTRY_LEN;
    if body.len() < needed {
        return Err(DecodeError::Truncated {
            count,
            needed: HEADER_LEN + needed,
            got: buf.len(),
        });
    }
    if body.len() > needed {
        return Err(DecodeError::LengthMismatch { count, got: buf.len() });
    }
    let mut entries = Vec::with_capacity(count as usize);
    for chunk in body.chunks_exact(ENTRY_LEN) {
        let mut word = [0u8; 4];
        word.copy_from_slice(&chunk[..4]);
        let dest = Address(u32::from_be_bytes(word));
        word.copy_from_slice(&chunk[4..]);
        let cost = f32::from_be_bytes(word);
        if cost.is_nan() || cost < 0.0 {
            return Err(DecodeError::InvalidCost { dest, cost });
        }
        entries.push(AdvertEntry { dest, cost: f64::from(cost) });
    }
    Ok(Advertisement { entries })
}
