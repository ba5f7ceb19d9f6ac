//! Opaque client session identifiers grouping one visitor's swipes.

use rand::{Rng, seq::SliceRandom};

const SESSION_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SESSION_ID_LEN: usize = 9;

/// Fresh opaque session identifier: nine lowercase base-36 characters.
pub fn new_session_id<R>(rng: &mut R) -> String
where
    R: Rng + ?Sized,
{
    (0..SESSION_ID_LEN)
        .filter_map(|_| SESSION_ALPHABET.choose(rng).copied().map(char::from))
        .collect()
}
