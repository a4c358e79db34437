use alloy_primitives::{keccak256, B256};

use crate::constants::HASH_LENGTH;

/// Hash primitive shared by leaf hashing and pair combination.
///
/// Both must match the on-chain verifier, so a distribution is always built
/// and checked with a single hasher instance.
pub trait MerkleHasher {
    fn hash(&self, data: &[u8]) -> B256;

    /// Hashes the two children concatenated in ascending byte order.
    ///
    /// `combine(a, b) == combine(b, a)`, so a proof never needs to say which
    /// side a sibling sits on.
    fn combine(&self, a: &B256, b: &B256) -> B256 {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let mut buf = [0u8; HASH_LENGTH * 2];
        buf[..HASH_LENGTH].copy_from_slice(low.as_slice());
        buf[HASH_LENGTH..].copy_from_slice(high.as_slice());
        self.hash(&buf)
    }
}

/// Keccak-256, as used by `keccak256(...)` in Solidity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Keccak256Hasher;

impl MerkleHasher for Keccak256Hasher {
    fn hash(&self, data: &[u8]) -> B256 {
        keccak256(data)
    }
}
