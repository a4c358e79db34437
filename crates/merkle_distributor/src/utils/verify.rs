use alloy_primitives::B256;

use super::MerkleHasher;

/// Recomputes the root from `leaf` and its proof and compares it with `root`.
///
/// Same fold the claim contract performs: each sibling is combined with the
/// running hash using the sorted-pair rule. Levels where the node was promoted
/// without a sibling contribute no proof element, so they are skipped naturally.
pub fn verify<H: MerkleHasher>(hasher: &H, proof: &[B256], root: B256, leaf: B256) -> bool {
    let computed = proof
        .iter()
        .fold(leaf, |current, sibling| hasher.combine(&current, sibling));
    computed == root
}
