use alloy_primitives::B256;
use tracing::trace;

use crate::error::{DistributorError, Result};
use crate::utils::MerkleHasher;

/**
 * Canonical binary merkle tree over leaf hashes
 *
 * Leaves are deduplicated and sorted ascending by byte value before any hashing
 * happens, so the root depends only on the set of leaves, never on input order.
 *
 * Tree Structure:
 * - Layer 0: sorted, unique leaf hashes
 * - Layer n+1: pairs (0,1), (2,3), ... of layer n combined with the sorted-pair rule
 * - An unpaired trailing node is promoted unchanged (no self-hash, no padding)
 * - Root: the single node of the last layer
 *
 * The tree is immutable once built.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerkleTree {
    layers: Vec<Vec<B256>>,
}

impl MerkleTree {
    pub fn build<H, I>(hasher: &H, elements: I) -> Result<Self>
    where
        H: MerkleHasher,
        I: IntoIterator<Item = B256>,
    {
        let mut leaves: Vec<B256> = elements.into_iter().collect();
        leaves.sort_unstable();
        leaves.dedup();

        if leaves.is_empty() {
            return Err(DistributorError::EmptyTree);
        }

        let mut layers = vec![leaves];
        while layers[layers.len() - 1].len() > 1 {
            let next = Self::next_layer(hasher, &layers[layers.len() - 1]);
            trace!(depth = layers.len(), width = next.len(), "merkle layer built");
            layers.push(next);
        }

        Ok(Self { layers })
    }

    fn next_layer<H: MerkleHasher>(hasher: &H, layer: &[B256]) -> Vec<B256> {
        layer
            .chunks(2)
            .map(|pair| match pair {
                [left, right] => hasher.combine(left, right),
                _ => pair[0],
            })
            .collect()
    }

    pub fn root(&self) -> B256 {
        // build() guarantees the last layer holds exactly one node
        self.layers[self.depth()][0]
    }

    /// Sorted, unique leaf hashes (layer 0)
    pub fn elements(&self) -> &[B256] {
        &self.layers[0]
    }

    pub fn layers(&self) -> &[Vec<B256>] {
        &self.layers
    }

    pub fn len(&self) -> usize {
        self.elements().len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements().is_empty()
    }

    /// Number of layers above the leaves
    pub fn depth(&self) -> usize {
        self.layers.len() - 1
    }

    pub fn contains(&self, leaf: &B256) -> bool {
        self.elements().binary_search(leaf).is_ok()
    }

    /// Generate the sibling path for `leaf`
    ///
    /// Levels where the node has no sibling (odd leftover) contribute nothing,
    /// matching the promotion rule used during construction.
    pub fn proof_for(&self, leaf: &B256) -> Result<Vec<B256>> {
        let mut index = self
            .elements()
            .binary_search(leaf)
            .map_err(|_| DistributorError::LeafNotFound(*leaf))?;

        let mut proof = Vec::with_capacity(self.depth());
        for layer in &self.layers[..self.depth()] {
            let sibling_index = if index % 2 == 0 { index + 1 } else { index - 1 };
            if let Some(sibling) = layer.get(sibling_index) {
                proof.push(*sibling);
            }
            index /= 2;
        }

        Ok(proof)
    }
}
