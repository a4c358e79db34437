use std::collections::{BTreeMap, HashSet};

use tracing::debug;

use crate::error::{DistributorError, Result};
use crate::event::DistributionBuilt;
use crate::ledger::MerkleInput;
use crate::merkle::MerkleTree;
use crate::state::{ClaimEntry, Distribution};
use crate::utils::MerkleHasher;

/**
 * Assembles the distribution document from ledger output
 *
 * @param hasher - hash primitive shared with the on-chain verifier
 * @param input - index-ordered claim records, their encodings and token totals
 *
 * Process:
 * 1. Validate the records (non-empty, dense unique indices, unique users, one cycle)
 * 2. Hash every encoded record and build the tree over the leaf set
 * 3. Fetch each record's proof in listed order and key the entry by user
 *
 * Nothing is built if validation fails.
 */
pub fn build_distribution<H: MerkleHasher>(hasher: &H, input: &MerkleInput) -> Result<Distribution> {
    let cycle = validate(input)?;

    let leaves: Vec<_> = input
        .encoded_nodes
        .iter()
        .map(|encoded| hasher.hash(encoded))
        .collect();
    let tree = MerkleTree::build(hasher, leaves.iter().copied())?;

    let mut claims = BTreeMap::new();
    for (node, leaf) in input.nodes.iter().zip(&leaves) {
        let proof = tree.proof_for(leaf)?;
        debug!(user = %node.user(), index = node.index(), proof_len = proof.len(), "claim assembled");
        claims.insert(node.user(), ClaimEntry::from_record(node, proof));
    }

    let distribution = Distribution {
        merkle_root: tree.root(),
        cycle,
        token_totals: input.totals.clone(),
        claims,
    };

    DistributionBuilt {
        merkle_root: distribution.merkle_root,
        cycle,
        claims: distribution.claims.len(),
        tokens: distribution.token_totals.len(),
        depth: tree.depth(),
    }
    .emit();

    Ok(distribution)
}

/// Returns the shared cycle of all records
fn validate(input: &MerkleInput) -> Result<u64> {
    let first = input.nodes.first().ok_or(DistributorError::EmptyLedger)?;

    if input.nodes.len() != input.encoded_nodes.len() {
        return Err(DistributorError::EncodingCountMismatch {
            nodes: input.nodes.len(),
            encoded: input.encoded_nodes.len(),
        });
    }

    let count = input.nodes.len();
    let mut indices = HashSet::with_capacity(count);
    let mut users = HashSet::with_capacity(count);

    for node in &input.nodes {
        if node.cycle() != first.cycle() {
            return Err(DistributorError::CycleMismatch {
                expected: first.cycle(),
                found: node.cycle(),
            });
        }
        if node.index() >= count as u64 {
            return Err(DistributorError::IndexOutOfRange {
                index: node.index(),
                count,
            });
        }
        if !indices.insert(node.index()) {
            return Err(DistributorError::DuplicateIndex(node.index()));
        }
        if !users.insert(node.user()) {
            return Err(DistributorError::DuplicateUser(node.user()));
        }
        // tokens/amounts pairing is enforced by ClaimRecord::new
    }

    Ok(first.cycle())
}
