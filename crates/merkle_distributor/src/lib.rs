/*!
 * Merkle Distributor
 *
 * Off-chain builder for cumulative reward distributions that are claimed on-chain
 * with merkle proofs.
 *
 * Key Features:
 * - Canonical merkle tree over keccak256 leaf hashes (sorted, deduplicated)
 * - Order-independent pair hashing, so proofs carry sibling values only
 * - Cumulative amounts per (user, token), letting claims be replayed idempotently
 * - Leaf encoding identical to `abi.encodePacked(index, user, cycle, tokens, cumulativeAmounts)`
 * - JSON output with checksummed addresses, hex cycle/index and decimal amounts
 *
 * Workflow:
 * 1. Reward ledger accumulates per-user rewards for a cycle (optionally seeded from the last cycle)
 * 2. Ledger is flattened into index-ordered claim records and their packed encodings
 * 3. Assembler hashes the encodings, builds the tree and attaches a proof to every claim
 * 4. Publisher writes the distribution document, named after its content hash
 * 5. Operator posts the merkle root on-chain; users claim with their proofs
 */

pub mod assembler;
pub mod config;
pub mod constants;
pub mod error;
pub mod event;
pub mod ledger;
pub mod merkle;
pub mod publish;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

pub use assembler::build_distribution;
pub use config::DistributorConfig;
pub use error::{DistributorError, Result};
pub use ledger::{MerkleInput, RewardsLedger};
pub use merkle::MerkleTree;
pub use state::*;
pub use utils::{verify, Keccak256Hasher, MerkleHasher};
