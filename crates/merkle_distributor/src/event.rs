use std::path::PathBuf;

use alloy_primitives::B256;
use tracing::info;

/// Emitted once a distribution has been assembled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistributionBuilt {
    /// Root to be posted on-chain
    pub merkle_root: B256,
    /// Cycle shared by all claims
    pub cycle: u64,
    /// Number of claimants
    pub claims: usize,
    /// Number of distinct tokens distributed this cycle
    pub tokens: usize,
    /// Layers above the leaves
    pub depth: usize,
}

impl DistributionBuilt {
    pub fn emit(&self) {
        info!(
            merkle_root = %self.merkle_root,
            cycle = self.cycle,
            claims = self.claims,
            tokens = self.tokens,
            depth = self.depth,
            "distribution built"
        );
    }
}

/// Emitted when a distribution document has been written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistributionPublished {
    /// File the document was written to
    pub path: PathBuf,
    /// Keccak256 of the serialized document
    pub content_hash: B256,
    /// Root contained in the document
    pub merkle_root: B256,
    /// Cycle of the document
    pub cycle: u64,
}

impl DistributionPublished {
    pub fn emit(&self) {
        info!(
            path = %self.path.display(),
            content_hash = %self.content_hash,
            merkle_root = %self.merkle_root,
            cycle = self.cycle,
            "distribution published"
        );
    }
}
