use std::path::PathBuf;

use alloy_primitives::{Address, B256};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DistributorError {
    // Ledger validation errors
    #[error("Ledger contains no claim records")]
    EmptyLedger,
    #[error("Claim for {user} has {tokens} tokens but {amounts} cumulative amounts")]
    LengthMismatch {
        user: Address,
        tokens: usize,
        amounts: usize,
    },
    #[error("Got {nodes} claim records but {encoded} encoded leaves")]
    EncodingCountMismatch { nodes: usize, encoded: usize },
    #[error("Duplicate claim index {0}")]
    DuplicateIndex(u64),
    #[error("Duplicate claimant {0}")]
    DuplicateUser(Address),
    #[error("Claim index {index} is outside 0..{count}")]
    IndexOutOfRange { index: u64, count: usize },
    #[error("Claim cycle {found} does not match distribution cycle {expected}")]
    CycleMismatch { expected: u64, found: u64 },

    // Merkle tree errors
    #[error("Cannot build a merkle tree without elements")]
    EmptyTree,
    #[error("Leaf {0} is not part of the merkle tree")]
    LeafNotFound(B256),
    #[error("No claim for {0} in distribution")]
    UnknownClaimant(Address),
    #[error("Proof for {0} does not reproduce the merkle root")]
    InvalidProof(Address),
    #[error("Claim listed under {key} belongs to {user}")]
    ClaimKeyMismatch { key: Address, user: Address },

    // Ledger construction errors
    #[error("Cycle {next} must come after previous cycle {previous}")]
    CycleNotAdvanced { previous: u64, next: u64 },
    #[error("Arithmetic overflow")]
    ArithmeticOverflow,
    #[error("Invalid address: {0}")]
    InvalidAddress(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    // Configuration and publishing errors
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
    #[error("Failed to encode or decode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl DistributorError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, DistributorError>;
