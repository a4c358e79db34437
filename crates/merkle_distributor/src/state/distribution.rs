use std::collections::{BTreeMap, HashSet};

use alloy_primitives::{Address, B256, U256};
use serde::{Deserialize, Serialize};

use crate::error::{DistributorError, Result};
use crate::state::ClaimRecord;
use crate::utils::{verify, MerkleHasher};

/**
 * Published distribution document
 *
 * This is what the publisher persists and what claimants fetch their proof from.
 * Field names follow the JSON layout the claim frontends expect (camelCase).
 *
 * Encoding:
 * - merkleRoot / proof: 0x-prefixed hex
 * - claim keys, user, tokens: EIP-55 checksummed addresses
 * - claim index / cycle: 0x-prefixed hex strings
 * - amounts: decimal strings
 * - top-level cycle: plain JSON number
 */
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Distribution {
    /// Root hash posted on-chain for this cycle
    pub merkle_root: B256,

    /// Distribution epoch shared by every claim
    pub cycle: u64,

    /// Amount of each token distributed during this cycle (informational)
    #[serde(with = "crate::utils::codec::token_amounts")]
    pub token_totals: BTreeMap<Address, U256>,

    /// Claim entries keyed by claimant
    #[serde(with = "crate::utils::codec::checksummed_keys")]
    pub claims: BTreeMap<Address, ClaimEntry>,
}

/// A claim as published, together with its inclusion proof
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimEntry {
    #[serde(with = "crate::utils::codec::hex_u64")]
    pub index: u64,
    #[serde(with = "crate::utils::codec::checksummed")]
    pub user: Address,
    #[serde(with = "crate::utils::codec::hex_u64")]
    pub cycle: u64,
    #[serde(with = "crate::utils::codec::checksummed_vec")]
    pub tokens: Vec<Address>,
    #[serde(with = "crate::utils::codec::decimal_vec")]
    pub cumulative_amounts: Vec<U256>,
    pub proof: Vec<B256>,
}

impl ClaimEntry {
    pub fn from_record(record: &ClaimRecord, proof: Vec<B256>) -> Self {
        Self {
            index: record.index(),
            user: record.user(),
            cycle: record.cycle(),
            tokens: record.tokens().to_vec(),
            cumulative_amounts: record.cumulative_amounts().to_vec(),
            proof,
        }
    }

    pub fn to_record(&self) -> Result<ClaimRecord> {
        ClaimRecord::new(
            self.index,
            self.user,
            self.cycle,
            self.tokens.clone(),
            self.cumulative_amounts.clone(),
        )
    }

    /// `(token, cumulative amount)` pairs in leaf order
    pub fn amounts(&self) -> impl Iterator<Item = (Address, U256)> + '_ {
        self.tokens
            .iter()
            .copied()
            .zip(self.cumulative_amounts.iter().copied())
    }
}

impl Distribution {
    pub fn claim(&self, user: &Address) -> Option<&ClaimEntry> {
        self.claims.get(user)
    }

    /// Check that every entry is filed under its own user, shares the document
    /// cycle, pairs tokens with amounts and has a unique index
    pub fn validate(&self) -> Result<()> {
        let mut indices = HashSet::with_capacity(self.claims.len());
        for (key, entry) in &self.claims {
            if *key != entry.user {
                return Err(DistributorError::ClaimKeyMismatch {
                    key: *key,
                    user: entry.user,
                });
            }
            if entry.cycle != self.cycle {
                return Err(DistributorError::CycleMismatch {
                    expected: self.cycle,
                    found: entry.cycle,
                });
            }
            entry.to_record()?;
            if !indices.insert(entry.index) {
                return Err(DistributorError::DuplicateIndex(entry.index));
            }
        }
        Ok(())
    }

    /// Re-encode the user's claim and check its proof against `merkle_root`
    pub fn verify_claim<H: MerkleHasher>(&self, hasher: &H, user: &Address) -> Result<bool> {
        let entry = self
            .claim(user)
            .ok_or(DistributorError::UnknownClaimant(*user))?;
        if entry.user != *user {
            return Err(DistributorError::ClaimKeyMismatch {
                key: *user,
                user: entry.user,
            });
        }
        let leaf = entry.to_record()?.leaf(hasher);
        Ok(verify(hasher, &entry.proof, self.merkle_root, leaf))
    }

    /// Check every claim, failing on the first proof that does not reach the root
    pub fn verify_all<H: MerkleHasher>(&self, hasher: &H) -> Result<()> {
        for user in self.claims.keys() {
            if !self.verify_claim(hasher, user)? {
                return Err(DistributorError::InvalidProof(*user));
            }
        }
        Ok(())
    }
}
