use alloy_primitives::{Address, Bytes, B256, U256};

use crate::constants::{ADDRESS_LENGTH, WORD_LENGTH};
use crate::error::{DistributorError, Result};
use crate::utils::MerkleHasher;

/**
 * One user's claim for one distribution cycle
 *
 * Leaf Encoding (`abi.encodePacked` on the claim contract):
 * - index: uint256, 32 bytes big-endian
 * - user: address, 20 bytes
 * - cycle: uint256, 32 bytes big-endian
 * - tokens: address[], each element left-padded to 32 bytes, no length prefix
 * - cumulativeAmounts: uint256[], each element 32 bytes, no length prefix
 *
 * Design Notes:
 * - Amounts are cumulative (total owed to date), the contract pays out the
 *   difference with what was already claimed
 * - Token order is part of the leaf and must be preserved
 * - `tokens` and `cumulative_amounts` always have the same length
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimRecord {
    index: u64,
    user: Address,
    cycle: u64,
    tokens: Vec<Address>,
    cumulative_amounts: Vec<U256>,
}

impl ClaimRecord {
    pub fn new(
        index: u64,
        user: Address,
        cycle: u64,
        tokens: Vec<Address>,
        cumulative_amounts: Vec<U256>,
    ) -> Result<Self> {
        if tokens.len() != cumulative_amounts.len() {
            return Err(DistributorError::LengthMismatch {
                user,
                tokens: tokens.len(),
                amounts: cumulative_amounts.len(),
            });
        }

        Ok(Self {
            index,
            user,
            cycle,
            tokens,
            cumulative_amounts,
        })
    }

    pub fn index(&self) -> u64 {
        self.index
    }

    pub fn user(&self) -> Address {
        self.user
    }

    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    pub fn tokens(&self) -> &[Address] {
        &self.tokens
    }

    pub fn cumulative_amounts(&self) -> &[U256] {
        &self.cumulative_amounts
    }

    /// Packed leaf bytes, byte-for-byte what the claim contract hashes
    pub fn encode_packed(&self) -> Bytes {
        let elements = self.tokens.len() + self.cumulative_amounts.len();
        let mut out = Vec::with_capacity(WORD_LENGTH * (2 + elements) + ADDRESS_LENGTH);

        out.extend_from_slice(&U256::from(self.index).to_be_bytes::<WORD_LENGTH>());
        out.extend_from_slice(self.user.as_slice());
        out.extend_from_slice(&U256::from(self.cycle).to_be_bytes::<WORD_LENGTH>());
        for token in &self.tokens {
            out.extend_from_slice(token.into_word().as_slice());
        }
        for amount in &self.cumulative_amounts {
            out.extend_from_slice(&amount.to_be_bytes::<WORD_LENGTH>());
        }

        out.into()
    }

    pub fn leaf<H: MerkleHasher>(&self, hasher: &H) -> B256 {
        hasher.hash(&self.encode_packed())
    }
}
