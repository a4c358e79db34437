use std::collections::BTreeMap;
use std::path::Path;

use alloy_primitives::{Address, Bytes, U256};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{DistributorError, Result};
use crate::state::{ClaimRecord, Distribution};
use crate::utils::codec::{parse_address, parse_token_amounts};

/// Ledger output handed to the assembler: index-ordered records, their packed
/// encodings (parallel to `nodes`) and the per-token totals for the cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MerkleInput {
    pub nodes: Vec<ClaimRecord>,
    pub encoded_nodes: Vec<Bytes>,
    pub totals: BTreeMap<Address, U256>,
}

/**
 * Cumulative reward ledger for one cycle
 *
 * Tracks, per user and token, the total amount owed to date. Amounts added
 * through `increase_user_rewards` also count toward this cycle's token totals;
 * amounts carried over from a previous distribution do not.
 *
 * Ordering:
 * - users are indexed 0..N-1 in ascending address order
 * - each user's tokens are listed in ascending address order
 */
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewardsLedger {
    cycle: u64,
    claims: BTreeMap<Address, BTreeMap<Address, U256>>,
    totals: BTreeMap<Address, U256>,
}

impl RewardsLedger {
    pub fn new(cycle: u64) -> Self {
        Self {
            cycle,
            ..Self::default()
        }
    }

    /// Start a new cycle from the cumulative amounts of an already published one
    pub fn from_previous(previous: &Distribution, cycle: u64) -> Result<Self> {
        if cycle <= previous.cycle {
            return Err(DistributorError::CycleNotAdvanced {
                previous: previous.cycle,
                next: cycle,
            });
        }
        previous.validate()?;

        let mut ledger = Self::new(cycle);
        for (user, entry) in &previous.claims {
            let amounts = ledger.claims.entry(*user).or_default();
            for (token, amount) in entry.amounts() {
                let slot = amounts.entry(token).or_default();
                *slot = slot
                    .checked_add(amount)
                    .ok_or(DistributorError::ArithmeticOverflow)?;
            }
        }

        debug!(
            previous_cycle = previous.cycle,
            cycle,
            users = ledger.claims.len(),
            "ledger seeded from previous distribution"
        );
        Ok(ledger)
    }

    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    pub fn totals(&self) -> &BTreeMap<Address, U256> {
        &self.totals
    }

    pub fn user_count(&self) -> usize {
        self.claims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    pub fn cumulative_amount(&self, user: &Address, token: &Address) -> U256 {
        self.claims
            .get(user)
            .and_then(|amounts| amounts.get(token))
            .copied()
            .unwrap_or_default()
    }

    pub fn increase_user_rewards(&mut self, user: Address, token: Address, amount: U256) -> Result<()> {
        if amount.is_zero() {
            warn!(%user, %token, "ignoring zero reward");
            return Ok(());
        }

        // Compute both sums before touching state so an overflow leaves the ledger unchanged
        let claimed = self
            .cumulative_amount(&user, &token)
            .checked_add(amount)
            .ok_or(DistributorError::ArithmeticOverflow)?;
        let total = self
            .totals
            .get(&token)
            .copied()
            .unwrap_or_default()
            .checked_add(amount)
            .ok_or(DistributorError::ArithmeticOverflow)?;

        self.claims.entry(user).or_default().insert(token, claimed);
        self.totals.insert(token, total);
        Ok(())
    }

    /// Flatten into index-ordered claim records plus their leaf encodings
    pub fn to_merkle_format(&self) -> Result<MerkleInput> {
        let mut nodes = Vec::with_capacity(self.claims.len());
        let mut encoded_nodes = Vec::with_capacity(self.claims.len());

        for (index, (user, amounts)) in self.claims.iter().enumerate() {
            let record = ClaimRecord::new(
                index as u64,
                *user,
                self.cycle,
                amounts.keys().copied().collect(),
                amounts.values().copied().collect(),
            )?;
            encoded_nodes.push(record.encode_packed());
            nodes.push(record);
        }

        Ok(MerkleInput {
            nodes,
            encoded_nodes,
            totals: self.totals.clone(),
        })
    }
}

/// On-disk ledger: this cycle's rewards, `{ "cycle": n, "claims": { user: { token: "amount" } } }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerFile {
    pub cycle: u64,
    #[serde(default)]
    pub claims: BTreeMap<String, BTreeMap<String, String>>,
}

impl LedgerFile {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| DistributorError::io(path, e))?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Apply this file's rewards on top of `previous` (if any)
    pub fn into_ledger(self, previous: Option<&Distribution>) -> Result<RewardsLedger> {
        let mut ledger = match previous {
            Some(previous) => RewardsLedger::from_previous(previous, self.cycle)?,
            None => RewardsLedger::new(self.cycle),
        };

        for (user, rewards) in &self.claims {
            let user = parse_address(user)?;
            for (token, amount) in parse_token_amounts(rewards)? {
                ledger.increase_user_rewards(user, token, amount)?;
            }
        }

        Ok(ledger)
    }
}
