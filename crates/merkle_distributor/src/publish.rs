use std::fs;
use std::path::{Path, PathBuf};

use alloy_primitives::{hex, keccak256, B256};

use crate::config::DistributorConfig;
use crate::constants::CONTENT_HASH_PREFIX_BYTES;
use crate::error::{DistributorError, Result};
use crate::event::DistributionPublished;
use crate::state::Distribution;
use crate::utils::MerkleHasher;

pub fn to_json(distribution: &Distribution, pretty: bool) -> Result<String> {
    let content = if pretty {
        serde_json::to_string_pretty(distribution)?
    } else {
        serde_json::to_string(distribution)?
    };
    Ok(content)
}

/// Keccak256 of the serialized document, used to name the file
pub fn content_hash(content: &str) -> B256 {
    keccak256(content.as_bytes())
}

pub fn file_name(prefix: &str, cycle: u64, content_hash: &B256) -> String {
    format!(
        "{prefix}-{cycle}-{}.json",
        hex::encode(&content_hash[..CONTENT_HASH_PREFIX_BYTES])
    )
}

/// Self-check the proofs when `verify_before_publish` is set, then write
pub fn publish<H: MerkleHasher>(
    config: &DistributorConfig,
    hasher: &H,
    distribution: &Distribution,
) -> Result<PathBuf> {
    if config.verify_before_publish {
        distribution.verify_all(hasher)?;
    }
    write_distribution(config, distribution)
}

/// Write the document into `config.output_dir` and return the file path
pub fn write_distribution(config: &DistributorConfig, distribution: &Distribution) -> Result<PathBuf> {
    let content = to_json(distribution, config.pretty)?;
    let hash = content_hash(&content);
    let path = config
        .output_dir
        .join(file_name(&config.file_prefix, distribution.cycle, &hash));

    fs::create_dir_all(&config.output_dir).map_err(|e| DistributorError::io(&config.output_dir, e))?;
    fs::write(&path, content).map_err(|e| DistributorError::io(&path, e))?;

    DistributionPublished {
        path: path.clone(),
        content_hash: hash,
        merkle_root: distribution.merkle_root,
        cycle: distribution.cycle,
    }
    .emit();

    Ok(path)
}

/// Read a published document back, rejecting entries filed under the wrong user
pub fn read_distribution(path: &Path) -> Result<Distribution> {
    let content = fs::read_to_string(path).map_err(|e| DistributorError::io(path, e))?;
    let distribution: Distribution = serde_json::from_str(&content)?;
    distribution.validate()?;
    Ok(distribution)
}
