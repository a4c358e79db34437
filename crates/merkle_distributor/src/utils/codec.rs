//! Text encodings used by the distribution document.
//!
//! - addresses: EIP-55 checksummed, `0x`-prefixed
//! - `index` / `cycle`: `0x`-prefixed lowercase hex without padding (`0x0`, `0x1f`)
//! - amounts: decimal strings, since values routinely exceed 2^53 and 2^64

use std::collections::BTreeMap;
use std::str::FromStr;

use alloy_primitives::{Address, U256};

use crate::error::{DistributorError, Result};

pub fn parse_address(value: &str) -> Result<Address> {
    Address::from_str(value.trim()).map_err(|_| DistributorError::InvalidAddress(value.to_string()))
}

pub fn parse_amount(value: &str) -> Result<U256> {
    let digits = value.trim();
    if digits.is_empty() {
        return Err(DistributorError::InvalidAmount(value.to_string()));
    }
    U256::from_str_radix(digits, 10).map_err(|_| DistributorError::InvalidAmount(value.to_string()))
}

pub fn parse_hex_u64(value: &str) -> std::result::Result<u64, String> {
    let digits = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .ok_or_else(|| format!("missing 0x prefix: {value}"))?;
    u64::from_str_radix(digits, 16).map_err(|e| format!("invalid hex integer {value}: {e}"))
}

pub mod hex_u64 {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &u64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("{value:#x}"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        let value = String::deserialize(deserializer)?;
        super::parse_hex_u64(&value).map_err(de::Error::custom)
    }
}

pub mod checksummed {
    use alloy_primitives::Address;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Address, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_checksum(None))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Address, D::Error> {
        let value = String::deserialize(deserializer)?;
        super::parse_address(&value).map_err(de::Error::custom)
    }
}

pub mod checksummed_vec {
    use alloy_primitives::Address;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(values: &[Address], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(values.iter().map(|a| a.to_checksum(None)))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Address>, D::Error> {
        Vec::<String>::deserialize(deserializer)?
            .iter()
            .map(|s| super::parse_address(s).map_err(de::Error::custom))
            .collect()
    }
}

pub mod decimal_vec {
    use alloy_primitives::U256;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(values: &[U256], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(values.iter().map(|v| v.to_string()))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<U256>, D::Error> {
        Vec::<String>::deserialize(deserializer)?
            .iter()
            .map(|s| super::parse_amount(s).map_err(de::Error::custom))
            .collect()
    }
}

/// `token -> amount` maps, checksummed keys and decimal values
pub mod token_amounts {
    use std::collections::BTreeMap;

    use alloy_primitives::{Address, U256};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        values: &BTreeMap<Address, U256>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.collect_map(values.iter().map(|(k, v)| (k.to_checksum(None), v.to_string())))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<BTreeMap<Address, U256>, D::Error> {
        BTreeMap::<String, String>::deserialize(deserializer)?
            .iter()
            .map(|(k, v)| {
                let token = super::parse_address(k).map_err(<D::Error as de::Error>::custom)?;
                let amount = super::parse_amount(v).map_err(<D::Error as de::Error>::custom)?;
                Ok((token, amount))
            })
            .collect()
    }
}

/// Maps keyed by account, checksummed keys and values serialized as-is
pub mod checksummed_keys {
    use std::collections::BTreeMap;

    use alloy_primitives::Address;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S, V>(values: &BTreeMap<Address, V>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        V: Serialize,
    {
        serializer.collect_map(values.iter().map(|(k, v)| (k.to_checksum(None), v)))
    }

    pub fn deserialize<'de, D, V>(deserializer: D) -> Result<BTreeMap<Address, V>, D::Error>
    where
        D: Deserializer<'de>,
        V: Deserialize<'de>,
    {
        BTreeMap::<String, V>::deserialize(deserializer)?
            .into_iter()
            .map(|(k, v)| {
                let account = super::parse_address(&k).map_err(<D::Error as de::Error>::custom)?;
                Ok((account, v))
            })
            .collect()
    }
}

/// Parses a `{ address: decimal }` map, reporting the first malformed entry.
pub fn parse_token_amounts(raw: &BTreeMap<String, String>) -> Result<BTreeMap<Address, U256>> {
    raw.iter()
        .map(|(token, amount)| Ok((parse_address(token)?, parse_amount(amount)?)))
        .collect()
}
