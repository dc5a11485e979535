//! Construction parameters for a [`ClaimSwap`](crate::ClaimSwap) instance.

use crate::constants::{DEFAULT_NAME, DEFAULT_SYMBOL};
use alloy_primitives::{Address, B256};
use serde::Deserialize;
use serde_json::Value;
use std::{env, fmt, str::FromStr};
use thiserror::Error;

/// Environment variable holding the allowlist root.
pub const MERKLE_ROOT_ENV: &str = "CLAIMSWAP_MERKLE_ROOT";
/// Environment variable holding the founder address.
pub const FOUNDER_ENV: &str = "CLAIMSWAP_FOUNDER";
/// Environment variable holding the contract (pool) address.
pub const ADDRESS_ENV: &str = "CLAIMSWAP_ADDRESS";
/// Optional override for the token name.
pub const NAME_ENV: &str = "CLAIMSWAP_NAME";
/// Optional override for the token symbol.
pub const SYMBOL_ENV: &str = "CLAIMSWAP_SYMBOL";

/// Validated, frozen construction parameters.
///
/// Fields are private and there are no setters: once built, the root, the
/// founder and the contract address never change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractConfig {
    merkle_root: B256,
    founder: Address,
    address: Address,
    name: String,
    symbol: String,
}

impl ContractConfig {
    /// Validates the three required parameters and uses the default metadata.
    pub fn new(merkle_root: B256, founder: Address, address: Address) -> Result<Self, ConfigError> {
        if merkle_root == B256::ZERO {
            return Err(ConfigError::InvalidMerkleRoot);
        }
        if founder == Address::ZERO {
            return Err(ConfigError::FounderRequired);
        }
        if address == Address::ZERO {
            return Err(ConfigError::ZeroContractAddress);
        }
        Ok(Self {
            merkle_root,
            founder,
            address,
            name: DEFAULT_NAME.to_string(),
            symbol: DEFAULT_SYMBOL.to_string(),
        })
    }

    /// Replaces the token metadata. Consumes the builder value so a frozen
    /// config cannot be edited in place.
    pub fn with_metadata(mut self, name: impl Into<String>, symbol: impl Into<String>) -> Self {
        self.name = name.into();
        self.symbol = symbol.into();
        self
    }

    /// Loads the configuration from the `CLAIMSWAP_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Same as [`Self::from_env`] but reads variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &str| -> Result<String, ConfigError> {
            let raw = lookup(var).ok_or_else(|| ConfigError::MissingEnv { var: var.into() })?;
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                return Err(ConfigError::EmptyEnv { var: var.into() });
            }
            Ok(trimmed.to_string())
        };
        let optional = |var: &str| {
            lookup(var).map(|raw| raw.trim().to_string()).filter(|raw| !raw.is_empty())
        };

        let merkle_root = parse_root(&required(MERKLE_ROOT_ENV)?)?;
        let founder = parse_address(&required(FOUNDER_ENV)?)?;
        let address = parse_address(&required(ADDRESS_ENV)?)?;

        let config = Self::new(merkle_root, founder, address)?;
        let name = optional(NAME_ENV).unwrap_or_else(|| config.name.clone());
        let symbol = optional(SYMBOL_ENV).unwrap_or_else(|| config.symbol.clone());
        Ok(config.with_metadata(name, symbol))
    }

    /// Allowlist root claims are verified against.
    pub const fn merkle_root(&self) -> B256 {
        self.merkle_root
    }

    /// Founder identity; receives sell fees and controls the pause gate.
    pub const fn founder(&self) -> Address {
        self.founder
    }

    /// Address of the contract itself, which is also the pool account.
    pub const fn address(&self) -> Address {
        self.address
    }

    /// Token name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Token symbol.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawContractConfig {
    merkle_root: B256,
    founder: Address,
    address: Address,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    symbol: Option<String>,
}

/// Parses the `"claimswap"` object of a JSON document:
///
/// ```json
/// { "claimswap": { "merkleRoot": "0x..", "founder": "0x..", "address": "0x.." } }
/// ```
pub fn parse_contract_config(extras: &Value) -> Result<ContractConfig, ConfigError> {
    let section = extras.get("claimswap").ok_or(ConfigError::Missing)?;
    let raw = serde_json::from_value::<RawContractConfig>(section.clone())
        .map_err(|e| ConfigError::Invalid(e.to_string()))?;

    let config = ContractConfig::new(raw.merkle_root, raw.founder, raw.address)?;
    let name = raw.name.unwrap_or_else(|| config.name.clone());
    let symbol = raw.symbol.unwrap_or_else(|| config.symbol.clone());
    Ok(config.with_metadata(name, symbol))
}

/// Errors that can occur while building a [`ContractConfig`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The merkle root is zero.
    #[error("merkle root must be nonzero")]
    InvalidMerkleRoot,
    /// The founder is the zero address.
    #[error("founder address is required")]
    FounderRequired,
    /// The contract address is the zero address.
    #[error("contract address must be nonzero")]
    ZeroContractAddress,
    /// A required environment variable was not set.
    #[error("environment variable {var} is not set")]
    MissingEnv {
        /// Name of the environment variable that was not present.
        var: String,
    },
    /// A required environment variable was empty or whitespace.
    #[error("environment variable {var} is empty")]
    EmptyEnv {
        /// Name of the environment variable that evaluated to an empty string.
        var: String,
    },
    /// The supplied address could not be parsed.
    #[error("invalid address: {0}")]
    InvalidAddress(ParseDisplay),
    /// The supplied root could not be parsed.
    #[error("invalid merkle root: {0}")]
    InvalidRoot(ParseDisplay),
    /// The `claimswap` section is absent.
    #[error("missing claimswap configuration")]
    Missing,
    /// The `claimswap` section does not deserialize.
    #[error("invalid claimswap configuration: {0}")]
    Invalid(String),
}

/// Wrapper for formatting hex parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDisplay(String);

impl fmt::Display for ParseDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn parse_address(value: &str) -> Result<Address, ConfigError> {
    Address::from_str(value).map_err(|err| ConfigError::InvalidAddress(ParseDisplay(err.to_string())))
}

fn parse_root(value: &str) -> Result<B256, ConfigError> {
    B256::from_str(value).map_err(|err| ConfigError::InvalidRoot(ParseDisplay(err.to_string())))
}
