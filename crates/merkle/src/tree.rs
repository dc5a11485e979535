//! Offline allowlist tree construction.

use crate::{
    error::TreeError,
    proof::{hash_pair, leaf_hash},
};
use alloy_primitives::{Address, B256};
use std::{collections::HashMap, str::FromStr};

/// Parses a newline separated list of addresses.
///
/// Blank lines and lines starting with `#` are skipped. Trailing `# ...`
/// comments are allowed after an address.
pub fn parse_address_list(text: &str) -> Result<Vec<Address>, TreeError> {
    let mut accounts = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or_default().trim();
        if line.is_empty() {
            continue;
        }
        let account = Address::from_str(line).map_err(|err| TreeError::InvalidAddress {
            line: idx + 1,
            reason: err.to_string(),
        })?;
        accounts.push(account);
    }
    Ok(accounts)
}

/// A fully materialised sorted-pair Merkle tree over account leaves.
///
/// Leaves are deduplicated and sorted ascending, so the root only depends on
/// the set of accounts. Levels are stored bottom-up; an odd trailing node is
/// carried to the next level unchanged.
#[derive(Debug, Clone)]
pub struct MerkleTree {
    levels: Vec<Vec<B256>>,
    positions: HashMap<Address, usize>,
}

impl MerkleTree {
    /// Builds the tree for the given accounts.
    pub fn from_accounts<I>(accounts: I) -> Result<Self, TreeError>
    where
        I: IntoIterator<Item = Address>,
    {
        let mut leaves: Vec<(B256, Address)> =
            accounts.into_iter().map(|account| (leaf_hash(account), account)).collect();
        if leaves.is_empty() {
            return Err(TreeError::Empty);
        }
        leaves.sort_unstable();
        leaves.dedup();

        let positions =
            leaves.iter().enumerate().map(|(idx, (_, account))| (*account, idx)).collect();

        let mut level: Vec<B256> = leaves.into_iter().map(|(leaf, _)| leaf).collect();
        let mut levels = Vec::new();
        while level.len() > 1 {
            let next = level
                .chunks(2)
                .map(|pair| match pair.get(1) {
                    Some(right) => hash_pair(pair[0], *right),
                    None => pair[0],
                })
                .collect();
            levels.push(std::mem::replace(&mut level, next));
        }
        levels.push(level);

        let tree = Self { levels, positions };
        tracing::info!(
            target: "claimswap::merkle",
            leaves = tree.len(),
            depth = tree.depth(),
            root = %tree.root(),
            "built allowlist tree"
        );
        Ok(tree)
    }

    /// Root of the tree.
    pub fn root(&self) -> B256 {
        self.levels.last().and_then(|level| level.first()).copied().unwrap_or_default()
    }

    /// Number of distinct leaves.
    pub fn len(&self) -> usize {
        self.levels.first().map_or(0, Vec::len)
    }

    /// Always `false` for a constructed tree; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of hashing levels above the leaves.
    pub fn depth(&self) -> usize {
        self.levels.len().saturating_sub(1)
    }

    /// Accounts in leaf order.
    pub fn accounts(&self) -> impl Iterator<Item = Address> + '_ {
        let mut ordered: Vec<_> = self.positions.iter().map(|(a, i)| (*i, *a)).collect();
        ordered.sort_unstable();
        ordered.into_iter().map(|(_, account)| account)
    }

    /// Whether `account` is one of the leaves.
    pub fn contains(&self, account: &Address) -> bool {
        self.positions.contains_key(account)
    }

    /// Sibling path for `account`, or `None` if it is not allowlisted.
    pub fn proof(&self, account: &Address) -> Option<Vec<B256>> {
        let mut index = *self.positions.get(account)?;
        let mut proof = Vec::with_capacity(self.depth());
        for level in &self.levels[..self.depth()] {
            let sibling = index ^ 1;
            if let Some(node) = level.get(sibling) {
                proof.push(*node);
            }
            index /= 2;
        }
        Some(proof)
    }
}
