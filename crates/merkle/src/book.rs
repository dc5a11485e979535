//! Precomputed eligibility lookup.
//!
//! The lookup side never hashes on demand: every proof is computed once by the
//! tree builder and then served from the book.

use crate::{error::TreeError, proof::verify, tree::MerkleTree};
use alloy_primitives::{Address, B256};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Answer to an eligibility query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Eligibility {
    /// Queried account.
    pub account: Address,
    /// Whether the account is in the claim set.
    pub eligible: bool,
    /// Sibling path to pass to `claim`; empty when not eligible.
    pub proof: Vec<B256>,
}

/// Root plus every member's proof, as produced by the offline builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofBook {
    root: B256,
    proofs: BTreeMap<Address, Vec<B256>>,
}

impl ProofBook {
    /// Captures all proofs of `tree`.
    pub fn from_tree(tree: &MerkleTree) -> Self {
        let proofs = tree
            .accounts()
            .filter_map(|account| tree.proof(&account).map(|proof| (account, proof)))
            .collect();
        Self { root: tree.root(), proofs }
    }

    /// Root every proof in the book resolves to.
    pub const fn root(&self) -> B256 {
        self.root
    }

    /// Number of eligible accounts.
    pub fn len(&self) -> usize {
        self.proofs.len()
    }

    /// Whether the book holds no accounts.
    pub fn is_empty(&self) -> bool {
        self.proofs.is_empty()
    }

    /// Looks up `account`.
    pub fn lookup(&self, account: Address) -> Eligibility {
        match self.proofs.get(&account) {
            Some(proof) => Eligibility { account, eligible: true, proof: proof.clone() },
            None => Eligibility { account, eligible: false, proof: Vec::new() },
        }
    }

    /// Re-verifies every stored proof against the stored root.
    pub fn check(&self) -> Result<(), TreeError> {
        for (account, proof) in &self.proofs {
            if !verify(self.root, proof, *account) {
                return Err(TreeError::StaleProof { account: *account, root: self.root });
            }
        }
        Ok(())
    }

    /// Serializes the book as pretty JSON.
    pub fn to_json(&self) -> Result<String, TreeError> {
        serde_json::to_string_pretty(self).map_err(|err| TreeError::Json(err.to_string()))
    }

    /// Loads a book from JSON.
    pub fn from_json(json: &str) -> Result<Self, TreeError> {
        serde_json::from_str(json).map_err(|err| TreeError::Json(err.to_string()))
    }
}

impl From<&MerkleTree> for ProofBook {
    fn from(tree: &MerkleTree) -> Self {
        Self::from_tree(tree)
    }
}
