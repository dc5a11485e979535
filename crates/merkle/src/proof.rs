//! Leaf encoding and sorted-pair proof verification.
//!
//! The tree builder in [`crate::tree`] and the on-chain style verifier below must
//! agree bit for bit, so both go through [`leaf_hash`] and [`hash_pair`].

use alloy_primitives::{keccak256, Address, B256};

/// Hashes an allowlisted account into its leaf.
///
/// The encoding is the raw 20-byte address, equivalent to
/// `keccak256(abi.encodePacked(account))`.
#[inline]
pub fn leaf_hash(account: Address) -> B256 {
    keccak256(account.as_slice())
}

/// Combines two nodes, ordering them byte-lexicographically first.
#[inline]
pub fn hash_pair(a: B256, b: B256) -> B256 {
    let (low, high) = if a <= b { (a, b) } else { (b, a) };
    let mut buf = [0u8; 64];
    buf[..32].copy_from_slice(low.as_slice());
    buf[32..].copy_from_slice(high.as_slice());
    keccak256(buf)
}

/// Folds `proof` over `leaf` and returns the resulting root candidate.
pub fn process_proof(leaf: B256, proof: &[B256]) -> B256 {
    proof.iter().fold(leaf, |node, sibling| hash_pair(node, *sibling))
}

/// Returns `true` when `proof` links `account` to `root`.
///
/// Never errors: a proof of the wrong length, for another account or with any
/// corrupted sibling simply does not reproduce the root.
pub fn verify(root: B256, proof: &[B256], account: Address) -> bool {
    let computed = process_proof(leaf_hash(account), proof);
    let valid = computed == root;
    tracing::debug!(
        target: "claimswap::merkle",
        ?account,
        proof_len = proof.len(),
        valid,
        "proof verification"
    );
    valid
}
