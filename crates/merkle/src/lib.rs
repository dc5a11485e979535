//! # ClaimSwap allowlist trees
//!
//! Everything that has to agree on how an allowlisted account is committed
//! into the claim root:
//!
//! | Module | Side | Purpose |
//! |--------|------|---------|
//! | [`proof`] | contract | leaf encoding, sorted-pair hashing, [`verify`] |
//! | [`tree`] | offline | build the tree and per-account proofs from an address list |
//! | [`book`] | lookup service | serve precomputed `{account -> proof}` answers |
//!
//! Leaves are `keccak256(account)` over the raw 20 address bytes and inner
//! nodes are `keccak256(min(a, b) ++ max(a, b))`, the layout used by
//! OpenZeppelin's `MerkleProof` with sorted pairs.

pub mod book;
pub mod error;
pub mod proof;
pub mod tree;

pub use book::{Eligibility, ProofBook};
pub use error::TreeError;
pub use proof::{hash_pair, leaf_hash, process_proof, verify};
pub use tree::{parse_address_list, MerkleTree};
