//! Tree construction and proof book errors.

use thiserror::Error;

/// Errors raised while building, loading or checking allowlist trees.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    /// No accounts were supplied.
    #[error("cannot build a merkle tree from an empty allowlist")]
    Empty,
    /// A line of an address list did not parse.
    #[error("invalid address on line {line}: {reason}")]
    InvalidAddress {
        /// 1-based line number.
        line: usize,
        /// Parser message.
        reason: String,
    },
    /// A proof book could not be (de)serialized.
    #[error("invalid proof book: {0}")]
    Json(String),
    /// A stored proof no longer reproduces the stored root.
    #[error("stored proof for {account} does not match root {root}")]
    StaleProof {
        /// Account whose proof failed.
        account: alloy_primitives::Address,
        /// Root the book claims.
        root: alloy_primitives::B256,
    },
}
