//! Rejection taxonomy of the contract entry points.

use crate::access::{Lifecycle, Operation};
use alloy_primitives::{Address, U256};
use thiserror::Error;

/// Reasons an entry point rejects a call.
///
/// Every variant aborts the whole operation; the journal rolls back any
/// mutation made before the failure was detected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClaimSwapError {
    /// The account is already in the claim registry.
    #[error("account {0} has already claimed")]
    AlreadyClaimed(Address),
    /// The supplied proof does not lead to the configured root.
    #[error("invalid merkle proof for {0}")]
    InvalidProof(Address),
    /// Minting would push total supply above the ceiling.
    #[error("minting {amount} would exceed the max supply")]
    SupplyCeilingExceeded {
        /// Amount that was about to be minted.
        amount: U256,
    },
    /// Tokens cannot be minted or sent to the zero address.
    #[error("cannot transfer to the zero address")]
    ZeroAddress,
    /// Allowances cannot be granted to the zero address.
    #[error("cannot approve the zero address")]
    ZeroSpender,
    /// Native value cannot be paid out to the zero address.
    #[error("cannot pay out to the zero address")]
    ZeroRecipient,
    /// A donation carried neither tokens nor native value.
    #[error("donation carried no tokens and no value")]
    NothingDonated,
    /// A trade was requested with a zero input amount.
    #[error("trade input is zero")]
    ZeroInput,
    /// Reserves price the trade at zero output.
    #[error("insufficient liquidity for this trade")]
    NoLiquidity,
    /// Output is below the caller's minimum.
    #[error("output {out} is below the minimum {min}")]
    SlippageExceeded {
        /// Output the pool would deliver.
        out: U256,
        /// Minimum requested by the caller.
        min: U256,
    },
    /// The caller's deadline has passed.
    #[error("deadline {deadline} expired at {now}")]
    Expired {
        /// Caller supplied deadline (unix seconds).
        deadline: u64,
        /// Current time (unix seconds).
        now: u64,
    },
    /// Balance too small for the debit.
    #[error("insufficient balance: {available} < {required}")]
    InsufficientBalance {
        /// Current balance.
        available: U256,
        /// Amount requested.
        required: U256,
    },
    /// Allowance too small for the debit.
    #[error("insufficient allowance: {available} < {required}")]
    InsufficientAllowance {
        /// Current allowance.
        available: U256,
        /// Amount requested.
        required: U256,
    },
    /// The contract does not hold enough native value for the payout.
    #[error("insufficient native reserve: {available} < {required}")]
    InsufficientReserve {
        /// Native value held by the contract.
        available: U256,
        /// Payout requested.
        required: U256,
    },
    /// The recipient refused the native value payout.
    #[error("native value payout failed: {0}")]
    PayoutFailed(String),
    /// A guarded entry point was entered while another one is in flight.
    #[error("reentrant call")]
    Reentrancy,
    /// Only the founder may call this entry point.
    #[error("caller {0} is not the founder")]
    NotFounder(Address),
    /// The operation is pause gated and the contract is paused.
    #[error("{operation} is unavailable while paused")]
    OperationUnavailable {
        /// Rejected operation.
        operation: Operation,
    },
    /// `pause` while paused or `unpause` while active.
    #[error("lifecycle is already {0}")]
    LifecycleUnchanged(Lifecycle),
    /// Native value was attached to a non-payable entry point.
    #[error("entry point does not accept native value")]
    NonPayable,
    /// Checked arithmetic overflowed.
    #[error("arithmetic overflow")]
    ArithmeticOverflow,
}
