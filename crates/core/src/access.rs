//! Founder authorization and the pause gate.

use crate::error::ClaimSwapError;
use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle of the contract. Starts `Active`; the founder toggles it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lifecycle {
    /// All entry points are open.
    #[default]
    Active,
    /// Pause gated entry points are rejected.
    Paused,
}

impl fmt::Display for Lifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => f.write_str("active"),
            Self::Paused => f.write_str("paused"),
        }
    }
}

/// Mutating entry points, used to decide which of them the pause gate covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    /// `claim(proof)`
    Claim,
    /// `buy(minOut, deadline)`
    Buy,
    /// `sell(amount, minOut, deadline)`
    Sell,
    /// `donate(assetAmount)`
    Donate,
    /// `transfer(to, amount)`
    Transfer,
    /// `approve(spender, amount)`
    Approve,
    /// `transferFrom(from, to, amount)`
    TransferFrom,
    /// bare native value receipt
    Receive,
}

impl Operation {
    /// Whether the operation is rejected while paused.
    ///
    /// Token movements and donations stay open during a pause so holders can
    /// still move funds while trading and claiming are halted.
    pub const fn is_pause_gated(self) -> bool {
        match self {
            Self::Claim | Self::Buy | Self::Sell => true,
            Self::Donate | Self::Transfer | Self::Approve | Self::TransferFrom | Self::Receive => {
                false
            }
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Claim => "claim",
            Self::Buy => "buy",
            Self::Sell => "sell",
            Self::Donate => "donate",
            Self::Transfer => "transfer",
            Self::Approve => "approve",
            Self::TransferFrom => "transferFrom",
            Self::Receive => "receive",
        };
        f.write_str(name)
    }
}

/// Immutable founder plus the mutable lifecycle flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessControl {
    founder: Address,
    lifecycle: Lifecycle,
}

impl AccessControl {
    /// Starts in [`Lifecycle::Active`].
    pub const fn new(founder: Address) -> Self {
        Self { founder, lifecycle: Lifecycle::Active }
    }

    /// The founder identity.
    pub const fn founder(&self) -> Address {
        self.founder
    }

    /// Current lifecycle.
    pub const fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Rejects callers other than the founder.
    pub fn ensure_founder(&self, caller: Address) -> Result<(), ClaimSwapError> {
        if caller == self.founder {
            Ok(())
        } else {
            tracing::warn!(target: "claimswap", ?caller, "founder authorization denied");
            Err(ClaimSwapError::NotFounder(caller))
        }
    }

    /// Rejects `operation` if the current lifecycle does not admit it.
    pub fn ensure_admits(&self, operation: Operation) -> Result<(), ClaimSwapError> {
        match self.lifecycle {
            Lifecycle::Active => Ok(()),
            Lifecycle::Paused if operation.is_pause_gated() => {
                tracing::debug!(target: "claimswap", %operation, "rejected while paused");
                Err(ClaimSwapError::OperationUnavailable { operation })
            }
            Lifecycle::Paused => Ok(()),
        }
    }

    /// Moves to `target`, returning the previous lifecycle.
    ///
    /// Only `Active -> Paused` and `Paused -> Active` exist.
    pub(crate) fn transition(&mut self, target: Lifecycle) -> Result<Lifecycle, ClaimSwapError> {
        if self.lifecycle == target {
            return Err(ClaimSwapError::LifecycleUnchanged(target));
        }
        let previous = self.lifecycle;
        self.lifecycle = target;
        Ok(previous)
    }

    pub(crate) fn restore(&mut self, previous: Lifecycle) {
        self.lifecycle = previous;
    }
}
