//! Per-call environment.

use crate::error::ClaimSwapError;
use alloy_primitives::{Address, U256};

/// Per-call environment: who is calling, how much native value is attached
/// and the current time used for deadline checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallContext {
    /// Caller address.
    pub sender: Address,
    /// Native value attached to the call.
    pub value: U256,
    /// Current unix time in seconds.
    pub timestamp: u64,
}

impl CallContext {
    /// A call from `sender` at `timestamp` carrying no value.
    pub const fn new(sender: Address, timestamp: u64) -> Self {
        Self { sender, value: U256::ZERO, timestamp }
    }

    /// Attaches native value to the call.
    pub const fn with_value(mut self, value: U256) -> Self {
        self.value = value;
        self
    }

    /// Fails with [`ClaimSwapError::NonPayable`] if value is attached.
    pub fn ensure_non_payable(&self) -> Result<(), ClaimSwapError> {
        if self.value.is_zero() {
            Ok(())
        } else {
            Err(ClaimSwapError::NonPayable)
        }
    }

    /// Fails with [`ClaimSwapError::Expired`] once `timestamp > deadline`.
    pub const fn ensure_not_expired(&self, deadline: u64) -> Result<(), ClaimSwapError> {
        if self.timestamp > deadline {
            Err(ClaimSwapError::Expired { deadline, now: self.timestamp })
        } else {
            Ok(())
        }
    }
}
