//! Delivery of native value to sellers.
//!
//! On a chain the payout is a value call into the recipient, which may run
//! arbitrary code, including calls back into the contract. [`ValueReceiver`]
//! models that call: it receives the contract itself so a recipient can try to
//! re-enter, and it can refuse the payment.

use crate::contract::ClaimSwap;
use alloy_primitives::{Address, U256};
use thiserror::Error;

/// Recipient refused a native value payment.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{reason}")]
pub struct PayoutRejected {
    /// Human readable reason reported by the recipient.
    pub reason: String,
}

impl PayoutRejected {
    /// Creates a rejection with the given reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

/// Callback run when the contract pays native value out.
pub trait ValueReceiver {
    /// Delivers `amount` to `recipient`. Returning an error aborts the whole
    /// entry point that triggered the payout.
    fn on_value(
        &mut self,
        swap: &mut ClaimSwap,
        recipient: Address,
        amount: U256,
    ) -> Result<(), PayoutRejected>;
}

/// Recipient that accepts every payment and does nothing else.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl ValueReceiver for AcceptAll {
    fn on_value(
        &mut self,
        _swap: &mut ClaimSwap,
        _recipient: Address,
        _amount: U256,
    ) -> Result<(), PayoutRejected> {
        Ok(())
    }
}

impl<F> ValueReceiver for F
where
    F: FnMut(&mut ClaimSwap, Address, U256) -> Result<(), PayoutRejected>,
{
    fn on_value(
        &mut self,
        swap: &mut ClaimSwap,
        recipient: Address,
        amount: U256,
    ) -> Result<(), PayoutRejected> {
        self(swap, recipient, amount)
    }
}
