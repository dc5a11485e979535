//! Constant-product pricing between the claim token and native value.
//!
//! Pricing always runs against the cached [`Reserves`], which are recomputed
//! from the pool balance and the held native value at the end of every
//! mutating entry point.

use crate::{constants::FEE_DENOMINATOR, error::ClaimSwapError};
use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

/// Cached pool reserves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reserves {
    /// Token balance of the pool account.
    pub asset: U256,
    /// Native value held by the contract.
    pub value: U256,
}

impl Reserves {
    /// Creates a reserve pair.
    pub const fn new(asset: U256, value: U256) -> Self {
        Self { asset, value }
    }

    /// Constant-product invariant `asset * value`, or `None` on overflow.
    pub fn product(&self) -> Option<U256> {
        self.asset.checked_mul(self.value)
    }
}

/// `reserve_out * amount_in / (reserve_in + amount_in)`, rounded toward zero.
///
/// Returns zero if any input is zero.
pub fn quote_out(
    amount_in: U256,
    reserve_in: U256,
    reserve_out: U256,
) -> Result<U256, ClaimSwapError> {
    if amount_in.is_zero() || reserve_in.is_zero() || reserve_out.is_zero() {
        return Ok(U256::ZERO);
    }
    let numerator = reserve_out.checked_mul(amount_in).ok_or(ClaimSwapError::ArithmeticOverflow)?;
    let denominator =
        reserve_in.checked_add(amount_in).ok_or(ClaimSwapError::ArithmeticOverflow)?;
    Ok(numerator / denominator)
}

/// Sell fee: 0.1% of `amount_in`, at least one base unit for any nonzero input.
pub fn sell_fee(amount_in: U256) -> U256 {
    if amount_in.is_zero() {
        return U256::ZERO;
    }
    (amount_in / FEE_DENOMINATOR).max(U256::ONE)
}

/// Breakdown of a sell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellQuote {
    /// Tokens routed to the founder.
    pub fee: U256,
    /// Tokens priced against the reserves.
    pub amount_after_fee: U256,
    /// Native value paid to the seller.
    pub value_out: U256,
}

/// Tokens bought for `value_in` native value. No fee.
pub fn quote_buy(reserves: Reserves, value_in: U256) -> Result<U256, ClaimSwapError> {
    quote_out(value_in, reserves.value, reserves.asset)
}

/// Fee and native value for selling `asset_in` tokens.
pub fn quote_sell(reserves: Reserves, asset_in: U256) -> Result<SellQuote, ClaimSwapError> {
    let fee = sell_fee(asset_in);
    let amount_after_fee = asset_in.saturating_sub(fee);
    let value_out = quote_out(amount_after_fee, reserves.asset, reserves.value)?;
    Ok(SellQuote { fee, amount_after_fee, value_out })
}
