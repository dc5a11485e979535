//! Records emitted by the contract, in emission order.
//!
//! Each record is a Solidity ABI event so it can be rendered into the same log
//! data an EVM deployment would produce.

use alloy_primitives::LogData;
use alloy_sol_types::{sol, SolEvent};

/// ABI definitions of every record the contract emits.
pub mod abi {
    use super::sol;

    sol! {
        #![sol(all_derives)]

        /// Token movement, including mints (`from == 0`).
        event Transfer(address indexed from, address indexed to, uint256 value);

        /// Allowance set by `owner` for `spender`.
        event Approval(address indexed owner, address indexed spender, uint256 value);

        /// Successful claim and its split between claimant and pool.
        event Claimed(address indexed account, uint256 userAmount, uint256 poolAmount);

        /// Liquidity donated to the pool.
        event Donation(address indexed donor, uint256 assetAmount, uint256 value);

        /// Native value swapped for tokens.
        event Buy(address indexed buyer, uint256 valueIn, uint256 assetOut);

        /// Tokens swapped for native value.
        event Sell(address indexed seller, uint256 assetIn, uint256 fee, uint256 valueOut);

        /// Founder paused the gated entry points.
        event Paused();

        /// Founder reopened the gated entry points.
        event Unpaused();

        /// Bare native value receipt.
        event EthReceived(address indexed sender, uint256 amount);

        /// Reserves recomputed from the pool balance and held value.
        event Sync(uint256 reserveAsset, uint256 reserveValue);
    }
}

/// One entry of the ordered event log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// See [`abi::Transfer`].
    Transfer(abi::Transfer),
    /// See [`abi::Approval`].
    Approval(abi::Approval),
    /// See [`abi::Claimed`].
    Claimed(abi::Claimed),
    /// See [`abi::Donation`].
    Donation(abi::Donation),
    /// See [`abi::Buy`].
    Buy(abi::Buy),
    /// See [`abi::Sell`].
    Sell(abi::Sell),
    /// See [`abi::Paused`].
    Paused(abi::Paused),
    /// See [`abi::Unpaused`].
    Unpaused(abi::Unpaused),
    /// See [`abi::EthReceived`].
    EthReceived(abi::EthReceived),
    /// See [`abi::Sync`].
    Sync(abi::Sync),
}

impl Event {
    /// Solidity signature of the event, e.g. `Transfer(address,address,uint256)`.
    pub const fn signature(&self) -> &'static str {
        match self {
            Self::Transfer(_) => abi::Transfer::SIGNATURE,
            Self::Approval(_) => abi::Approval::SIGNATURE,
            Self::Claimed(_) => abi::Claimed::SIGNATURE,
            Self::Donation(_) => abi::Donation::SIGNATURE,
            Self::Buy(_) => abi::Buy::SIGNATURE,
            Self::Sell(_) => abi::Sell::SIGNATURE,
            Self::Paused(_) => abi::Paused::SIGNATURE,
            Self::Unpaused(_) => abi::Unpaused::SIGNATURE,
            Self::EthReceived(_) => abi::EthReceived::SIGNATURE,
            Self::Sync(_) => abi::Sync::SIGNATURE,
        }
    }

    /// Encodes the record into EVM log topics and data.
    pub fn to_log_data(&self) -> LogData {
        match self {
            Self::Transfer(e) => e.encode_log_data(),
            Self::Approval(e) => e.encode_log_data(),
            Self::Claimed(e) => e.encode_log_data(),
            Self::Donation(e) => e.encode_log_data(),
            Self::Buy(e) => e.encode_log_data(),
            Self::Sell(e) => e.encode_log_data(),
            Self::Paused(e) => e.encode_log_data(),
            Self::Unpaused(e) => e.encode_log_data(),
            Self::EthReceived(e) => e.encode_log_data(),
            Self::Sync(e) => e.encode_log_data(),
        }
    }
}
