//! Fixed economic parameters. All token and native amounts use 18 decimals.

use alloy_primitives::{uint, U256};

/// One whole unit (10^18 base units).
pub const WAD: U256 = uint!(1_000_000_000_000_000_000_U256);

/// Token decimals reported by the ledger.
pub const DECIMALS: u8 = 18;

/// Hard ceiling on total supply: one billion units.
pub const MAX_SUPPLY: U256 = uint!(1_000_000_000_000_000_000_000_000_000_U256);

/// Units minted per successful claim.
pub const CLAIM_AMOUNT: U256 = uint!(100_000_000_000_000_000_000_U256);

/// Share of a claim credited to the claimant (95 units).
pub const CLAIMANT_SHARE: U256 = uint!(95_000_000_000_000_000_000_U256);

/// Share of a claim credited to the pool (5 units).
pub const POOL_SHARE: U256 = uint!(5_000_000_000_000_000_000_U256);

/// Sell fee is `amount / FEE_DENOMINATOR` (0.1%), floored at one base unit.
pub const FEE_DENOMINATOR: U256 = uint!(1000_U256);

/// Default token name.
pub const DEFAULT_NAME: &str = "ClaimSwap";

/// Default token symbol.
pub const DEFAULT_SYMBOL: &str = "CLAIM";
