//! # ClaimSwap core
//!
//! State machine of a claim-gated token with a built-in constant-product pool.
//!
//! Allowlisted accounts [`claim`](ClaimSwap::claim) a fixed mint with a Merkle
//! proof; part of every claim seeds the pool. The pool trades the token
//! against native value with `x * y = k` pricing, charges a 0.1% fee on sells
//! and pays it to the founder, who can also pause claiming and trading.
//!
//! ## Modules
//!
//! - [`contract`]: [`ClaimSwap`] and its entry points
//! - [`ledger`]: balances, allowances and supply
//! - [`pool`]: pricing and fee math
//! - [`access`]: founder checks and the pause gate
//! - [`guard`]: reentrancy lock
//! - [`journal`]: undo log and ordered event log
//! - [`events`]: ABI records
//! - [`config`]: construction parameters
//!
//! ## Example
//!
//! ```
//! use alloy_primitives::Address;
//! use claimswap_core::{CallContext, ClaimSwap, ContractConfig};
//! use claimswap_merkle::MerkleTree;
//!
//! let alice = Address::repeat_byte(0xa1);
//! let tree = MerkleTree::from_accounts([alice]).unwrap();
//! let config =
//!     ContractConfig::new(tree.root(), Address::repeat_byte(0xf0), Address::repeat_byte(0xc0))
//!         .unwrap();
//!
//! let mut swap = ClaimSwap::new(config);
//! swap.claim(&CallContext::new(alice, 0), &tree.proof(&alice).unwrap()).unwrap();
//! assert!(swap.has_claimed(alice));
//! ```

pub mod access;
pub mod claims;
pub mod config;
pub mod constants;
pub mod contract;
pub mod env;
pub mod error;
pub mod events;
pub mod guard;
pub mod journal;
pub mod ledger;
pub mod payout;
pub mod pool;

pub use access::{AccessControl, Lifecycle, Operation};
pub use config::{parse_contract_config, ConfigError, ContractConfig};
pub use contract::ClaimSwap;
pub use env::CallContext;
pub use error::ClaimSwapError;
pub use events::Event;
pub use payout::{AcceptAll, PayoutRejected, ValueReceiver};
pub use pool::{quote_buy, quote_out, quote_sell, sell_fee, Reserves, SellQuote};
