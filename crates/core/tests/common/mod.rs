//! Shared fixture: a deployed contract over a small allowlist.

#![allow(dead_code, unreachable_pub)]

use alloy_primitives::{Address, B256, U256};
use claimswap_core::{constants::WAD, CallContext, ClaimSwap, ContractConfig};
use claimswap_merkle::MerkleTree;

pub const FOUNDER: Address = Address::repeat_byte(0xf0);
pub const POOL: Address = Address::repeat_byte(0xc0);
pub const ALICE: Address = Address::repeat_byte(0xa1);
pub const BOB: Address = Address::repeat_byte(0xb0);
pub const CAROL: Address = Address::repeat_byte(0xca);
pub const OUTSIDER: Address = Address::repeat_byte(0xee);

pub const NOW: u64 = 1_700_000_000;

/// Allowlisted accounts used across the suites.
pub fn allowlist() -> Vec<Address> {
    vec![ALICE, BOB, CAROL]
}

pub struct Fixture {
    pub swap: ClaimSwap,
    pub tree: MerkleTree,
}

impl Fixture {
    pub fn new() -> Self {
        let tree = MerkleTree::from_accounts(allowlist()).unwrap();
        let config = ContractConfig::new(tree.root(), FOUNDER, POOL).unwrap();
        Self { swap: ClaimSwap::new(config), tree }
    }

    pub fn proof(&self, account: Address) -> Vec<B256> {
        self.tree.proof(&account).unwrap_or_default()
    }

    pub fn claim(&mut self, account: Address) {
        let proof = self.proof(account);
        self.swap.claim(&ctx(account), &proof).unwrap();
    }
}

pub fn ctx(sender: Address) -> CallContext {
    CallContext::new(sender, NOW)
}

pub fn paying(sender: Address, value: U256) -> CallContext {
    ctx(sender).with_value(value)
}

pub fn wad(units: u64) -> U256 {
    U256::from(units) * WAD
}
