//! Randomized operation sequences checked against the ledger and pool invariants.

mod common;

use alloy_primitives::{Address, U256};
use claimswap_core::{
    constants::{MAX_SUPPLY, WAD},
    ledger::Ledger,
    AcceptAll, ClaimSwap, Event, Lifecycle, Reserves,
};
use common::*;
use proptest::prelude::*;

const ACTORS: [Address; 5] = [ALICE, BOB, CAROL, OUTSIDER, FOUNDER];

#[derive(Debug, Clone)]
enum Op {
    Claim { who: usize },
    Donate { who: usize, asset: u64, value: u64 },
    Buy { who: usize, value: u64, min_out: u64 },
    Sell { who: usize, asset: u64 },
    Transfer { who: usize, to: usize, amount: u64, to_pool: bool },
    Approve { who: usize, spender: usize, amount: u64 },
    TransferFrom { who: usize, from: usize, to: usize, amount: u64 },
    Receive { who: usize, value: u64 },
    Pause { who: usize },
    Unpause { who: usize },
}

/// Amounts are drawn in thousandths of a unit.
fn milli(amount: u64) -> U256 {
    U256::from(amount) * WAD / U256::from(1000u64)
}

fn actor() -> impl Strategy<Value = usize> {
    0..ACTORS.len()
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => actor().prop_map(|who| Op::Claim { who }),
        2 => (actor(), 0u64..60_000, 0u64..5_000)
            .prop_map(|(who, asset, value)| Op::Donate { who, asset, value }),
        3 => (actor(), 0u64..3_000, 0u64..2_000)
            .prop_map(|(who, value, min_out)| Op::Buy { who, value, min_out }),
        3 => (actor(), 0u64..40_000).prop_map(|(who, asset)| Op::Sell { who, asset }),
        2 => (actor(), actor(), 0u64..50_000, any::<bool>())
            .prop_map(|(who, to, amount, to_pool)| Op::Transfer { who, to, amount, to_pool }),
        1 => (actor(), actor(), 0u64..50_000)
            .prop_map(|(who, spender, amount)| Op::Approve { who, spender, amount }),
        1 => (actor(), actor(), actor(), 0u64..50_000)
            .prop_map(|(who, from, to, amount)| Op::TransferFrom { who, from, to, amount }),
        1 => (actor(), 0u64..2_000).prop_map(|(who, value)| Op::Receive { who, value }),
        1 => actor().prop_map(|who| Op::Pause { who }),
        1 => actor().prop_map(|who| Op::Unpause { who }),
    ]
}

#[derive(Debug, PartialEq)]
struct Snapshot {
    ledger: Ledger,
    reserves: Reserves,
    held_value: U256,
    events: Vec<Event>,
    lifecycle: Lifecycle,
    claimed: Vec<bool>,
}

fn snapshot(swap: &ClaimSwap) -> Snapshot {
    Snapshot {
        ledger: swap.ledger().clone(),
        reserves: swap.reserves(),
        held_value: swap.held_value(),
        events: swap.events().to_vec(),
        lifecycle: swap.lifecycle(),
        claimed: ACTORS.iter().map(|a| swap.has_claimed(*a)).collect(),
    }
}

/// Applies `op`; returns `Some(is_trade)` on success.
fn apply(fx: &mut Fixture, op: &Op) -> Option<bool> {
    let swap = &mut fx.swap;
    let result = match *op {
        Op::Claim { who } => {
            let proof = fx.tree.proof(&ACTORS[who]).unwrap_or_default();
            swap.claim(&ctx(ACTORS[who]), &proof).map(|_| false)
        }
        Op::Donate { who, asset, value } => {
            swap.donate(&paying(ACTORS[who], milli(value)), milli(asset)).map(|_| false)
        }
        Op::Buy { who, value, min_out } => swap
            .buy(&paying(ACTORS[who], milli(value)), milli(min_out), NOW)
            .map(|_| true),
        Op::Sell { who, asset } => swap
            .sell(&ctx(ACTORS[who]), milli(asset), U256::ZERO, NOW, &mut AcceptAll)
            .map(|_| true),
        Op::Transfer { who, to, amount, to_pool } => {
            let to = if to_pool { POOL } else { ACTORS[to] };
            swap.transfer(&ctx(ACTORS[who]), to, milli(amount)).map(|_| false)
        }
        Op::Approve { who, spender, amount } => {
            swap.approve(&ctx(ACTORS[who]), ACTORS[spender], milli(amount)).map(|_| false)
        }
        Op::TransferFrom { who, from, to, amount } => swap
            .transfer_from(&ctx(ACTORS[who]), ACTORS[from], ACTORS[to], milli(amount))
            .map(|_| false),
        Op::Receive { who, value } => swap.receive(&paying(ACTORS[who], milli(value))).map(|_| false),
        Op::Pause { who } => swap.pause(&ctx(ACTORS[who])).map(|_| false),
        Op::Unpause { who } => swap.unpause(&ctx(ACTORS[who])).map(|_| false),
    };
    result.ok()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_state_invariants_hold(ops in prop::collection::vec(op_strategy(), 1..60)) {
        let mut fx = Fixture::new();

        for op in &ops {
            let before = snapshot(&fx.swap);
            let product_before = fx.swap.reserves().product();

            match apply(&mut fx, op) {
                None => prop_assert_eq!(snapshot(&fx.swap), before, "failed {:?} changed state", op),
                Some(true) => {
                    let product_after = fx.swap.reserves().product();
                    prop_assert!(product_after >= product_before, "k decreased on {:?}", op);
                }
                Some(false) => {}
            }

            let swap = &fx.swap;
            prop_assert_eq!(swap.total_supply(), swap.ledger().balance_sum());
            prop_assert!(swap.total_supply() <= MAX_SUPPLY);
            prop_assert_eq!(swap.reserves().asset, swap.balance_of(POOL));
            prop_assert_eq!(swap.reserves().value, swap.held_value());
        }
    }
}
