//! Payout hooks that call back into the contract mid-sell.

mod common;

use alloy_primitives::{Address, U256};
use claimswap_core::{
    ledger::Ledger, ClaimSwap, ClaimSwapError, Event, PayoutRejected, Reserves, ValueReceiver,
};
use common::*;

/// Payout recipient that calls back into the contract before accepting.
#[derive(Default)]
struct Reenter {
    attempts: Vec<Result<(), ClaimSwapError>>,
}

impl ValueReceiver for Reenter {
    fn on_value(
        &mut self,
        swap: &mut ClaimSwap,
        recipient: Address,
        _amount: U256,
    ) -> Result<(), PayoutRejected> {
        self.attempts.push(swap.buy(&paying(recipient, wad(1)), U256::ZERO, NOW).map(|_| ()));
        self.attempts.push(swap.receive(&paying(recipient, wad(1))));
        self.attempts.push(swap.donate(&ctx(recipient), wad(1)));
        self.attempts.push(
            swap.sell(&ctx(recipient), wad(1), U256::ZERO, NOW, &mut claimswap_core::AcceptAll)
                .map(|_| ()),
        );
        Ok(())
    }
}

#[derive(Debug, PartialEq)]
struct Snapshot {
    ledger: Ledger,
    reserves: Reserves,
    held_value: U256,
    events: Vec<Event>,
}

fn snapshot(swap: &ClaimSwap) -> Snapshot {
    Snapshot {
        ledger: swap.ledger().clone(),
        reserves: swap.reserves(),
        held_value: swap.held_value(),
        events: swap.events().to_vec(),
    }
}

fn seeded() -> Fixture {
    let mut fx = Fixture::new();
    fx.claim(ALICE);
    fx.swap.donate(&paying(ALICE, wad(2)), wad(50)).unwrap();
    fx
}

#[test]
fn guarded_entry_points_reject_reentry_from_payout() {
    let mut fx = seeded();
    let mut hook = Reenter::default();

    let out = fx.swap.sell(&ctx(ALICE), wad(10), U256::ZERO, NOW, &mut hook).unwrap();
    assert!(!out.is_zero());
    assert_eq!(hook.attempts, vec![Err(ClaimSwapError::Reentrancy); 4]);

    // The lock is released once the outer sell returns.
    fx.swap.buy(&paying(BOB, wad(1)), U256::ZERO, NOW).unwrap();
}

#[test]
fn rejected_payout_rolls_back_everything() {
    let mut fx = seeded();
    let before = snapshot(&fx.swap);

    let mut refuse = |_: &mut ClaimSwap, _: Address, _: U256| -> Result<(), PayoutRejected> {
        Err(PayoutRejected::new("no receive function"))
    };
    assert_eq!(
        fx.swap.sell(&ctx(ALICE), wad(10), U256::ZERO, NOW, &mut refuse),
        Err(ClaimSwapError::PayoutFailed("no receive function".into()))
    );
    assert_eq!(snapshot(&fx.swap), before);

    // Guard was released on the error path.
    fx.swap.sell(&ctx(ALICE), wad(10), U256::ZERO, NOW, &mut claimswap_core::AcceptAll).unwrap();
}

#[test]
fn nested_transfer_is_reverted_with_outer_failure() {
    let mut fx = seeded();
    let before = snapshot(&fx.swap);

    let mut forward_then_refuse =
        |swap: &mut ClaimSwap, recipient: Address, _: U256| -> Result<(), PayoutRejected> {
            swap.transfer(&ctx(recipient), BOB, wad(5))
                .map_err(|err| PayoutRejected::new(err.to_string()))?;
            assert_eq!(swap.balance_of(BOB), wad(5));
            Err(PayoutRejected::new("refused after forwarding"))
        };
    assert!(matches!(
        fx.swap.sell(&ctx(ALICE), wad(10), U256::ZERO, NOW, &mut forward_then_refuse),
        Err(ClaimSwapError::PayoutFailed(_))
    ));
    assert_eq!(fx.swap.balance_of(BOB), U256::ZERO);
    assert_eq!(snapshot(&fx.swap), before);
}

#[test]
fn nested_transfer_commits_with_outer_success() {
    let mut fx = seeded();
    let mut forward = |swap: &mut ClaimSwap, recipient: Address, _: U256| {
        swap.transfer(&ctx(recipient), BOB, wad(5)).map_err(|err| PayoutRejected::new(err.to_string()))
    };

    fx.swap.sell(&ctx(ALICE), wad(10), U256::ZERO, NOW, &mut forward).unwrap();
    assert_eq!(fx.swap.balance_of(BOB), wad(5));
    assert_eq!(fx.swap.balance_of(ALICE), wad(45) - wad(10) - wad(5));

    let kinds: Vec<_> = fx.swap.events().iter().rev().take(3).map(Event::signature).collect();
    assert_eq!(
        kinds,
        vec![
            "Sync(uint256,uint256)",
            "Sell(address,uint256,uint256,uint256)",
            "Transfer(address,address,uint256)",
        ]
    );
}

#[test]
fn draining_events_mid_sell_does_not_leak_reverted_records() {
    let mut fx = seeded();
    let before = snapshot(&fx.swap);

    let mut drain_forward_refuse =
        |swap: &mut ClaimSwap, recipient: Address, _: U256| -> Result<(), PayoutRejected> {
            assert!(swap.take_events().is_empty());
            swap.transfer(&ctx(recipient), BOB, wad(5))
                .map_err(|err| PayoutRejected::new(err.to_string()))?;
            Err(PayoutRejected::new("refused after draining"))
        };
    assert!(matches!(
        fx.swap.sell(&ctx(ALICE), wad(10), U256::ZERO, NOW, &mut drain_forward_refuse),
        Err(ClaimSwapError::PayoutFailed(_))
    ));
    assert_eq!(fx.swap.balance_of(BOB), U256::ZERO);
    assert_eq!(snapshot(&fx.swap), before);
}
