//! The contract state machine and its entry points.

use crate::{
    access::{AccessControl, Lifecycle, Operation},
    claims::ClaimRegistry,
    config::ContractConfig,
    constants::{CLAIMANT_SHARE, CLAIM_AMOUNT, DECIMALS, POOL_SHARE},
    env::CallContext,
    error::ClaimSwapError,
    events::{abi, Event},
    guard::ReentrancyGuard,
    journal::{Checkpoint, Journal, JournalEntry},
    ledger::Ledger,
    payout::ValueReceiver,
    pool::{self, Reserves, SellQuote},
};
use alloy_primitives::{Address, B256, U256};
use claimswap_merkle::verify;

/// Claim-gated token ledger with a built-in constant-product pool.
///
/// All state is owned by this value and only changes through its `&mut self`
/// entry points. Each entry point is all-or-nothing: a failure rolls back
/// every balance, allowance, reserve and emitted record it touched.
///
/// The pool account is [`ContractConfig::address`]; tokens sitting there are
/// the asset reserve, and native value attached to payable calls is held by
/// the contract as the value reserve.
#[derive(Debug)]
pub struct ClaimSwap {
    config: ContractConfig,
    ledger: Ledger,
    claims: ClaimRegistry,
    reserves: Reserves,
    held_value: U256,
    access: AccessControl,
    guard: ReentrancyGuard,
    journal: Journal,
}

impl ClaimSwap {
    /// Creates an empty contract: no supply, zero reserves, `Active`.
    pub fn new(config: ContractConfig) -> Self {
        tracing::info!(
            target: "claimswap",
            root = %config.merkle_root(),
            founder = %config.founder(),
            pool = %config.address(),
            "contract initialized"
        );
        let access = AccessControl::new(config.founder());
        Self {
            config,
            ledger: Ledger::default(),
            claims: ClaimRegistry::default(),
            reserves: Reserves::default(),
            held_value: U256::ZERO,
            access,
            guard: ReentrancyGuard::default(),
            journal: Journal::default(),
        }
    }

    // --- entry points ------------------------------------------------------

    /// Mints the claim to an allowlisted caller: 95 units to the caller and 5
    /// units to the pool.
    pub fn claim(&mut self, ctx: &CallContext, proof: &[B256]) -> Result<(), ClaimSwapError> {
        let _lock = self.guard.enter()?;
        self.transact(|swap| {
            ctx.ensure_non_payable()?;
            swap.access.ensure_admits(Operation::Claim)?;

            let account = ctx.sender;
            if swap.claims.has_claimed(account) {
                return Err(ClaimSwapError::AlreadyClaimed(account));
            }
            if !verify(swap.config.merkle_root(), proof, account) {
                tracing::warn!(target: "claimswap", %account, "claim with invalid proof");
                return Err(ClaimSwapError::InvalidProof(account));
            }
            swap.ledger.ensure_headroom(CLAIM_AMOUNT)?;

            swap.claims.mark(&mut swap.journal, account);
            swap.ledger.mint(&mut swap.journal, account, CLAIMANT_SHARE)?;
            swap.ledger.mint(&mut swap.journal, swap.config.address(), POOL_SHARE)?;
            swap.journal.emit(Event::Claimed(abi::Claimed {
                account,
                userAmount: CLAIMANT_SHARE,
                poolAmount: POOL_SHARE,
            }));
            swap.sync();

            tracing::info!(target: "claimswap", %account, "claimed");
            Ok(())
        })
    }

    /// Adds liquidity: `asset_amount` tokens from the caller plus the attached
    /// native value. No pricing happens.
    pub fn donate(&mut self, ctx: &CallContext, asset_amount: U256) -> Result<(), ClaimSwapError> {
        let _lock = self.guard.enter()?;
        self.transact(|swap| {
            swap.access.ensure_admits(Operation::Donate)?;
            if asset_amount.is_zero() && ctx.value.is_zero() {
                return Err(ClaimSwapError::NothingDonated);
            }

            swap.credit_value(ctx.value)?;
            if !asset_amount.is_zero() {
                let pool = swap.config.address();
                swap.ledger.transfer(&mut swap.journal, ctx.sender, pool, asset_amount)?;
            }
            swap.journal.emit(Event::Donation(abi::Donation {
                donor: ctx.sender,
                assetAmount: asset_amount,
                value: ctx.value,
            }));
            swap.sync();

            tracing::info!(
                target: "claimswap",
                donor = %ctx.sender,
                %asset_amount,
                value = %ctx.value,
                "donation received"
            );
            Ok(())
        })
    }

    /// Swaps the attached native value for tokens. Returns the tokens paid out.
    pub fn buy(
        &mut self,
        ctx: &CallContext,
        min_asset_out: U256,
        deadline: u64,
    ) -> Result<U256, ClaimSwapError> {
        let _lock = self.guard.enter()?;
        self.transact(|swap| {
            swap.access.ensure_admits(Operation::Buy)?;
            ctx.ensure_not_expired(deadline)?;
            let value_in = ctx.value;
            if value_in.is_zero() {
                return Err(ClaimSwapError::ZeroInput);
            }

            let asset_out = pool::quote_buy(swap.reserves, value_in)?;
            if asset_out.is_zero() {
                return Err(ClaimSwapError::NoLiquidity);
            }
            if asset_out < min_asset_out {
                return Err(ClaimSwapError::SlippageExceeded { out: asset_out, min: min_asset_out });
            }

            swap.credit_value(value_in)?;
            let pool = swap.config.address();
            swap.ledger.transfer(&mut swap.journal, pool, ctx.sender, asset_out)?;
            swap.journal.emit(Event::Buy(abi::Buy {
                buyer: ctx.sender,
                valueIn: value_in,
                assetOut: asset_out,
            }));
            swap.sync();

            tracing::info!(target: "claimswap", buyer = %ctx.sender, %value_in, %asset_out, "buy");
            Ok(asset_out)
        })
    }

    /// Swaps `asset_in` tokens for native value, routing the fee to the
    /// founder. The payout is delivered through `receiver`, which may call back
    /// into the contract; any guarded entry point it reaches fails with
    /// [`ClaimSwapError::Reentrancy`]. Returns the native value paid out.
    pub fn sell(
        &mut self,
        ctx: &CallContext,
        asset_in: U256,
        min_value_out: U256,
        deadline: u64,
        receiver: &mut dyn ValueReceiver,
    ) -> Result<U256, ClaimSwapError> {
        let _lock = self.guard.enter()?;
        self.transact(|swap| {
            ctx.ensure_non_payable()?;
            swap.access.ensure_admits(Operation::Sell)?;
            ctx.ensure_not_expired(deadline)?;
            if asset_in.is_zero() {
                return Err(ClaimSwapError::ZeroInput);
            }
            let seller = ctx.sender;
            if seller == Address::ZERO {
                return Err(ClaimSwapError::ZeroRecipient);
            }

            let SellQuote { fee, value_out, .. } = pool::quote_sell(swap.reserves, asset_in)?;
            let pool = swap.config.address();
            swap.ledger.transfer(&mut swap.journal, seller, pool, asset_in)?;
            swap.ledger.transfer(&mut swap.journal, pool, swap.config.founder(), fee)?;

            if value_out.is_zero() {
                return Err(ClaimSwapError::NoLiquidity);
            }
            if value_out < min_value_out {
                return Err(ClaimSwapError::SlippageExceeded { out: value_out, min: min_value_out });
            }
            if value_out > swap.held_value {
                return Err(ClaimSwapError::InsufficientReserve {
                    available: swap.held_value,
                    required: value_out,
                });
            }
            swap.set_held_value(swap.held_value - value_out);

            receiver.on_value(swap, seller, value_out).map_err(|rejected| {
                tracing::warn!(target: "claimswap", %seller, %rejected, "payout rejected");
                ClaimSwapError::PayoutFailed(rejected.reason)
            })?;

            swap.journal.emit(Event::Sell(abi::Sell {
                seller,
                assetIn: asset_in,
                fee,
                valueOut: value_out,
            }));
            swap.sync();

            tracing::info!(target: "claimswap", %seller, %asset_in, %fee, %value_out, "sell");
            Ok(value_out)
        })
    }

    /// Accepts native value sent without calldata.
    pub fn receive(&mut self, ctx: &CallContext) -> Result<(), ClaimSwapError> {
        let _lock = self.guard.enter()?;
        self.transact(|swap| {
            swap.access.ensure_admits(Operation::Receive)?;
            swap.credit_value(ctx.value)?;
            if !ctx.value.is_zero() {
                swap.journal.emit(Event::EthReceived(abi::EthReceived {
                    sender: ctx.sender,
                    amount: ctx.value,
                }));
            }
            swap.sync();
            Ok(())
        })
    }

    /// Moves `amount` tokens from the caller to `to`.
    pub fn transfer(
        &mut self,
        ctx: &CallContext,
        to: Address,
        amount: U256,
    ) -> Result<(), ClaimSwapError> {
        self.transact(|swap| {
            ctx.ensure_non_payable()?;
            swap.access.ensure_admits(Operation::Transfer)?;
            swap.ledger.transfer(&mut swap.journal, ctx.sender, to, amount)?;
            swap.sync_if_touched(&[ctx.sender, to]);
            Ok(())
        })
    }

    /// Sets the caller's allowance for `spender`.
    pub fn approve(
        &mut self,
        ctx: &CallContext,
        spender: Address,
        amount: U256,
    ) -> Result<(), ClaimSwapError> {
        self.transact(|swap| {
            ctx.ensure_non_payable()?;
            swap.access.ensure_admits(Operation::Approve)?;
            swap.ledger.approve(&mut swap.journal, ctx.sender, spender, amount)
        })
    }

    /// Moves `amount` tokens from `from` to `to` using the caller's allowance.
    pub fn transfer_from(
        &mut self,
        ctx: &CallContext,
        from: Address,
        to: Address,
        amount: U256,
    ) -> Result<(), ClaimSwapError> {
        self.transact(|swap| {
            ctx.ensure_non_payable()?;
            swap.access.ensure_admits(Operation::TransferFrom)?;
            swap.ledger.transfer_from(&mut swap.journal, ctx.sender, from, to, amount)?;
            swap.sync_if_touched(&[from, to]);
            Ok(())
        })
    }

    /// Founder only: closes the gated entry points.
    pub fn pause(&mut self, ctx: &CallContext) -> Result<(), ClaimSwapError> {
        self.set_lifecycle(ctx, Lifecycle::Paused)
    }

    /// Founder only: reopens the gated entry points.
    pub fn unpause(&mut self, ctx: &CallContext) -> Result<(), ClaimSwapError> {
        self.set_lifecycle(ctx, Lifecycle::Active)
    }

    // --- views -------------------------------------------------------------

    /// Token name.
    pub fn name(&self) -> &str {
        self.config.name()
    }

    /// Token symbol.
    pub fn symbol(&self) -> &str {
        self.config.symbol()
    }

    /// Token decimals.
    pub const fn decimals(&self) -> u8 {
        DECIMALS
    }

    /// Token balance of `account`.
    pub fn balance_of(&self, account: Address) -> U256 {
        self.ledger.balance_of(account)
    }

    /// Remaining allowance `owner -> spender`.
    pub fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.ledger.allowance(owner, spender)
    }

    /// Total token supply.
    pub const fn total_supply(&self) -> U256 {
        self.ledger.total_supply()
    }

    /// Whether `account` has claimed.
    pub fn has_claimed(&self, account: Address) -> bool {
        self.claims.has_claimed(account)
    }

    /// Cached pool reserves.
    pub const fn reserves(&self) -> Reserves {
        self.reserves
    }

    /// Native value held by the contract.
    pub const fn held_value(&self) -> U256 {
        self.held_value
    }

    /// Current lifecycle.
    pub const fn lifecycle(&self) -> Lifecycle {
        self.access.lifecycle()
    }

    /// Founder address.
    pub const fn founder(&self) -> Address {
        self.config.founder()
    }

    /// Allowlist root.
    pub const fn merkle_root(&self) -> B256 {
        self.config.merkle_root()
    }

    /// Contract (and pool) address.
    pub const fn address(&self) -> Address {
        self.config.address()
    }

    /// Frozen construction parameters.
    pub const fn config(&self) -> &ContractConfig {
        &self.config
    }

    /// Read-only view of the token ledger.
    pub const fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Every record emitted so far, oldest first.
    pub fn events(&self) -> &[Event] {
        self.journal.logs()
    }

    /// Drains the event log. Returns nothing while an entry point is in flight.
    pub fn take_events(&mut self) -> Vec<Event> {
        self.journal.take_logs()
    }

    /// Tokens a buy of `value_in` would pay out right now.
    pub fn quote_buy(&self, value_in: U256) -> Result<U256, ClaimSwapError> {
        pool::quote_buy(self.reserves, value_in)
    }

    /// Fee and payout a sell of `asset_in` would produce right now.
    pub fn quote_sell(&self, asset_in: U256) -> Result<SellQuote, ClaimSwapError> {
        pool::quote_sell(self.reserves, asset_in)
    }

    // --- internals ---------------------------------------------------------

    fn set_lifecycle(&mut self, ctx: &CallContext, target: Lifecycle) -> Result<(), ClaimSwapError> {
        self.transact(|swap| {
            ctx.ensure_non_payable()?;
            swap.access.ensure_founder(ctx.sender)?;
            let previous = swap.access.transition(target)?;
            swap.journal.record(JournalEntry::Lifecycle { previous });
            swap.journal.emit(match target {
                Lifecycle::Paused => Event::Paused(abi::Paused {}),
                Lifecycle::Active => Event::Unpaused(abi::Unpaused {}),
            });
            tracing::info!(target: "claimswap", %previous, lifecycle = %target, "lifecycle changed");
            Ok(())
        })
    }

    /// Runs `op` inside a journal checkpoint, rolling everything back if it
    /// fails.
    fn transact<T>(
        &mut self,
        op: impl FnOnce(&mut Self) -> Result<T, ClaimSwapError>,
    ) -> Result<T, ClaimSwapError> {
        let checkpoint = self.journal.checkpoint();
        match op(self) {
            Ok(out) => {
                self.journal.commit(checkpoint);
                Ok(out)
            }
            Err(err) => {
                self.revert_to(checkpoint);
                tracing::debug!(target: "claimswap", %err, "operation reverted");
                Err(err)
            }
        }
    }

    fn revert_to(&mut self, checkpoint: Checkpoint) {
        for entry in self.journal.revert(checkpoint) {
            match entry {
                JournalEntry::Balance { account, previous } => {
                    self.ledger.restore_balance(account, previous);
                }
                JournalEntry::Allowance { owner, spender, previous } => {
                    self.ledger.restore_allowance(owner, spender, previous);
                }
                JournalEntry::TotalSupply { previous } => self.ledger.restore_total_supply(previous),
                JournalEntry::Claimed { account } => self.claims.unmark(account),
                JournalEntry::HeldValue { previous } => self.held_value = previous,
                JournalEntry::Reserves { previous } => self.reserves = previous,
                JournalEntry::Lifecycle { previous } => self.access.restore(previous),
            }
        }
    }

    fn credit_value(&mut self, amount: U256) -> Result<(), ClaimSwapError> {
        if amount.is_zero() {
            return Ok(());
        }
        let next = self.held_value.checked_add(amount).ok_or(ClaimSwapError::ArithmeticOverflow)?;
        self.set_held_value(next);
        Ok(())
    }

    fn set_held_value(&mut self, value: U256) {
        self.journal.record(JournalEntry::HeldValue { previous: self.held_value });
        self.held_value = value;
    }

    /// Recomputes the reserves from the pool balance and the held value.
    fn sync(&mut self) {
        let reserves =
            Reserves::new(self.ledger.balance_of(self.config.address()), self.held_value);
        self.journal.record(JournalEntry::Reserves { previous: self.reserves });
        self.reserves = reserves;
        self.journal.emit(Event::Sync(abi::Sync {
            reserveAsset: reserves.asset,
            reserveValue: reserves.value,
        }));
        tracing::debug!(target: "claimswap", asset = %reserves.asset, value = %reserves.value, "sync");
    }

    /// Plain token movements only resync when they move the pool balance.
    fn sync_if_touched(&mut self, accounts: &[Address]) {
        if accounts.contains(&self.config.address()) {
            self.sync();
        }
    }
}
