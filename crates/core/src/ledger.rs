//! Balances, allowances and total supply of the claim token.

use crate::{
    constants::MAX_SUPPLY,
    error::ClaimSwapError,
    events::{abi, Event},
    journal::{Journal, JournalEntry},
};
use alloy_primitives::{Address, U256};
use std::collections::HashMap;

/// Fungible token accounting.
///
/// Accounts come into existence on first write and are never removed, so a
/// zero balance and an absent entry read the same.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    balances: HashMap<Address, U256>,
    allowances: HashMap<(Address, Address), U256>,
    total_supply: U256,
}

impl Ledger {
    /// Balance of `account`.
    pub fn balance_of(&self, account: Address) -> U256 {
        self.balances.get(&account).copied().unwrap_or_default()
    }

    /// Amount `spender` may move out of `owner`'s balance.
    pub fn allowance(&self, owner: Address, spender: Address) -> U256 {
        self.allowances.get(&(owner, spender)).copied().unwrap_or_default()
    }

    /// Sum of all balances.
    pub const fn total_supply(&self) -> U256 {
        self.total_supply
    }

    /// Fails unless `amount` more units fit under [`MAX_SUPPLY`].
    pub fn ensure_headroom(&self, amount: U256) -> Result<(), ClaimSwapError> {
        match self.total_supply.checked_add(amount) {
            Some(next) if next <= MAX_SUPPLY => Ok(()),
            _ => Err(ClaimSwapError::SupplyCeilingExceeded { amount }),
        }
    }

    /// Creates `amount` new units in `to`.
    pub fn mint(
        &mut self,
        journal: &mut Journal,
        to: Address,
        amount: U256,
    ) -> Result<(), ClaimSwapError> {
        if to == Address::ZERO {
            return Err(ClaimSwapError::ZeroAddress);
        }
        self.ensure_headroom(amount)?;
        let supply = self.total_supply.checked_add(amount).ok_or(ClaimSwapError::ArithmeticOverflow)?;
        let credited =
            self.balance_of(to).checked_add(amount).ok_or(ClaimSwapError::ArithmeticOverflow)?;

        journal.record(JournalEntry::TotalSupply { previous: self.total_supply });
        self.total_supply = supply;
        self.write_balance(journal, to, credited);

        journal.emit(Event::Transfer(abi::Transfer { from: Address::ZERO, to, value: amount }));
        Ok(())
    }

    /// Moves `amount` from `from` to `to`.
    pub fn transfer(
        &mut self,
        journal: &mut Journal,
        from: Address,
        to: Address,
        amount: U256,
    ) -> Result<(), ClaimSwapError> {
        if to == Address::ZERO {
            return Err(ClaimSwapError::ZeroAddress);
        }
        let available = self.balance_of(from);
        if available < amount {
            return Err(ClaimSwapError::InsufficientBalance { available, required: amount });
        }

        // Debit first and re-read the recipient so `from == to` nets to zero.
        self.write_balance(journal, from, available - amount);
        let credited =
            self.balance_of(to).checked_add(amount).ok_or(ClaimSwapError::ArithmeticOverflow)?;
        self.write_balance(journal, to, credited);

        journal.emit(Event::Transfer(abi::Transfer { from, to, value: amount }));
        Ok(())
    }

    /// Sets the allowance `owner -> spender`, overwriting any previous value.
    pub fn approve(
        &mut self,
        journal: &mut Journal,
        owner: Address,
        spender: Address,
        amount: U256,
    ) -> Result<(), ClaimSwapError> {
        if spender == Address::ZERO {
            return Err(ClaimSwapError::ZeroSpender);
        }
        self.write_allowance(journal, owner, spender, amount);
        journal.emit(Event::Approval(abi::Approval { owner, spender, value: amount }));
        Ok(())
    }

    /// Spends `spender`'s allowance over `from` and moves the tokens.
    ///
    /// The allowance is decremented for every amount, including an allowance
    /// of `U256::MAX`.
    pub fn transfer_from(
        &mut self,
        journal: &mut Journal,
        spender: Address,
        from: Address,
        to: Address,
        amount: U256,
    ) -> Result<(), ClaimSwapError> {
        let available = self.allowance(from, spender);
        if available < amount {
            return Err(ClaimSwapError::InsufficientAllowance { available, required: amount });
        }
        self.write_allowance(journal, from, spender, available - amount);
        self.transfer(journal, from, to, amount)
    }

    fn write_balance(&mut self, journal: &mut Journal, account: Address, value: U256) {
        let previous = self.balances.insert(account, value);
        journal.record(JournalEntry::Balance { account, previous });
    }

    fn write_allowance(&mut self, journal: &mut Journal, owner: Address, spender: Address, value: U256) {
        let previous = self.allowances.insert((owner, spender), value);
        journal.record(JournalEntry::Allowance { owner, spender, previous });
    }

    pub(crate) fn restore_balance(&mut self, account: Address, previous: Option<U256>) {
        match previous {
            Some(value) => self.balances.insert(account, value),
            None => self.balances.remove(&account),
        };
    }

    pub(crate) fn restore_allowance(&mut self, owner: Address, spender: Address, previous: Option<U256>) {
        match previous {
            Some(value) => self.allowances.insert((owner, spender), value),
            None => self.allowances.remove(&(owner, spender)),
        };
    }

    pub(crate) fn restore_total_supply(&mut self, previous: U256) {
        self.total_supply = previous;
    }

    /// Sum of every stored balance. Equals [`Self::total_supply`] at rest.
    pub fn balance_sum(&self) -> U256 {
        self.balances.values().fold(U256::ZERO, |acc, balance| acc.saturating_add(*balance))
    }
}
