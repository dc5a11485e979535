//! Registry of accounts that already claimed.

use crate::journal::{Journal, JournalEntry};
use alloy_primitives::Address;
use std::collections::HashSet;

/// Accounts that have already claimed. Entries are never removed outside of a
/// journal revert.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClaimRegistry {
    claimed: HashSet<Address>,
}

impl ClaimRegistry {
    /// Whether `account` has claimed.
    pub fn has_claimed(&self, account: Address) -> bool {
        self.claimed.contains(&account)
    }

    /// Number of accounts that have claimed.
    pub fn len(&self) -> usize {
        self.claimed.len()
    }

    /// Whether nobody has claimed yet.
    pub fn is_empty(&self) -> bool {
        self.claimed.is_empty()
    }

    /// Marks `account` as claimed. Returns `false` if it already was.
    pub fn mark(&mut self, journal: &mut Journal, account: Address) -> bool {
        let inserted = self.claimed.insert(account);
        if inserted {
            journal.record(JournalEntry::Claimed { account });
        }
        inserted
    }

    pub(crate) fn unmark(&mut self, account: Address) {
        self.claimed.remove(&account);
    }
}
