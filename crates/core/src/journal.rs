//! Undo log and event log backing all-or-nothing entry points.
//!
//! Every mutation records the value it overwrote. An entry point opens a
//! checkpoint on entry; on failure the entries recorded since the checkpoint
//! are handed back newest-first for the owner to undo, and the event log is
//! truncated to its length at the checkpoint.

use crate::{access::Lifecycle, events::Event, pool::Reserves};
use alloy_primitives::{Address, U256};

/// One overwritten piece of state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JournalEntry {
    /// Balance of `account` before the write (`None` if it had none).
    Balance {
        /// Account whose balance was written.
        account: Address,
        /// Prior balance.
        previous: Option<U256>,
    },
    /// Allowance `owner -> spender` before the write.
    Allowance {
        /// Token owner.
        owner: Address,
        /// Approved spender.
        spender: Address,
        /// Prior allowance.
        previous: Option<U256>,
    },
    /// Total supply before a mint.
    TotalSupply {
        /// Prior supply.
        previous: U256,
    },
    /// `account` was inserted into the claim registry.
    Claimed {
        /// Newly registered claimant.
        account: Address,
    },
    /// Held native value before the write.
    HeldValue {
        /// Prior held value.
        previous: U256,
    },
    /// Cached reserves before a sync.
    Reserves {
        /// Prior reserves.
        previous: Reserves,
    },
    /// Lifecycle before a pause toggle.
    Lifecycle {
        /// Prior lifecycle.
        previous: Lifecycle,
    },
}

/// Opaque marker returned by [`Journal::checkpoint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct Checkpoint {
    entries: usize,
    logs: usize,
}

/// Undo entries and the ordered event log.
#[derive(Debug, Default)]
pub struct Journal {
    entries: Vec<JournalEntry>,
    logs: Vec<Event>,
    depth: usize,
}

impl Journal {
    /// Records an undo entry. Outside of any checkpoint there is nothing to
    /// revert to, so the entry is dropped.
    pub fn record(&mut self, entry: JournalEntry) {
        if self.depth > 0 {
            self.entries.push(entry);
        }
    }

    /// Appends a record to the event log.
    pub fn emit(&mut self, event: Event) {
        self.logs.push(event);
    }

    /// Opens a (possibly nested) checkpoint.
    pub fn checkpoint(&mut self) -> Checkpoint {
        self.depth += 1;
        Checkpoint { entries: self.entries.len(), logs: self.logs.len() }
    }

    /// Closes a checkpoint and keeps its work. Inner commits keep their undo
    /// entries so an enclosing checkpoint can still revert them.
    pub fn commit(&mut self, _checkpoint: Checkpoint) {
        self.depth = self.depth.saturating_sub(1);
        if self.depth == 0 {
            self.entries.clear();
        }
    }

    /// Closes a checkpoint and discards its work, returning the undo entries
    /// newest-first.
    pub fn revert(&mut self, checkpoint: Checkpoint) -> Vec<JournalEntry> {
        self.depth = self.depth.saturating_sub(1);
        self.logs.truncate(checkpoint.logs);
        let mut undone = self.entries.split_off(checkpoint.entries);
        undone.reverse();
        undone
    }

    /// Current nesting depth.
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Every record emitted so far, oldest first.
    pub fn logs(&self) -> &[Event] {
        &self.logs
    }

    /// Drains the event log. While a checkpoint is open nothing is drained,
    /// so a later revert can still discard uncommitted records.
    pub fn take_logs(&mut self) -> Vec<Event> {
        if self.depth > 0 {
            return Vec::new();
        }
        std::mem::take(&mut self.logs)
    }
}
