//! Active Account Selection
//!
//! The connected account is explicit context shared by every view. Each view
//! keys its in-flight loads with a ticket; a load whose ticket no longer
//! matches the selection (account switched, or a newer load started) is
//! discarded instead of committed.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use log::debug;

use crate::model::Address;

#[derive(Debug, Default)]
struct SelectionState {
    address: Option<Address>,
    epoch: u64,
}

/// Which account is active, shared between the wallet watcher and views
#[derive(Debug, Clone, Default)]
pub struct AccountSelection {
    state: Arc<Mutex<SelectionState>>,
}

impl AccountSelection {
    pub fn new(address: Option<Address>) -> Self {
        Self {
            state: Arc::new(Mutex::new(SelectionState { address, epoch: 0 })),
        }
    }

    /// Switch the active account. Returns false when nothing changed.
    pub fn select(&self, address: Option<Address>) -> bool {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if state.address == address {
            return false;
        }
        state.epoch += 1;
        debug!("active account -> {:?} (epoch {})", address.as_ref().map(|a| a.as_str()), state.epoch);
        state.address = address;
        true
    }

    pub fn active(&self) -> Option<Address> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner).address.clone()
    }

    fn snapshot(&self) -> (Option<Address>, u64) {
        let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        (state.address.clone(), state.epoch)
    }

    /// A pass sequence for one view
    pub fn tracker(&self) -> PassTracker {
        PassTracker {
            selection: Some(self.clone()),
            latest: Arc::new(AtomicU64::new(0)),
        }
    }
}

/// Identifies one load: the account it was issued for and its position in
/// the owning view's sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassTicket {
    address: Option<Address>,
    epoch: u64,
    seq: u64,
}

impl PassTicket {
    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }
}

/// Hands out tickets for a single view and decides whether a finished load
/// may replace that view's display state
#[derive(Debug, Clone)]
pub struct PassTracker {
    /// `None` for views whose data does not depend on the account
    selection: Option<AccountSelection>,
    latest: Arc<AtomicU64>,
}

impl PassTracker {
    /// A pass sequence for a view that shows the same data for every
    /// account. Only a newer load of the same view supersedes a ticket.
    pub fn unscoped() -> Self {
        Self {
            selection: None,
            latest: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Start a load for the currently active account, superseding any load
    /// this tracker issued before
    pub fn begin(&self) -> PassTicket {
        let (address, epoch) = self.selection.as_ref().map(|s| s.snapshot()).unwrap_or_default();
        let seq = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        PassTicket { address, epoch, seq }
    }

    pub fn is_current(&self, ticket: &PassTicket) -> bool {
        if ticket.seq != self.latest.load(Ordering::SeqCst) {
            return false;
        }
        match &self.selection {
            Some(selection) => {
                let (address, epoch) = selection.snapshot();
                ticket.epoch == epoch && ticket.address == address
            }
            None => true,
        }
    }

    /// Apply `result` only if `ticket` is still current. Returns whether it
    /// was applied.
    pub fn commit<T>(&self, ticket: &PassTicket, result: T, apply: impl FnOnce(T)) -> bool {
        if self.is_current(ticket) {
            apply(result);
            true
        } else {
            debug!("discarding stale load #{} for {:?}", ticket.seq, ticket.address.as_ref().map(|a| a.as_str()));
            false
        }
    }
}
