//! In-flight registry for deduplicated read requests.
//!
//! Maps each [`Fingerprint`] to the abort handle of the one read currently
//! outstanding for it. Registering a fingerprint that is already present
//! aborts and evicts the older request first, so there is never more than one
//! live handle per fingerprint.
//!
//! CONCURRENCY
//! ===========
//! The registry is only touched from the single cooperative executor that
//! drives the pipeline, and `register` runs to completion before the request
//! suspends on the network. No locking is needed; the pipeline holds it in a
//! `RefCell` and never keeps a borrow across an `.await`.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use std::collections::HashMap;
use std::future::Future;

use futures::future::{AbortHandle, AbortRegistration, Abortable};

use crate::fingerprint::Fingerprint;

/// Outcome of registering a read: whether an identical in-flight read was cancelled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// No identical read was outstanding.
    Proceed,
    /// An older identical read was aborted and evicted.
    Supersede,
}

/// Read-only view of a request's cancellation state, handed to transports.
#[derive(Clone, Debug)]
pub struct CancelSignal(AbortHandle);

impl CancelSignal {
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.is_aborted()
    }
}

/// Cancellation token returned by [`InFlightRegistry::register`].
#[derive(Debug)]
pub struct CancelToken {
    fingerprint: Fingerprint,
    ticket: u64,
    dispatch: Dispatch,
    signal: CancelSignal,
    registration: AbortRegistration,
}

impl CancelToken {
    #[must_use]
    pub fn fingerprint(&self) -> &Fingerprint {
        &self.fingerprint
    }

    /// Sequence number identifying this registration.
    #[must_use]
    pub fn ticket(&self) -> u64 {
        self.ticket
    }

    #[must_use]
    pub fn dispatch(&self) -> Dispatch {
        self.dispatch
    }

    #[must_use]
    pub fn signal(&self) -> CancelSignal {
        self.signal.clone()
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.signal.is_cancelled()
    }

    /// Wrap `future` so that it resolves to `Err(Aborted)` as soon as this
    /// registration is superseded.
    pub fn guard<F: Future>(self, future: F) -> Abortable<F> {
        Abortable::new(future, self.registration)
    }
}

#[derive(Debug)]
struct Entry {
    ticket: u64,
    handle: AbortHandle,
}

/// Fingerprint to cancellation-handle map for outstanding reads.
#[derive(Debug, Default)]
pub struct InFlightRegistry {
    entries: HashMap<Fingerprint, Entry>,
    next_ticket: u64,
}

impl InFlightRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new read for `fingerprint`, aborting any read already registered under it.
    pub fn register(&mut self, fingerprint: Fingerprint) -> CancelToken {
        let dispatch = match self.entries.remove(&fingerprint) {
            Some(previous) => {
                previous.handle.abort();
                Dispatch::Supersede
            }
            None => Dispatch::Proceed,
        };

        let (handle, registration) = AbortHandle::new_pair();
        let ticket = self.next_ticket;
        self.next_ticket = self.next_ticket.wrapping_add(1);
        self.entries.insert(fingerprint.clone(), Entry { ticket, handle: handle.clone() });

        CancelToken { fingerprint, ticket, dispatch, signal: CancelSignal(handle), registration }
    }

    /// Remove whatever entry is registered for `fingerprint`. Idempotent.
    pub fn release(&mut self, fingerprint: &Fingerprint) {
        self.entries.remove(fingerprint);
    }

    /// Remove the entry for `fingerprint` only if it still belongs to `ticket`.
    ///
    /// Returns `false` (and leaves the registry untouched) when the request was
    /// already superseded or released.
    pub fn release_ticket(&mut self, fingerprint: &Fingerprint, ticket: u64) -> bool {
        if self.entries.get(fingerprint).is_some_and(|e| e.ticket == ticket) {
            self.entries.remove(fingerprint);
            true
        } else {
            false
        }
    }

    /// Abort and drop every outstanding read.
    pub fn cancel_all(&mut self) {
        for (_, entry) in self.entries.drain() {
            entry.handle.abort();
        }
    }

    #[must_use]
    pub fn contains(&self, fingerprint: &Fingerprint) -> bool {
        self.entries.contains_key(fingerprint)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
