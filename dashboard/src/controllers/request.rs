//! # Request Lifecycle Primitives
//!
//! [`RequestState`] is the per-attempt tagged union every form-backed view
//! uses. [`InFlight`] hands out [`Ticket`]s so a result is only applied to
//! the request slot that is still waiting for it.

use std::sync::atomic::{AtomicU64, Ordering};

use thiserror::Error;

use crate::core::error::AppError;

/// Why a form submit did not go out.
#[derive(Debug, Error)]
pub enum SubmitRejected {
    #[error("A request is already in progress")]
    Busy,

    #[error(transparent)]
    Invalid(#[from] AppError),
}

/// Outcome of the most recent attempt for one request slot.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestState<T> {
    /// Nothing submitted yet
    Idle,
    /// Request outstanding
    Pending,
    /// Last attempt succeeded with this payload
    Succeeded(T),
    /// Last attempt failed with this user-facing message
    Failed(String),
}

impl<T> Default for RequestState<T> {
    fn default() -> Self {
        RequestState::Idle
    }
}

impl<T> RequestState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, RequestState::Idle)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, RequestState::Pending)
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            RequestState::Succeeded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RequestState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Process-wide ticket counter
static NEXT_TICKET: AtomicU64 = AtomicU64::new(1);

/// Identifies one issued request. Unique across every slot in the process,
/// so a slot that is replaced by a fresh one never accepts a ticket issued
/// to its predecessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

impl Ticket {
    fn next() -> Self {
        Ticket(NEXT_TICKET.fetch_add(1, Ordering::Relaxed))
    }
}

/// Tracks the single outstanding request of a slot.
///
/// Only the most recently issued ticket can settle the slot. Results
/// carrying any other ticket are stale.
#[derive(Debug, Default, Clone)]
pub struct InFlight {
    outstanding: Option<Ticket>,
}

impl InFlight {
    fn issue(&mut self) -> Ticket {
        let ticket = Ticket::next();
        self.outstanding = Some(ticket);
        ticket
    }

    /// Issue a ticket unless a request is already outstanding.
    pub fn try_begin(&mut self) -> Option<Ticket> {
        if self.is_busy() {
            return None;
        }
        Some(self.issue())
    }

    /// Issue a ticket, superseding whatever is outstanding.
    pub fn restart(&mut self) -> Ticket {
        if let Some(previous) = self.outstanding {
            tracing::debug!(ticket = previous.0, "Superseding outstanding request");
        }
        self.issue()
    }

    /// Settle the slot. Returns `false` (and leaves the slot untouched) when
    /// `ticket` is not the outstanding one.
    pub fn settle(&mut self, ticket: Ticket) -> bool {
        if self.outstanding == Some(ticket) {
            self.outstanding = None;
            true
        } else {
            tracing::debug!(ticket = ticket.0, current = ?self.outstanding.map(|t| t.0), "Dropping stale response");
            false
        }
    }

    /// Forget the outstanding request; its result will be treated as stale.
    pub fn abandon(&mut self) {
        self.outstanding = None;
    }

    pub fn is_busy(&self) -> bool {
        self.outstanding.is_some()
    }
}
