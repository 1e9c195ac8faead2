//! This module defines the view-state models owned by the feed domain

use model_alerts::AlertKind;

/// The outcome of a single [refresh](crate::domain::services::AlertFeed::refresh)
/// attempt. Pollers can count these without the feed owning any retry policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// the remote payload replaced the local collection wholesale
    Applied,
    /// a local mutation interleaved the flight, so the payload was discarded
    Stale,
    /// the remote fetch failed and the stale collection was retained
    Failed,
    /// there is no current user; the collection was cleared
    LoggedOut,
}

/// The set of notification ids a mark-read operation targets.
/// Both public mark-read operations funnel through one helper parameterized
/// over this, so optimistic rollback behaves identically for either shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadTarget {
    /// a single notification id
    One(i64),
    /// every notification currently in the feed
    All,
}

impl ReadTarget {
    /// whether the input id belongs to this target set
    pub fn contains(&self, id: i64) -> bool {
        match self {
            ReadTarget::One(target) => *target == id,
            ReadTarget::All => true,
        }
    }
}

/// An ephemeral, locally generated notification shown for immediate user
/// feedback. Toasts never reach the remote ledger and are silently dropped
/// by the next applied refresh.
#[derive(Debug, Clone)]
pub struct Toast {
    /// render kind, typically [AlertKind::Success] or [AlertKind::Warning]
    pub kind: AlertKind,
    /// short display string
    pub title: String,
    /// longer display string
    pub body: String,
    /// navigation target; defaults to the no-op `#`
    pub link: Option<String>,
}
