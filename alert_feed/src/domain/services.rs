//! This module defines the services that are exposed by this crate

use crate::{
    domain::{
        models::{ReadTarget, RefreshOutcome, Toast},
        ports::{AlertLedger, CurrentUserSource, FeedMutationErr, TimeGetter},
    },
    outbound::time::SystemClock,
};
use model_alerts::Alert;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// The synchronized local view of a user's notification ledger.
///
/// The collection is replaced wholesale by [AlertFeed::refresh] and mutated
/// in place by the optimistic mark-read operations; the unread views are
/// recomputed from it at query time and never stored.
pub struct AlertFeed<L, U, T> {
    ledger: L,
    user: U,
    time: T,
    state: Mutex<FeedState>,
}

#[derive(Default)]
struct FeedState {
    alerts: Vec<Alert>,
    // Bumped on every state change. A refresh captures it before the request
    // goes out and discards the payload if it moved during the flight, so an
    // in-flight fetch can never clobber an optimistic flip.
    version: u64,
}

impl<L, U, T> AlertFeed<L, U, T>
where
    L: AlertLedger,
    anyhow::Error: From<L::Err>,
    U: CurrentUserSource,
    T: TimeGetter,
{
    /// create a new, empty feed over the input ports
    pub fn new(ledger: L, user: U, time: T) -> Self {
        AlertFeed {
            ledger,
            user,
            time,
            state: Mutex::new(FeedState::default()),
        }
    }

    fn state(&self) -> MutexGuard<'_, FeedState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace the local collection with the remote ledger.
    ///
    /// With no current user the collection is cleared (logout lifecycle).
    /// A fetch failure is logged and the stale collection retained; the
    /// consumer keeps rendering last known-good data. A payload that raced
    /// a local mutation is discarded and the next refresh converges.
    #[tracing::instrument(skip(self))]
    pub async fn refresh(&self) -> RefreshOutcome {
        let Some(user_id) = self.user.current_user() else {
            let mut state = self.state();
            if !state.alerts.is_empty() {
                state.alerts.clear();
                state.version += 1;
            }
            return RefreshOutcome::LoggedOut;
        };

        let before = self.state().version;

        match self.ledger.fetch_for_user(&user_id).await {
            Ok(alerts) => {
                let mut state = self.state();
                if state.version != before {
                    tracing::debug!("discarding ledger payload that raced a local mutation");
                    return RefreshOutcome::Stale;
                }
                state.alerts = alerts;
                state.version += 1;
                RefreshOutcome::Applied
            }
            Err(err) => {
                let err = anyhow::Error::from(err);
                tracing::warn!(error = %err, "alert refresh failed, keeping stale feed");
                RefreshOutcome::Failed
            }
        }
    }

    /// Optimistically mark one notification as read, then confirm remotely.
    /// The local flag is reverted if the remote mutation fails.
    #[tracing::instrument(skip(self))]
    pub async fn mark_one_read(&self, notification_id: i64) -> Result<(), FeedMutationErr> {
        self.mark_read_target(ReadTarget::One(notification_id)).await
    }

    /// Optimistically mark every notification as read, then confirm remotely
    /// with a single batch call. All flipped flags are reverted if the remote
    /// mutation fails.
    #[tracing::instrument(skip(self))]
    pub async fn mark_all_read(&self) -> Result<(), FeedMutationErr> {
        self.mark_read_target(ReadTarget::All).await
    }

    // The single mutation path for both read targets, so rollback-on-failure
    // is applied uniformly.
    async fn mark_read_target(&self, target: ReadTarget) -> Result<(), FeedMutationErr> {
        let Some(user_id) = self.user.current_user() else {
            return Err(FeedMutationErr::from(anyhow::anyhow!(
                "cannot mark alerts read without a signed-in user"
            )));
        };

        let flipped: Vec<i64> = {
            let mut state = self.state();
            let flipped: Vec<i64> = state
                .alerts
                .iter_mut()
                .filter(|alert| !alert.is_read && target.contains(alert.id))
                .map(|alert| {
                    alert.is_read = true;
                    alert.id
                })
                .collect();
            if !flipped.is_empty() {
                state.version += 1;
            }
            flipped
        };

        // Nothing in the target set was unread, so the remote ledger already
        // agrees; skip the round-trip.
        if flipped.is_empty() {
            return Ok(());
        }

        let result = match target {
            ReadTarget::One(notification_id) => {
                self.ledger.mark_read(notification_id, &user_id).await
            }
            ReadTarget::All => self.ledger.mark_all_read(&user_id).await,
        };

        if let Err(err) = result {
            let err = anyhow::Error::from(err);
            let mut state = self.state();
            for alert in state
                .alerts
                .iter_mut()
                .filter(|alert| flipped.contains(&alert.id))
            {
                alert.is_read = false;
            }
            state.version += 1;
            tracing::warn!(error = %err, "mark-read failed, reverted optimistic flags");
            return Err(FeedMutationErr::from(err));
        }

        Ok(())
    }

    /// Insert an ephemeral toast at the head of the feed and return its
    /// locally generated id (epoch millis of the current time). The toast is
    /// unread, never sent to the ledger, and dropped by the next applied
    /// refresh.
    #[tracing::instrument(skip(self))]
    pub fn push_toast(&self, toast: Toast) -> i64 {
        let now = self.time.now();
        let alert = Alert {
            id: now.timestamp_millis(),
            kind: toast.kind,
            title: toast.title,
            body: toast.body,
            link: toast.link.unwrap_or_else(|| "#".to_string()),
            is_read: false,
            created_at: now,
        };

        let mut state = self.state();
        let id = alert.id;
        state.alerts.insert(0, alert);
        state.version += 1;
        id
    }

    /// snapshot of the current collection, in ledger order
    pub fn alerts(&self) -> Vec<Alert> {
        self.state().alerts.clone()
    }

    /// count of unread notifications, recomputed at query time
    pub fn unread_count(&self) -> usize {
        self.state()
            .alerts
            .iter()
            .filter(|alert| !alert.is_read)
            .count()
    }

    /// the `n` most recently created unread notifications, newest first
    /// (ties broken by descending id)
    pub fn top_unread(&self, n: usize) -> Vec<Alert> {
        let mut unread: Vec<Alert> = self
            .state()
            .alerts
            .iter()
            .filter(|alert| !alert.is_read)
            .cloned()
            .collect();

        unread.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        unread.truncate(n);
        unread
    }
}

impl<L, U> AlertFeed<L, U, SystemClock>
where
    L: AlertLedger,
    anyhow::Error: From<L::Err>,
    U: CurrentUserSource,
{
    /// create a new feed over the system clock, the right impl of
    /// [TimeGetter] outside of tests
    pub fn new_with_system_clock(ledger: L, user: U) -> Self {
        Self::new(ledger, user, SystemClock)
    }
}
