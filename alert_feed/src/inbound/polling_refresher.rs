//! The polling refresher defines a background task for keeping an
//! [AlertFeed] synchronized with the remote ledger. Refresh cadence is a
//! caller policy; the feed itself never schedules anything.

use crate::domain::{
    models::RefreshOutcome,
    ports::{AlertLedger, CurrentUserSource, TimeGetter},
    services::AlertFeed,
};
use std::{sync::Arc, time::Duration};

/// Stats about the current state of the background refresher
#[derive(Debug, Clone, Copy, Default)]
#[non_exhaustive]
pub struct RefresherStats {
    /// the count of times the refresher has polled since its construction
    pub poll_count: usize,
    /// polls whose payload replaced the local collection
    pub applied: usize,
    /// polls discarded because a local mutation raced the fetch
    pub stale: usize,
    /// polls that failed remotely (stale data retained)
    pub failed: usize,
    /// polls that found no signed-in user
    pub logged_out: usize,
    /// the unread count observed after the most recent poll
    pub unread: usize,
}

impl RefresherStats {
    fn record(&mut self, outcome: RefreshOutcome, unread: usize) {
        self.poll_count += 1;
        self.unread = unread;
        match outcome {
            RefreshOutcome::Applied => self.applied += 1,
            RefreshOutcome::Stale => self.stale += 1,
            RefreshOutcome::Failed => self.failed += 1,
            RefreshOutcome::LoggedOut => self.logged_out += 1,
        }
    }
}

/// a foreground handle to the background refresher task.
/// This allows subscribing to stats about the polls performed so far.
/// Dropping this struct will abort the background task, so state is never
/// updated on behalf of a consumer that no longer exists.
pub struct PollingRefresherHandle {
    stats: tokio::sync::watch::Receiver<RefresherStats>,
    handle: tokio::task::JoinHandle<()>,
}

impl PollingRefresherHandle {
    /// returns a reference to the receiver end of the watch channel
    /// this allows a caller to subscribe to or read the current stats
    pub fn stats(&self) -> &tokio::sync::watch::Receiver<RefresherStats> {
        &self.stats
    }
}

impl Drop for PollingRefresherHandle {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

struct PollingRefresher<L, U, T> {
    feed: Arc<AlertFeed<L, U, T>>,
    sender: tokio::sync::watch::Sender<RefresherStats>,
    poll_duration: Duration,
}

impl<L, U, T> PollingRefresher<L, U, T>
where
    L: AlertLedger,
    anyhow::Error: From<L::Err>,
    U: CurrentUserSource,
    T: TimeGetter,
{
    async fn run(self) {
        let PollingRefresher {
            feed,
            sender,
            poll_duration,
        } = self;
        loop {
            tokio::time::sleep(poll_duration).await;
            let outcome = feed.refresh().await;
            let unread = feed.unread_count();
            sender.send_modify(move |cur| {
                cur.record(outcome, unread);
            });
        }
    }
}

impl PollingRefresherHandle {
    /// spawn a background refresher over the input feed and return a
    /// [PollingRefresherHandle] to it
    pub fn new_worker<L, U, T>(feed: Arc<AlertFeed<L, U, T>>, poll_duration: Duration) -> Self
    where
        L: AlertLedger,
        anyhow::Error: From<L::Err>,
        U: CurrentUserSource,
        T: TimeGetter,
    {
        let (tx, rx) = tokio::sync::watch::channel(RefresherStats::default());
        let handle = tokio::task::spawn(
            PollingRefresher {
                feed,
                sender: tx,
                poll_duration,
            }
            .run(),
        );
        PollingRefresherHandle { stats: rx, handle }
    }
}
