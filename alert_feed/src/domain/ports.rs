//! This module defines all of the ports that the feed domain requires

use chrono::{DateTime, Utc};
use model_alerts::Alert;
use thiserror::Error;

/// Trait for the remote, authoritative notification ledger the feed
/// synchronizes with.
pub trait AlertLedger: Send + Sync + 'static {
    /// The error type that can occur
    type Err: Send;

    /// fetch the full notification list for the input user
    fn fetch_for_user(
        &self,
        user_id: &str,
    ) -> impl Future<Output = Result<Vec<Alert>, Self::Err>> + Send;

    /// mark a single notification as read for the input user
    fn mark_read(
        &self,
        notification_id: i64,
        user_id: &str,
    ) -> impl Future<Output = Result<(), Self::Err>> + Send;

    /// mark every notification as read for the input user
    fn mark_all_read(&self, user_id: &str) -> impl Future<Output = Result<(), Self::Err>> + Send;
}

/// Port for resolving who the feed currently belongs to.
/// Injected rather than ambient so a session change is always observed at
/// the next operation.
pub trait CurrentUserSource: Send + Sync + 'static {
    /// the id of the signed-in user, or `None` when signed out
    fn current_user(&self) -> Option<String>;
}

/// Port for getting the current system time.
/// The system time is always changing in the real world; a trait keeps
/// toast ids and timestamps consistent in tests.
pub trait TimeGetter: Send + Sync + 'static {
    /// get the current system time
    fn now(&self) -> DateTime<Utc>;
}

/// The error produced by the feed's mark-read operations
#[derive(Debug, Error)]
#[error(transparent)]
pub struct FeedMutationErr(#[from] anyhow::Error);
