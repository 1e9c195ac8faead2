//! current-user sources for headless consumers

use crate::domain::ports::CurrentUserSource;

/// A [CurrentUserSource] pinned to a single user id, for workers and other
/// headless consumers. Interactive frontends supply a session-backed impl.
#[derive(Debug, Clone)]
pub struct StaticUser(pub String);

impl CurrentUserSource for StaticUser {
    fn current_user(&self) -> Option<String> {
        Some(self.0.clone())
    }
}
