//! this module provides an impl of [AlertLedger] backed by the notification
//! service HTTP API

use crate::domain::ports::AlertLedger;
use alert_service_client::{AlertServiceClient, error::ClientError};
use model_alerts::Alert;

/// [AlertLedger] adapter over the remote notification service
#[derive(Clone)]
pub struct HttpAlertLedger {
    client: AlertServiceClient,
}

impl HttpAlertLedger {
    /// wrap an [AlertServiceClient]
    pub fn new(client: AlertServiceClient) -> Self {
        Self { client }
    }
}

impl AlertLedger for HttpAlertLedger {
    type Err = ClientError;

    async fn fetch_for_user(&self, user_id: &str) -> Result<Vec<Alert>, ClientError> {
        let raw = self.client.get_user_alerts(user_id).await?;
        Ok(raw.into_iter().map(Alert::from).collect())
    }

    async fn mark_read(&self, notification_id: i64, user_id: &str) -> Result<(), ClientError> {
        self.client.mark_alert_read(notification_id, user_id).await
    }

    async fn mark_all_read(&self, user_id: &str) -> Result<(), ClientError> {
        self.client.mark_all_alerts_read(user_id).await
    }
}
