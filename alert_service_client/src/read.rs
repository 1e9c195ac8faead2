use super::AlertServiceClient;
use crate::error::{ClientError, ResponseExt};
use serde_json::json;

impl AlertServiceClient {
    /// Mark a single notification as read for a user
    #[tracing::instrument(skip(self))]
    pub async fn mark_alert_read(
        &self,
        notification_id: i64,
        user_id: &str,
    ) -> Result<(), ClientError> {
        let url = format!("{}/notifications/{}/read", self.url, notification_id);

        self.client
            .patch(&url)
            .json(&json!({ "userId": user_id }))
            .send()
            .await
            .map_client_error("mark_alert_read")
            .await?;

        Ok(())
    }

    /// Mark every notification as read for a user
    #[tracing::instrument(skip(self))]
    pub async fn mark_all_alerts_read(&self, user_id: &str) -> Result<(), ClientError> {
        let url = format!("{}/notifications/allread/{}", self.url, user_id);

        self.client
            .patch(&url)
            .send()
            .await
            .map_client_error("mark_all_alerts_read")
            .await?;

        Ok(())
    }
}
