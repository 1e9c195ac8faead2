use super::AlertServiceClient;
use crate::error::{ClientError, ResponseExt};
use model_alerts::RawAlert;

impl AlertServiceClient {
    /// Fetch the full notification ledger for a user
    #[tracing::instrument(skip(self))]
    pub async fn get_user_alerts(&self, user_id: &str) -> Result<Vec<RawAlert>, ClientError> {
        let url = format!("{}/users/{}/notifications", self.url, user_id);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_client_error("get_user_alerts")
            .await?;

        let result = response.json::<Vec<RawAlert>>().await.map_err(|e| {
            ClientError::DeserializationFailed {
                details: e.to_string(),
                method: "get_user_alerts".to_string(),
            }
        })?;

        Ok(result)
    }
}
