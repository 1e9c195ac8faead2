use reqwest::{Response, StatusCode};

#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    #[error("error deserializing response body. method: {method} details: {details}")]
    DeserializationFailed { details: String, method: String },
    #[error("a network error occurred. status_code: {status_code} message: {message}")]
    NetworkError { status_code: u16, message: String },
    #[error("request failed. method: {method} details: {details}")]
    RequestFailed { details: String, method: String },
}

pub trait ResponseExt {
    #[allow(async_fn_in_trait)]
    async fn map_client_error(self, method: &str) -> Result<Response, ClientError>;
}

impl ResponseExt for Response {
    async fn map_client_error(self, _method: &str) -> Result<Response, ClientError> {
        match self.status() {
            StatusCode::OK | StatusCode::CREATED | StatusCode::ACCEPTED | StatusCode::NO_CONTENT => {
                Ok(self)
            }
            _ => Err(ClientError::NetworkError {
                status_code: self.status().as_u16(),
                message: self.text().await.unwrap_or_default(),
            }),
        }
    }
}

impl ResponseExt for Result<Response, reqwest::Error> {
    async fn map_client_error(self, method: &str) -> Result<Response, ClientError> {
        match self {
            Ok(response) => response.map_client_error(method).await,
            Err(e) => Err(ClientError::RequestFailed {
                details: e.to_string(),
                method: method.to_string(),
            }),
        }
    }
}
