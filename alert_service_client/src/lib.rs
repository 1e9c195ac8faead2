use constants::INTERNAL_AUTH_KEY_HEADER_KEY;

pub mod alerts;
pub(crate) mod constants;
pub mod error;
pub mod read;

#[derive(Clone)]
pub struct AlertServiceClient {
    url: String,
    client: reqwest::Client,
}

impl AlertServiceClient {
    pub fn new(internal_auth_key: String, url: String) -> Self {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            INTERNAL_AUTH_KEY_HEADER_KEY,
            internal_auth_key.parse().unwrap(),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .unwrap();

        Self { url, client }
    }
}
