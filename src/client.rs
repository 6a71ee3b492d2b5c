use crate::errors::LoadError;
use crate::models::StatusResponse;
use std::time::Duration;
use tracing::warn;

/// HTTP client for the backend status endpoint.
#[derive(Clone)]
pub struct StatusClient {
    base_url: String,
    http: reqwest::Client,
}

impl StatusClient {
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, LoadError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            base_url: base_url.into(),
            http: builder.build()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the status for `user`. The body is read as JSON whatever the
    /// HTTP status, since the backend reports failures as `success: false`
    /// with a 500.
    pub async fn fetch(&self, user: &str) -> Result<StatusResponse, LoadError> {
        let url = format!("{}/api/check", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[("user", user)])
            .send()
            .await?;

        let status = response.status();
        let payload: StatusResponse = response.json().await.map_err(|err| {
            warn!(%status, "status endpoint returned an unreadable body: {err}");
            LoadError::from(err)
        })?;

        payload.into_result()
    }
}
