//! REST helpers for the `/api/texts` collection.
//!
//! ERROR HANDLING
//! ==============
//! Only the row-fetch path inspects the HTTP status; the list and upload
//! calls assume success and decode the body directly, so a failure there
//! surfaces as a transport/decode error rather than a status error.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use reqwest::multipart::{Form, Part};

use crate::net::types::{Row, TextRef, UploadReceipt};

/// Error raised by [`ApiClient`] calls.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Transport failure or an undecodable response body.
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    /// Non-success status on the row-fetch path.
    #[error("request error: {0}")]
    Status(u16),
}

/// HTTP client for the text-collection API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for `base_url`; trailing slashes are trimmed.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// List every uploaded text via `GET /api/texts/`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] on transport failure or an undecodable
    /// body; the status code is not inspected.
    pub async fn list_texts(&self) -> Result<Vec<TextRef>, ApiError> {
        let url = format!("{}/api/texts/", self.base_url);
        tracing::debug!(%url, "listing texts");
        Ok(self.http.get(url).send().await?.json().await?)
    }

    /// Upload text content as multipart field `file` via `POST /api/texts/`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] on transport failure or an undecodable
    /// body; the status code is not inspected.
    pub async fn upload_text(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadReceipt, ApiError> {
        let url = format!("{}/api/texts/", self.base_url);
        tracing::debug!(%url, file_name, "uploading text");
        let part = Part::bytes(bytes)
            .file_name(file_name.to_owned())
            .mime_str("text/plain")?;
        let form = Form::new().part("file", part);
        Ok(self.http.post(url).multipart(form).send().await?.json().await?)
    }

    /// Fetch one row window via `GET /api/texts/{id}/?offset={n}&limit={m}`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Status`] carrying the HTTP status code when the
    /// response status is outside the success range, and [`ApiError::Http`]
    /// on transport failure or an undecodable body.
    pub async fn fetch_rows(
        &self,
        text_id: &str,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Row>, ApiError> {
        let url = self.words_url(text_id, offset, limit);
        tracing::debug!(%url, "fetching rows");
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        Ok(response.json().await?)
    }

    fn words_url(&self, text_id: &str, offset: u64, limit: u64) -> String {
        format!(
            "{}/api/texts/{text_id}/?offset={offset}&limit={limit}",
            self.base_url
        )
    }
}
